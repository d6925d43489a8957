use crate::model::manager::ManagerDashboardDto;

/// Aggregate counts over users and tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerDashboard {
    pub team_member_count: u64,
    pub open_task_count: u64,
    pub completed_task_count: u64,
}

impl ManagerDashboard {
    pub fn into_dto(self) -> ManagerDashboardDto {
        ManagerDashboardDto {
            team_member_count: self.team_member_count,
            open_task_count: self.open_task_count,
            completed_task_count: self.completed_task_count,
        }
    }
}
