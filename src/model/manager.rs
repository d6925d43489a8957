use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregates over users and tasks, replacing the old placeholder payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ManagerDashboardDto {
    pub team_member_count: u64,
    pub open_task_count: u64,
    pub completed_task_count: u64,
}
