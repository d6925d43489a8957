use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        client::{ClientDto, CreateClientDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::client::{Client, CreateClientParams},
        service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// List all clients.
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "All clients", body = Vec<ClientDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let clients = ClientService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            clients
                .into_iter()
                .map(Client::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a client owned by an organising profile.
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Created client", body = ClientDto),
        (status = 404, description = "Organising profile not found", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let client = ClientService::new(&state.db)
        .create(CreateClientParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(client.into_dto())))
}
