use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        document::{CreateDocumentDto, DocumentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::document::{CreateDocumentParams, Document},
        service::document::DocumentService,
        state::AppState,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

/// List all document records.
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    responses(
        (status = 200, description = "All documents", body = Vec<DocumentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let documents = DocumentService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            documents
                .into_iter()
                .map(Document::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a document record.
///
/// Stores only the reference path; file bytes live in the external store.
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    request_body = CreateDocumentDto,
    responses(
        (status = 201, description = "Created document", body = DocumentDto),
        (status = 404, description = "Uploader not found", body = ErrorDto)
    ),
)]
pub async fn create_document(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let document = DocumentService::new(&state.db)
        .create(CreateDocumentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}
