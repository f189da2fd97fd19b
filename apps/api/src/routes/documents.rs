use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{export_json, render_printable};
use crate::forms::path::FieldPath;
use crate::forms::workspace::{DocumentSummary, StoredDocument};
use crate::models::{Document, DocumentKind};
use crate::render::render_document;
use crate::render::template::{catalog, TemplateId, TemplateInfo};
use crate::render::tree::Node;
use crate::routes::guards::CurrentUser;
use crate::state::AppState;

pub(crate) fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Document {id} not found"))
}

fn parse_path(raw: &str) -> Result<FieldPath, AppError> {
    Ok(raw.parse::<FieldPath>()?)
}

#[derive(Deserialize)]
pub struct TemplateQuery {
    pub template: Option<String>,
}

impl TemplateQuery {
    pub fn template(&self) -> Result<TemplateId, AppError> {
        match self.template.as_deref() {
            None | Some("") => Ok(TemplateId::default()),
            Some(raw) => raw.parse().map_err(AppError::Validation),
        }
    }
}

/// Snapshot of one document, taken under the read lock.
pub(crate) async fn load_document(state: &AppState, id: Uuid) -> Result<Document, AppError> {
    let workspace = state.workspace.read().await;
    workspace
        .get(id)
        .map(|stored| stored.document.clone())
        .ok_or_else(|| not_found(id))
}

/// GET /api/v1/templates
pub async fn handle_templates() -> Json<Vec<TemplateInfo>> {
    Json(catalog())
}

#[derive(Deserialize)]
pub struct CreateDocumentRequest {
    pub kind: DocumentKind,
    #[serde(default)]
    pub demo: bool,
}

/// POST /api/v1/documents
pub async fn handle_create_document(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Json(req): Json<CreateDocumentRequest>,
) -> (StatusCode, Json<StoredDocument>) {
    let mut workspace = state.workspace.write().await;
    let stored = workspace.create(req.kind, req.demo).clone();
    (StatusCode::CREATED, Json(stored))
}

/// GET /api/v1/documents
pub async fn handle_list_documents(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
) -> Json<Vec<DocumentSummary>> {
    Json(state.workspace.read().await.summaries())
}

/// GET /api/v1/documents/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredDocument>, AppError> {
    let workspace = state.workspace.read().await;
    let stored = workspace.get(id).cloned().ok_or_else(|| not_found(id))?;
    Ok(Json(stored))
}

/// DELETE /api/v1/documents/:id
pub async fn handle_delete_document(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .workspace
        .write()
        .await
        .remove(id)
        .ok_or_else(|| not_found(id))?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
pub struct FieldValue {
    pub path: String,
    pub value: Value,
}

/// GET /api/v1/documents/:id/fields/:path
pub async fn handle_get_field(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path((id, raw_path)): Path<(Uuid, String)>,
) -> Result<Json<FieldValue>, AppError> {
    let path = parse_path(&raw_path)?;
    let document = load_document(&state, id).await?;
    let value = document.get(&path)?;
    Ok(Json(FieldValue {
        path: path.to_string(),
        value,
    }))
}

#[derive(Deserialize)]
pub struct SetFieldRequest {
    pub path: String,
    pub value: Value,
}

/// PATCH /api/v1/documents/:id/fields
pub async fn handle_set_field(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SetFieldRequest>,
) -> Result<Json<FieldValue>, AppError> {
    let path = parse_path(&req.path)?;
    let mut workspace = state.workspace.write().await;
    let value = workspace
        .update(id, |doc| {
            doc.set(&path, req.value)?;
            doc.get(&path)
        })
        .ok_or_else(|| not_found(id))??;
    Ok(Json(FieldValue {
        path: path.to_string(),
        value,
    }))
}

#[derive(Deserialize, Default)]
pub struct AppendRequest {
    pub entry: Option<Value>,
}

#[derive(Serialize)]
pub struct ListChange {
    pub list: String,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
}

fn list_length(doc: &Document, list: &str) -> Result<usize, AppError> {
    let value = doc.get(&parse_path(list)?)?;
    Ok(value.as_array().map_or(0, Vec::len))
}

/// POST /api/v1/documents/:id/lists/:list
///
/// Body is optional; without one a blank entry is appended.
pub async fn handle_append_entry(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path((id, list)): Path<(Uuid, String)>,
    body: Option<Json<AppendRequest>>,
) -> Result<(StatusCode, Json<ListChange>), AppError> {
    let entry = body.and_then(|Json(req)| req.entry);
    let mut workspace = state.workspace.write().await;
    let (index, length) = workspace
        .update(id, |doc| {
            let index = doc.append(&list, entry)?;
            Ok::<_, AppError>((index, list_length(doc, &list)?))
        })
        .ok_or_else(|| not_found(id))??;
    Ok((
        StatusCode::CREATED,
        Json(ListChange {
            list,
            length,
            index: Some(index),
            removed: None,
        }),
    ))
}

/// DELETE /api/v1/documents/:id/lists/:list/:index
///
/// Out-of-range indexes leave the list untouched and report `removed: false`.
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path((id, list, index)): Path<(Uuid, String, usize)>,
) -> Result<Json<ListChange>, AppError> {
    let mut workspace = state.workspace.write().await;
    let (removed, length) = workspace
        .update(id, |doc| {
            let removed = doc.remove_at(&list, index)?;
            Ok::<_, AppError>((removed, list_length(doc, &list)?))
        })
        .ok_or_else(|| not_found(id))??;
    Ok(Json(ListChange {
        list,
        length,
        index: None,
        removed: Some(removed),
    }))
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub template: TemplateId,
    pub tree: Node,
    pub html: String,
}

/// GET /api/v1/documents/:id/preview?template=
pub async fn handle_preview(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<PreviewResponse>, AppError> {
    let template = query.template()?;
    let document = load_document(&state, id).await?;
    let tree = render_document(&document, template);
    let html = tree.to_html();
    Ok(Json(PreviewResponse {
        template,
        tree,
        html,
    }))
}

/// GET /api/v1/documents/:id/preview.html?template=
pub async fn handle_preview_html(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Html<String>, AppError> {
    let template = query.template()?;
    let document = load_document(&state, id).await?;
    Ok(Html(render_document(&document, template).to_html()))
}

/// GET /api/v1/documents/:id/export/json
pub async fn handle_export_json(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let document = load_document(&state, id).await?;
    let file = export_json(&document).map_err(anyhow::Error::from)?;
    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.body,
    )
        .into_response())
}

/// GET /api/v1/documents/:id/export/print?template=
pub async fn handle_export_print(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Html<String>, AppError> {
    let template = query.template()?;
    let document = load_document(&state, id).await?;
    Ok(Html(render_printable(&document, template)))
}
