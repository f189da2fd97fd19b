//! Page routes. Each returns the JSON view model its screen renders; access rules
//! are enforced by the `Member`/`AdminMember` extractors, which redirect.

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matcher::PREFERENCES;
use crate::models::DocumentKind;
use crate::render::render_document;
use crate::render::template::catalog;
use crate::routes::documents::{not_found, TemplateQuery};
use crate::routes::guards::{AdminMember, Member, DASHBOARD_PAGE};
use crate::state::AppState;

#[derive(Serialize)]
struct Stat {
    id: &'static str,
    label: &'static str,
    value: &'static str,
    change: &'static str,
}

const fn stat(
    id: &'static str,
    label: &'static str,
    value: &'static str,
    change: &'static str,
) -> Stat {
    Stat {
        id,
        label,
        value,
        change,
    }
}

const DASHBOARD_STATS: [Stat; 4] = [
    stat("resumes", "Total Resumes", "3", "+2 this month"),
    stat("cover_letters", "Cover Letters", "5", "+3 this month"),
    stat("portfolios", "Portfolios", "1", "Last updated 2d ago"),
    stat("views", "Profile Views", "224", "+18% from last week"),
];

const ADMIN_STATS: [Stat; 4] = [
    stat("users", "Total Users", "2,847", "+12.5%"),
    stat("active", "Active Users", "1,234", "+8.2%"),
    stat("content", "Resumes Created", "5,678", "+23.1%"),
    stat("revenue", "Revenue", "$45,678", "+18.7%"),
];

/// GET /
pub async fn handle_root() -> Redirect {
    Redirect::to(DASHBOARD_PAGE)
}

/// GET /dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Member(user): Member,
) -> Json<Value> {
    let workspace = state.workspace.read().await;
    let open_counts = json!({
        "resume": workspace.count(DocumentKind::Resume),
        "cover_letter": workspace.count(DocumentKind::CoverLetter),
        "portfolio": workspace.count(DocumentKind::Portfolio),
    });
    Json(json!({
        "page": "dashboard",
        "greeting": format!("Welcome back, {}", user.name),
        "user": user,
        "stats": DASHBOARD_STATS,
        "quickActions": [
            {"title": "Create Resume", "description": "Build a professional resume with AI", "href": "/resume/new"},
            {"title": "Cover Letter", "description": "Write personalized cover letters", "href": "/cover-letter/new"},
            {"title": "Portfolio", "description": "Showcase your work online", "href": "/portfolio/new"},
        ],
        "openDocuments": open_counts,
        "recentDocuments": workspace.summaries(),
    }))
}

/// GET /resume/new, /cover-letter/new, /portfolio/new
///
/// Opens a blank document and sends the browser to its editor.
pub async fn open_new_editor(state: AppState, kind: DocumentKind) -> Redirect {
    let id = state.workspace.write().await.create(kind, false).id;
    Redirect::to(&format!("/{}/{id}", kind.route_segment()))
}

/// GET /resume/:id, /cover-letter/:id, /portfolio/:id
pub async fn editor_page(
    state: AppState,
    kind: DocumentKind,
    id: Uuid,
    query: TemplateQuery,
) -> Result<Json<Value>, AppError> {
    let template = query.template()?;
    let workspace = state.workspace.read().await;
    let stored = workspace
        .get(id)
        .filter(|stored| stored.document.kind() == kind)
        .ok_or_else(|| not_found(id))?;
    let preview = render_document(&stored.document, template);

    Ok(Json(json!({
        "page": kind.route_segment(),
        "document": stored,
        "listFields": stored.document.list_fields(),
        "template": template,
        "templates": catalog(),
        "preview": preview,
        "exports": {
            "json": format!("/api/v1/documents/{id}/export/json"),
            "print": format!("/api/v1/documents/{id}/export/print?template={}", template.as_str()),
        },
    })))
}

pub async fn handle_new_resume(State(state): State<AppState>, _: Member) -> Redirect {
    open_new_editor(state, DocumentKind::Resume).await
}

pub async fn handle_new_cover_letter(State(state): State<AppState>, _: Member) -> Redirect {
    open_new_editor(state, DocumentKind::CoverLetter).await
}

pub async fn handle_new_portfolio(State(state): State<AppState>, _: Member) -> Redirect {
    open_new_editor(state, DocumentKind::Portfolio).await
}

pub async fn handle_resume_editor(
    State(state): State<AppState>,
    _: Member,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<Value>, AppError> {
    editor_page(state, DocumentKind::Resume, id, query).await
}

pub async fn handle_cover_letter_editor(
    State(state): State<AppState>,
    _: Member,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<Value>, AppError> {
    editor_page(state, DocumentKind::CoverLetter, id, query).await
}

pub async fn handle_portfolio_editor(
    State(state): State<AppState>,
    _: Member,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<Value>, AppError> {
    editor_page(state, DocumentKind::Portfolio, id, query).await
}

/// GET /job-matcher
pub async fn handle_job_matcher(_: Member) -> Json<Value> {
    Json(json!({
        "page": "job-matcher",
        "preferences": PREFERENCES,
        "accepts": [".pdf", ".docx"],
    }))
}

/// GET /settings
pub async fn handle_settings(State(state): State<AppState>, Member(user): Member) -> Json<Value> {
    let theme = state.session.read().await.theme();
    Json(json!({
        "page": "settings",
        "user": user,
        "theme": theme,
        "tabs": ["profile", "security", "notifications", "appearance"],
    }))
}

/// GET /admin
pub async fn handle_admin(AdminMember(user): AdminMember) -> Json<Value> {
    Json(json!({
        "page": "admin",
        "user": user,
        "stats": ADMIN_STATS,
        "recentActivity": [
            {"user": "John Doe", "action": "Created resume", "time": "2 minutes ago"},
            {"user": "Jane Smith", "action": "Upgraded to Premium", "time": "15 minutes ago"},
            {"user": "Bob Johnson", "action": "Generated cover letter", "time": "32 minutes ago"},
            {"user": "Alice Williams", "action": "Published portfolio", "time": "1 hour ago"},
        ],
        "topPerformers": [
            {"name": "Tech Resume", "views": 1234, "conversions": 89, "rate": "7.2%"},
            {"name": "Creative Portfolio", "views": 987, "conversions": 76, "rate": "7.7%"},
            {"name": "Professional Cover Letter", "views": 876, "conversions": 65, "rate": "7.4%"},
        ],
    }))
}

/// GET /login
pub async fn handle_login_page(State(state): State<AppState>) -> Json<Value> {
    let session = state.session.read().await.snapshot();
    Json(json!({
        "page": "login",
        "session": session,
        "submit": "/api/v1/auth/login",
        "alternate": "/register",
    }))
}

/// GET /register
pub async fn handle_register_page(State(state): State<AppState>) -> Json<Value> {
    let session = state.session.read().await.snapshot();
    Json(json!({
        "page": "register",
        "session": session,
        "submit": "/api/v1/auth/register",
        "alternate": "/login",
    }))
}
