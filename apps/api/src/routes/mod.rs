pub mod assist;
pub mod auth;
pub mod documents;
pub mod guards;
pub mod health;
pub mod matcher;
pub mod pages;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_root))
        .route("/login", get(pages::handle_login_page))
        .route("/register", get(pages::handle_register_page))
        .route("/dashboard", get(pages::handle_dashboard))
        .route("/resume/new", get(pages::handle_new_resume))
        .route("/resume/:id", get(pages::handle_resume_editor))
        .route("/cover-letter/new", get(pages::handle_new_cover_letter))
        .route("/cover-letter/:id", get(pages::handle_cover_letter_editor))
        .route("/portfolio/new", get(pages::handle_new_portfolio))
        .route("/portfolio/:id", get(pages::handle_portfolio_editor))
        .route("/job-matcher", get(pages::handle_job_matcher))
        .route("/settings", get(pages::handle_settings))
        .route("/admin", get(pages::handle_admin))
        // Session & settings
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/auth/session", get(auth::handle_session))
        .route("/api/v1/auth/user", patch(auth::handle_update_profile))
        .route("/api/v1/settings/theme", put(auth::handle_set_theme))
        .route("/api/v1/settings/password", post(auth::handle_change_password))
        // Documents
        .route("/api/v1/templates", get(documents::handle_templates))
        .route(
            "/api/v1/documents",
            get(documents::handle_list_documents).post(documents::handle_create_document),
        )
        .route(
            "/api/v1/documents/:id",
            get(documents::handle_get_document).delete(documents::handle_delete_document),
        )
        .route(
            "/api/v1/documents/:id/fields",
            patch(documents::handle_set_field),
        )
        .route(
            "/api/v1/documents/:id/fields/:path",
            get(documents::handle_get_field),
        )
        .route(
            "/api/v1/documents/:id/lists/:list",
            post(documents::handle_append_entry),
        )
        .route(
            "/api/v1/documents/:id/lists/:list/:index",
            delete(documents::handle_remove_entry),
        )
        .route("/api/v1/documents/:id/preview", get(documents::handle_preview))
        .route(
            "/api/v1/documents/:id/preview.html",
            get(documents::handle_preview_html),
        )
        .route(
            "/api/v1/documents/:id/export/json",
            get(documents::handle_export_json),
        )
        .route(
            "/api/v1/documents/:id/export/print",
            get(documents::handle_export_print),
        )
        // Assistants
        .route(
            "/api/v1/documents/:id/assist/cover-letter",
            post(assist::handle_document_cover_letter),
        )
        .route(
            "/api/v1/documents/:id/assist/enhance",
            post(assist::handle_enhance),
        )
        .route("/api/v1/assist/cover-letter", post(assist::handle_cover_letter))
        .route("/api/v1/assist/chat", post(assist::handle_chat))
        // Job matcher
        .route("/api/v1/job-matcher/analyze", post(matcher::handle_analyze))
        .route("/api/v1/job-matcher/upload", post(matcher::handle_upload))
        .with_state(state)
}
