use axum::{
    extract::{Extension, State},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use crate::errors::AppResult;
use crate::models::User;
use crate::services::{session, templates};
use crate::state::AppState;

pub async fn serve_home(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Response> {
    let logged_in = session::is_authenticated(&session).await?;
    let flashes = templates::flash_html(&session::take_flashes(&session).await?);
    let html = templates::render(
        &state.config.assets.templates_dir,
        "index.html",
        &[
            ("nav", templates::nav_html(logged_in)),
            ("flashes", flashes.as_str()),
        ],
    )
    .await?;
    Ok(html.into_response())
}

/// Gated page; `require_auth` has already resolved the user.
pub async fn serve_secrets(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> AppResult<Response> {
    tracing::debug!("Serving secrets page for {}", user.email);
    let name = templates::escape_html(&user.name);
    let html = templates::render(
        &state.config.assets.templates_dir,
        "secrets.html",
        &[
            ("nav", templates::nav_html(true)),
            ("name", name.as_str()),
        ],
    )
    .await?;
    Ok(html.into_response())
}
