use axum::{
    middleware::Next,
    response::Response,
    extract::{Request, State},
};
use tower_sessions::Session;
use crate::errors::{AppError, AppResult};
use crate::services::session;
use crate::state::AppState;

/// Gate for protected routes. Anonymous requests are bounced to the login
/// form; authenticated ones carry the resolved `User` as an extension.
pub async fn require_auth(
    State(state): State<AppState>,
    session: Session,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    match session::current_user(&session, &state.store).await? {
        Some(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        None => {
            session::flash(&session, "Please log in to access this page.").await?;
            Err(AppError::Auth(format!("anonymous request to {}", req.uri().path())))
        }
    }
}
