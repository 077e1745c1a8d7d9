use axum::{
    routing::get,
    Router,
    middleware::from_fn_with_state,
};
use tower_http::{
    services::ServeDir,
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tower_sessions::cookie::SameSite;
use time::Duration;
use crate::errors::AppResult;
use crate::services::session;
use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(state: AppState) -> AppResult<Router> {
    let config = state.config.clone();

    // Session store setup; the cookie only carries a signed session id
    let expiry = if config.session.inactivity_minutes > 0 {
        Expiry::OnInactivity(Duration::minutes(config.session.inactivity_minutes))
    } else {
        Expiry::OnSessionEnd
    };
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.session.secure)
        .with_same_site(SameSite::Lax)
        .with_name(config.session.cookie_name.clone())
        .with_expiry(expiry)
        .with_signed(session::signing_key(&config.session)?);

    let gated = Router::new()
        .route("/secrets", get(handlers::serve_secrets))
        .route("/download", get(handlers::download_file))
        .route_layer(from_fn_with_state(state.clone(), middleware::require_auth));

    let app = Router::new()
        .route("/", get(handlers::serve_home))
        .route(
            "/register",
            get(handlers::serve_register_page).post(handlers::handle_register),
        )
        .route(
            "/login",
            get(handlers::serve_login_page).post(handlers::handle_login),
        )
        .route("/logout", get(handlers::handle_logout))
        .merge(gated)
        .nest_service("/static", ServeDir::new(&config.assets.static_dir))
        .layer(session_layer)
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
