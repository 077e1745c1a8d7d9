use axum::{
    extract::{Form, State},
    response::{IntoResponse, Response, Redirect},
};
use tower_sessions::Session;
use validator::Validate;
use crate::errors::AppResult;
use crate::models::{first_message, LoginForm, RegisterForm};
use crate::services::{password, session, templates};
use crate::state::AppState;

const DUPLICATE_EMAIL: &str = "This email already exists. Log in instead.";
const UNKNOWN_EMAIL: &str = "This email is invalid. Please try again.";
const WRONG_PASSWORD: &str = "Invalid Password. Please try again.";

async fn render_form(state: &AppState, session: &Session, template: &str) -> AppResult<Response> {
    let logged_in = session::is_authenticated(session).await?;
    let flashes = templates::flash_html(&session::take_flashes(session).await?);
    let html = templates::render(
        &state.config.assets.templates_dir,
        template,
        &[
            ("nav", templates::nav_html(logged_in)),
            ("flashes", flashes.as_str()),
        ],
    )
    .await?;
    Ok(html.into_response())
}

pub async fn serve_register_page(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Response> {
    render_form(&state, &session, "register.html").await
}

pub async fn serve_login_page(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Response> {
    render_form(&state, &session, "login.html").await
}

pub async fn handle_register(
    State(state): State<AppState>,
    session: Session,
    Form(register_form): Form<RegisterForm>,
) -> AppResult<Response> {
    if let Err(errors) = register_form.validate() {
        session::flash(&session, first_message(&errors)).await?;
        return Ok(Redirect::to("/register").into_response());
    }

    if state.store.find_by_email(&register_form.email).await?.is_some() {
        tracing::info!("Registration with existing email: {}", register_form.email);
        session::flash(&session, DUPLICATE_EMAIL).await?;
        return Ok(Redirect::to("/login").into_response());
    }

    let password_hash = password::hash_password(
        register_form.password.clone(),
        state.config.password.bcrypt_cost,
    )
    .await?;

    let user = match state
        .store
        .create(&register_form.email, &password_hash, &register_form.name)
        .await
    {
        Ok(user) => user,
        // Lost a race with a concurrent registration for the same email
        Err(e) if e.is_unique_violation() => {
            session::flash(&session, DUPLICATE_EMAIL).await?;
            return Ok(Redirect::to("/login").into_response());
        }
        Err(e) => return Err(e),
    };

    tracing::info!("Registered user {}", user.email);
    session::login(&session, &user).await?;
    Ok(Redirect::to("/secrets").into_response())
}

#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(login_form): Form<LoginForm>,
) -> AppResult<Response> {
    let Some(user) = state.store.find_by_email(&login_form.email).await? else {
        tracing::info!("Login for unknown email: {}", login_form.email);
        session::flash(&session, UNKNOWN_EMAIL).await?;
        return Ok(Redirect::to("/login").into_response());
    };

    // bcrypt would ignore the tail of an over-long password
    if !password::verify_password(login_form.password, user.password_hash.clone()).await? {
        tracing::info!("Invalid password for user: {}", user.email);
        session::flash(&session, WRONG_PASSWORD).await?;
        return Ok(Redirect::to("/login").into_response());
    }

    session::login(&session, &user).await?;
    Ok(Redirect::to("/secrets").into_response())
}

#[axum::debug_handler]
pub async fn handle_logout(session: Session) -> AppResult<Response> {
    session::logout(&session).await?;
    Ok(Redirect::to("/").into_response())
}
