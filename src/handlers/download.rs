use axum::{
    extract::{Extension, State},
    response::Response,
    http::{StatusCode, header},
    body::Body,
};
use tokio::{
    fs::File,
    io::BufReader,
};
use tokio_util::io::ReaderStream;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::state::AppState;

/// Streams the configured file to an authenticated user as an attachment.
pub async fn download_file(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> AppResult<Response> {
    let assets = &state.config.assets;
    tracing::info!("Download of {} for {}", assets.download_file, user.email);

    let file = File::open(&assets.download_file).await.map_err(|e| {
        tracing::error!("Failed to open download file {}: {}", assets.download_file, e);
        AppError::File(e)
    })?;
    let file_size = file.metadata().await?.len();

    let content_type = mime_guess::from_path(&assets.download_name).first_or_octet_stream();
    let stream = ReaderStream::new(BufReader::new(file));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type.as_ref())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", assets.download_name),
        )
        .header(header::CONTENT_LENGTH, file_size.to_string())
        .body(Body::from_stream(stream))
        .map_err(|e| {
            tracing::error!("Failed to build download response: {}", e);
            AppError::File(std::io::Error::new(std::io::ErrorKind::Other, e))
        })
}
