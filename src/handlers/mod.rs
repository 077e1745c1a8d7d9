mod auth;
mod download;
mod pages;

pub use auth::{serve_login_page, serve_register_page, handle_login, handle_register, handle_logout};
pub use download::download_file;
pub use pages::{serve_home, serve_secrets};
