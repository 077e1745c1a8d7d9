pub mod password;
pub mod session;
pub mod templates;
pub mod user_store;

pub use user_store::UserStore;
