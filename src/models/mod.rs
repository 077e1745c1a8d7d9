mod user;
mod forms;

pub use user::User;
pub use forms::{first_message, LoginForm, RegisterForm};
