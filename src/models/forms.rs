use std::borrow::Cow;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};
use crate::services::password;

// Missing fields deserialize as empty so validation can report them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterForm {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(
        length(min = 1, message = "Please choose a password."),
        custom(function = "password_fits_bcrypt")
    )]
    pub password: String,
    #[validate(length(min = 1, message = "Please tell us your name."))]
    pub name: String,
}

fn password_fits_bcrypt(password: &str) -> Result<(), ValidationError> {
    if password::fits_bcrypt(password) {
        return Ok(());
    }
    let mut error = ValidationError::new("password_too_long");
    error.message = Some(Cow::Borrowed("Please choose a password of at most 72 bytes."));
    Err(error)
}

/// First human-readable message out of a failed validation, for flashing.
pub fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Please fill in every field.".to_string())
}
