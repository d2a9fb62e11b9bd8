//! Authentication forms.

use crate::error::{ApiError, ValidationError};
use crate::models::{Credentials, PasswordReset, Registration};

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

fn confirm(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::MissingField("Password"));
    }
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("Password"));
        }
        Ok(Credentials {
            email,
            password: self.password.clone(),
        })
    }
}

/// Text shown when sign-in fails. A 401 from login means bad credentials.
pub fn login_failure(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Invalid email or password".to_string(),
        other => other
            .notification("Login failed")
            .unwrap_or_else(|| "Login failed".to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<Registration, ValidationError> {
        confirm(&self.password, &self.confirm_password)?;
        Ok(Registration {
            name: required(&self.name, "Name")?,
            email: required(&self.email, "Email")?,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResetForm {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

impl ResetForm {
    pub fn validate(&self) -> Result<PasswordReset, ValidationError> {
        confirm(&self.password, &self.confirm_password)?;
        Ok(PasswordReset {
            token: required(&self.token, "Reset code")?,
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_checks_confirmation_before_anything_else() {
        let form = RegistrationForm {
            name: String::new(),
            email: "asha@example.com".into(),
            password: "secret-1".into(),
            confirm_password: "secret-2".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn registration_trims_identity_fields() {
        let form = RegistrationForm {
            name: " Asha ".into(),
            email: " asha@example.com".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        };
        let body = form.validate().unwrap();
        assert_eq!(body.name, "Asha");
        assert_eq!(body.email, "asha@example.com");
    }

    #[test]
    fn reset_requires_a_code() {
        let form = ResetForm {
            token: " ".into(),
            password: "new-pass".into(),
            confirm_password: "new-pass".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("Reset code")));
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            email: "asha@example.com".into(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("Password")));
    }

    #[test]
    fn rejected_sign_in_is_always_reported() {
        assert_eq!(login_failure(&ApiError::Unauthorized), "Invalid email or password");
        let rejected = ApiError::Rejected {
            status: 400,
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(login_failure(&rejected), "Invalid credentials");
        assert_eq!(login_failure(&ApiError::Network("offline".into())), "Login failed");
    }
}
