use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Contact-form submission. All four fields are required and non-empty;
/// anything else is a validation failure before any write happens.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewContactMessage {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, max = 200, message = "Subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> NewContactMessage {
        NewContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "I would like to talk about a project.".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn each_empty_field_fails_validation() {
        for field in ["name", "email", "subject", "message"] {
            let mut form = valid_form();
            match field {
                "name" => form.name = String::new(),
                "email" => form.email = String::new(),
                "subject" => form.subject = String::new(),
                _ => form.message = String::new(),
            }
            assert!(form.validate().is_err(), "empty {field} should fail");
        }
    }
}
