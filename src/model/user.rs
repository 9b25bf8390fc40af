//! User records.
//!
//! The password is write-only: it is never read back from the backend, never
//! pre-filled in the edit form, and left out of updates when blank.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{CardView, FieldKind, FieldSpec, FormError, FormMode, FormValues, Resource};

/// A user as returned by the backend. Any password in the response is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// Body of a user create request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of a user update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Resource for User {
    type Create = NewUser;
    type Update = UserChanges;

    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn fields(mode: FormMode) -> Vec<FieldSpec> {
        let password = if mode.is_editing() {
            FieldSpec::new(
                "password",
                "Password (leave blank to keep current)",
                FieldKind::Password,
            )
            .optional()
            .placeholder("Leave blank to keep current password")
        } else {
            FieldSpec::new("password", "Password", FieldKind::Password)
                .required()
                .placeholder("Enter password")
        };

        vec![
            FieldSpec::new("name", "Full Name", FieldKind::Text)
                .required()
                .placeholder("Enter full name"),
            FieldSpec::new("email", "Email", FieldKind::Email)
                .required()
                .placeholder("Enter email address"),
            password,
        ]
    }

    fn blank_form() -> FormValues {
        FormValues::new()
            .with_text("name", "")
            .with_text("email", "")
            .with_text("password", "")
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with_text("name", self.name.clone())
            .with_text("email", self.email.clone())
            .with_text("password", "")
    }

    fn create_payload(form: &FormValues) -> Result<NewUser, FormError> {
        let password = form.text("password");
        if password.is_empty() {
            return Err(FormError::Missing { label: "Password" });
        }
        Ok(NewUser {
            name: form.text("name").to_string(),
            email: form.text("email").to_string(),
            password: password.to_string(),
        })
    }

    fn update_payload(form: &FormValues) -> Result<UserChanges, FormError> {
        let password = form.text("password");
        Ok(UserChanges {
            name: form.text("name").to_string(),
            email: form.text("email").to_string(),
            password: (!password.is_empty()).then(|| password.to_string()),
        })
    }

    fn card(&self) -> CardView {
        CardView {
            title: self.name.clone(),
            avatar: self.name.chars().next().map(|c| c.to_ascii_uppercase()),
            subtitle: Some(self.email.clone()),
            ..Default::default()
        }
    }
}
