//! Account domain model.
//!
//! # Responsibility
//! - Define the account record plus its creation input and patch shape.
//! - Enforce field-level rules: `name` and `email` are required, non-empty.
//!
//! # Invariants
//! - `id` is stable and never reused for another account.
//! - Email *uniqueness* across live accounts is enforced by the integrity
//!   layer, not here; this module only checks the fields in isolation.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A registered account that can author posts and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable global ID used by posts and comments as a foreign key.
    pub id: EntityId,
    pub name: String,
    /// Unique among live accounts.
    pub email: String,
    pub age: Option<i64>,
}

/// Creation input for an account; the facade assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
}

/// Partial update for an account. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Outer `Some` applies the field; inner `None` clears the age.
    pub age: Option<Option<i64>>,
}

/// Field-level validation failure for account data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    EmptyEmail,
}

impl Display for AccountValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "account name must not be empty"),
            Self::EmptyEmail => write!(f, "account email must not be empty"),
        }
    }
}

impl Error for AccountValidationError {}

impl NewAccount {
    /// Checks required fields before any id is assigned or store touched.
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        validate_account_fields(&self.name, &self.email)
    }
}

impl Account {
    /// Builds an account record from validated creation input.
    pub fn from_new(id: EntityId, data: NewAccount) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            age: data.age,
        }
    }

    /// Re-checks field rules after a patch has been applied.
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        validate_account_fields(&self.name, &self.email)
    }

    /// Applies set fields from `patch`, leaving the rest untouched.
    ///
    /// `id` is not part of the patch shape and can never change here.
    pub fn apply_patch(&mut self, patch: AccountPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

fn validate_account_fields(name: &str, email: &str) -> Result<(), AccountValidationError> {
    if name.trim().is_empty() {
        return Err(AccountValidationError::EmptyName);
    }
    if email.trim().is_empty() {
        return Err(AccountValidationError::EmptyEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Account, AccountPatch, AccountValidationError, NewAccount};
    use uuid::Uuid;

    fn sample_account() -> Account {
        Account::from_new(
            Uuid::from_u128(1),
            NewAccount {
                name: "Ann".to_string(),
                email: "a@x.com".to_string(),
                age: Some(30),
            },
        )
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        let blank_name = NewAccount {
            name: "  ".to_string(),
            email: "a@x.com".to_string(),
            age: None,
        };
        assert_eq!(
            blank_name.validate(),
            Err(AccountValidationError::EmptyName)
        );

        let blank_email = NewAccount {
            name: "Ann".to_string(),
            email: String::new(),
            age: None,
        };
        assert_eq!(
            blank_email.validate(),
            Err(AccountValidationError::EmptyEmail)
        );
    }

    #[test]
    fn patch_applies_only_set_fields() {
        let mut account = sample_account();
        account.apply_patch(AccountPatch {
            name: Some("Anne".to_string()),
            ..AccountPatch::default()
        });

        assert_eq!(account.name, "Anne");
        assert_eq!(account.email, "a@x.com");
        assert_eq!(account.age, Some(30));
    }

    #[test]
    fn patch_can_clear_optional_age() {
        let mut account = sample_account();
        account.apply_patch(AccountPatch {
            age: Some(None),
            ..AccountPatch::default()
        });
        assert_eq!(account.age, None);
    }

    #[test]
    fn account_serializes_with_transport_field_names() {
        let json = serde_json::to_value(sample_account()).expect("account should serialize");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000001");
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["age"], 30);
    }
}
