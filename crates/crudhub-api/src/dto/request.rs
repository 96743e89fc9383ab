//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crudhub_entity::Security;

/// Submitted security fields.
///
/// Missing fields deserialize to empty values so the validator, not the
/// extractor, reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SecurityForm {
    /// Title.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters."))]
    pub title: String,
    /// Description.
    #[serde(default)]
    #[validate(length(max = 2000, message = "Description cannot be longer than 2000 characters."))]
    pub description: Option<String>,
}

impl SecurityForm {
    /// Trim whitespace and treat a blank description as absent.
    pub fn normalized(self) -> Self {
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Self {
            title: self.title.trim().to_string(),
            description,
        }
    }

    /// Build a new, unsaved security from the submitted values.
    pub fn into_security(self) -> Security {
        Security::new(self.title, self.description)
    }

    /// Copy the submitted values onto an existing security. The identifier
    /// and timestamps are left to the repository.
    pub fn apply_to(self, security: &mut Security) {
        security.title = self.title;
        security.description = self.description;
    }
}

impl From<&Security> for SecurityForm {
    fn from(security: &Security) -> Self {
        Self {
            title: security.title.clone(),
            description: security.description.clone(),
        }
    }
}
