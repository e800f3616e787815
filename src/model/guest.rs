use serde::{Deserialize, Serialize};

use crate::error::GuestError;

/// A single invited guest and the group they arrive with
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guest {
    name: String,
    #[serde(default)]
    group_tag: String,
}

impl Guest {
    pub fn new(name: impl Into<String>, group_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_tag: group_tag.into(),
        }
    }

    /// Builds a guest from raw input where either field may be missing
    /// An absent name is rejected, an absent tag means "no group"
    pub fn from_parts(name: Option<String>, group_tag: Option<String>) -> Result<Self, GuestError> {
        let name = name.ok_or(GuestError::MissingName)?;
        Ok(Self::new(name, group_tag.unwrap_or_default()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group_tag(&self) -> &str {
        &self.group_tag
    }

    /// True when the guest carries no usable group tag
    pub fn is_ungrouped(&self) -> bool {
        self.group_tag.trim().is_empty()
    }
}
