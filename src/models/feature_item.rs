use std::fmt;

use crate::common::FeatureError;
use crate::models::{Description, Renderable};

/// A single highlighted feature on the homepage.
#[derive(Clone, Copy)]
pub struct FeatureItem {
    pub title: &'static str,
    pub icon: &'static dyn Renderable,
    pub description: Description,
}

impl FeatureItem {
    /// Checks that every field is present. `position` is only used to
    /// report which entry failed.
    pub fn validate(&self, position: usize) -> Result<(), FeatureError> {
        if self.title.trim().is_empty() {
            return Err(FeatureError::EmptyTitle { position });
        }
        if self.icon.is_blank() {
            return Err(FeatureError::EmptyIcon { position });
        }
        if self.description.is_blank() {
            return Err(FeatureError::EmptyDescription { position });
        }
        Ok(())
    }
}

impl fmt::Debug for FeatureItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureItem")
            .field("title", &self.title)
            .field("icon", &self.icon.name())
            .field("description", &self.description)
            .finish()
    }
}

impl PartialEq for FeatureItem {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.icon.name() == other.icon.name()
            && self.description == other.description
    }
}
