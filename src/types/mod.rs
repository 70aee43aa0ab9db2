use serde::{Deserialize, Serialize};

use crate::models::FeatureItem;

/// Feature entry as exposed by the JSON listing
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FeaturePublic {
    pub position: usize,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl FeaturePublic {
    pub fn from_item(position: usize, item: &FeatureItem) -> Self {
        Self {
            position,
            title: item.title.to_string(),
            description: item.description.plain_text(),
            icon: item.icon.name().to_string(),
        }
    }
}

pub fn list_features(features: &[FeatureItem]) -> Vec<FeaturePublic> {
    features
        .iter()
        .enumerate()
        .map(|(position, item)| FeaturePublic::from_item(position, item))
        .collect()
}
