//! Reusable UI components for the documentation homepage

mod feature;
mod footer;
mod homepage_features;
mod homepage_header;

pub use feature::{FEATURE_SVG_CLASS, Feature};
pub use footer::Footer;
pub use homepage_features::HomepageFeatures;
pub use homepage_header::HomepageHeader;
