//! Server-side rendering of the site pages to HTML strings.

pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::config::SiteConfig;
use crate::models::FeatureItem;
use components::HomepageFeatures;
use pages::{HomePage, NotFound};

/// Empty comment leptos places between adjacent dynamic nodes so the client
/// can hydrate them. Nothing hydrates these pages.
const HYDRATION_MARKER: &str = "<!>";

fn to_static_html(view: impl RenderHtml) -> String {
    view.to_html().replace(HYDRATION_MARKER, "")
}

pub fn render_homepage(config: &SiteConfig) -> String {
    let config = config.clone();
    to_static_html(view! { <HomePage config=config /> })
}

pub fn render_features_section(features: &'static [FeatureItem]) -> String {
    to_static_html(view! { <HomepageFeatures features=features /> })
}

pub fn render_not_found() -> String {
    to_static_html(view! { <NotFound /> })
}
