use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::frontend::components::{Footer, HomepageFeatures, HomepageHeader};

#[component]
pub fn HomePage(config: SiteConfig) -> impl IntoView {
    let SiteConfig {
        title,
        tagline,
        cta_label,
        cta_href,
        ..
    } = config;

    view! {
        <HomepageHeader
            title=title
            tagline=tagline
            cta_label=cta_label
            cta_href=cta_href
        />
        <main>
            <HomepageFeatures />
        </main>
        <Footer />
    }
}
