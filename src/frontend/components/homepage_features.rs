use leptos::prelude::*;

use crate::content::FEATURE_LIST;
use crate::frontend::components::Feature;
use crate::models::FeatureItem;

/// Feature section: one column per entry, in list order.
#[component]
pub fn HomepageFeatures(
    #[prop(default = &FEATURE_LIST[..])] features: &'static [FeatureItem],
) -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="row">
                    {features
                        .iter()
                        .enumerate()
                        .map(|(idx, item)| view! { <Feature item=*item position=idx /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
