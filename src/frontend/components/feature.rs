use leptos::prelude::*;

use crate::models::FeatureItem;

pub const FEATURE_SVG_CLASS: &str = "feature-svg";

/// One feature column: icon, title and description, all centered.
#[component]
pub fn Feature(item: FeatureItem, position: usize) -> impl IntoView {
    let FeatureItem {
        title,
        icon,
        description,
    } = item;

    view! {
        <div class="col col--4" data-feature=position.to_string()>
            <div class="text--center">
                {icon.render(FEATURE_SVG_CLASS, title)}
            </div>
            <div class="text--center padding-horiz--md">
                <h3>{title}</h3>
                <p>{description.render()}</p>
            </div>
        </div>
    }
}
