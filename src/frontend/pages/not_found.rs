use leptos::prelude::*;

use crate::models::{GlyphIcon, Renderable};

const NOT_FOUND_ICON: GlyphIcon = GlyphIcon("🧭");

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <div class="container">
                {NOT_FOUND_ICON.render("not-found__icon", "Page not found")}
                <h1>"Page Not Found"</h1>
                <p>"We could not find what you were looking for."</p>
                <a class="button" href="/">"Back to the homepage"</a>
            </div>
        </main>
    }
}
