use leptos::prelude::*;

#[component]
pub fn HomepageHeader(
    #[prop(into)] title: String,
    #[prop(into)] tagline: String,
    #[prop(into)] cta_label: String,
    #[prop(into)] cta_href: String,
) -> impl IntoView {
    view! {
        <header class="hero hero--primary">
            <div class="container">
                <h1 class="hero__title">{title}</h1>
                <p class="hero__subtitle">{tagline}</p>
                <div class="buttons">
                    <a class="button button--secondary button--lg" href=cta_href>
                        {cta_label}
                    </a>
                </div>
            </div>
        </header>
    }
}
