use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container text--center">
                <p>"Amazon EKS and the Amazon EKS logo are trademarks of Amazon.com, Inc."</p>
            </div>
        </footer>
    }
}
