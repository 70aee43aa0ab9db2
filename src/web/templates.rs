use askama::Template;

#[derive(Template)]
#[template(path = "site/layout.html")]
pub struct SiteLayoutTemplate {
    pub title: String,
    pub description: String,
    pub body: String,
}
