use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};

use eksdocs::frontend;

use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::SiteLayoutTemplate;

#[get("/")]
pub async fn index(state: web::Data<AppState>) -> impl Responder {
    let config = &state.config;
    render(
        StatusCode::OK,
        SiteLayoutTemplate {
            title: config.title.clone(),
            description: config.tagline.clone(),
            body: frontend::render_homepage(config),
        },
    )
}

pub async fn not_found(state: web::Data<AppState>) -> HttpResponse {
    render(
        StatusCode::NOT_FOUND,
        SiteLayoutTemplate {
            title: format!("Page Not Found | {}", state.config.title),
            description: state.config.tagline.clone(),
            body: frontend::render_not_found(),
        },
    )
}
