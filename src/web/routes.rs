use actix_web::web;

use crate::web::handlers::{features, index};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(features);
}
