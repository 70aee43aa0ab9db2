use actix_web::{HttpResponse, Responder, get};

use eksdocs::content::FEATURE_LIST;
use eksdocs::types::list_features;

#[get("/api/features")]
pub async fn features() -> impl Responder {
    HttpResponse::Ok().json(list_features(&FEATURE_LIST))
}
