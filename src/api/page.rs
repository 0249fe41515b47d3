use actix_web::{HttpResponse, Responder, get, web};

use crate::config::Config;

const PAGE: &str = include_str!("../../static/index.html");

/// The form page itself. Served with the configured API prefix and
/// embed fallback id substituted into the inline script.
#[get("/")]
pub async fn index(config: web::Data<Config>) -> impl Responder {
    let body = PAGE
        .replace("__API_PREFIX__", &config.api_prefix)
        .replace("__FRAME_FALLBACK__", &config.default_frame_id);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
