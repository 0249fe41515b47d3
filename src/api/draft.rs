use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::model::draft::DraftSnapshot;
use crate::store::DraftStore;

/// Fetch the saved draft, if any.
#[utoipa::path(
    get,
    path = "/api/v1/draft",
    responses(
        (status = 200, description = "Saved draft snapshot", body = DraftSnapshot),
        (status = 404, description = "No draft saved", body = Object, example = json!({
            "message": "No draft saved"
        }))
    ),
    tag = "Draft"
)]
pub async fn get_draft(store: web::Data<DraftStore>) -> impl Responder {
    match store.load() {
        Some(snapshot) => HttpResponse::Ok().json(snapshot),
        None => HttpResponse::NotFound().json(json!({
            "message": "No draft saved"
        })),
    }
}

/// Persist the current field values. Called by the page after every
/// edit; always answers 204 because drafts are best-effort.
#[utoipa::path(
    put,
    path = "/api/v1/draft",
    request_body(
        content = DraftSnapshot,
        description = "Current form field values",
        content_type = "application/json"
    ),
    responses(
        (status = 204, description = "Draft accepted")
    ),
    tag = "Draft"
)]
pub async fn save_draft(
    snapshot: web::Json<DraftSnapshot>,
    store: web::Data<DraftStore>,
) -> impl Responder {
    store.save(&snapshot);
    HttpResponse::NoContent().finish()
}
