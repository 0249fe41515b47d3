use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use strum::IntoEnumIterator;
use utoipa::ToSchema;

use crate::model::department::Department;
use crate::model::draft::DraftSnapshot;
use crate::model::leave_type::LeaveType;
use crate::store::DraftStore;

/// Everything the page needs to render itself: the closed option
/// lists, today's defaults, and the rehydrated draft when one exists.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    #[schema(example = json!(["Auditor", "Crew Chief"]))]
    pub departments: Vec<String>,
    #[schema(example = json!(["Vacation", "Sick"]))]
    pub leave_types: Vec<String>,
    pub defaults: DraftSnapshot,
    #[schema(nullable = true)]
    pub draft: Option<DraftSnapshot>,
}

/// Form bootstrap payload, read once per page load.
#[utoipa::path(
    get,
    path = "/api/v1/form",
    responses(
        (status = 200, description = "Option lists, defaults and any saved draft", body = FormResponse)
    ),
    tag = "Form"
)]
pub async fn get_form(store: web::Data<DraftStore>) -> impl Responder {
    let today = chrono::Local::now().date_naive();
    HttpResponse::Ok().json(FormResponse {
        departments: Department::iter().map(|d| d.to_string()).collect(),
        leave_types: LeaveType::iter().map(|t| t.to_string()).collect(),
        defaults: DraftSnapshot::with_default_dates(today),
        draft: store.load(),
    })
}
