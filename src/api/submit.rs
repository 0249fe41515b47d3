use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::error;

use crate::gateway::{Attachment, SubmissionGateway, SubmissionPayload, SubmitOutcome};
use crate::model::draft::{DraftSnapshot, LeaveRequest};
use crate::store::DraftStore;

/// Inbound submission, one multipart part per form field. Every text
/// part is optional at the transport level so that a missing part
/// surfaces as a field validation error instead of a bare 400.
#[derive(Debug, MultipartForm)]
pub struct SubmitForm {
    #[multipart(rename = "employeeName")]
    pub employee_name: Option<Text<String>>,
    pub department: Option<Text<String>>,
    pub phone: Option<Text<String>>,
    #[multipart(rename = "startDate")]
    pub start_date: Option<Text<String>>,
    #[multipart(rename = "endDate")]
    pub end_date: Option<Text<String>>,
    #[multipart(rename = "leaveType")]
    pub leave_type: Option<Text<String>>,
    #[multipart(rename = "reasonDetails")]
    pub reason_details: Option<Text<String>>,
    #[multipart(rename = "supervisorName")]
    pub supervisor_name: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub attachment: Option<TempFile>,
}

impl SubmitForm {
    /// Raw field values, missing parts read as empty strings.
    pub fn snapshot(&self) -> DraftSnapshot {
        fn text(field: &Option<Text<String>>) -> String {
            field.as_ref().map(|t| t.0.clone()).unwrap_or_default()
        }
        DraftSnapshot {
            employee_name: text(&self.employee_name),
            department: text(&self.department),
            phone: text(&self.phone),
            start_date: text(&self.start_date),
            end_date: text(&self.end_date),
            leave_type: text(&self.leave_type),
            reason_details: text(&self.reason_details),
            supervisor_name: text(&self.supervisor_name),
        }
    }
}

/// Browsers post an unnamed zero-byte part when no file was chosen;
/// only a part with a filename counts as an attachment.
fn read_attachment(file: Option<&TempFile>) -> std::io::Result<Option<Attachment>> {
    let Some(file) = file else { return Ok(None) };
    let file_name = match file.file_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some(Attachment {
        file_name,
        content_type: file.content_type.as_ref().map(|m| m.to_string()),
        bytes: std::fs::read(file.file.path())?,
    }))
}

/// Validate and forward a time-off request.
#[utoipa::path(
    post,
    path = "/api/v1/submit",
    request_body(
        content = DraftSnapshot,
        description = "Form fields as multipart/form-data, plus an optional binary `attachment` part",
        content_type = "multipart/form-data"
    ),
    responses(
        (status = 200, description = "Request delivered to the webhook", body = Object, example = json!({
            "message": "Time-off request submitted"
        })),
        (status = 400, description = "Validation failed", body = Object, example = json!({
            "message": "Validation failed",
            "errors": { "employeeName": "Employee name is required" }
        })),
        (status = 502, description = "Webhook rejected the request"),
        (status = 503, description = "Webhook unreachable")
    ),
    tag = "Submit"
)]
pub async fn submit(
    form: MultipartForm<SubmitForm>,
    store: web::Data<DraftStore>,
    gateway: web::Data<SubmissionGateway>,
) -> actix_web::Result<impl Responder> {
    let request = match LeaveRequest::validate(&form.snapshot()) {
        Ok(request) => request,
        Err(errors) => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "message": "Validation failed",
                "errors": errors
            })));
        }
    };

    let attachment = read_attachment(form.attachment.as_ref()).map_err(|e| {
        error!(error = %e, "failed to read uploaded attachment");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let payload = SubmissionPayload::new(&request, attachment);
    match gateway.forward(payload).await {
        Ok(SubmitOutcome::Delivered) => {
            store.clear();
            Ok(HttpResponse::Ok().json(json!({
                "message": "Time-off request submitted"
            })))
        }
        Ok(SubmitOutcome::Rejected(status)) => Ok(HttpResponse::BadGateway().json(json!({
            "message": "The time-off service rejected this request",
            "status": status.as_u16()
        }))),
        Err(e) => {
            error!(error = %e, "submission transport failure");
            Ok(HttpResponse::ServiceUnavailable().json(json!({
                "message": "Could not reach the time-off service. Your draft is saved; please try again later."
            })))
        }
    }
}
