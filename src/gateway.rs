use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

use crate::model::draft::LeaveRequest;

/// Uploaded file forwarded verbatim, original filename preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// The multipart body sent to the webhook: always the same eight named
/// text parts, in a fixed order, plus an optional binary part.
#[derive(Debug, Clone)]
pub struct SubmissionPayload {
    pub fields: Vec<(&'static str, String)>,
    pub attachment: Option<Attachment>,
}

impl SubmissionPayload {
    pub fn new(request: &LeaveRequest, attachment: Option<Attachment>) -> Self {
        let fields = vec![
            ("employeeName", request.employee_name.clone()),
            ("department", request.department.to_string()),
            ("phone", request.phone.clone()),
            ("startDate", request.start_date.format("%Y-%m-%d").to_string()),
            ("endDate", request.end_date.format("%Y-%m-%d").to_string()),
            ("leaveType", request.leave_type.to_string()),
            ("reasonDetails", request.reason_details.clone()),
            // part is always present, empty when no supervisor was named
            (
                "supervisorName",
                request.supervisor_name.clone().unwrap_or_default(),
            ),
        ];
        Self { fields, attachment }
    }

    fn into_form(self) -> reqwest::Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        if let Some(attachment) = self.attachment {
            let mut part = Part::bytes(attachment.bytes).file_name(attachment.file_name);
            if let Some(content_type) = attachment.content_type {
                part = part.mime_str(&content_type)?;
            }
            form = form.part("attachment", part);
        }
        Ok(form)
    }
}

/// What happened to a forwarded submission. Transport failures come
/// back as the `Err` side of [`SubmissionGateway::forward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The webhook answered 2xx. Delivery is confirmed, remote
    /// processing is still assumed.
    Delivered,
    /// The webhook answered but refused the request.
    Rejected(StatusCode),
}

/// Fire-and-forget client for the external webhook. One POST per
/// submission: no authentication, no retry, no enforced timeout.
#[derive(Debug, Clone)]
pub struct SubmissionGateway {
    client: Client,
    webhook_url: String,
}

impl SubmissionGateway {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            webhook_url: webhook_url.into(),
        }
    }

    /// Sends exactly one multipart POST. `Err` means the call itself
    /// failed (DNS, connect, I/O); the webhook's verdict, when there is
    /// one, is carried in the `Ok` outcome.
    pub async fn forward(&self, payload: SubmissionPayload) -> reqwest::Result<SubmitOutcome> {
        let form = payload.into_form()?;
        let response = self
            .client
            .post(&self.webhook_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(%status, "submission delivered");
            Ok(SubmitOutcome::Delivered)
        } else {
            warn!(%status, "webhook rejected submission");
            Ok(SubmitOutcome::Rejected(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::department::Department;
    use crate::model::leave_type::LeaveType;
    use chrono::NaiveDate;

    fn request() -> LeaveRequest {
        LeaveRequest {
            employee_name: "Jane Doe".into(),
            department: Department::Auditor,
            phone: "555-555-5555".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            leave_type: LeaveType::Sick,
            reason_details: "Flu".into(),
            supervisor_name: None,
        }
    }

    #[test]
    fn payload_has_the_eight_named_text_parts_in_order() {
        let payload = SubmissionPayload::new(&request(), None);
        let names: Vec<&str> = payload.fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "employeeName",
                "department",
                "phone",
                "startDate",
                "endDate",
                "leaveType",
                "reasonDetails",
                "supervisorName",
            ]
        );
        assert!(payload.attachment.is_none());
    }

    #[test]
    fn payload_carries_the_exact_field_values() {
        let payload = SubmissionPayload::new(&request(), None);
        let value = |name: &str| {
            payload
                .fields
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(value("employeeName"), "Jane Doe");
        assert_eq!(value("department"), "Auditor");
        assert_eq!(value("phone"), "555-555-5555");
        assert_eq!(value("startDate"), "2024-06-01");
        assert_eq!(value("endDate"), "2024-06-01");
        assert_eq!(value("leaveType"), "Sick");
        assert_eq!(value("reasonDetails"), "Flu");
        assert_eq!(value("supervisorName"), "");
    }

    #[test]
    fn missing_supervisor_becomes_an_empty_part_not_a_missing_one() {
        let payload = SubmissionPayload::new(&request(), None);
        assert_eq!(payload.fields.len(), 8);

        let mut with_supervisor = request();
        with_supervisor.supervisor_name = Some("Alex Rivera".into());
        let payload = SubmissionPayload::new(&with_supervisor, None);
        assert_eq!(payload.fields.len(), 8);
        assert_eq!(payload.fields[7].1, "Alex Rivera");
    }

    #[test]
    fn attachment_keeps_its_original_filename() {
        let attachment = Attachment {
            file_name: "doctors-note.pdf".into(),
            content_type: Some("application/pdf".into()),
            bytes: vec![1, 2, 3],
        };
        let payload = SubmissionPayload::new(&request(), Some(attachment.clone()));
        assert_eq!(payload.attachment, Some(attachment));
        // and the body still builds with the binary part present
        assert!(payload.into_form().is_ok());
    }

    #[test]
    fn multiword_department_labels_survive_into_the_payload() {
        let mut req = request();
        req.department = Department::CrewChief;
        let payload = SubmissionPayload::new(&req, None);
        assert_eq!(payload.fields[1].1, "Crew Chief");
    }
}
