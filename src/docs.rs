use crate::api::form::FormResponse;
use crate::model::department::Department;
use crate::model::draft::DraftSnapshot;
use crate::model::leave_type::LeaveType;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Time-Off Request Intake API",
        version = "1.0.0",
        description = r#"
## Time-Off Request Intake

Single-purpose intake service behind the **Time-Off Request** form.

### 🔹 What it does
- **Form bootstrap**
  - Option lists (departments, leave types), date defaults, saved draft
- **Draft autosave**
  - Best-effort persistence of in-progress requests; never blocks the form
- **Submission**
  - Validates the request and forwards it as one multipart POST to the
    configured webhook; the draft is cleared once delivery succeeds

### 📦 Response Format
- JSON responses; validation errors keyed per field

### 🚀 Usage
Embed the served page in an iframe, or drive the API directly from your
own front end.

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::form::get_form,
        crate::api::draft::get_draft,
        crate::api::draft::save_draft,
        crate::api::submit::submit,
    ),
    components(
        schemas(
            DraftSnapshot,
            FormResponse,
            Department,
            LeaveType
        )
    ),
    tags(
        (name = "Form", description = "Form bootstrap APIs"),
        (name = "Draft", description = "Draft autosave APIs"),
        (name = "Submit", description = "Submission forwarding APIs"),
    )
)]
pub struct ApiDoc;
