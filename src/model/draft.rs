use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::department::Department;
use super::leave_type::LeaveType;

/// Raw form state exactly as the page edits it: every field a string,
/// nothing checked yet. This is what gets autosaved and rehydrated, so
/// it must tolerate partial and invalid input. The attachment is never
/// part of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
#[schema(example = json!({
    "employeeName": "Jane Doe",
    "department": "Auditor",
    "phone": "555-555-5555",
    "startDate": "2024-06-01",
    "endDate": "2024-06-01",
    "leaveType": "Sick",
    "reasonDetails": "Flu",
    "supervisorName": "Alex Rivera"
}))]
pub struct DraftSnapshot {
    pub employee_name: String,
    pub department: String,
    pub phone: String,
    pub start_date: String,
    pub end_date: String,
    pub leave_type: String,
    pub reason_details: String,
    pub supervisor_name: String,
}

impl DraftSnapshot {
    /// Empty snapshot with both dates preset to `today`, the initial
    /// state of a freshly opened form.
    pub fn with_default_dates(today: NaiveDate) -> Self {
        let date = today.format("%Y-%m-%d").to_string();
        Self {
            start_date: date.clone(),
            end_date: date,
            ..Self::default()
        }
    }
}

/// One message per invalid field, keyed by the camelCase field name the
/// page uses for its inline error slots.
pub type FieldErrors = BTreeMap<String, String>;

/// A snapshot that passed validation: enums resolved, dates parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
    pub employee_name: String,
    pub department: Department,
    pub phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub reason_details: String,
    pub supervisor_name: Option<String>,
}

impl LeaveRequest {
    /// Validates a raw snapshot. Required fields must be non-empty,
    /// department and leave type must be members of their option lists,
    /// dates must be ISO `YYYY-MM-DD` and ordered start <= end.
    /// Supervisor name stays optional.
    pub fn validate(snapshot: &DraftSnapshot) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let employee_name = snapshot.employee_name.trim();
        if employee_name.is_empty() {
            errors.insert("employeeName".into(), "Employee name is required".into());
        }

        let phone = snapshot.phone.trim();
        if phone.is_empty() {
            errors.insert("phone".into(), "Enter valid phone".into());
        }

        let department = match snapshot.department.trim() {
            "" => {
                errors.insert("department".into(), "Select department".into());
                None
            }
            value => match Department::from_str(value) {
                Ok(dept) => Some(dept),
                Err(_) => {
                    errors.insert("department".into(), "Select department".into());
                    None
                }
            },
        };

        let leave_type = match snapshot.leave_type.trim() {
            "" => {
                errors.insert("leaveType".into(), "Select leave type".into());
                None
            }
            value => match LeaveType::from_str(value) {
                Ok(kind) => Some(kind),
                Err(_) => {
                    errors.insert("leaveType".into(), "Select leave type".into());
                    None
                }
            },
        };

        let start_date = parse_date(&snapshot.start_date, "startDate", "Start date", &mut errors);
        let end_date = parse_date(&snapshot.end_date, "endDate", "End date", &mut errors);

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                errors.insert(
                    "endDate".into(),
                    "End date cannot be before start date".into(),
                );
            }
        }

        let reason_details = snapshot.reason_details.trim();
        if reason_details.is_empty() {
            errors.insert("reasonDetails".into(), "Reason is required".into());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let supervisor_name = match snapshot.supervisor_name.trim() {
            "" => None,
            value => Some(value.to_string()),
        };

        Ok(Self {
            employee_name: employee_name.to_string(),
            department: department.unwrap(),
            phone: phone.to_string(),
            start_date: start_date.unwrap(),
            end_date: end_date.unwrap(),
            leave_type: leave_type.unwrap(),
            reason_details: reason_details.to_string(),
            supervisor_name,
        })
    }
}

fn parse_date(
    value: &str,
    field: &str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field.into(), format!("{label} is required"));
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field.into(), format!("{label} must be YYYY-MM-DD"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_snapshot() -> DraftSnapshot {
        DraftSnapshot {
            employee_name: "Jane Doe".into(),
            department: "Auditor".into(),
            phone: "555-555-5555".into(),
            start_date: "2024-06-01".into(),
            end_date: "2024-06-01".into(),
            leave_type: "Sick".into(),
            reason_details: "Flu".into(),
            supervisor_name: String::new(),
        }
    }

    #[test]
    fn full_snapshot_validates() {
        let request = LeaveRequest::validate(&full_snapshot()).unwrap();
        assert_eq!(request.employee_name, "Jane Doe");
        assert_eq!(request.department, Department::Auditor);
        assert_eq!(request.leave_type, LeaveType::Sick);
        assert_eq!(request.start_date, request.end_date);
        assert_eq!(request.supervisor_name, None);
    }

    #[test]
    fn every_required_field_reports_its_own_error() {
        let errors = LeaveRequest::validate(&DraftSnapshot::default()).unwrap_err();
        for field in [
            "employeeName",
            "phone",
            "department",
            "leaveType",
            "startDate",
            "endDate",
            "reasonDetails",
        ] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
        assert!(!errors.contains_key("supervisorName"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut snapshot = full_snapshot();
        snapshot.reason_details = "   ".into();
        let errors = LeaveRequest::validate(&snapshot).unwrap_err();
        assert_eq!(errors["reasonDetails"], "Reason is required");
    }

    #[test]
    fn unknown_department_is_rejected() {
        let mut snapshot = full_snapshot();
        snapshot.department = "Janitor".into();
        let errors = LeaveRequest::validate(&snapshot).unwrap_err();
        assert_eq!(errors["department"], "Select department");
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut snapshot = full_snapshot();
        snapshot.start_date = "06/01/2024".into();
        let errors = LeaveRequest::validate(&snapshot).unwrap_err();
        assert!(errors["startDate"].contains("YYYY-MM-DD"));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut snapshot = full_snapshot();
        snapshot.end_date = "2024-05-31".into();
        let errors = LeaveRequest::validate(&snapshot).unwrap_err();
        assert_eq!(errors["endDate"], "End date cannot be before start date");
    }

    #[test]
    fn equal_dates_are_accepted() {
        assert!(LeaveRequest::validate(&full_snapshot()).is_ok());
    }

    #[test]
    fn supervisor_is_optional_but_kept_when_present() {
        let mut snapshot = full_snapshot();
        snapshot.supervisor_name = " Alex Rivera ".into();
        let request = LeaveRequest::validate(&snapshot).unwrap();
        assert_eq!(request.supervisor_name.as_deref(), Some("Alex Rivera"));
    }

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(full_snapshot()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("employeeName"));
        assert!(object.contains_key("reasonDetails"));
        assert_eq!(object.len(), 8);
    }

    #[test]
    fn default_dates_prefill_both_date_fields() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let snapshot = DraftSnapshot::with_default_dates(today);
        assert_eq!(snapshot.start_date, "2024-06-01");
        assert_eq!(snapshot.end_date, "2024-06-01");
        assert!(snapshot.employee_name.is_empty());
    }
}
