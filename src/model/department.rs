use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Closed list of departments an employee can request time off from.
/// The wire form is the human-readable label, matching the option
/// values the form page renders.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString, ToSchema,
)]
pub enum Department {
    #[serde(rename = "Administrative Assistant")]
    #[strum(serialize = "Administrative Assistant")]
    AdministrativeAssistant,
    Auditor,
    #[serde(rename = "Crew Chief")]
    #[strum(serialize = "Crew Chief")]
    CrewChief,
    #[serde(rename = "Crew Tech")]
    #[strum(serialize = "Crew Tech")]
    CrewTech,
    #[serde(rename = "Inventory Coordinator")]
    #[strum(serialize = "Inventory Coordinator")]
    InventoryCoordinator,
    #[serde(rename = "Marketing Coordinator")]
    #[strum(serialize = "Marketing Coordinator")]
    MarketingCoordinator,
    #[serde(rename = "Office Staff")]
    #[strum(serialize = "Office Staff")]
    OfficeStaff,
    #[serde(rename = "Operations Manager")]
    #[strum(serialize = "Operations Manager")]
    OperationsManager,
    #[serde(rename = "Service Manager")]
    #[strum(serialize = "Service Manager")]
    ServiceManager,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn nine_departments() {
        assert_eq!(Department::iter().count(), 9);
    }

    #[test]
    fn labels_round_trip() {
        for dept in Department::iter() {
            let label = dept.to_string();
            assert_eq!(Department::from_str(&label).unwrap(), dept);
        }
    }

    #[test]
    fn rejects_unknown_label() {
        assert!(Department::from_str("Janitor").is_err());
        assert!(Department::from_str("").is_err());
    }
}
