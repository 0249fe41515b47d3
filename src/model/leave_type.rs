use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Kind of leave being requested.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString, ToSchema,
)]
pub enum LeaveType {
    Vacation,
    Sick,
    Personal,
    Unpaid,
    Paid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn five_leave_types() {
        assert_eq!(LeaveType::iter().count(), 5);
    }

    #[test]
    fn parses_exact_labels_only() {
        assert_eq!(LeaveType::from_str("Sick").unwrap(), LeaveType::Sick);
        assert!(LeaveType::from_str("sick").is_err());
        assert!(LeaveType::from_str("").is_err());
    }
}
