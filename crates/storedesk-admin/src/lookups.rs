//! Lookup tables and status enums shared by the dashboard pages.

use std::fmt;

use storedesk_core::{StoreDeskError, StoreDeskResult};
use storedesk_forms::SelectOption;

/// Two-letter USPS codes and state names, in code order.
const USA_STATES: &[(&str, &str)] = &[
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "District of Columbia"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

/// Returns the state name for a two-letter code (case-insensitive).
pub fn usa_state_converter(code: &str) -> Option<&'static str> {
    let code = code.trim();
    USA_STATES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Returns the states as select options sorted by name. Values are codes.
pub fn usa_state_options() -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = USA_STATES
        .iter()
        .map(|(code, name)| SelectOption::new(*code, *name))
        .collect();
    options.sort_by(|a, b| a.text.cmp(&b.text));
    options
}

/// Whether a staff member is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffState {
    /// Employed and able to take orders.
    Active,
    /// No longer active.
    NotActive,
}

impl StaffState {
    /// Maps the fixture flag: `0` is not active, anything else is active.
    pub const fn from_flag(flag: u8) -> Self {
        if flag == 0 {
            Self::NotActive
        } else {
            Self::Active
        }
    }
}

impl fmt::Display for StaffState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("Active"),
            Self::NotActive => f.write_str("Not Active"),
        }
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending = 1,
    Processing = 2,
    Rejected = 3,
    Completed = 4,
}

impl TryFrom<u8> for OrderStatus {
    type Error = StoreDeskError;

    fn try_from(code: u8) -> StoreDeskResult<Self> {
        match code {
            1 => Ok(Self::Pending),
            2 => Ok(Self::Processing),
            3 => Ok(Self::Rejected),
            4 => Ok(Self::Completed),
            other => Err(StoreDeskError::InvalidInput(format!(
                "unknown order status code {other}"
            ))),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usa_state_converter() {
        assert_eq!(usa_state_converter("CA"), Some("California"));
        assert_eq!(usa_state_converter("ny"), Some("New York"));
        assert_eq!(usa_state_converter("ZZ"), None);
    }

    #[test]
    fn test_usa_state_options_sorted_by_name() {
        let options = usa_state_options();
        assert_eq!(options.len(), 51);
        assert_eq!(options[0], SelectOption::new("AL", "Alabama"));
        assert_eq!(options[1], SelectOption::new("AK", "Alaska"));
        assert!(options.iter().any(|o| o.value == "CA" && o.text == "California"));
    }

    #[test]
    fn test_staff_state() {
        assert_eq!(StaffState::from_flag(0), StaffState::NotActive);
        assert_eq!(StaffState::from_flag(1), StaffState::Active);
        assert_eq!(StaffState::NotActive.to_string(), "Not Active");
    }

    #[test]
    fn test_order_status() {
        assert_eq!(OrderStatus::try_from(1).unwrap(), OrderStatus::Pending);
        assert_eq!(OrderStatus::try_from(4).unwrap().to_string(), "Completed");
        let err = OrderStatus::try_from(9).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
