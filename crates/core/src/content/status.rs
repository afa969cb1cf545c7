//! Contact submission status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a contact-form submission.
///
/// Deserialized at the API boundary, so an out-of-enum status in a PATCH
/// body fails with 400 before any query is issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    /// Just submitted, not yet looked at.
    #[default]
    New,
    /// Seen by an admin.
    Read,
    /// An admin has responded.
    Replied,
    /// Filed away.
    Archived,
}

impl ContactStatus {
    /// Returns the storage representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Archived => "archived",
        }
    }

    /// Parses a stored status string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "read" => Some(Self::Read),
            "replied" => Some(Self::Replied),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("new", ContactStatus::New)]
    #[case("read", ContactStatus::Read)]
    #[case("replied", ContactStatus::Replied)]
    #[case("archived", ContactStatus::Archived)]
    fn test_parse_known_statuses(#[case] input: &str, #[case] expected: ContactStatus) {
        assert_eq!(ContactStatus::parse(input), Some(expected));
        assert_eq!(expected.as_str(), input);
    }

    #[rstest]
    #[case("deleted")]
    #[case("NEW")]
    #[case("")]
    fn test_parse_rejects_unknown(#[case] input: &str) {
        assert_eq!(ContactStatus::parse(input), None);
    }

    #[test]
    fn test_serde_rejects_out_of_enum_value() {
        let result: Result<ContactStatus, _> = serde_json::from_str("\"spam\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_new() {
        assert_eq!(ContactStatus::default(), ContactStatus::New);
    }
}
