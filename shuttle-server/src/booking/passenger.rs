//! Passenger contact details and their validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Single `@`, something on both sides, and a dot in the domain part.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Seven or more ASCII digits.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7,}$").expect("phone pattern is valid"));

/// Who is travelling, as entered on the confirmation screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDetails {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
}

/// Why passenger details were rejected.
///
/// The display text is shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PassengerError {
    #[error("Please fill in all passenger details (Full Name, Email, and Phone Number).")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number (at least 7 digits).")]
    InvalidPhone,
}

impl PassengerDetails {
    /// Create details from the three form fields.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Check the details are complete and plausible.
    ///
    /// Checks run in order and the first failure is returned: presence,
    /// then email shape, then phone length.
    pub fn validate(&self) -> Result<(), PassengerError> {
        if self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone_number.trim().is_empty()
        {
            return Err(PassengerError::MissingFields);
        }

        if !EMAIL.is_match(&self.email) {
            return Err(PassengerError::InvalidEmail);
        }

        let digits: String = self
            .phone_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !PHONE.is_match(&digits) {
            return Err(PassengerError::InvalidPhone);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PassengerDetails {
        PassengerDetails::new("Tenzin Norgay", "tenzin@example.com", "9876543210")
    }

    #[test]
    fn accepts_valid_details() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn default_is_blank_and_invalid() {
        assert_eq!(
            PassengerDetails::default().validate(),
            Err(PassengerError::MissingFields)
        );
    }

    #[test]
    fn every_field_is_required() {
        let blank_name = PassengerDetails {
            full_name: "   ".into(),
            ..valid()
        };
        let blank_email = PassengerDetails {
            email: "".into(),
            ..valid()
        };
        let blank_phone = PassengerDetails {
            phone_number: "\t".into(),
            ..valid()
        };
        for d in [blank_name, blank_email, blank_phone] {
            assert_eq!(d.validate(), Err(PassengerError::MissingFields));
        }
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        let no_tld = PassengerDetails {
            email: "a@b".into(),
            ..valid()
        };
        assert_eq!(no_tld.validate(), Err(PassengerError::InvalidEmail));

        let ok = PassengerDetails {
            email: "a@b.com".into(),
            ..valid()
        };
        assert_eq!(ok.validate(), Ok(()));
    }

    #[test]
    fn email_rejects_double_at_and_spaces() {
        for email in ["a@@b.com", "a@b@c.com", "a b@c.com", "@b.com", " a@b.com"] {
            let d = PassengerDetails {
                email: email.into(),
                ..valid()
            };
            assert_eq!(d.validate(), Err(PassengerError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn phone_needs_seven_digits() {
        let six = PassengerDetails {
            phone_number: "123456".into(),
            ..valid()
        };
        assert_eq!(six.validate(), Err(PassengerError::InvalidPhone));

        let seven = PassengerDetails {
            phone_number: "1234567".into(),
            ..valid()
        };
        assert_eq!(seven.validate(), Ok(()));
    }

    #[test]
    fn phone_whitespace_is_ignored() {
        let spaced = PassengerDetails {
            phone_number: "123 4567".into(),
            ..valid()
        };
        assert_eq!(spaced.validate(), Ok(()));
    }

    #[test]
    fn phone_rejects_punctuation() {
        let d = PassengerDetails {
            phone_number: "+91-98765-43210".into(),
            ..valid()
        };
        assert_eq!(d.validate(), Err(PassengerError::InvalidPhone));
    }

    #[test]
    fn missing_fields_reported_before_bad_email() {
        let d = PassengerDetails::new("", "not-an-email", "12");
        assert_eq!(d.validate(), Err(PassengerError::MissingFields));
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(json["fullName"], "Tenzin Norgay");
        assert_eq!(json["phoneNumber"], "9876543210");
    }
}
