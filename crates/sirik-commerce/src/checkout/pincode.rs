//! Postal code parsing and lookup status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A syntactically valid pincode: exactly six ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pincode(String);

impl Pincode {
    pub const LEN: usize = 6;

    pub fn parse(code: &str) -> Result<Self, PincodeError> {
        if code.len() == Self::LEN && code.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(code.to_string()))
        } else {
            Err(PincodeError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Pincode {
    type Err = PincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pincode {
    type Error = PincodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Pincode> for String {
    fn from(p: Pincode) -> Self {
        p.0
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// City and state resolved from a pincode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    pub city: String,
    pub state: String,
}

impl Locality {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }
}

/// Where the address validator is in its lookup cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PincodeStatus {
    #[default]
    Editing,
    Checking,
    Resolved,
    Rejected,
}

impl PincodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PincodeStatus::Editing => "editing",
            PincodeStatus::Checking => "checking",
            PincodeStatus::Resolved => "resolved",
            PincodeStatus::Rejected => "rejected",
        }
    }
}

/// User-facing pincode failures. The display text is shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PincodeError {
    /// Rejected before any lookup.
    #[error("Please enter a valid 6-digit pincode")]
    InvalidFormat,

    /// The lookup ran and found no delivery area.
    #[error("Delivery not available for this pincode")]
    NotServiceable,

    /// The lookup itself failed.
    #[error("Error checking pincode. Please try again.")]
    LookupFailed,

    /// A lookup for this form is still pending.
    #[error("Pincode check already in progress")]
    CheckInProgress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let code = Pincode::parse("560001").unwrap();
        assert_eq!(code.as_str(), "560001");
        assert_eq!("600001".parse::<Pincode>().unwrap().to_string(), "600001");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for bad in ["12", "", "5600011", "56000a", " 56000", "५६०००१"] {
            assert_eq!(Pincode::parse(bad), Err(PincodeError::InvalidFormat), "{bad:?}");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PincodeError::NotServiceable.to_string(),
            "Delivery not available for this pincode"
        );
        assert_eq!(
            PincodeError::InvalidFormat.to_string(),
            "Please enter a valid 6-digit pincode"
        );
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<Pincode>("\"110001\"").is_ok());
        assert!(serde_json::from_str::<Pincode>("\"11\"").is_err());
    }
}
