//! Delivery address form and its pincode validator.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checkout::{Locality, Pincode, PincodeError, PincodeStatus};
use crate::error::CommerceError;
use crate::gateway::LookupError;

/// A value only a lookup may set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum DerivedField {
    #[default]
    Unset,
    Resolved(String),
}

impl DerivedField {
    pub fn value(&self) -> Option<&str> {
        match self {
            DerivedField::Unset => None,
            DerivedField::Resolved(v) => Some(v),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, DerivedField::Resolved(_))
    }
}

/// The user-editable inputs of the address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressField {
    Name,
    Phone,
    Pincode,
    Address,
    Landmark,
}

impl AddressField {
    /// Form order.
    pub const ALL: [AddressField; 5] = [
        AddressField::Name,
        AddressField::Phone,
        AddressField::Pincode,
        AddressField::Address,
        AddressField::Landmark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::Name => "name",
            AddressField::Phone => "phone",
            AddressField::Pincode => "pincode",
            AddressField::Address => "address",
            AddressField::Landmark => "landmark",
        }
    }

    /// Label shown next to the input.
    pub fn display_name(&self) -> &'static str {
        match self {
            AddressField::Name => "Full Name",
            AddressField::Phone => "Phone Number",
            AddressField::Pincode => "Pincode",
            AddressField::Address => "Full Address",
            AddressField::Landmark => "Landmark (Optional)",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, AddressField::Landmark)
    }
}

impl FromStr for AddressField {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownField(s.to_string()))
    }
}

/// Form state: raw inputs plus the lookup-derived city and state.
///
/// City and state always belong to the pincode currently in the form;
/// editing the pincode unsets them.
///
/// Serialize-only: a deserialized form could carry a city and state that no
/// lookup produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressForm {
    name: String,
    phone: String,
    pincode: String,
    address: String,
    landmark: String,
    city: DerivedField,
    state: DerivedField,
    status: PincodeStatus,
    error: Option<PincodeError>,
}

impl AddressForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one input.
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let value = value.into();
        match field {
            AddressField::Name => self.name = value,
            AddressField::Phone => self.phone = value,
            AddressField::Address => self.address = value,
            AddressField::Landmark => self.landmark = value,
            AddressField::Pincode => {
                if value != self.pincode {
                    self.pincode = value;
                    self.city = DerivedField::Unset;
                    self.state = DerivedField::Unset;
                    self.status = PincodeStatus::Editing;
                    self.error = None;
                }
            }
        }
    }

    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Name => &self.name,
            AddressField::Phone => &self.phone,
            AddressField::Pincode => &self.pincode,
            AddressField::Address => &self.address,
            AddressField::Landmark => &self.landmark,
        }
    }

    pub fn city(&self) -> &DerivedField {
        &self.city
    }

    pub fn state(&self) -> &DerivedField {
        &self.state
    }

    pub fn status(&self) -> PincodeStatus {
        self.status
    }

    /// Message to show under the pincode input, if any.
    pub fn error(&self) -> Option<PincodeError> {
        self.error
    }

    /// The "Check" control is enabled.
    pub fn can_check(&self) -> bool {
        self.status != PincodeStatus::Checking && self.pincode.chars().count() == Pincode::LEN
    }

    /// The submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.status != PincodeStatus::Checking
            && self.city.is_resolved()
            && self.state.is_resolved()
    }

    /// Required inputs that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        AddressField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .map(|f| f.as_str())
            .collect()
    }

    /// Validate the format and enter Checking.
    ///
    /// A malformed code fails here without any lookup.
    pub fn begin_check(&mut self) -> Result<Pincode, PincodeError> {
        if self.status == PincodeStatus::Checking {
            return Err(PincodeError::CheckInProgress);
        }
        let code = match Pincode::parse(&self.pincode) {
            Ok(code) => code,
            Err(e) => {
                self.error = Some(e);
                return Err(e);
            }
        };
        self.status = PincodeStatus::Checking;
        self.error = None;
        Ok(code)
    }

    /// Apply a lookup result for `code`.
    ///
    /// Returns `None` when the form is no longer waiting on `code` (the
    /// pincode was edited or the form was reset meanwhile).
    pub fn complete_check(
        &mut self,
        code: &Pincode,
        result: Result<Locality, LookupError>,
    ) -> Option<Result<Locality, PincodeError>> {
        if self.status != PincodeStatus::Checking || self.pincode != code.as_str() {
            debug!(pincode = %code, "dropping lookup result for a superseded pincode");
            return None;
        }

        let outcome = match result {
            Ok(locality) => {
                self.city = DerivedField::Resolved(locality.city.clone());
                self.state = DerivedField::Resolved(locality.state.clone());
                self.status = PincodeStatus::Resolved;
                self.error = None;
                Ok(locality)
            }
            Err(LookupError::NotServiceable(_)) => {
                self.status = PincodeStatus::Rejected;
                self.error = Some(PincodeError::NotServiceable);
                Err(PincodeError::NotServiceable)
            }
            Err(LookupError::Unavailable(reason)) => {
                debug!(pincode = %code, %reason, "pincode lookup failed");
                self.status = PincodeStatus::Editing;
                self.error = Some(PincodeError::LookupFailed);
                Err(PincodeError::LookupFailed)
            }
        };
        Some(outcome)
    }

    /// Drop a pending lookup, keeping the inputs.
    pub fn abandon_check(&mut self) {
        if self.status == PincodeStatus::Checking {
            self.status = PincodeStatus::Editing;
        }
    }

    /// Snapshot the form as a finished address.
    pub fn to_shipping_address(&self) -> Result<ShippingAddress, CommerceError> {
        let mut missing = self.missing_fields();
        if !self.city.is_resolved() {
            missing.push("city");
        }
        if !self.state.is_resolved() {
            missing.push("state");
        }
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }
        let pincode = Pincode::parse(&self.pincode)?;

        Ok(ShippingAddress {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            pincode,
            address: self.address.trim().to_string(),
            city: self.city.value().unwrap_or_default().to_string(),
            state: self.state.value().unwrap_or_default().to_string(),
            landmark: Some(self.landmark.trim())
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A complete delivery address with resolved city and state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub phone: String,
    pub pincode: Pincode,
    pub address: String,
    pub city: String,
    pub state: String,
    pub landmark: Option<String>,
}

impl ShippingAddress {
    /// "City, State - Pincode".
    pub fn locality_line(&self) -> String {
        format!("{}, {} - {}", self.city, self.state, self.pincode)
    }

    /// Format as multi-line.
    pub fn multi_line(&self) -> String {
        let mut lines = vec![
            self.name.clone(),
            self.address.clone(),
            self.locality_line(),
            format!("Phone: {}", self.phone),
        ];
        if let Some(ref landmark) = self.landmark {
            lines.push(format!("Landmark: {}", landmark));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(pincode: &str) -> AddressForm {
        let mut form = AddressForm::new();
        form.set(AddressField::Name, "Asha Rao");
        form.set(AddressField::Phone, "9876543210");
        form.set(AddressField::Address, "12 Temple Street");
        form.set(AddressField::Pincode, pincode);
        form
    }

    #[test]
    fn test_invalid_format_fails_fast() {
        let mut form = filled("12");
        assert!(!form.can_check());
        assert_eq!(form.begin_check(), Err(PincodeError::InvalidFormat));
        assert_eq!(form.status(), PincodeStatus::Editing);
        assert_eq!(form.error(), Some(PincodeError::InvalidFormat));
    }

    #[test]
    fn test_resolved_lookup_sets_derived_fields() {
        let mut form = filled("600001");
        let code = form.begin_check().unwrap();
        assert_eq!(form.status(), PincodeStatus::Checking);
        assert!(!form.can_submit());

        let outcome = form.complete_check(&code, Ok(Locality::new("Chennai", "Tamil Nadu")));
        assert_eq!(outcome, Some(Ok(Locality::new("Chennai", "Tamil Nadu"))));
        assert_eq!(form.city().value(), Some("Chennai"));
        assert_eq!(form.state().value(), Some("Tamil Nadu"));
        assert!(form.can_submit());

        let address = form.to_shipping_address().unwrap();
        assert_eq!(address.locality_line(), "Chennai, Tamil Nadu - 600001");
        assert_eq!(address.landmark, None);
    }

    #[test]
    fn test_unserviceable_lookup_rejects() {
        let mut form = filled("999999");
        let code = form.begin_check().unwrap();
        let outcome = form.complete_check(&code, Err(LookupError::NotServiceable(code.clone())));

        assert_eq!(outcome, Some(Err(PincodeError::NotServiceable)));
        assert_eq!(form.status(), PincodeStatus::Rejected);
        assert_eq!(form.city(), &DerivedField::Unset);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_unavailable_lookup_returns_to_editing() {
        let mut form = filled("560001");
        let code = form.begin_check().unwrap();
        let outcome = form.complete_check(&code, Err(LookupError::Unavailable("boom".into())));

        assert_eq!(outcome, Some(Err(PincodeError::LookupFailed)));
        assert_eq!(form.status(), PincodeStatus::Editing);
        assert_eq!(
            form.error().map(|e| e.to_string()).as_deref(),
            Some("Error checking pincode. Please try again.")
        );
    }

    #[test]
    fn test_editing_pincode_unsets_derived_fields() {
        let mut form = filled("560001");
        let code = form.begin_check().unwrap();
        form.complete_check(&code, Ok(Locality::new("Bengaluru", "Karnataka")));

        form.set(AddressField::Pincode, "400001");
        assert_eq!(form.status(), PincodeStatus::Editing);
        assert_eq!(form.city(), &DerivedField::Unset);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_result_for_superseded_pincode_is_dropped() {
        let mut form = filled("560001");
        let code = form.begin_check().unwrap();
        form.set(AddressField::Pincode, "400001");

        assert_eq!(
            form.complete_check(&code, Ok(Locality::new("Bengaluru", "Karnataka"))),
            None
        );
        assert_eq!(form.city(), &DerivedField::Unset);
    }

    #[test]
    fn test_second_check_while_checking_refused() {
        let mut form = filled("560001");
        form.begin_check().unwrap();
        assert!(!form.can_check());
        assert_eq!(form.begin_check(), Err(PincodeError::CheckInProgress));
    }

    #[test]
    fn test_missing_fields_reported() {
        let mut form = AddressForm::new();
        form.set(AddressField::Name, "  ");
        form.set(AddressField::Landmark, "Near the temple");
        assert_eq!(form.missing_fields(), vec!["name", "phone", "pincode", "address"]);
        assert!(matches!(
            form.to_shipping_address(),
            Err(CommerceError::CheckoutIncomplete(_))
        ));
    }

    #[test]
    fn test_multi_line_includes_landmark() {
        let mut form = filled("110001");
        form.set(AddressField::Landmark, "Opp. metro");
        let code = form.begin_check().unwrap();
        form.complete_check(&code, Ok(Locality::new("New Delhi", "Delhi")));

        let text = form.to_shipping_address().unwrap().multi_line();
        assert!(text.contains("New Delhi, Delhi - 110001"));
        assert!(text.ends_with("Landmark: Opp. metro"));
    }

    #[test]
    fn test_field_parses_from_str() {
        assert_eq!("pincode".parse::<AddressField>(), Ok(AddressField::Pincode));
        assert_eq!(" Landmark ".parse::<AddressField>(), Ok(AddressField::Landmark));
        for field in AddressField::ALL {
            assert_eq!(field.as_str().parse::<AddressField>(), Ok(field));
        }
        assert_eq!(
            "city".parse::<AddressField>(),
            Err(CommerceError::UnknownField("city".to_string()))
        );
    }
}
