//! The structured identity record produced by the pipeline

use serde::{Deserialize, Serialize};

/// Top-level keys that must be present in a record for it to validate,
/// even when their values are null.
pub const REQUIRED_FIELDS: [&str; 4] = ["aadhar_number", "name", "date_of_birth", "gender"];

/// Postal address sub-record. Every component is independently nullable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    /// House or flat number
    pub house_number: Option<String>,
    /// Street or road name
    pub street: Option<String>,
    /// Locality or area
    pub locality: Option<String>,
    /// City or town
    pub city: Option<String>,
    /// District
    pub district: Option<String>,
    /// State
    pub state: Option<String>,
    /// 6-digit postal code
    pub pincode: Option<String>,
}

/// A structured identity record extracted from one document.
///
/// Field values come back from the completion service; anything the source
/// document does not show is null. The Aadhaar number, when present, is
/// canonically spaced in groups of four (`XXXX XXXX XXXX`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// 12-digit Aadhaar number with canonical spacing, or null
    pub aadhar_number: Option<String>,
    /// Full name as printed
    pub name: Option<String>,
    /// Date of birth in DD/MM/YYYY form, or null
    pub date_of_birth: Option<String>,
    /// Gender as printed (Male/Female/Other)
    pub gender: Option<String>,
    /// Father's name, if the document shows one
    pub father_name: Option<String>,
    /// Mother's name, if the document shows one
    pub mother_name: Option<String>,
    /// Nested postal address, when present
    pub address: Option<Address>,
    /// Mobile number, if shown
    pub mobile_number: Option<String>,
    /// Email address, if shown
    pub email: Option<String>,
}
