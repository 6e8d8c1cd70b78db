//! Schema validation for parsed completion output

use kagaz_domain::REQUIRED_FIELDS;
use serde_json::Value;
use thiserror::Error;

/// Reasons a parsed response fails schema validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    /// The top level is not a JSON object
    #[error("top level is not a JSON object")]
    NotAnObject,

    /// A required key is absent (null-valued keys count as present)
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// `address` is present but is not a mapping
    #[error("address must be a mapping, got {0}")]
    AddressNotAMapping(&'static str),
}

/// Check a parsed record against the schema contract.
///
/// The four identity keys must be present — a null value satisfies
/// presence. An `address` key, when it appears, must hold an object or
/// null, never a list or scalar. Every other field passes unchecked.
pub fn validate_record(value: &Value) -> Result<(), SchemaViolation> {
    let Some(object) = value.as_object() else {
        return Err(SchemaViolation::NotAnObject);
    };

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(SchemaViolation::MissingField(field));
        }
    }

    if let Some(address) = object.get("address") {
        if !address.is_object() && !address.is_null() {
            return Err(SchemaViolation::AddressNotAMapping(json_type_name(address)));
        }
    }

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_required_keys_present_validates() {
        let record = json!({
            "aadhar_number": "1234 5678 9012",
            "name": "Asha",
            "date_of_birth": "01/01/1990",
            "gender": "Female"
        });
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn test_null_valued_required_keys_still_count_as_present() {
        let record = json!({
            "aadhar_number": null,
            "name": null,
            "date_of_birth": null,
            "gender": null
        });
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn test_missing_gender_is_rejected() {
        let record = json!({
            "aadhar_number": "1234 5678 9012",
            "name": "Asha",
            "date_of_birth": "01/01/1990"
        });
        assert_eq!(
            validate_record(&record),
            Err(SchemaViolation::MissingField("gender"))
        );
    }

    #[test]
    fn test_address_as_list_is_rejected() {
        let record = json!({
            "aadhar_number": null,
            "name": null,
            "date_of_birth": null,
            "gender": null,
            "address": ["MG Road", "Pune"]
        });
        assert_eq!(
            validate_record(&record),
            Err(SchemaViolation::AddressNotAMapping("a list"))
        );
    }

    #[test]
    fn test_address_as_scalar_is_rejected() {
        let record = json!({
            "aadhar_number": null,
            "name": null,
            "date_of_birth": null,
            "gender": null,
            "address": "MG Road, Pune"
        });
        assert!(validate_record(&record).is_err());
    }

    #[test]
    fn test_address_null_is_accepted() {
        let record = json!({
            "aadhar_number": null,
            "name": null,
            "date_of_birth": null,
            "gender": null,
            "address": null
        });
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn test_address_mapping_is_accepted() {
        let record = json!({
            "aadhar_number": null,
            "name": null,
            "date_of_birth": null,
            "gender": null,
            "address": {"city": "Pune", "pincode": "411001"}
        });
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn test_non_object_top_level_is_rejected() {
        assert_eq!(
            validate_record(&json!(["not", "an", "object"])),
            Err(SchemaViolation::NotAnObject)
        );
        assert_eq!(
            validate_record(&json!("just a string")),
            Err(SchemaViolation::NotAnObject)
        );
    }

    #[test]
    fn test_unknown_extra_fields_pass_unchecked() {
        let record = json!({
            "aadhar_number": null,
            "name": null,
            "date_of_birth": null,
            "gender": null,
            "confidence": 0.93,
            "notes": ["low quality scan"]
        });
        assert!(validate_record(&record).is_ok());
    }
}
