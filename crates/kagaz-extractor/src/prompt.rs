//! Prompt engineering for identity-record extraction

/// Builds the extraction prompt for one document's text.
///
/// The template is a process-wide constant; only the document text varies
/// between calls.
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a prompt builder over extracted document text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete extraction prompt.
    pub fn build(&self) -> String {
        EXTRACTION_TEMPLATE.replace("{text}", &self.text)
    }
}

const EXTRACTION_TEMPLATE: &str = r#"Extract the following information from this Aadhaar card text and return it as JSON:

- aadhar_number: (12-digit number)
- name: (Full name)
- date_of_birth: (DD/MM/YYYY format)
- gender: (Male/Female/Other)
- father_name: (if available)
- mother_name: (if available)
- address: {
    "house_number": "",
    "street": "",
    "locality": "",
    "city": "",
    "district": "",
    "state": "",
    "pincode": ""
}
- mobile_number: (if available)
- email: (if available)

Instructions:
1. Extract only visible information
2. Use null for missing data
3. Format Aadhaar number with spaces (XXXX XXXX XXXX)
4. Return only valid JSON

Aadhaar Text: {text}"#;
