use serde::{Deserialize, Serialize};

/// Body Scryfall returns alongside any non-success status.
///
/// ```json
/// {"object": "error", "code": "not_found", "status": 404, "details": "No cards found ..."}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorObject {
    pub object: String,
    pub code: String,
    pub status: u16,
    pub details: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ErrorObject {
    /// Parses `body` as an error object, if it is one.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|obj| obj.object == "error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_not_found_body() {
        let body = r#"{
            "object": "error",
            "code": "not_found",
            "status": 404,
            "details": "No cards found matching “Blak Lotus”"
        }"#;
        let obj = ErrorObject::from_body(body).unwrap();
        assert_eq!(obj.code, "not_found");
        assert_eq!(obj.status, 404);
        assert!(obj.details.contains("Blak Lotus"));
        assert!(obj.warnings.is_empty());
    }

    #[test]
    fn parses_ambiguous_type() {
        let body = r#"{
            "object": "error",
            "code": "not_found",
            "type": "ambiguous",
            "status": 404,
            "details": "Too many cards match ambiguous name “jace”. Add more words to refine your search."
        }"#;
        let obj = ErrorObject::from_body(body).unwrap();
        assert_eq!(obj.error_type.as_deref(), Some("ambiguous"));
    }

    #[test]
    fn rejects_non_error_objects() {
        assert!(ErrorObject::from_body(r#"{"object": "card", "name": "Shock"}"#).is_none());
        assert!(ErrorObject::from_body("Internal Server Error").is_none());
    }
}
