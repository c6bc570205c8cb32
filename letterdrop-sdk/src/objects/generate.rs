use serde::{Deserialize, Serialize};

use super::kinds::LetterType;

/// Request body for `POST /generate`.
///
/// Optional sender fields are sent as JSON `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateLetterRequest {
    /// Free-text description of the user's situation.
    pub prompt: String,
    pub letter_type: LetterType,
    pub sender_name: Option<String>,
    pub sender_address: Option<String>,
}

/// Response body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateLetterResponse {
    pub letter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_sender_fields_serialize_as_null() {
        let req = GenerateLetterRequest {
            prompt: "Late payment reported in error".to_string(),
            letter_type: LetterType::CreditDispute,
            sender_name: None,
            sender_address: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["letter_type"], "credit_dispute");
        assert!(json["sender_name"].is_null());
        assert!(json["sender_address"].is_null());
        assert!(json.as_object().unwrap().contains_key("sender_name"));
    }
}
