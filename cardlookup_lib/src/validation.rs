use crate::error::CardLookupError;

pub const MAX_CARD_NAME_LENGTH: usize = 200;
pub const MAX_FIELD_KEY_LENGTH: usize = 64;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, CardLookupError> {
    if input.len() > max_len {
        return Err(CardLookupError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(CardLookupError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a card name: enforce length, strip control chars, trim.
/// Interior punctuation and non-ASCII letters are kept ("Lim-Dûl's Vault").
pub fn validate_card_name(input: &str) -> Result<String, CardLookupError> {
    sanitize_text(input, MAX_CARD_NAME_LENGTH)
}

/// Validate a set code: 2-6 ASCII alphanumerics, returned lowercased.
pub fn validate_set_code(input: &str) -> Result<String, CardLookupError> {
    let lower = input.trim().to_lowercase();
    if (2..=6).contains(&lower.len()) && lower.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(lower)
    } else {
        Err(CardLookupError::InvalidInput(format!(
            "invalid set code '{}'. Expected 2-6 letters or digits (e.g. lea, m21)",
            input
        )))
    }
}

/// Validate a document key such as `prices` or `set_name`.
pub fn validate_field_key(input: &str) -> Result<String, CardLookupError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_FIELD_KEY_LENGTH {
        return Err(CardLookupError::InvalidInput(format!(
            "field key must be 1-{} bytes",
            MAX_FIELD_KEY_LENGTH
        )));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(CardLookupError::InvalidInput(format!(
            "invalid field key '{}'. Keys use lowercase letters, digits and underscores",
            input
        )));
    }
    Ok(trimmed.to_string())
}
