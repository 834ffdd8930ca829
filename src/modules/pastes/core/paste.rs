use crate::modules::pastes::core::errors::PasteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paste {
    pub id: String,
    pub text: String,
    pub created_at: i64,
}

/// Rejects blank text and text larger than `max_bytes`.
pub fn validate_text(text: &str, max_bytes: usize) -> Result<(), PasteError> {
    if text.trim().is_empty() {
        return Err(PasteError::Empty);
    }
    if text.len() > max_bytes {
        return Err(PasteError::TooLarge {
            size: text.len(),
            max: max_bytes,
        });
    }
    Ok(())
}
