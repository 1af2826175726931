// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{RagError, Result};

pub struct Validator;

impl Validator {
    pub fn validate_base_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(RagError::Validation(format!(
                "Invalid base URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Slugs are embedded in tool names, so they must stay identifier-safe.
    pub fn validate_slug(slug: &str) -> Result<()> {
        if slug.is_empty() {
            return Err(RagError::Validation("Slug cannot be empty".to_string()));
        }

        if !slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(RagError::Validation(format!(
                "Slug contains unusable characters: {}",
                slug
            )));
        }

        Ok(())
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.len() <= max_length {
            text.to_string()
        } else {
            let mut end = max_length;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &text[..end])
        }
    }
}
