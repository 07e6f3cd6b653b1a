/// How a card treats the text it is asked to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPolicy {
    /// Blank or whitespace-only input is dropped; accepted input is trimmed.
    RequireText,
    /// Any input is accepted verbatim; blank means "everything".
    AllowBlank,
}

impl InputPolicy {
    /// Returns the value to submit, or `None` when the submit must not
    /// reach the network.
    pub fn accept(self, raw: &str) -> Option<String> {
        match self {
            InputPolicy::RequireText => {
                let trimmed = raw.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            InputPolicy::AllowBlank => Some(raw.to_string()),
        }
    }
}

/// True when `raw` would be accepted under [`InputPolicy::RequireText`].
pub fn has_text(raw: &str) -> bool {
    !raw.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_drops_blank_input() {
        assert_eq!(InputPolicy::RequireText.accept(""), None);
        assert_eq!(InputPolicy::RequireText.accept("   \t\n"), None);
    }

    #[test]
    fn test_require_text_trims() {
        assert_eq!(
            InputPolicy::RequireText.accept("  Nashik "),
            Some("Nashik".to_string())
        );
    }

    #[test]
    fn test_allow_blank_passes_input_through() {
        assert_eq!(InputPolicy::AllowBlank.accept(""), Some(String::new()));
        assert_eq!(
            InputPolicy::AllowBlank.accept(" soil "),
            Some(" soil ".to_string())
        );
    }

    #[test]
    fn test_has_text() {
        assert!(has_text(" a "));
        assert!(!has_text("  "));
    }
}
