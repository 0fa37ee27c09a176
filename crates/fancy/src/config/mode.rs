//! Output mode control.
//!
//! [`OutputMode`] decides whether escape sequences are written at all. The
//! text itself (quotes, separators, brackets) is identical in every mode.

use console::Term;
use serde::Deserialize;

/// Controls whether ANSI escape codes are included in the output.
///
/// - `Auto` - Detect terminal capabilities of stdout
/// - `Term` - Always include ANSI escape codes
/// - `Text` - Never include ANSI escape codes (plain text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Auto,
    #[default]
    Term,
    Text,
}

impl OutputMode {
    /// Resolves the mode to a concrete decision about whether to use color.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => {
                let supported = Term::stdout().features().colors_supported();
                tracing::debug!(supported, "resolved automatic output mode");
                supported
            }
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_term_should_use_color() {
        assert!(OutputMode::Term.should_use_color());
    }

    #[test]
    fn test_output_mode_text_should_not_use_color() {
        assert!(!OutputMode::Text.should_use_color());
    }

    #[test]
    fn test_output_mode_default_is_term() {
        assert_eq!(OutputMode::default(), OutputMode::Term);
    }

    #[test]
    fn test_output_mode_deserialize() {
        let mode: OutputMode = serde_yaml::from_str("auto").unwrap();
        assert_eq!(mode, OutputMode::Auto);
        assert!(serde_yaml::from_str::<OutputMode>("sometimes").is_err());
    }
}
