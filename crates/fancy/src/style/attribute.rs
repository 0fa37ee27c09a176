//! Text attributes (SGR effects).

use std::fmt;

/// A single terminal text attribute.
///
/// `Display` writes the literal escape sequence, so attributes can be
/// interleaved with colors when building a [`Style`](super::Style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Italic,
    Strike,
    Underline,
    Blink,
    BlinkFast,
    /// Clears every active color and attribute.
    Reset,
}

impl Attribute {
    /// The SGR parameter for this attribute.
    pub fn code(self) -> u8 {
        match self {
            Attribute::Reset => 0,
            Attribute::Bold => 1,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::Blink => 5,
            Attribute::BlinkFast => 6,
            Attribute::Strike => 9,
        }
    }

    /// Looks up an attribute by its config key.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Attribute::Bold),
            "italic" => Some(Attribute::Italic),
            "strike" | "strikethrough" => Some(Attribute::Strike),
            "underline" => Some(Attribute::Underline),
            "blink" => Some(Attribute::Blink),
            "blink_fast" => Some(Attribute::BlinkFast),
            "reset" => Some(Attribute::Reset),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.code())
    }
}

/// Returns the escape sequence for `attribute`.
pub fn attribute_sequence(attribute: Attribute) -> String {
    attribute.to_string()
}
