//! Semantic roles and the fixed role → style mapping.

use std::fmt;

use crate::style::{Rgb, Style};

/// A semantic role the renderer assigns to each piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `[` `]` around collections and tags.
    Brace,
    /// `{` `}` around tuples and pairs.
    NestedBrace,
    Timestamp,
    Quoted,
    Boolean,
    Numeric,
    Duration,
    Success,
    Warning,
    Failure,
    Info,
    Emphasis,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::Brace,
        Role::NestedBrace,
        Role::Timestamp,
        Role::Quoted,
        Role::Boolean,
        Role::Numeric,
        Role::Duration,
        Role::Success,
        Role::Warning,
        Role::Failure,
        Role::Info,
        Role::Emphasis,
    ];

    /// The key used for this role in config files.
    pub fn name(self) -> &'static str {
        match self {
            Role::Brace => "brace",
            Role::NestedBrace => "nested_brace",
            Role::Timestamp => "timestamp",
            Role::Quoted => "quoted",
            Role::Boolean => "boolean",
            Role::Numeric => "numeric",
            Role::Duration => "duration",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Failure => "failure",
            Role::Info => "info",
            Role::Emphasis => "emphasis",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|role| role.name() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One [`Style`] per [`Role`]. Built once, read-only afterwards.
///
/// # Example
///
/// ```rust
/// use fancy::{Palette, Role};
/// use fancy::style::{Rgb, Style};
///
/// let palette = Palette::default().with(Role::Success, Style::new().fg(Rgb(0, 255, 0)));
/// assert_eq!(palette.get(Role::Success).foreground(), Some(Rgb(0, 255, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    styles: [Style; 12],
}

impl Palette {
    pub fn get(&self, role: Role) -> &Style {
        &self.styles[Self::slot(role)]
    }

    /// Returns a palette with `role` replaced by `style`.
    pub fn with(mut self, role: Role, style: Style) -> Self {
        self.styles[Self::slot(role)] = style;
        self
    }

    fn slot(role: Role) -> usize {
        role as usize
    }
}

impl Default for Palette {
    fn default() -> Self {
        let fg = |r, g, b| Style::new().fg(Rgb(r, g, b));
        Self {
            styles: Role::ALL.map(|role| match role {
                Role::Brace => fg(120, 120, 120),
                Role::NestedBrace => fg(160, 160, 160),
                Role::Timestamp => fg(80, 80, 80),
                Role::Quoted => fg(243, 156, 18),
                Role::Boolean => fg(52, 152, 219),
                Role::Numeric => fg(142, 68, 173),
                Role::Duration => fg(155, 89, 182),
                Role::Success => fg(46, 204, 113),
                Role::Warning => fg(241, 196, 15),
                Role::Failure => fg(231, 76, 60),
                Role::Info => fg(69, 170, 242),
                Role::Emphasis => Style::new().bold().underline(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
        assert_eq!(Role::from_name("sparkle"), None);
    }

    #[test]
    fn test_slots_follow_declaration_order() {
        for (i, role) in Role::ALL.into_iter().enumerate() {
            assert_eq!(Palette::slot(role), i);
        }
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.get(Role::Brace).foreground(), Some(Rgb(120, 120, 120)));
        assert_eq!(palette.get(Role::Quoted).foreground(), Some(Rgb(243, 156, 18)));
        assert_eq!(palette.get(Role::Info).foreground(), Some(Rgb(69, 170, 242)));
        assert_eq!(palette.get(Role::Emphasis).to_string(), "\x1b[1m\x1b[4m");
    }

    #[test]
    fn test_with_replaces_one_role() {
        let palette = Palette::default().with(Role::Numeric, Style::new().italic());
        assert_eq!(palette.get(Role::Numeric), &Style::new().italic());
        assert_eq!(palette.get(Role::Boolean).foreground(), Some(Rgb(52, 152, 219)));
    }
}
