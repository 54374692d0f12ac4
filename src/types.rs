//! Core types shared across the crate.
//!
//! - [`Attr`] - text attribute bitflags (the curses `chtype` attribute set)
//! - [`FieldOptions`] - per-field behavior flags
//! - [`Point`] - a screen position in character cells

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Field Options (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Per-field behavior flags.
    ///
    /// All options are on by default ([`FieldOptions::default`]). Turning
    /// AUTOSKIP off keeps the cursor in a field after the last cell is
    /// filled instead of advancing to the next field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldOptions: u8 {
        /// Advance to the next field when the last cell is filled.
        const AUTOSKIP = 1 << 0;
        /// The field accepts editing requests (insert, delete, clear).
        const EDITABLE = 1 << 1;
        /// The field participates in field navigation.
        const ACTIVE = 1 << 2;
    }
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self::AUTOSKIP | Self::EDITABLE | Self::ACTIVE
    }
}

// =============================================================================
// Point
// =============================================================================

/// A screen position in character cells. Row 0 is the top line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub row: u16,
    pub col: u16,
}

impl Point {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_combination() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(attrs.contains(Attr::UNDERLINE));
        assert!(!attrs.contains(Attr::BLINK));
    }

    #[test]
    fn test_attr_default_is_none() {
        assert_eq!(Attr::default(), Attr::NONE);
        assert!(Attr::default().is_empty());
    }

    #[test]
    fn test_field_options_default() {
        let opts = FieldOptions::default();
        assert!(opts.contains(FieldOptions::AUTOSKIP));
        assert!(opts.contains(FieldOptions::EDITABLE));
        assert!(opts.contains(FieldOptions::ACTIVE));
    }

    #[test]
    fn test_field_options_off() {
        let mut opts = FieldOptions::default();
        opts.remove(FieldOptions::AUTOSKIP);
        assert!(!opts.contains(FieldOptions::AUTOSKIP));
        assert!(opts.contains(FieldOptions::EDITABLE));
    }

    #[test]
    fn test_point() {
        let p = Point::new(4, 10);
        assert_eq!(p.row, 4);
        assert_eq!(p.col, 10);
    }
}
