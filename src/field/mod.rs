//! Form fields.
//!
//! A [`Field`] is a single-row input region: a fixed screen position, a
//! fixed visible width, an editable [`FieldBuffer`], display style, option
//! flags, and an optional [`Validator`].
//!
//! # Example
//!
//! ```
//! use termform::{Field, FieldOptions, FieldStyle};
//!
//! let mut field = Field::new(4, 10, 20).unwrap();
//! field.set_style(FieldStyle::underlined());
//! field.options_off(FieldOptions::AUTOSKIP);
//! ```

mod buffer;
mod validate;

pub use buffer::FieldBuffer;
pub use validate::{Alpha, Integer, Validator};

use crate::error::{Error, Result};
use crate::types::{Attr, FieldOptions, Point};

// =============================================================================
// FieldStyle
// =============================================================================

/// Display style for a field.
///
/// `foreground` applies to entered characters, `background` to the whole
/// field, `padding` fills unoccupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStyle {
    pub foreground: Attr,
    pub background: Attr,
    pub padding: char,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            foreground: Attr::NONE,
            background: Attr::NONE,
            padding: '_',
        }
    }
}

impl FieldStyle {
    /// The classic form look: underlined background, `'_'` padding hidden
    /// under the underline.
    pub fn underlined() -> Self {
        Self {
            background: Attr::UNDERLINE,
            padding: ' ',
            ..Self::default()
        }
    }
}

// =============================================================================
// Field
// =============================================================================

/// A single-row character-cell input region.
pub struct Field {
    origin: Point,
    width: u16,
    buffer: FieldBuffer,
    style: FieldStyle,
    options: FieldOptions,
    validator: Option<Box<dyn Validator>>,
}

impl Field {
    /// Create a field at `(row, col)` spanning `width` cells.
    ///
    /// Fails with [`Error::BadArgument`] when `width` is zero.
    pub fn new(row: u16, col: u16, width: u16) -> Result<Self> {
        if width == 0 {
            return Err(Error::BadArgument("field width must be non-zero"));
        }
        Ok(Self {
            origin: Point::new(row, col),
            width,
            buffer: FieldBuffer::new(width as usize),
            style: FieldStyle::default(),
            options: FieldOptions::default(),
            validator: None,
        })
    }

    /// Screen position of the first cell.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Visible width in cells. Also the buffer capacity.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Display style.
    pub fn style(&self) -> FieldStyle {
        self.style
    }

    pub fn set_style(&mut self, style: FieldStyle) {
        self.style = style;
    }

    /// Current option flags.
    pub fn options(&self) -> FieldOptions {
        self.options
    }

    /// Turn options on, leaving the rest unchanged.
    pub fn options_on(&mut self, options: FieldOptions) {
        self.options.insert(options);
    }

    /// Turn options off, leaving the rest unchanged.
    pub fn options_off(&mut self, options: FieldOptions) {
        self.options.remove(options);
    }

    /// Install a validator. Replaces any previous one.
    pub fn set_validator(&mut self, validator: impl Validator + 'static) {
        self.validator = Some(Box::new(validator));
    }

    /// Buffer contents as a String.
    pub fn contents(&self) -> String {
        self.buffer.contents()
    }

    /// Replace the buffer contents (truncated to the field width).
    pub fn set_contents(&mut self, text: &str) {
        self.buffer.set_contents(text);
    }

    /// The edit buffer.
    pub fn buffer(&self) -> &FieldBuffer {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut FieldBuffer {
        &mut self.buffer
    }

    /// Check a typed character against the validator (if any).
    pub(crate) fn char_valid(&self, ch: char) -> bool {
        self.validator.as_ref().is_none_or(|v| v.validate_char(ch))
    }

    /// Check the whole buffer against the validator (if any).
    pub(crate) fn contents_valid(&self) -> bool {
        self.validator
            .as_ref()
            .is_none_or(|v| v.validate(&self.buffer.contents()))
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("origin", &self.origin)
            .field("width", &self.width)
            .field("contents", &self.buffer.contents())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field() {
        let field = Field::new(4, 10, 20).unwrap();
        assert_eq!(field.origin(), Point::new(4, 10));
        assert_eq!(field.width(), 20);
        assert_eq!(field.contents(), "");
        assert_eq!(field.buffer().capacity(), 20);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(
            Field::new(0, 0, 0),
            Err(Error::BadArgument(_))
        ));
    }

    #[test]
    fn test_options_on_off() {
        let mut field = Field::new(0, 0, 5).unwrap();
        assert!(field.options().contains(FieldOptions::AUTOSKIP));
        field.options_off(FieldOptions::AUTOSKIP);
        assert!(!field.options().contains(FieldOptions::AUTOSKIP));
        field.options_on(FieldOptions::AUTOSKIP);
        assert!(field.options().contains(FieldOptions::AUTOSKIP));
    }

    #[test]
    fn test_underlined_style() {
        let style = FieldStyle::underlined();
        assert_eq!(style.background, Attr::UNDERLINE);
        assert_eq!(style.foreground, Attr::NONE);
        assert_eq!(style.padding, ' ');
    }

    #[test]
    fn test_validator_gates_chars() {
        let mut field = Field::new(0, 0, 5).unwrap();
        assert!(field.char_valid('x'));
        field.set_validator(Integer);
        assert!(field.char_valid('7'));
        assert!(!field.char_valid('x'));
    }

    #[test]
    fn test_validator_gates_contents() {
        let mut field = Field::new(0, 0, 5).unwrap();
        assert!(field.contents_valid());
        field.set_validator(Integer);
        assert!(!field.contents_valid()); // empty
        field.set_contents("12");
        assert!(field.contents_valid());
    }

    #[test]
    fn test_set_contents_truncates_to_width() {
        let mut field = Field::new(0, 0, 3).unwrap();
        field.set_contents("hello");
        assert_eq!(field.contents(), "hel");
    }
}
