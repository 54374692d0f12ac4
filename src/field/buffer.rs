//! Field buffer editing.
//!
//! Handles character insertion, deletion, cursor movement, and capacity
//! enforcement for a single-row field. Every editing method returns `bool`:
//! `true` if the buffer changed (or the cursor moved), `false` if the
//! request hit a boundary. The form driver maps `false` onto
//! `Error::RequestDenied`.

use unicode_width::UnicodeWidthChar;

/// Bounded character buffer with an edit cursor.
///
/// Invariant: `cursor <= len <= capacity`.
#[derive(Debug, Clone)]
pub struct FieldBuffer {
    chars: Vec<char>,
    cursor: usize,
    capacity: usize,
}

impl FieldBuffer {
    /// Create an empty buffer holding at most `capacity` cells.
    pub fn new(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    /// Number of characters currently in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if every cell is filled.
    pub fn is_full(&self) -> bool {
        self.chars.len() >= self.capacity
    }

    /// Maximum number of cells.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current cursor position (0..=len).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Buffer contents as a String.
    pub fn contents(&self) -> String {
        self.chars.iter().collect()
    }

    /// Check that a character occupies exactly one cell.
    ///
    /// Control characters and wide characters (CJK, most emoji) are
    /// rejected: each buffer slot is one screen cell.
    fn is_single_cell(ch: char) -> bool {
        !ch.is_control() && ch.width() == Some(1)
    }

    /// Insert a character at the cursor position.
    ///
    /// Returns false when the buffer is full or the character does not
    /// fit a single cell.
    pub fn insert(&mut self, ch: char) -> bool {
        if self.is_full() || !Self::is_single_cell(ch) {
            return false;
        }
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor (Backspace).
    pub fn delete_prev(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.chars.remove(self.cursor - 1);
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor (Delete key). Cursor stays put.
    pub fn delete_at(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    /// Move the cursor one cell left. Returns false at the start.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor one cell right. Returns false past the last char.
    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move the cursor to the start of the buffer.
    pub fn move_begin(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor past the last character.
    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Remove all characters and reset the cursor.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Replace the contents, truncating to capacity and dropping
    /// characters that do not fit a single cell. Cursor moves to the end.
    pub fn set_contents(&mut self, text: &str) {
        self.chars = text
            .chars()
            .filter(|&ch| Self::is_single_cell(ch))
            .take(self.capacity)
            .collect();
        self.cursor = self.chars.len();
    }

    /// Character at a cell position, if any.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }
}
