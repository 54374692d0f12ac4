//! Driver requests.
//!
//! A [`FormRequest`] is one built-in operation executed against the form's
//! current state: field navigation, cursor movement within the field, or
//! buffer editing. Keys are bound to request sequences in
//! [`crate::input::Keymap`]; the loop in [`crate::runner`] feeds them to
//! [`Form::driver`](crate::Form::driver) one at a time.

use tracing::trace;

use super::Form;
use crate::error::{Error, Result};
use crate::types::FieldOptions;

/// A built-in form operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormRequest {
    /// Move to the next active field (wraps past the last).
    NextField,
    /// Move to the previous active field (wraps before the first).
    PrevField,
    /// Move to the first active field.
    FirstField,
    /// Move to the last active field.
    LastField,
    /// Move the edit cursor to the start of the field.
    BeginLine,
    /// Move the edit cursor past the last character.
    EndLine,
    /// Move the edit cursor one cell left.
    PrevChar,
    /// Move the edit cursor one cell right.
    NextChar,
    /// Delete the character before the cursor.
    DeletePrev,
    /// Delete the character at the cursor.
    DeleteChar,
    /// Erase the whole field.
    ClearField,
    /// Insert a character at the cursor.
    Insert(char),
}

impl Form {
    /// Execute one driver request.
    ///
    /// Requests that cannot be honored fail with
    /// [`Error::RequestDenied`]; the form state is unchanged in that case.
    /// Driving an unposted form fails with [`Error::NotPosted`].
    pub fn driver(&mut self, request: FormRequest) -> Result<()> {
        if !self.is_posted() {
            return Err(Error::NotPosted);
        }
        trace!(?request, current = self.current_index(), "form driver");

        match request {
            FormRequest::NextField => self.move_field(1),
            FormRequest::PrevField => self.move_field(-1),
            FormRequest::FirstField => {
                let target = self
                    .first_active()
                    .ok_or(Error::RequestDenied("no active field"))?;
                self.goto_field(target)
            }
            FormRequest::LastField => {
                let target = self
                    .last_active()
                    .ok_or(Error::RequestDenied("no active field"))?;
                self.goto_field(target)
            }
            FormRequest::BeginLine => {
                self.current_field_mut().buffer_mut().move_begin();
                Ok(())
            }
            FormRequest::EndLine => {
                self.current_field_mut().buffer_mut().move_end();
                Ok(())
            }
            FormRequest::PrevChar => {
                if self.current_field_mut().buffer_mut().move_left() {
                    Ok(())
                } else {
                    Err(Error::RequestDenied("cursor at start of field"))
                }
            }
            FormRequest::NextChar => {
                if self.current_field_mut().buffer_mut().move_right() {
                    Ok(())
                } else {
                    Err(Error::RequestDenied("cursor at end of contents"))
                }
            }
            FormRequest::DeletePrev => {
                self.require_editable()?;
                if self.current_field_mut().buffer_mut().delete_prev() {
                    Ok(())
                } else {
                    Err(Error::RequestDenied("nothing before cursor"))
                }
            }
            FormRequest::DeleteChar => {
                self.require_editable()?;
                if self.current_field_mut().buffer_mut().delete_at() {
                    Ok(())
                } else {
                    Err(Error::RequestDenied("nothing at cursor"))
                }
            }
            FormRequest::ClearField => {
                self.require_editable()?;
                self.current_field_mut().buffer_mut().clear();
                Ok(())
            }
            FormRequest::Insert(ch) => self.insert_char(ch),
        }
    }

    /// Insert a character into the current field.
    ///
    /// Denied when the field is not editable, the validator rejects the
    /// character, or the field is full. With AUTOSKIP, the insert that
    /// fills the last cell advances to the next field.
    fn insert_char(&mut self, ch: char) -> Result<()> {
        self.require_editable()?;
        if !self.current_field().char_valid(ch) {
            return Err(Error::RequestDenied("character rejected by validator"));
        }
        if !self.current_field_mut().buffer_mut().insert(ch) {
            return Err(Error::RequestDenied("field is full"));
        }

        let field = self.current_field();
        if field.buffer().is_full() && field.options().contains(FieldOptions::AUTOSKIP) {
            // Autoskip failure (single active field, invalid contents) is
            // not the caller's problem: the character went in.
            let _ = self.move_field(1);
        }
        Ok(())
    }

    fn require_editable(&self) -> Result<()> {
        if self
            .current_field()
            .options()
            .contains(FieldOptions::EDITABLE)
        {
            Ok(())
        } else {
            Err(Error::RequestDenied("field is not editable"))
        }
    }
}
