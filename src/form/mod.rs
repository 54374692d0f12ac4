//! Forms: an ordered field list with a current-field cursor.
//!
//! A [`Form`] owns its fields and tracks which one is being edited. All
//! mutation goes through [`Form::driver`] (see [`FormRequest`]), mirroring
//! how a curses form is driven one request at a time. Field navigation
//! wraps and skips inactive fields; entering a field resets its edit
//! cursor to the start, which is why arrow-key bindings chase navigation
//! with an `EndLine` request.
//!
//! # Example
//!
//! ```
//! use termform::{Field, Form, FormRequest};
//!
//! let fields = vec![
//!     Field::new(4, 10, 20).unwrap(),
//!     Field::new(6, 10, 20).unwrap(),
//! ];
//! let mut form = Form::new(fields).unwrap();
//! form.post().unwrap();
//! form.driver(FormRequest::Insert('h')).unwrap();
//! form.driver(FormRequest::NextField).unwrap();
//! assert_eq!(form.current_index(), 1);
//! ```

mod driver;

pub use driver::FormRequest;

use tracing::debug;

use crate::error::{Error, Result};
use crate::field::Field;
use crate::types::FieldOptions;

// =============================================================================
// Hooks
// =============================================================================

/// Lifecycle callbacks fired by [`Form`].
///
/// `field_init` fires when a field becomes current, `field_term` when the
/// cursor leaves it. `post` / `unpost` bracket the form's visible
/// lifetime. Multiple hooks per event are not supported; setting a hook
/// replaces the previous one.
#[derive(Default)]
pub(crate) struct FormHooks {
    pub on_post: Option<Box<dyn FnMut()>>,
    pub on_unpost: Option<Box<dyn FnMut()>>,
    pub on_field_init: Option<Box<dyn FnMut(usize)>>,
    pub on_field_term: Option<Box<dyn FnMut(usize)>>,
}

// =============================================================================
// Form
// =============================================================================

/// An ordered, non-empty list of fields plus a current-field index.
///
/// Invariant: `current` always indexes a valid field.
pub struct Form {
    fields: Vec<Field>,
    current: usize,
    posted: bool,
    hooks: FormHooks,
}

impl Form {
    /// Create a form over `fields`.
    ///
    /// Fails with [`Error::BadArgument`] when the list is empty. The
    /// first field becomes current.
    pub fn new(fields: Vec<Field>) -> Result<Self> {
        if fields.is_empty() {
            return Err(Error::BadArgument("field list is empty"));
        }
        Ok(Self {
            fields,
            current: 0,
            posted: false,
            hooks: FormHooks::default(),
        })
    }

    /// All fields, in navigation order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// A field by index.
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// A field by index, mutable. Intended for setup (style, options,
    /// validators) before the form is driven.
    pub fn field_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    /// Index of the current field.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current field.
    pub fn current_field(&self) -> &Field {
        &self.fields[self.current]
    }

    pub(crate) fn current_field_mut(&mut self) -> &mut Field {
        &mut self.fields[self.current]
    }

    /// Check whether the form is posted (visible and drivable).
    pub fn is_posted(&self) -> bool {
        self.posted
    }

    /// Post the form: make it drivable and paintable.
    ///
    /// Fires the `post` hook, then `field_init` for the initial field.
    /// Posting twice is denied.
    pub fn post(&mut self) -> Result<()> {
        if self.posted {
            return Err(Error::RequestDenied("form is already posted"));
        }
        self.posted = true;
        debug!(fields = self.fields.len(), "form posted");
        if let Some(hook) = self.hooks.on_post.as_mut() {
            hook();
        }
        self.fire_field_init(self.current);
        Ok(())
    }

    /// Unpost the form. Fires `field_term` for the current field, then
    /// the `unpost` hook. Unposting an unposted form is a no-op.
    pub fn unpost(&mut self) {
        if !self.posted {
            return;
        }
        self.fire_field_term(self.current);
        self.posted = false;
        debug!("form unposted");
        if let Some(hook) = self.hooks.on_unpost.as_mut() {
            hook();
        }
    }

    // =========================================================================
    // Hook registration
    // =========================================================================

    /// Run a callback when the form is posted.
    pub fn on_post(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.on_post = Some(Box::new(hook));
    }

    /// Run a callback when the form is unposted.
    pub fn on_unpost(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.on_unpost = Some(Box::new(hook));
    }

    /// Run a callback (with the field index) when a field becomes current.
    pub fn on_field_init(&mut self, hook: impl FnMut(usize) + 'static) {
        self.hooks.on_field_init = Some(Box::new(hook));
    }

    /// Run a callback (with the field index) when the cursor leaves a field.
    pub fn on_field_term(&mut self, hook: impl FnMut(usize) + 'static) {
        self.hooks.on_field_term = Some(Box::new(hook));
    }

    fn fire_field_init(&mut self, index: usize) {
        if let Some(hook) = self.hooks.on_field_init.as_mut() {
            hook(index);
        }
    }

    fn fire_field_term(&mut self, index: usize) {
        if let Some(hook) = self.hooks.on_field_term.as_mut() {
            hook(index);
        }
    }

    // =========================================================================
    // Field navigation
    // =========================================================================

    fn is_active(&self, index: usize) -> bool {
        self.fields[index].options().contains(FieldOptions::ACTIVE)
    }

    pub(crate) fn first_active(&self) -> Option<usize> {
        (0..self.fields.len()).find(|&i| self.is_active(i))
    }

    pub(crate) fn last_active(&self) -> Option<usize> {
        (0..self.fields.len()).rev().find(|&i| self.is_active(i))
    }

    /// Step `direction` (+1 / -1) from the current field, wrapping, until
    /// an active field is found. Lands back on the current field when it
    /// is the only active one.
    pub(crate) fn move_field(&mut self, direction: i32) -> Result<()> {
        let len = self.fields.len();
        let mut index = self.current;
        for _ in 0..len {
            index = (index as i32 + direction).rem_euclid(len as i32) as usize;
            if self.is_active(index) {
                return self.goto_field(index);
            }
        }
        Err(Error::RequestDenied("no active field"))
    }

    /// Make `target` the current field.
    ///
    /// Denied when the current field's validator rejects its contents.
    /// Entering a field resets its edit cursor to the start. Same-field
    /// navigation only resets the cursor; no hooks fire.
    pub(crate) fn goto_field(&mut self, target: usize) -> Result<()> {
        if target == self.current {
            self.current_field_mut().buffer_mut().move_begin();
            return Ok(());
        }
        if !self.current_field().contents_valid() {
            return Err(Error::RequestDenied("field contents failed validation"));
        }

        let leaving = self.current;
        self.fire_field_term(leaving);
        self.current = target;
        self.current_field_mut().buffer_mut().move_begin();
        self.fire_field_init(target);
        Ok(())
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.fields)
            .field("current", &self.current)
            .field("posted", &self.posted)
            .finish_non_exhaustive()
    }
}
