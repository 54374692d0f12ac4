//! # termform
//!
//! Curses-style text input forms for character-cell terminals, built on
//! [crossterm](https://github.com/crossterm-rs/crossterm).
//!
//! A form is an ordered list of single-row input fields plus a
//! current-field cursor. All editing and navigation goes through *driver
//! requests* ([`FormRequest`]) - move to the next field, go to the end of
//! the line, delete the previous character - and a [`Keymap`] decides
//! which keys produce which requests. [`runner::run`] ties it together:
//! a blocking read-and-dispatch loop that exits on a quit-bound key
//! (F1 by default).
//!
//! ## Example
//!
//! ```no_run
//! use termform::{Field, FieldOptions, FieldStyle, Form, Keymap, Screen, runner};
//!
//! fn main() -> termform::Result<()> {
//!     let mut name = Field::new(4, 10, 20)?;
//!     name.set_style(FieldStyle::underlined());
//!     name.options_off(FieldOptions::AUTOSKIP);
//!
//!     let form = Form::new(vec![name])?;
//!     let mut screen = Screen::new()?;
//!     screen.print_label(4, 2, "Name:")?;
//!
//!     let form = runner::run(form, &Keymap::form_default(), &mut screen)?;
//!     drop(screen);
//!     println!("name: {}", form.field(0).unwrap().contents());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`types`] - attribute and option bitflags, screen positions
//! - [`field`] - fields, buffers, styles, validators
//! - [`form`] - the form and its driver
//! - [`input`] - key conversion, blocking reads, the keymap
//! - [`screen`] - terminal session and painting
//! - [`runner`] - the read-and-dispatch loop

pub mod error;
pub mod field;
pub mod form;
pub mod input;
pub mod runner;
pub mod screen;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use field::{Alpha, Field, FieldBuffer, FieldStyle, Integer, Validator};
pub use form::{Form, FormRequest};
pub use input::{Action, Binding, Key, Keymap, poll_key, read_key};
pub use screen::Screen;
pub use types::{Attr, FieldOptions, Point};
