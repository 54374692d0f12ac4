//! The read-and-dispatch loop.
//!
//! Single-threaded and blocking: pull one key, resolve it through the
//! keymap, apply the bound requests to the form, repaint. Denied
//! requests are dropped on the floor, exactly like the classic curses
//! loop that ignores `E_REQUEST_DENIED`; I/O errors end the loop.

use std::io::Write;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::form::{Form, FormRequest};
use crate::input::{self, Action, Keymap};
use crate::screen::Screen;

/// Apply one request, swallowing denials.
fn apply(form: &mut Form, request: FormRequest) -> Result<()> {
    match form.driver(request) {
        Err(Error::RequestDenied(reason)) => {
            trace!(?request, reason, "request denied");
            Ok(())
        }
        other => other,
    }
}

/// Run a form until a quit-bound key (F1 in
/// [`Keymap::form_default`]) arrives.
///
/// Posts the form, paints it, then blocks reading keys. On quit the form
/// is unposted and returned so the caller can read the final buffer
/// contents.
pub fn run<W: Write>(mut form: Form, keymap: &Keymap, screen: &mut Screen<W>) -> Result<Form> {
    form.post()?;
    screen.paint(&form)?;
    debug!("form loop started");

    loop {
        let key = input::read_key()?;
        match keymap.resolve(key) {
            Action::Quit => {
                debug!(?key, "quit key");
                break;
            }
            Action::Requests(requests) => {
                for &request in requests {
                    apply(&mut form, request)?;
                }
            }
            Action::Insert(ch) => apply(&mut form, FormRequest::Insert(ch))?,
            Action::Ignore => continue,
        }
        screen.paint(&form)?;
    }

    form.unpost();
    Ok(form)
}
