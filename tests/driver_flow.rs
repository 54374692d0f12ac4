//! End-to-end driver flow: keys through the keymap into the form,
//! no terminal involved.

use termform::{
    Action, Error, Field, FieldOptions, FieldStyle, Form, FormRequest, Key, Keymap, Screen,
};

/// Feed a key through the keymap into the form, the way the runner does.
/// Returns true while the loop should keep going.
fn dispatch(form: &mut Form, keymap: &Keymap, key: Key) -> bool {
    match keymap.resolve(key) {
        Action::Quit => return false,
        Action::Requests(requests) => {
            for &request in requests {
                match form.driver(request) {
                    Ok(()) | Err(Error::RequestDenied(_)) => {}
                    Err(e) => panic!("driver error: {e}"),
                }
            }
        }
        Action::Insert(ch) => match form.driver(FormRequest::Insert(ch)) {
            Ok(()) | Err(Error::RequestDenied(_)) => {}
            Err(e) => panic!("driver error: {e}"),
        },
        Action::Ignore => {}
    }
    true
}

fn name_age_form() -> Form {
    let mut fields = Vec::new();
    for row in [4u16, 6] {
        let mut field = Field::new(row, 10, 20).unwrap();
        field.set_style(FieldStyle::underlined());
        field.options_off(FieldOptions::AUTOSKIP);
        fields.push(field);
    }
    Form::new(fields).unwrap()
}

#[test]
fn fill_two_fields_and_exit() {
    let mut form = name_age_form();
    form.post().unwrap();
    let keymap = Keymap::form_default();

    for ch in "Ada".chars() {
        assert!(dispatch(&mut form, &keymap, Key::Char(ch)));
    }
    assert!(dispatch(&mut form, &keymap, Key::Down));
    for ch in "36".chars() {
        assert!(dispatch(&mut form, &keymap, Key::Char(ch)));
    }

    // F1 ends the loop without touching the form.
    assert!(!dispatch(&mut form, &keymap, Key::F(1)));

    assert_eq!(form.field(0).unwrap().contents(), "Ada");
    assert_eq!(form.field(1).unwrap().contents(), "36");
}

#[test]
fn down_then_up_returns_with_cursor_at_end() {
    let mut form = name_age_form();
    form.post().unwrap();
    let keymap = Keymap::form_default();

    for ch in "Ada".chars() {
        dispatch(&mut form, &keymap, Key::Char(ch));
    }
    dispatch(&mut form, &keymap, Key::Down);
    assert_eq!(form.current_index(), 1);

    // Up is bound to [PrevField, EndLine]: back on field 0, the cursor
    // lands after "Ada" so typing appends.
    dispatch(&mut form, &keymap, Key::Up);
    assert_eq!(form.current_index(), 0);
    assert_eq!(form.current_field().buffer().cursor(), 3);

    dispatch(&mut form, &keymap, Key::Char('!'));
    assert_eq!(form.current_field().contents(), "Ada!");
}

#[test]
fn backspace_deletes_in_place() {
    let mut form = name_age_form();
    form.post().unwrap();
    let keymap = Keymap::form_default();

    for ch in "oops".chars() {
        dispatch(&mut form, &keymap, Key::Char(ch));
    }
    dispatch(&mut form, &keymap, Key::Backspace);
    dispatch(&mut form, &keymap, Key::Backspace);
    assert_eq!(form.current_field().contents(), "oo");

    // Extra backspaces at an empty buffer are denied and ignored.
    for _ in 0..5 {
        dispatch(&mut form, &keymap, Key::Backspace);
    }
    assert_eq!(form.current_field().contents(), "");
}

#[test]
fn navigation_wraps_both_ways() {
    let mut form = name_age_form();
    form.post().unwrap();
    let keymap = Keymap::form_default();

    dispatch(&mut form, &keymap, Key::Down);
    dispatch(&mut form, &keymap, Key::Down);
    assert_eq!(form.current_index(), 0);

    dispatch(&mut form, &keymap, Key::Up);
    assert_eq!(form.current_index(), 1);
}

#[test]
fn unmapped_keys_are_ignored() {
    let mut form = name_age_form();
    form.post().unwrap();
    let keymap = Keymap::form_default();

    dispatch(&mut form, &keymap, Key::Escape);
    dispatch(&mut form, &keymap, Key::Enter);
    dispatch(&mut form, &keymap, Key::F(5));
    assert_eq!(form.current_index(), 0);
    assert_eq!(form.current_field().contents(), "");
}

#[test]
fn painted_frame_matches_buffer_state() {
    let mut form = name_age_form();
    form.post().unwrap();
    let keymap = Keymap::form_default();

    for ch in "Ada".chars() {
        dispatch(&mut form, &keymap, Key::Char(ch));
    }

    let mut screen = Screen::with_writer(Vec::new());
    screen.paint(&form).unwrap();
    // Painting succeeded and left the form untouched.
    assert_eq!(form.current_field().contents(), "Ada");
}
