//! Four-field registration form: ID, Name, Email, Phone.
//!
//! The ID field only accepts digits and refuses to let the cursor leave
//! while empty. F1 exits.

use termform::{Field, FieldOptions, FieldStyle, Form, Integer, Keymap, Screen, runner};

fn main() -> termform::Result<()> {
    let mut id = Field::new(4, 18, 10)?;
    id.set_style(FieldStyle::underlined());
    id.options_off(FieldOptions::AUTOSKIP);
    id.set_validator(Integer);

    let mut fields = vec![id];
    for row in [6u16, 8, 10] {
        let mut field = Field::new(row, 18, 40)?;
        field.set_style(FieldStyle::underlined());
        field.options_off(FieldOptions::AUTOSKIP);
        fields.push(field);
    }
    let form = Form::new(fields)?;

    let mut screen = Screen::new()?;
    screen.print_label(4, 10, "ID:")?;
    screen.print_label(6, 10, "Name:")?;
    screen.print_label(8, 10, "Email:")?;
    screen.print_label(10, 10, "Phone:")?;
    screen.print_label(14, 10, "Press F1 to exit")?;

    let form = runner::run(form, &Keymap::form_default(), &mut screen)?;
    drop(screen);

    for (label, index) in [("id", 0), ("name", 1), ("email", 2), ("phone", 3)] {
        println!("{}: {}", label, form.field(index).unwrap().contents());
    }
    Ok(())
}
