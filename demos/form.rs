//! Two-field form: Name and Age.
//!
//! Arrow keys move between fields, Backspace deletes, F1 exits. Typed
//! characters go into the field under the cursor.

use termform::{Field, FieldOptions, FieldStyle, Form, Keymap, Screen, runner};

fn main() -> termform::Result<()> {
    let mut fields = Vec::new();
    for row in [4u16, 6] {
        let mut field = Field::new(row, 10, 20)?;
        field.set_style(FieldStyle::underlined());
        field.options_off(FieldOptions::AUTOSKIP);
        fields.push(field);
    }
    let form = Form::new(fields)?;

    let mut screen = Screen::new()?;
    screen.print_label(4, 2, "Name:")?;
    screen.print_label(6, 2, "Age:")?;

    let form = runner::run(form, &Keymap::form_default(), &mut screen)?;
    drop(screen); // restore the terminal before printing

    println!("name: {}", form.field(0).unwrap().contents());
    println!("age:  {}", form.field(1).unwrap().contents());
    Ok(())
}
