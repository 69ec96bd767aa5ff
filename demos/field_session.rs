// ============================================================================
// Field Session Example
// ============================================================================
//
// Run with: cargo run --example field_session --features logging

use decimal_entry::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Decimal Entry Example ===\n");

    let separators = process_separators();
    println!(
        "Process separators: group {:?}, fraction {:?}\n",
        separators.group, separators.fraction
    );

    let mut field = DecimalFieldBuilder::currency(2)
        .locale("de-DE")
        .build(Arc::new(LoggingListener))
        .expect("valid configuration");

    println!("Typing \"1.250,5*2\" plus a stray letter...");
    field.focus_changed(true);
    for key in ["1", ".", "2", "5", "0", ",", "5", "q", "*", "2"] {
        let outcome = field.replace_selection(key);
        println!("  {:>3} -> {:?} text={:?}", key, outcome, field.text());
    }

    println!("\nLeaving the field...");
    field.focus_changed(false);
    println!("  value={:?} text={:?}\n", field.decimal(), field.text());

    println!("Keypad decimal on a German keyboard...");
    field.delete_text(0, field.text().chars().count());
    field.replace_selection("7");
    field.key_pressed(KeyCode::Decimal);
    field.replace_selection(".");
    field.replace_selection("5");
    field.key_pressed(KeyCode::Enter);
    println!("  value={:?} text={:?}\n", field.decimal(), field.text());

    println!("Unparseable input resolves to zero...");
    field.delete_text(0, field.text().chars().count());
    field.replace_selection("(((");
    field.commit();
    println!("  value={:?} text={:?}", field.decimal(), field.text());
}
