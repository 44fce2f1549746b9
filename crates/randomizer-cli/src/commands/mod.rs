//! Subcommand implementations.

pub mod check;
pub mod net;
pub mod numbers;
pub mod words;

/// Print one result per line, as JSON or plain text.
fn emit(value: serde_json::Value, json: bool) {
    if json {
        println!("{value}");
    } else {
        match value {
            serde_json::Value::String(s) => println!("{s}"),
            other => println!("{other}"),
        }
    }
}
