pub mod human;

use serde_json::{Value, json};

/// Standard JSON envelope for every command.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// Print a success envelope as one line of JSON on stdout.
pub fn print_success(command: &str, data: Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(&success(command, data))?);
    Ok(())
}
