use atelier_core::knowledge::catalog;

use crate::commands::CommandResult;

/// Lists every curated input value plus the bookable services and time slots.
pub fn run() -> CommandResult {
    match serde_json::to_string_pretty(&catalog()) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => CommandResult::failure(
            "options",
            "serialization",
            format!("failed to serialize options: {error}"),
            7,
        ),
    }
}
