pub mod report {
    use std::io::{self, Write};

    use colored::Colorize;
    use serde_json::Value;

    use crate::errors::CliError;

    /// prints the result of a command to stdout as pretty JSON
    pub fn output(value: &Value) -> Result<(), CliError> {
        let rendered = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;

        // broken pipes are ignored
        let _ = writeln!(io::stdout().lock(), "{rendered}");

        Ok(())
    }

    /// reports an error to stderr
    pub fn error(error: &CliError) {
        eprintln!("{}", format!("error: {error}").bright_red());
        if let Some(hint) = error.to_hint() {
            eprintln!("{}", format!("hint: {hint}").bright_blue());
        }
    }
}
