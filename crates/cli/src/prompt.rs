use std::io::{BufRead, Write};

use crate::config::ConfigError;

const QUESTION: &str = "How many steps would you do in this simulation: ";

/// Asks for a step count on `output` and reads a positive integer from `input`.
///
/// # Errors
///
/// Fails if the streams fail, the input ends before a line is read, or the
/// line is not a positive integer.
pub fn ask_steps<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<usize, ConfigError> {
    writeln!(output, "{QUESTION}").map_err(ConfigError::Prompt)?;
    output.flush().map_err(ConfigError::Prompt)?;

    let mut line = String::new();
    if input.read_line(&mut line).map_err(ConfigError::Prompt)? == 0 {
        return Err(ConfigError::MissingSteps);
    }

    let line = line.trim();
    match line.parse::<usize>() {
        Ok(0) => Err(ConfigError::ZeroSteps),
        Ok(steps) => Ok(steps),
        Err(source) => Err(ConfigError::InvalidSteps {
            input: line.to_string(),
            source,
        }),
    }
}
