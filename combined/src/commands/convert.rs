//! Convert command - the console front end.
//!
//! Prints either the words or the error message on a single line. A rejected
//! amount is a normal outcome and does not fail the command.

use std::io::{self, BufRead, Write};

use common::{AppError, AppResult, ErrorResponse};

use crate::cli::ConvertArgs;

pub fn execute(args: ConvertArgs) -> AppResult<()> {
    let input = match args.amount {
        Some(amount) => amount,
        None => read_line(&mut io::stdin().lock())?,
    };

    let line = render(&input, args.json)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    Ok(())
}

/// Read one line; end of input counts as an empty line.
fn read_line(reader: &mut impl BufRead) -> AppResult<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}

/// Output line for `input`: words, or the user message of the error.
fn render(input: &str, json: bool) -> AppResult<String> {
    match common::convert(input) {
        Ok(conversion) if json => to_json(&conversion),
        Ok(conversion) => Ok(conversion.words),
        Err(e) if e.is_input_error() => {
            tracing::debug!(code = e.code(), "Amount rejected: {}", e);
            if json {
                to_json(&ErrorResponse::from(&e))
            } else {
                Ok(e.user_message())
            }
        }
        Err(e) => Err(e),
    }
}

fn to_json(value: &impl serde::Serialize) -> AppResult<String> {
    serde_json::to_string(value)
        .map_err(|e| AppError::internal(format!("JSON serialization failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_words() {
        assert_eq!(render("0,01", false).unwrap(), "zero dollars and one cent");
    }

    #[test]
    fn test_render_error_message() {
        assert_eq!(
            render("-1", false).unwrap(),
            "Input could not be recognized as a number. Please use ',' (comma) as decimal separator and spaces as optional thousands separator"
        );
        assert_eq!(
            render("0,001", false).unwrap(),
            "Value should be a multiple of 0.01 dollars; got 0,001 dollars"
        );
    }

    #[test]
    fn test_render_json() {
        let line = render("1", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["cents"], 100);
        assert_eq!(value["words"], "one dollar");

        let line = render("xyz", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["error"]["code"], "FORMAT_ERROR");
    }

    #[test]
    fn test_to_json_failure_is_internal_error() {
        use std::collections::HashMap;

        // JSON object keys must be strings
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");

        let err = to_json(&map).unwrap_err();
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_read_line_at_end_of_input_is_empty() {
        let mut empty: &[u8] = b"";
        assert_eq!(read_line(&mut empty).unwrap(), "");

        let mut input: &[u8] = b"45 100\nignored\n";
        assert_eq!(read_line(&mut input).unwrap(), "45 100\n");
    }
}
