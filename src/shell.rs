//! Console front end for [`resolve`](crate::resolve).
//!
//! Reads a day code as text, resolves it and writes either the weekday name
//! or [`INVALID_INPUT_MESSAGE`]. Malformed input is an ordinary outcome here:
//! only failures of the underlying streams are returned as errors.

use std::io::{self, BufRead, Write};

use crate::{INVALID_INPUT_MESSAGE, InvalidCode, PROMPT, Weekday, resolve};

/// Error type for reading a day code from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Nothing was entered.
    #[error("Empty input")]
    Empty,

    /// The first token is not an integer.
    #[error("Not a number: {0}")]
    NotANumber(String),

    /// The integer is outside the valid range.
    #[error(transparent)]
    InvalidCode(#[from] InvalidCode),
}

/// Parses the leading integer of `raw` (an optional sign followed by digits,
/// after any whitespace) as a day code and resolves it. Anything after the
/// digits is ignored, so `"3abc"` and `"3.5"` both read as 3.
///
/// # Errors
/// Returns `InputError::Empty` for blank input, `InputError::NotANumber` when
/// no digits lead the input or the integer overflows `i64`, and
/// `InputError::InvalidCode` when it is outside `1..=7`.
pub fn parse_code(raw: &str) -> Result<Weekday, InputError> {
    let trimmed = raw.trim_start();
    let token = trimmed.split_whitespace().next().ok_or(InputError::Empty)?;

    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(InputError::NotANumber(token.to_owned()));
    }

    let code = trimmed[..sign_len + digits_len]
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(token.to_owned()))?;
    Ok(resolve(code)?)
}

/// Writes the weekday name for `raw`, or the invalid input message, on its
/// own line.
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn respond<W: Write>(raw: &str, out: &mut W) -> io::Result<()> {
    match parse_code(raw) {
        Ok(day) => writeln!(out, "{day}"),
        Err(err) => {
            log::debug!("input {raw:?} not accepted: {err}");
            writeln!(out, "{INVALID_INPUT_MESSAGE}")
        }
    }
}

/// Writes [`PROMPT`], reads lines from `input` until one holds something other
/// than whitespace and answers it with [`respond`]. End of input before that
/// is treated as empty input.
///
/// # Errors
/// Returns any error from reading `input` or writing `out`.
pub fn prompt_and_respond<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 || !line.trim().is_empty() {
            break;
        }
    }
    respond(&line, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let mut reader = Cursor::new(input.as_bytes());
        let mut out = Vec::new();
        prompt_and_respond(&mut reader, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn answer(input: &str) -> String {
        let output = run(input);
        output
            .strip_prefix(PROMPT)
            .expect("output starts with the prompt")
            .to_owned()
    }

    #[test]
    fn test_prompt_is_written_first() {
        let output = run("1\n");
        assert!(output.starts_with(PROMPT));
        assert!(!PROMPT.ends_with('\n'));
    }

    #[test]
    fn test_end_to_end_scenarios() {
        struct TestCase {
            input: &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase { input: "1\n", expected: "Sunday\n" },
            TestCase { input: "4\n", expected: "Wednesday\n" },
            TestCase { input: "7\n", expected: "Saturday\n" },
            TestCase {
                input: "0\n",
                expected: "Invalid input. Please enter a number between 1 and 7.\n",
            },
            TestCase {
                input: "8\n",
                expected: "Invalid input. Please enter a number between 1 and 7.\n",
            },
        ];

        for case in &cases {
            assert_eq!(
                answer(case.input),
                case.expected,
                "Input {:?}",
                case.input
            );
        }
    }

    #[test]
    fn test_malformed_input_prints_invalid_message() {
        let expected = format!("{INVALID_INPUT_MESSAGE}\n");
        for input in [
            "abc\n",
            "\n",
            "   \n",
            "",
            "\n\n  \n",
            "-\n",
            "+x\n",
            ".5\n",
            "99999999999999999999999\n",
        ] {
            assert_eq!(answer(input), expected, "Input {input:?}");
        }
    }

    #[test]
    fn test_leading_integer_is_read() {
        assert_eq!(answer("3abc\n"), "Tuesday\n");
        assert_eq!(answer("3.5\n"), "Tuesday\n");
        assert_eq!(answer("-3\n"), format!("{INVALID_INPUT_MESSAGE}\n"));
        assert_eq!(answer("09\n"), format!("{INVALID_INPUT_MESSAGE}\n"));
        assert_eq!(answer("07\n"), "Saturday\n");
    }

    #[test]
    fn test_blank_lines_before_code_are_skipped() {
        assert_eq!(answer("\n4\n"), "Wednesday\n");
        assert_eq!(answer("\n  \n\t\n 1\n"), "Sunday\n");
        assert_eq!(answer("\n\n"), format!("{INVALID_INPUT_MESSAGE}\n"));
    }

    #[test]
    fn test_only_first_answered_line_is_consumed() {
        let mut reader = Cursor::new("\n2\n5\n".as_bytes());
        let mut out = Vec::new();
        prompt_and_respond(&mut reader, &mut out).unwrap();

        let mut rest = String::new();
        reader.read_line(&mut rest).unwrap();
        assert_eq!(rest, "5\n");
        assert_eq!(String::from_utf8(out).unwrap(), format!("{PROMPT}Monday\n"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(answer("  5  \n"), "Thursday\n");
        assert_eq!(answer("2\r\n"), "Monday\n");
        assert_eq!(answer("6 extra words\n"), "Friday\n");
    }

    #[test]
    fn test_respond_without_prompt() {
        let mut out = Vec::new();
        respond("-1", &mut out).unwrap();
        respond("3", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{INVALID_INPUT_MESSAGE}\nTuesday\n")
        );
    }

    #[test]
    fn test_parse_code_errors() {
        assert_eq!(parse_code(""), Err(InputError::Empty));
        assert_eq!(
            parse_code("x7"),
            Err(InputError::NotANumber("x7".to_owned()))
        );
        assert_eq!(
            parse_code("42"),
            Err(InputError::InvalidCode(InvalidCode(42)))
        );
        assert_eq!(parse_code("+7"), Ok(Weekday::Saturday));
        assert_eq!(parse_code("  3abc"), Ok(Weekday::Tuesday));
        assert_eq!(parse_code("- 3"), Err(InputError::NotANumber("-".to_owned())));
        assert_eq!(
            parse_code("99999999999999999999999"),
            Err(InputError::NotANumber("99999999999999999999999".to_owned()))
        );
    }

    #[test]
    fn test_input_error_display() {
        assert_eq!(InputError::Empty.to_string(), "Empty input");
        assert_eq!(
            InputError::NotANumber("abc".to_owned()).to_string(),
            "Not a number: abc"
        );
        assert_eq!(
            InputError::from(InvalidCode(0)).to_string(),
            "Invalid day code: 0 (must be 1-7)"
        );
    }
}
