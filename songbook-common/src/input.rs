//! Validated input reader
//!
//! Drives one prompt → read → validate → (retry | keep old value) → coerce
//! cycle per property. Lines come from a [`LineSource`] (any `BufRead`, or a
//! line editor) and messages go to a `Write` output, so the same code serves
//! the terminal and scripted tests.
//!
//! # Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use songbook_common::{InputReader, PropertyRequest, PropertyTable};
//!
//! let input = Cursor::new("nine\n4\n");
//! let mut reader = InputReader::new(PropertyTable::standard(), input, Vec::new());
//!
//! let rating = reader.read_integer(PropertyRequest::new("songRating")).unwrap();
//! assert_eq!(rating, 4);
//! ```

use chrono::NaiveDateTime;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::properties::{PropertyTable, PropertyValue};
use crate::{Error, Result};

/// One property read: the name plus optional caller overrides
pub struct PropertyRequest<'a> {
    name: &'a str,
    old: Option<PropertyValue>,
    validator: Option<&'a dyn Fn(&str) -> bool>,
    prompt: Option<&'a str>,
    error: Option<&'a str>,
}

impl<'a> PropertyRequest<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            old: None,
            validator: None,
            prompt: None,
            error: None,
        }
    }

    /// Value kept when the user enters something invalid (typically a blank line)
    pub fn old(mut self, value: impl Into<PropertyValue>) -> Self {
        self.old = Some(value.into());
        self
    }

    /// [`Self::old`] when updating, no-op when creating
    pub fn maybe_old<V: Into<PropertyValue>>(mut self, value: Option<V>) -> Self {
        self.old = value.map(Into::into);
        self
    }

    /// Replaces the table's validator for this read only
    pub fn validator(mut self, validator: &'a dyn Fn(&str) -> bool) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn error(mut self, error: &'a str) -> Self {
        self.error = Some(error);
        self
    }
}

/// Where input lines come from
///
/// Every `BufRead` is a source: the prompt is written to the session output
/// and one line is read. Line editors show the prompt themselves.
pub trait LineSource {
    /// Show `prompt` and return the next line without its terminator,
    /// `None` at end of input
    fn next_line(&mut self, prompt: &str, output: &mut dyn Write) -> Result<Option<String>>;
}

impl<B: BufRead> LineSource for B {
    fn next_line(&mut self, prompt: &str, output: &mut dyn Write) -> Result<Option<String>> {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let content_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(content_len);
        Ok(Some(line))
    }
}

/// Prompts and reads through `input`, writes messages to `output`
pub struct InputReader<R, W> {
    table: PropertyTable,
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> InputReader<R, W> {
    pub fn new(table: PropertyTable, input: R, output: W) -> Self {
        Self {
            table,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line of output
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Next line after `prompt`; end of input is [`Error::InputClosed`]
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.input
            .next_line(prompt, &mut self.output)?
            .ok_or(Error::InputClosed)
    }

    /// Read one property until a valid value is produced.
    ///
    /// A rejected line re-prompts with the error text, unless an old value
    /// was supplied: then the old value is returned as-is. That also applies
    /// when a custom validator rejected the line.
    ///
    /// # Panics
    ///
    /// Panics if the property name is not in the table.
    pub fn read(&mut self, request: PropertyRequest<'_>) -> Result<PropertyValue> {
        let descriptor = *self.table.resolve(request.name);
        let mut old = request.old;

        let prompt = match request.prompt {
            Some(custom) => custom.to_string(),
            None => descriptor.prompt(old.as_ref()),
        };
        let mut raw = self.read_line(&prompt)?;
        loop {
            let accepted = match request.validator {
                Some(validator) => validator(&raw),
                None => descriptor.validate(&raw),
            };
            if accepted {
                if let Some(value) = descriptor.coerce(&raw) {
                    return Ok(value);
                }
            }

            if let Some(kept) = old.take() {
                debug!(property = descriptor.name, "Keeping previous value");
                return Ok(kept);
            }

            debug!(property = descriptor.name, input = %raw, "Rejected input");
            self.say(request.error.unwrap_or(descriptor.error))?;
            raw = self.read_line("")?;
        }
    }

    pub fn read_text(&mut self, request: PropertyRequest<'_>) -> Result<String> {
        let name = request.name.to_string();
        match self.read(request)? {
            PropertyValue::Text(value) => Ok(value),
            other => type_mismatch(&name, "text", &other),
        }
    }

    pub fn read_integer(&mut self, request: PropertyRequest<'_>) -> Result<i64> {
        let name = request.name.to_string();
        match self.read(request)? {
            PropertyValue::Integer(value) => Ok(value),
            other => type_mismatch(&name, "integer", &other),
        }
    }

    pub fn read_flag(&mut self, request: PropertyRequest<'_>) -> Result<bool> {
        let name = request.name.to_string();
        match self.read(request)? {
            PropertyValue::Flag(value) => Ok(value),
            other => type_mismatch(&name, "flag", &other),
        }
    }

    pub fn read_timestamp(&mut self, request: PropertyRequest<'_>) -> Result<NaiveDateTime> {
        let name = request.name.to_string();
        match self.read(request)? {
            PropertyValue::Timestamp(value) => Ok(value),
            other => type_mismatch(&name, "timestamp", &other),
        }
    }

    pub fn read_list(&mut self, request: PropertyRequest<'_>) -> Result<Vec<String>> {
        let name = request.name.to_string();
        match self.read(request)? {
            PropertyValue::List(value) => Ok(value),
            other => type_mismatch(&name, "list", &other),
        }
    }

    /// Yes/no question with a caller-supplied prompt
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.read_flag(PropertyRequest::new("yesNo").prompt(prompt))
    }

    /// Menu choice: one line parsed as an integer, `None` if it is not one
    pub fn read_menu_option(&mut self, prompt: &str) -> Result<Option<i64>> {
        let line = self.read_line(prompt)?;
        Ok(line.trim().parse().ok())
    }
}

/// A typed accessor was used on a property of another type
fn type_mismatch(name: &str, expected: &str, got: &PropertyValue) -> ! {
    panic!(
        "Property {} read as {} but produced {:?}",
        name, expected, got
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(script: &str) -> InputReader<Cursor<String>, Vec<u8>> {
        InputReader::new(PropertyTable::standard(), Cursor::new(script.to_string()), Vec::new())
    }

    fn output_of(reader: InputReader<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(reader.into_parts().1).unwrap()
    }

    #[test]
    fn test_valid_first_line() {
        let mut r = reader("Hey Jude\n");
        let title = r.read_text(PropertyRequest::new("songTitle")).unwrap();
        assert_eq!(title, "Hey Jude");
        assert_eq!(output_of(r), "Enter song title: ");
    }

    #[test]
    fn test_retries_with_error_until_valid() {
        let mut r = reader("0\nsix\n5\n");
        let rating = r.read_integer(PropertyRequest::new("songRating")).unwrap();
        assert_eq!(rating, 5);

        let out = output_of(r);
        assert_eq!(
            out.matches("Error: song rating was invalid").count(),
            2,
            "one error per rejected line: {out}"
        );
        assert_eq!(out.matches("Enter song rating").count(), 1);
    }

    #[test]
    fn test_blank_line_keeps_old_value() {
        let mut r = reader("\n");
        let rating = r
            .read_integer(PropertyRequest::new("songRating").old(3))
            .unwrap();
        assert_eq!(rating, 3);

        let out = output_of(r);
        assert!(out.contains("(3): "));
        assert!(!out.contains("Error"));
    }

    #[test]
    fn test_valid_line_overrides_old_value() {
        let mut r = reader("Rock\n");
        let genre = r
            .read_text(PropertyRequest::new("songGenre").old("Jazz"))
            .unwrap();
        assert_eq!(genre, "Rock");
    }

    #[test]
    fn test_old_value_returned_unchanged() {
        // Returned verbatim, not re-coerced (genres would otherwise be re-capitalized)
        let old = vec!["Hip HOP".to_string(), "rock".to_string()];
        let mut r = reader("  \n");
        let genres = r
            .read_list(PropertyRequest::new("artistGenres").old(old.clone()))
            .unwrap();
        assert_eq!(genres, old);
    }

    #[test]
    fn test_maybe_old_none_behaves_like_no_old_value() {
        let mut r = reader("\nSoul\n");
        let genre = r
            .read_text(PropertyRequest::new("songGenre").maybe_old(None::<String>))
            .unwrap();
        assert_eq!(genre, "Soul");
        assert!(output_of(r).contains("Error: song genre was invalid"));
    }

    #[test]
    fn test_custom_validator_prompt_and_error() {
        let in_bounds = |raw: &str| matches!(raw.trim().parse::<i64>(), Ok(i) if (0..3).contains(&i));
        let mut r = reader("7\n-1\n2\n");
        let index = r
            .read_integer(
                PropertyRequest::new("songIndex")
                    .validator(&in_bounds)
                    .prompt("Pick one: ")
                    .error("Out of range"),
            )
            .unwrap();
        assert_eq!(index, 2);

        let out = output_of(r);
        assert!(out.starts_with("Pick one: "));
        assert_eq!(out.matches("Out of range").count(), 2);
        assert!(!out.contains("Enter song index"));
    }

    #[test]
    fn test_custom_validator_still_falls_back_to_old_value() {
        let reject_all = |_: &str| false;
        let mut r = reader("1\n");
        let index = r
            .read_integer(PropertyRequest::new("songIndex").validator(&reject_all).old(0))
            .unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_permissive_validator_cannot_produce_bad_value() {
        let accept_all = |_: &str| true;
        let mut r = reader("abc\n8\n");
        let index = r
            .read_integer(PropertyRequest::new("songIndex").validator(&accept_all))
            .unwrap();
        assert_eq!(index, 8);
    }

    #[test]
    fn test_confirm_uses_custom_prompt() {
        let mut r = reader("maybe\nY\n");
        assert!(r.confirm("Sure? (y/n): ").unwrap());

        let out = output_of(r);
        assert!(out.starts_with("Sure? (y/n): "));
        assert!(out.contains("Error: invalid input. Please enter either 'y' or 'n'."));
    }

    #[test]
    fn test_timestamp_and_crlf_lines() {
        let mut r = reader("2023-03-09T11:30:00\r\n");
        let ts = r.read_timestamp(PropertyRequest::new("updatedAt")).unwrap();
        assert_eq!(crate::time::format_timestamp(&ts), "2023-03-09T11:30:00");
    }

    #[test]
    fn test_menu_option_parses_or_none() {
        let mut r = reader("3\nabc\n -99 \n");
        assert_eq!(r.read_menu_option("> ").unwrap(), Some(3));
        assert_eq!(r.read_menu_option("> ").unwrap(), None);
        assert_eq!(r.read_menu_option("> ").unwrap(), Some(-99));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut r = reader("bad\n");
        let result = r.read_integer(PropertyRequest::new("songRating"));
        assert!(matches!(result, Err(Error::InputClosed)));
    }

    #[test]
    #[should_panic(expected = "Invalid property name")]
    fn test_unknown_property_panics() {
        let mut r = reader("x\n");
        let _ = r.read(PropertyRequest::new("lyrics"));
    }

    #[test]
    #[should_panic(expected = "read as integer")]
    fn test_typed_accessor_mismatch_panics() {
        let mut r = reader("Hey Jude\n");
        let _ = r.read_integer(PropertyRequest::new("songTitle"));
    }

    /// Line source that records the prompts it was asked to show
    struct Recorded {
        lines: Vec<&'static str>,
        prompts: Vec<String>,
    }

    impl LineSource for Recorded {
        fn next_line(&mut self, prompt: &str, _output: &mut dyn Write) -> Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            if self.lines.is_empty() {
                return Ok(None);
            }
            Ok(Some(self.lines.remove(0).to_string()))
        }
    }

    #[test]
    fn test_line_source_shows_prompts_itself() {
        let source = Recorded {
            lines: vec!["0", "4"],
            prompts: Vec::new(),
        };
        let mut r = InputReader::new(PropertyTable::standard(), source, Vec::new());
        let rating = r.read_integer(PropertyRequest::new("songRating")).unwrap();
        assert_eq!(rating, 4);

        let (source, output) = r.into_parts();
        assert_eq!(
            source.prompts,
            vec!["Enter song rating (1-low, 2, 3, 4, 5-high): ".to_string(), String::new()]
        );
        let out = String::from_utf8(output).unwrap();
        assert!(!out.contains("Enter song rating"));
        assert!(out.contains("Error: song rating was invalid"));
    }

    #[test]
    fn test_line_source_end_of_input() {
        let source = Recorded {
            lines: Vec::new(),
            prompts: Vec::new(),
        };
        let mut r = InputReader::new(PropertyTable::standard(), source, Vec::new());
        assert!(matches!(r.read_menu_option("> "), Err(Error::InputClosed)));
    }
}
