//! Line parsing.
//!
//! The grammar is deliberately permissive: tokens are separated by single
//! spaces, so consecutive spaces produce empty parameters, and no input is
//! rejected. A blank line or a bare `:source` parses to an empty command.

use std::convert::Infallible;
use std::str::FromStr;

use super::types::ParsedMessage;

/// Split off the token before the next space.
///
/// The remainder is `None` when `s` holds no further space, which is distinct
/// from `Some("")` (a space followed by nothing).
fn next_token(s: &str) -> (&str, Option<&str>) {
    match s.split_once(' ') {
        Some((token, rest)) => (token, Some(rest)),
        None => (s, None),
    }
}

/// Parse one line, without its terminator, into a [`ParsedMessage`].
///
/// A parameter starting with `:` is the trailing parameter: it absorbs the
/// rest of the line, spaces included, and ends parameter scanning.
///
/// ```
/// let msg = ircng::message::parse("COMMAND1 argument1 :argument2 argument3");
/// assert_eq!(msg.args, vec!["argument1", "argument2 argument3"]);
/// ```
#[must_use]
pub fn parse(line: &str) -> ParsedMessage {
    let mut source = None;
    let mut rest = Some(line);

    if let Some(stripped) = line.strip_prefix(':') {
        let (token, tail) = next_token(stripped);
        source = Some(token.to_owned());
        rest = tail;
    }

    let command = match rest {
        Some(remaining) => {
            let (token, tail) = next_token(remaining);
            rest = tail;
            token.to_owned()
        }
        None => String::new(),
    };

    let mut args = Vec::new();
    while let Some(remaining) = rest {
        if let Some(trailing) = remaining.strip_prefix(':') {
            args.push(trailing.to_owned());
            break;
        }
        let (token, tail) = next_token(remaining);
        args.push(token.to_owned());
        rest = tail;
    }

    ParsedMessage {
        source,
        command,
        args,
    }
}

impl FromStr for ParsedMessage {
    type Err = Infallible;

    /// Parses `s` as one line; a trailing `\r\n` or `\n` is ignored.
    fn from_str(s: &str) -> Result<ParsedMessage, Self::Err> {
        let line = s.strip_suffix('\n').unwrap_or(s);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(parse(line))
    }
}

impl From<&str> for ParsedMessage {
    fn from(line: &str) -> Self {
        parse(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_only() {
        let msg = parse("COMMAND");
        assert_eq!(msg.source, None);
        assert_eq!(msg.command, "COMMAND");
        assert!(msg.args.is_empty());
    }

    #[test]
    fn test_parse_middle_params() {
        let msg = parse("COMMAND1 argument1 argument2");
        assert_eq!(msg.command, "COMMAND1");
        assert_eq!(msg.args, vec!["argument1", "argument2"]);
    }

    #[test]
    fn test_parse_trailing_param() {
        let msg = parse("COMMAND1 argument1 :argument2 argument3");
        assert_eq!(msg.args, vec!["argument1", "argument2 argument3"]);
    }

    #[test]
    fn test_parse_trailing_stops_scanning() {
        let msg = parse("CMD a :b :c d");
        assert_eq!(msg.args, vec!["a", "b :c d"]);
    }

    #[test]
    fn test_parse_trailing_preserves_spacing() {
        let msg = parse("PRIVMSG #c :two  spaces   here ");
        assert_eq!(msg.args, vec!["#c", "two  spaces   here "]);
    }

    #[test]
    fn test_parse_empty_trailing() {
        let msg = parse("TOPIC #c :");
        assert_eq!(msg.args, vec!["#c", ""]);
    }

    #[test]
    fn test_parse_prefix() {
        let msg = parse(":source COMMAND1 argument");
        assert_eq!(msg.source.as_deref(), Some("source"));
        assert_eq!(msg.command, "COMMAND1");
        assert_eq!(msg.args, vec!["argument"]);
    }

    #[test]
    fn test_parse_prefix_with_trailing() {
        let msg = parse(":source 433 * target :Error stuff");
        assert_eq!(msg.source.as_deref(), Some("source"));
        assert_eq!(msg.command, "433");
        assert_eq!(msg.args, vec!["*", "target", "Error stuff"]);
    }

    #[test]
    fn test_parse_empty_line() {
        let msg = parse("");
        assert_eq!(msg, ParsedMessage::default());
    }

    #[test]
    fn test_parse_bare_source() {
        let msg = parse(":source");
        assert_eq!(msg.source.as_deref(), Some("source"));
        assert_eq!(msg.command, "");
        assert!(msg.args.is_empty());
    }

    #[test]
    fn test_parse_consecutive_spaces_yield_empty_params() {
        let msg = parse("CMD  a ");
        assert_eq!(msg.args, vec!["", "a", ""]);
    }

    #[test]
    fn test_from_str_strips_terminator() {
        let msg: ParsedMessage = "PING test\r\n".parse().unwrap();
        assert_eq!(msg.command, "PING");
        assert_eq!(msg.args, vec!["test"]);

        let msg: ParsedMessage = "PING test\n".parse().unwrap();
        assert_eq!(msg.args, vec!["test"]);
    }
}
