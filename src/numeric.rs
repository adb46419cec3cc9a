//! Numeric reply helpers.
//!
//! Servers answer with three-digit numerics (`001`, `433`, ...). Before
//! registration completes the target nickname is reported as `*`.

/// Target placeholder used while no nickname has been assigned.
pub const NO_NICK_PLACEHOLDER: &str = "*";

/// Whether `command` is a numeric reply.
///
/// The test is permissive: any finite decimal number qualifies, so signed or
/// fractional tokens pass as well as the usual three-digit codes.
///
/// ```
/// use ircng::numeric::is_numeric;
///
/// assert!(is_numeric("001"));
/// assert!(is_numeric("433"));
/// assert!(!is_numeric("PRIVMSG"));
/// assert!(!is_numeric(""));
/// ```
#[must_use]
pub fn is_numeric(command: &str) -> bool {
    let first = match command.bytes().next() {
        Some(b) => b,
        None => return false,
    };
    // Rejects the "inf"/"NaN" spellings that f64 parsing would accept
    if !(first.is_ascii_digit() || matches!(first, b'+' | b'-' | b'.')) {
        return false;
    }
    command.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Arguments of a numeric reply with a leading `*` placeholder removed.
#[must_use]
pub fn strip_placeholder(args: &[String]) -> &[String] {
    match args.split_first() {
        Some((first, rest)) if first == NO_NICK_PLACEHOLDER => rest,
        _ => args,
    }
}
