use std::fmt::{self, Display, Formatter, Write};

use super::types::ParsedMessage;

/// Whether a final parameter must be sent in trailing form.
pub(crate) fn needs_colon_prefix(param: &str) -> bool {
    param.is_empty() || param.contains(' ') || param.starts_with(':')
}

impl Display for ParsedMessage {
    /// Renders the wire form, `\r\n` included.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(ref source) = self.source {
            write!(f, ":{} ", source)?;
        }

        f.write_str(&self.command)?;

        if let Some((last, middle)) = self.args.split_last() {
            for arg in middle {
                f.write_char(' ')?;
                f.write_str(arg)?;
            }
            f.write_char(' ')?;
            if needs_colon_prefix(last) {
                f.write_char(':')?;
            }
            f.write_str(last)?;
        }

        f.write_str("\r\n")
    }
}
