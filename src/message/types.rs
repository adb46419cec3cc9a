/// One inbound IRC line broken into its source, command and parameters.
///
/// # Example
///
/// ```
/// use ircng::ParsedMessage;
///
/// let msg: ParsedMessage = ":nick!user@host PRIVMSG #rust :hello there".parse().unwrap();
/// assert_eq!(msg.source.as_deref(), Some("nick!user@host"));
/// assert_eq!(msg.command, "PRIVMSG");
/// assert_eq!(msg.args, vec!["#rust", "hello there"]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedMessage {
    /// Originator of the line (`nick!user@host` or a server name), without
    /// its leading colon.
    pub source: Option<String>,
    /// The command token. Empty for a blank or command-less line.
    pub command: String,
    /// Parameters in order; a trailing parameter is the last element.
    pub args: Vec<String>,
}

impl ParsedMessage {
    /// Create a message from raw components.
    #[must_use]
    pub fn new<S, C, A>(source: Option<S>, command: C, args: Vec<A>) -> Self
    where
        S: Into<String>,
        C: Into<String>,
        A: Into<String>,
    {
        Self {
            source: source.map(Into::into),
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The parameter at `index`, if present.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Nickname part of the source, when the source is a `nick!user@host` mask.
    pub fn source_nickname(&self) -> Option<&str> {
        let source = self.source.as_deref()?;
        match source.find(['!', '@']) {
            Some(end) => Some(&source[..end]),
            None if source.contains('.') => None,
            None => Some(source),
        }
    }

    /// Whether a command token was present.
    #[must_use]
    pub fn has_command(&self) -> bool {
        !self.command.is_empty()
    }
}
