use std::borrow::Cow;

/// A command a client sends to the server.
///
/// Rendering with `Display` yields the complete wire line, `\r\n` included.
///
/// ```
/// use ircng::ClientCommand;
///
/// assert_eq!(ClientCommand::join("rust").to_string(), "JOIN #rust\r\n");
/// assert_eq!(
///     ClientCommand::privmsg("#rust", "hi").to_string(),
///     "PRIVMSG #rust :hi\r\n"
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ClientCommand {
    /// `USER <username> * * :<realname>`
    User {
        /// Username (ident).
        username: String,
        /// Real name / GECOS.
        realname: String,
    },
    /// `NICK <nickname>`
    Nick(String),
    /// `JOIN <channel>`
    Join(String),
    /// `PART <channel>`
    Part(String),
    /// `PRIVMSG <target> :<message>`
    Privmsg {
        /// Channel or nickname.
        target: String,
        /// Message text.
        message: String,
    },
    /// `PONG <token>`, answering a PING.
    Pong(Option<String>),
}

/// Channel name with a single leading `#` ensured.
///
/// ```
/// use ircng::command::channel_name;
///
/// assert_eq!(channel_name("test"), "#test");
/// assert_eq!(channel_name("#test"), "#test");
/// ```
pub fn channel_name(channel: &str) -> Cow<'_, str> {
    if channel.starts_with('#') {
        Cow::Borrowed(channel)
    } else {
        Cow::Owned(format!("#{channel}"))
    }
}

impl ClientCommand {
    /// USER registration command.
    pub fn user(username: impl Into<String>, realname: impl Into<String>) -> Self {
        ClientCommand::User {
            username: username.into(),
            realname: realname.into(),
        }
    }

    /// NICK command.
    pub fn nick(nickname: impl Into<String>) -> Self {
        ClientCommand::Nick(nickname.into())
    }

    /// JOIN command; `#` is prepended unless already present.
    pub fn join(channel: &str) -> Self {
        ClientCommand::Join(channel_name(channel).into_owned())
    }

    /// PART command; `#` is prepended unless already present.
    pub fn part(channel: &str) -> Self {
        ClientCommand::Part(channel_name(channel).into_owned())
    }

    /// PRIVMSG command.
    pub fn privmsg(target: impl Into<String>, message: impl Into<String>) -> Self {
        ClientCommand::Privmsg {
            target: target.into(),
            message: message.into(),
        }
    }

    /// PONG reply echoing a PING token.
    pub fn pong(token: Option<&str>) -> Self {
        ClientCommand::Pong(token.map(str::to_owned))
    }

    /// Command keyword.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ClientCommand::User { .. } => "USER",
            ClientCommand::Nick(_) => "NICK",
            ClientCommand::Join(_) => "JOIN",
            ClientCommand::Part(_) => "PART",
            ClientCommand::Privmsg { .. } => "PRIVMSG",
            ClientCommand::Pong(_) => "PONG",
        }
    }
}
