//! Registration settings.
//!
//! With the `serde` feature, [`RegistrationParams`] can be read from the host
//! application's configuration; every field is optional.

/// Nickname used when none is configured.
pub const DEFAULT_NICK: &str = "WebIRC";
/// Username used when none is configured.
pub const DEFAULT_USERNAME: &str = "WebIRC";
/// Real name used when none is configured.
pub const DEFAULT_REALNAME: &str = "WebIRC User";

/// Details sent by [`IrcStream::register`](crate::IrcStream::register).
///
/// Absent or empty fields fall back to the `DEFAULT_*` constants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegistrationParams {
    /// Desired nickname.
    pub nick: Option<String>,
    /// Username (ident).
    pub username: Option<String>,
    /// Real name / GECOS.
    pub realname: Option<String>,
}

fn or_default<'a>(value: &'a Option<String>, fallback: &'static str) -> &'a str {
    value.as_deref().filter(|s| !s.is_empty()).unwrap_or(fallback)
}

impl RegistrationParams {
    /// Params with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nickname.
    #[must_use]
    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    /// Set the username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the real name.
    #[must_use]
    pub fn with_realname(mut self, realname: impl Into<String>) -> Self {
        self.realname = Some(realname.into());
        self
    }

    /// Nickname to register with.
    #[must_use]
    pub fn nick(&self) -> &str {
        or_default(&self.nick, DEFAULT_NICK)
    }

    /// Username to register with.
    #[must_use]
    pub fn username(&self) -> &str {
        or_default(&self.username, DEFAULT_USERNAME)
    }

    /// Real name to register with.
    #[must_use]
    pub fn realname(&self) -> &str {
        or_default(&self.realname, DEFAULT_REALNAME)
    }
}
