//! The client-side IRC event stream.
//!
//! [`IrcStream`] ties the pieces together: pushed chunks go through the
//! [`LineFramer`], each complete line is parsed and dispatched, and the
//! resulting events are emitted to subscribers. Outbound helpers render a
//! [`ClientCommand`] and emit it as a `send` event for the transport to
//! write.
//!
//! Everything runs synchronously on the caller's thread. A push returns only
//! after every line it completed has been dispatched and every handler has
//! run.

use tracing::{debug, trace};

use crate::command::ClientCommand;
use crate::config::RegistrationParams;
use crate::dispatch;
use crate::emitter::Emitter;
use crate::event::Event;
use crate::line::LineFramer;
use crate::message::{parse, ParsedMessage};

/// An argument that is present and non-empty.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Incremental IRC stream for one connection.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use ircng::{Event, IrcStream};
/// use parking_lot::Mutex;
///
/// let joined = Arc::new(Mutex::new(Vec::new()));
/// let mut stream = IrcStream::new();
///
/// let sink = Arc::clone(&joined);
/// stream.on("join", move |event| {
///     if let Event::Join(join) = event {
///         sink.lock().push(join.channel.clone());
///     }
/// });
///
/// assert_eq!(stream.push(":nick!u@h JOIN #rust\r\n:nick!u@h JOIN #ir"), 1);
/// assert_eq!(stream.push("c\r\n"), 1);
/// assert_eq!(*joined.lock(), vec!["#rust", "#irc"]);
/// ```
#[derive(Debug, Default)]
pub struct IrcStream {
    framer: LineFramer,
    emitter: Emitter,
}

impl IrcStream {
    /// Create a stream with an empty buffer and no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to the event channel `name`.
    ///
    /// Channel names are `message`, `send`, `numeric`, `join`, `part`,
    /// `quit`, `privmsg`, `notice`, `topic`, or a numeric code such as
    /// `"001"`.
    pub fn on<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: FnMut(&Event) + Send + 'static,
    {
        self.emitter.on(name, handler);
    }

    /// The subscriber registry.
    #[must_use]
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Mutable access to the subscriber registry.
    pub fn emitter_mut(&mut self) -> &mut Emitter {
        &mut self.emitter
    }

    /// Number of bytes buffered that do not yet form a complete line.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.framer.len()
    }

    /// Feed a chunk received from the connection.
    ///
    /// Every line the chunk completes is parsed and dispatched before this
    /// returns; a trailing partial line is kept for the next push. Returns
    /// the number of lines processed. An empty chunk does nothing.
    pub fn push(&mut self, chunk: impl AsRef<[u8]>) -> usize {
        let chunk = chunk.as_ref();
        if chunk.is_empty() {
            return 0;
        }

        self.framer.extend(chunk);

        let mut lines = 0;
        while let Some(line) = self.framer.next_line() {
            trace!(line = %line, "framed line");
            self.handle(&parse(&line));
            lines += 1;
        }
        lines
    }

    /// Dispatch an already parsed message as if it had been received.
    pub fn handle(&mut self, msg: &ParsedMessage) {
        for event in dispatch::handle(msg) {
            self.emitter.emit(&event);
        }
    }

    /// Emit `command` as a `send` event.
    pub fn send(&mut self, command: &ClientCommand) {
        trace!(command = command.name(), "send");
        self.emitter.emit(&Event::send(command.to_string()));
    }

    /// Send USER then NICK, falling back to defaults for unset fields.
    pub fn register(&mut self, params: &RegistrationParams) {
        self.send(&ClientCommand::user(params.username(), params.realname()));
        self.send(&ClientCommand::nick(params.nick()));
    }

    /// Send NICK. Does nothing when `nickname` is absent or empty.
    pub fn set_nickname<'a>(&mut self, nickname: impl Into<Option<&'a str>>) {
        match present(nickname.into()) {
            Some(nickname) => self.send(&ClientCommand::nick(nickname)),
            None => debug!("set_nickname without a nickname, nothing sent"),
        }
    }

    /// Send JOIN, prefixing `#` when missing. Does nothing when `channel`
    /// is absent or empty.
    pub fn join_channel<'a>(&mut self, channel: impl Into<Option<&'a str>>) {
        match present(channel.into()) {
            Some(channel) => self.send(&ClientCommand::join(channel)),
            None => debug!("join_channel without a channel, nothing sent"),
        }
    }

    /// Send PART, prefixing `#` when missing. Does nothing when `channel`
    /// is absent or empty.
    pub fn leave_channel<'a>(&mut self, channel: impl Into<Option<&'a str>>) {
        match present(channel.into()) {
            Some(channel) => self.send(&ClientCommand::part(channel)),
            None => debug!("leave_channel without a channel, nothing sent"),
        }
    }

    /// Send PRIVMSG. Does nothing unless both arguments are present and
    /// non-empty.
    pub fn send_message<'a, 'b>(
        &mut self,
        target: impl Into<Option<&'a str>>,
        message: impl Into<Option<&'b str>>,
    ) {
        match (present(target.into()), present(message.into())) {
            (Some(target), Some(message)) => self.send(&ClientCommand::privmsg(target, message)),
            _ => debug!("send_message without target and message, nothing sent"),
        }
    }
}
