//! Events raised by an [`IrcStream`](crate::IrcStream).
//!
//! Every event is delivered on a named channel given by [`Event::name`]. The
//! names are fixed lowercase words, except for [`Event::Reply`], which is
//! delivered on the channel named by its numeric code (e.g. `"433"`).

use crate::message::ParsedMessage;

/// Channel carrying every parsed line.
pub const MESSAGE: &str = "message";
/// Channel carrying lines to be written to the connection.
pub const SEND: &str = "send";
/// Channel carrying every numeric reply.
pub const NUMERIC: &str = "numeric";
/// Channel for JOIN.
pub const JOIN: &str = "join";
/// Channel for PART.
pub const PART: &str = "part";
/// Channel for QUIT.
pub const QUIT: &str = "quit";
/// Channel for PRIVMSG.
pub const PRIVMSG: &str = "privmsg";
/// Channel for NOTICE.
pub const NOTICE: &str = "notice";
/// Channel for TOPIC.
pub const TOPIC: &str = "topic";

/// A line to be written to the connection, terminator included.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SendEvent {
    /// The full wire line.
    pub message: String,
}

/// A numeric reply, with the `*` nickname placeholder removed from `args`.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericEvent {
    /// The numeric code.
    pub number: String,
    /// Reply arguments.
    pub args: Vec<String>,
}

/// A numeric reply delivered on the channel named by its code.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplyEvent {
    /// The numeric code.
    pub numeric: String,
    /// Reply arguments, unmodified.
    pub args: Vec<String>,
}

/// Someone joined a channel.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JoinEvent {
    /// Who joined.
    pub source: Option<String>,
    /// Channel joined.
    pub channel: String,
}

/// Someone left a channel.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartEvent {
    /// Who left.
    pub source: Option<String>,
    /// Channel left.
    pub channel: String,
    /// Part reason, if one was given.
    pub message: Option<String>,
}

/// Someone disconnected.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuitEvent {
    /// Who quit.
    pub source: Option<String>,
    /// Quit reason, if one was given.
    pub message: Option<String>,
}

/// A PRIVMSG or NOTICE.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatEvent {
    /// Sender.
    pub source: Option<String>,
    /// Channel or nickname the text was addressed to.
    pub target: String,
    /// Message text.
    pub message: String,
}

/// A channel topic was set or reported.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopicEvent {
    /// Who set the topic.
    pub source: Option<String>,
    /// Channel concerned.
    pub channel: String,
    /// The new topic; `None` when the line carried no topic parameter.
    pub topic: Option<String>,
}

/// A semantic event.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event {
    /// Raised for every parsed line, after any semantic events for it.
    Message(ParsedMessage),
    /// A line the connection should write.
    Send(SendEvent),
    /// Any numeric reply.
    Numeric(NumericEvent),
    /// A numeric reply, on the channel named by its code.
    Reply(ReplyEvent),
    /// JOIN.
    Join(JoinEvent),
    /// PART.
    Part(PartEvent),
    /// QUIT.
    Quit(QuitEvent),
    /// PRIVMSG.
    Privmsg(ChatEvent),
    /// NOTICE.
    Notice(ChatEvent),
    /// TOPIC.
    Topic(TopicEvent),
}

impl Event {
    /// Name of the channel this event is delivered on.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Event::Message(_) => MESSAGE,
            Event::Send(_) => SEND,
            Event::Numeric(_) => NUMERIC,
            Event::Reply(reply) => &reply.numeric,
            Event::Join(_) => JOIN,
            Event::Part(_) => PART,
            Event::Quit(_) => QUIT,
            Event::Privmsg(_) => PRIVMSG,
            Event::Notice(_) => NOTICE,
            Event::Topic(_) => TOPIC,
        }
    }

    /// Build a `send` event for a wire line.
    pub fn send(message: impl Into<String>) -> Self {
        Event::Send(SendEvent {
            message: message.into(),
        })
    }
}
