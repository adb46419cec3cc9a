//! Sans-IO semantic dispatch.
//!
//! [`handle`] turns one parsed line into the events it raises, in emission
//! order. It holds no state and performs no I/O; [`IrcStream`](crate::IrcStream)
//! delivers the result to subscribers.
//!
//! For a numeric reply the code-named [`Event::Reply`] comes first, then the
//! generic [`Event::Numeric`]. Well-known commands (PING, JOIN, PART, QUIT,
//! PRIVMSG, NOTICE, TOPIC) add one semantic event. The line always ends with
//! [`Event::Message`].

use tracing::trace;

use crate::command::ClientCommand;
use crate::event::{
    ChatEvent, Event, JoinEvent, NumericEvent, PartEvent, QuitEvent, ReplyEvent, TopicEvent,
};
use crate::message::ParsedMessage;
use crate::numeric::{is_numeric, strip_placeholder};

fn required(msg: &ParsedMessage, index: usize) -> String {
    msg.arg(index).unwrap_or_default().to_owned()
}

fn optional(msg: &ParsedMessage, index: usize) -> Option<String> {
    msg.arg(index).map(str::to_owned)
}

/// Semantic event for a well-known command, if `msg` carries one.
fn command_event(msg: &ParsedMessage) -> Option<Event> {
    let source = msg.source.clone();
    let event = match msg.command.as_str() {
        "PING" => Event::send(ClientCommand::pong(msg.arg(0)).to_string()),
        "JOIN" => Event::Join(JoinEvent {
            source,
            channel: required(msg, 0),
        }),
        "PART" => Event::Part(PartEvent {
            source,
            channel: required(msg, 0),
            message: optional(msg, 1),
        }),
        "QUIT" => Event::Quit(QuitEvent {
            source,
            message: optional(msg, 0),
        }),
        "PRIVMSG" => Event::Privmsg(ChatEvent {
            source,
            target: required(msg, 0),
            message: required(msg, 1),
        }),
        "NOTICE" => Event::Notice(ChatEvent {
            source,
            target: required(msg, 0),
            message: required(msg, 1),
        }),
        "TOPIC" => Event::Topic(TopicEvent {
            source,
            channel: required(msg, 0),
            topic: optional(msg, 1),
        }),
        _ => return None,
    };
    Some(event)
}

/// Events raised by one parsed line, in the order they are emitted.
#[must_use]
pub fn handle(msg: &ParsedMessage) -> Vec<Event> {
    let mut events = Vec::with_capacity(3);

    if is_numeric(&msg.command) {
        events.push(Event::Reply(ReplyEvent {
            numeric: msg.command.clone(),
            args: msg.args.clone(),
        }));
        events.push(Event::Numeric(NumericEvent {
            number: msg.command.clone(),
            args: strip_placeholder(&msg.args).to_vec(),
        }));
    }

    match command_event(msg) {
        Some(event) => events.push(event),
        None if events.is_empty() => trace!(command = %msg.command, "no semantic event"),
        None => {}
    }

    events.push(Event::Message(msg.clone()));
    events
}
