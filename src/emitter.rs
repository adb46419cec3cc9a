//! Named-channel publish/subscribe registry.

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::event::Event;

/// Boxed event handler.
pub type Handler = Box<dyn FnMut(&Event) + Send>;

/// Fans events out to the handlers subscribed on their channel.
///
/// Handlers on one channel run in registration order. Emitting on a channel
/// nobody listens to is not an error.
///
/// ```
/// use ircng::{Emitter, Event};
///
/// let mut emitter = Emitter::new();
/// emitter.on("send", |_| {});
/// emitter.on("send", |_| {});
///
/// assert_eq!(emitter.emit(&Event::send("NICK a\r\n")), 2);
/// assert_eq!(emitter.emit(&Event::Message(Default::default())), 0);
/// ```
#[derive(Default)]
pub struct Emitter {
    handlers: HashMap<String, Vec<Handler>>,
}

impl Emitter {
    /// Create an emitter with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to the channel `name`.
    pub fn on<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: FnMut(&Event) + Send + 'static,
    {
        self.handlers
            .entry(name.into())
            .or_default()
            .push(Box::new(handler));
    }

    /// Deliver `event` to every handler on its channel.
    ///
    /// Returns the number of handlers invoked.
    pub fn emit(&mut self, event: &Event) -> usize {
        let name = event.name();
        match self.handlers.get_mut(name) {
            Some(handlers) => {
                trace!(event = name, listeners = handlers.len(), "emit");
                for handler in handlers.iter_mut() {
                    handler(event);
                }
                handlers.len()
            }
            None => 0,
        }
    }

    /// Number of handlers subscribed on `name`.
    #[must_use]
    pub fn listener_count(&self, name: &str) -> usize {
        self.handlers.get(name).map_or(0, Vec::len)
    }

    /// Drop every handler subscribed on `name`.
    pub fn remove_all(&mut self, name: &str) {
        self.handlers.remove(name);
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<_> = self
            .handlers
            .iter()
            .map(|(name, handlers)| (name.as_str(), handlers.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("Emitter").field("handlers", &counts).finish()
    }
}
