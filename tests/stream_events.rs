//! Integration tests for the event stream.
//!
//! These drive an `IrcStream` through its public API the way a connection
//! would, and check which events reach subscribers.

use std::sync::Arc;

use ircng::{Event, IrcStream, ParsedMessage, RegistrationParams};
use parking_lot::Mutex;

type Log = Arc<Mutex<Vec<Event>>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn subscribe(stream: &mut IrcStream, name: &str) -> Log {
    let log = Log::default();
    let sink = Arc::clone(&log);
    stream.on(name, move |event| sink.lock().push(event.clone()));
    log
}

fn messages(log: &Log) -> Vec<ParsedMessage> {
    log.lock()
        .iter()
        .filter_map(|event| match event {
            Event::Message(msg) => Some(msg.clone()),
            _ => None,
        })
        .collect()
}

fn sent(log: &Log) -> Vec<String> {
    log.lock()
        .iter()
        .filter_map(|event| match event {
            Event::Send(send) => Some(send.message.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_no_terminator_raises_nothing() {
    init_tracing();
    let mut stream = IrcStream::new();
    let log = subscribe(&mut stream, "message");

    stream.push("TEST DATA NOT CONTAINING CR OR LF");
    assert!(messages(&log).is_empty());
}

#[test]
fn test_non_text_bytes_do_not_panic() {
    let mut stream = IrcStream::new();
    let log = subscribe(&mut stream, "message");

    stream.push([0xffu8, 0xfe, b'\r', b'\n']);
    let msgs = messages(&log);
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].command, "\u{fffd}\u{fffd}");
}

#[test]
fn test_one_crlf_raises_one_message() {
    let mut stream = IrcStream::new();
    let log = subscribe(&mut stream, "message");

    stream.push("COMMAND argument\r\n");
    let msgs = messages(&log);
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].command, "COMMAND");
}

#[test]
fn test_two_crlfs_raise_two_messages_in_order() {
    let mut stream = IrcStream::new();
    let log = subscribe(&mut stream, "message");

    stream.push("COMMAND1 argument1\r\nCOMMAND2 argument2\r\n");
    let msgs = messages(&log);
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[0].command, "COMMAND1");
    assert_eq!(msgs[1].command, "COMMAND2");
}

#[test]
fn test_crlf_over_two_pushes() {
    let mut stream = IrcStream::new();
    let log = subscribe(&mut stream, "message");

    stream.push("COMMAND1 arg");
    assert!(messages(&log).is_empty());
    stream.push("ument\r\n");

    let msgs = messages(&log);
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].command, "COMMAND1");
    assert_eq!(msgs[0].args, vec!["argument"]);
}

#[test]
fn test_trailing_argument_absorbs_rest() {
    let mut stream = IrcStream::new();
    let log = subscribe(&mut stream, "message");

    stream.push("COMMAND1 argument1 :argument2 argument3\r\n");
    assert_eq!(messages(&log)[0].args, vec!["argument1", "argument2 argument3"]);
}

#[test]
fn test_prefix_is_parsed() {
    let mut stream = IrcStream::new();
    let log = subscribe(&mut stream, "message");

    stream.push(":source COMMAND1 argument\r\n");
    let msg = &messages(&log)[0];
    assert_eq!(msg.source.as_deref(), Some("source"));
    assert_eq!(msg.command, "COMMAND1");
}

#[test]
fn test_numeric_raises_code_and_generic_events() {
    let mut stream = IrcStream::new();
    let by_code = subscribe(&mut stream, "433");
    let generic = subscribe(&mut stream, "numeric");

    stream.push(":source 433 * target :Error stuff\r\n");

    let by_code = by_code.lock();
    assert_eq!(by_code.len(), 1);
    match &by_code[0] {
        Event::Reply(reply) => {
            assert_eq!(reply.numeric, "433");
            assert!(reply.args.iter().any(|a| a == "target"));
            assert!(reply.args.iter().any(|a| a == "Error stuff"));
        }
        other => panic!("expected Reply, got {other:?}"),
    }

    let generic = generic.lock();
    assert_eq!(generic.len(), 1);
    match &generic[0] {
        Event::Numeric(numeric) => {
            assert_eq!(numeric.number, "433");
            assert!(!numeric.args.iter().any(|a| a == "*"));
            assert_eq!(numeric.args, vec!["target", "Error stuff"]);
        }
        other => panic!("expected Numeric, got {other:?}"),
    }
}

#[test]
fn test_ping_sends_pong() {
    let mut stream = IrcStream::new();
    let log = subscribe(&mut stream, "send");

    stream.push("PING test\r\n");
    assert_eq!(sent(&log), vec!["PONG test\r\n"]);
}

#[test]
fn test_channel_events() {
    let mut stream = IrcStream::new();
    let joins = subscribe(&mut stream, "join");
    let parts = subscribe(&mut stream, "part");
    let topics = subscribe(&mut stream, "topic");
    let quits = subscribe(&mut stream, "quit");

    stream.push(
        ":alice!a@host JOIN #rust\r\n\
         :alice!a@host TOPIC #rust :Ownership all the way down\r\n\
         :alice!a@host PART #rust :later\r\n\
         :alice!a@host QUIT\r\n",
    );

    assert_eq!(joins.lock().len(), 1);
    assert_eq!(parts.lock().len(), 1);
    assert_eq!(topics.lock().len(), 1);
    match &quits.lock()[0] {
        Event::Quit(quit) => {
            assert_eq!(quit.source.as_deref(), Some("alice!a@host"));
            assert_eq!(quit.message, None);
        }
        other => panic!("expected Quit, got {other:?}"),
    };
}

#[test]
fn test_privmsg_and_notice_are_separate_channels() {
    let mut stream = IrcStream::new();
    let privmsgs = subscribe(&mut stream, "privmsg");
    let notices = subscribe(&mut stream, "notice");

    stream.push(":bob PRIVMSG #rust :hi all\r\n:server NOTICE bob :welcome\r\n");

    match &privmsgs.lock()[..] {
        [Event::Privmsg(chat)] => {
            assert_eq!(chat.target, "#rust");
            assert_eq!(chat.message, "hi all");
        }
        other => panic!("expected one Privmsg, got {other:?}"),
    }
    match &notices.lock()[..] {
        [Event::Notice(chat)] => assert_eq!(chat.message, "welcome"),
        other => panic!("expected one Notice, got {other:?}"),
    };
}

#[test]
fn test_multiple_subscribers_each_receive() {
    let mut stream = IrcStream::new();
    let first = subscribe(&mut stream, "message");
    let second = subscribe(&mut stream, "message");

    stream.push("A\r\nB\r\n");
    assert_eq!(messages(&first).len(), 2);
    assert_eq!(messages(&second).len(), 2);
}

#[test]
fn test_register_with_no_arguments() {
    let mut stream = IrcStream::new();
    let log = subscribe(&mut stream, "send");

    stream.register(&RegistrationParams::default());
    assert_eq!(
        sent(&log),
        vec!["USER WebIRC * * :WebIRC User\r\n", "NICK WebIRC\r\n"]
    );
}

#[test]
fn test_register_with_arguments() {
    let mut stream = IrcStream::new();
    let log = subscribe(&mut stream, "send");

    let params = RegistrationParams::new()
        .with_nick("TestNick")
        .with_username("TestUser")
        .with_realname("TestReal");
    stream.register(&params);
    assert_eq!(
        sent(&log),
        vec!["USER TestUser * * :TestReal\r\n", "NICK TestNick\r\n"]
    );
}

#[test]
fn test_outbound_helpers() {
    let mut stream = IrcStream::new();
    let log = subscribe(&mut stream, "send");

    stream.set_nickname(None);
    stream.set_nickname("new");
    stream.join_channel("test");
    stream.join_channel("#test");
    stream.send_message(None, None);
    stream.send_message("target", None);
    stream.send_message("#test", "hi");
    stream.leave_channel("test");

    assert_eq!(
        sent(&log),
        vec![
            "NICK new\r\n",
            "JOIN #test\r\n",
            "JOIN #test\r\n",
            "PRIVMSG #test :hi\r\n",
            "PART #test\r\n",
        ]
    );
}

#[test]
fn test_pong_can_be_written_back() {
    // A send handler forwarding to a shared outbox, as a transport would
    let outbox = Arc::new(Mutex::new(Vec::<u8>::new()));
    let mut stream = IrcStream::new();
    let writer = Arc::clone(&outbox);
    stream.on("send", move |event| {
        if let Event::Send(send) = event {
            writer.lock().extend_from_slice(send.message.as_bytes());
        }
    });

    stream.push("PING :irc.example.net\r\nPING tok");
    stream.push("en\r\n");
    assert_eq!(&outbox.lock()[..], b"PONG irc.example.net\r\nPONG token\r\n");
}
