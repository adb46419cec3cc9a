use std::fmt;

use super::types::ClientCommand;

impl fmt::Display for ClientCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientCommand::User { username, realname } => {
                write!(f, "USER {} * * :{}", username, realname)?
            }
            ClientCommand::Nick(n) => write!(f, "NICK {}", n)?,
            ClientCommand::Join(c) => write!(f, "JOIN {}", c)?,
            ClientCommand::Part(c) => write!(f, "PART {}", c)?,
            ClientCommand::Privmsg { target, message } => {
                write!(f, "PRIVMSG {} :{}", target, message)?
            }
            // The token is echoed as-is, without trailing form
            ClientCommand::Pong(Some(token)) => write!(f, "PONG {}", token)?,
            ClientCommand::Pong(None) => f.write_str("PONG")?,
        }
        f.write_str("\r\n")
    }
}
