//! Message text parsing
//!
//! Finds the media URL, the requested delivery mode, and slash-commands.
//! Purely syntactic; nothing here touches the network.

mod command;
mod detector;
mod mode;

pub use command::{Command, parse_command};
pub use detector::{detect_urls, first_url};
pub use mode::{Mode, Quality, detect_mode};
