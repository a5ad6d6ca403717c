//! Interactive operator shell
//!
//! A numbered menu over standard input. Each iteration first switches off
//! tanks that fell below their minimum, then reads one command.

pub mod command;
pub mod session;

pub use command::MenuCommand;
pub use session::OperatorShell;
