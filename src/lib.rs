pub mod actions;
pub mod cli;
pub mod command;
pub mod content;
pub mod directive;
pub mod error;
pub mod fs;
pub mod interpreter;
pub mod markup;
pub mod parser;
pub mod path;
pub mod repl;
pub mod repl_v2;
pub mod session;

pub use fs::{Filesystem, Node, NodeKind, VirtualFs};
pub use interpreter::{execute, Interpreter, Reply, ReplyKind};
pub use session::{Outcome, Session};
