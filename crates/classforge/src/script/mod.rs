//! Line-oriented command scripts
//!
//! Scripts replay the same mutations an operator would perform interactively.

mod command;
mod parser;

pub use command::Command;
pub use parser::{parse_command, parse_script, ScriptLine};
