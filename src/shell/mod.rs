//! Shell Module
//!
//! Everything around the interpreter: the presentation boundary, script
//! replay, the session loop and startup backend selection.

pub mod console;
pub mod script;
pub mod session;
pub mod startup;

pub use console::{BufferConsole, Console, TerminalConsole};
pub use script::{Script, ScriptError};
pub use session::{forward_input, Session, SessionEvent};
pub use startup::{load_startup_script, select_backend};
