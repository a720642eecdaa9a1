//! Line-oriented front-end for the todo list.
//!
//! Each input line is one command; [`Session`] parses it, applies it to the
//! session's list and returns the text to print.
//!
//! # Quick Start
//!
//! ```
//! use todo::{DemoConfig, Session};
//!
//! # fn main() -> Result<(), todo::CommandError> {
//! let mut session = Session::new(&DemoConfig::default());
//! session.execute("add Buy milk")?;
//! session.execute("done 0")?;
//!
//! let shown = session.execute("show")?;
//! assert_eq!(shown.as_deref(), Some("---- Today's Todos ----\n[X] Buy milk"));
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod session;

// Re-export commonly used types
pub use command::{Command, CommandError};
pub use config::{ConfigError, DemoConfig, OutputFormat};
pub use session::Session;
