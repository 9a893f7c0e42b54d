//! In-memory university student register.
//!
//! Records live only for the lifetime of the process and are manipulated
//! through an interactive numeric menu.

pub mod domain;
pub use domain::{QueryField, Roster, Student};

/// The interactive menu loop.
pub mod menu;
pub use menu::{Selection, Session};

/// Console prompt and input-parsing helpers.
pub mod prompt;
pub use prompt::PromptError;
