//! Host platform detection and binary architecture probing.

pub use error::{Error, Result};

pub mod arch;
pub mod command;
mod error;
pub mod os;
pub mod probe;

pub use arch::Arch;
pub use os::OS;
pub use probe::{ArchProbe, FileCmdProbe, MatchAll};
