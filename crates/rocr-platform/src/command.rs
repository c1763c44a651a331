//! Thin builder over [`std::process::Command`] for one-shot utility calls.

use std::ffi::OsStr;
use std::process::{Command as StdCommand, Output};

use crate::error::{Error, Result};

#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    /// Run to completion and capture output.
    pub fn capture(mut self) -> Result<Output> {
        self.inner.output().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }

    /// Run to completion and return the first line of stdout.
    pub fn capture_line(self) -> Result<String> {
        let program = self.program.clone();
        let output = self.capture()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .next()
            .map(str::to_string)
            .ok_or(Error::EmptyOutput { cmd: program })
    }
}
