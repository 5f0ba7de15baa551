//! External command construction and execution

use std::fmt;
use std::process::Command;

use serde::Serialize;

/// A single external program call: program name plus ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of running one [`Invocation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// True only if the process ran and exited with status 0
    pub success: bool,
    /// Exit code, `None` if the process could not be spawned or was killed by a signal
    pub status: Option<i32>,
    /// Captured stdout followed by stderr, or the spawn error text
    pub output: String,
}

impl CommandOutcome {
    pub fn succeeded(output: impl Into<String>) -> Self {
        Self {
            success: true,
            status: Some(0),
            output: output.into(),
        }
    }

    pub fn failed(status: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            success: false,
            status,
            output: output.into(),
        }
    }
}

/// Runs invocations. The batch loop only talks to this trait.
pub trait CommandRunner {
    fn run(&mut self, invocation: &Invocation) -> CommandOutcome;
}

/// Runs invocations as child processes, blocking until each exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> CommandOutcome {
        log::debug!("exec: {}", invocation);

        let output = match Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
        {
            Ok(output) => output,
            Err(e) => return CommandOutcome::failed(None, e.to_string()),
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&stderr);
        }

        if output.status.success() {
            CommandOutcome::succeeded(text)
        } else {
            CommandOutcome::failed(output.status.code(), text)
        }
    }
}
