use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use crate::{CommandOutput, Invocation};

/// Errors that prevent a command from producing an output.
#[derive(Error, Debug)]
pub enum RunError {
    /// The invocation has an empty program.
    #[error("Cannot run an empty command")]
    EmptyCommand,
    /// The OS refused to start the process.
    #[error("Failed to launch {}", .program.display())]
    Spawn {
        /// The program that could not be started.
        program: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

/// Something able to run a command, wait for it to exit and return what it printed.
pub trait CommandRunner {
    /// Run the invocation synchronously and capture its standard output and standard error.
    ///
    /// A process that starts and then fails is not an error: its exit status is reported inside
    /// the returned [`CommandOutput`].
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError>;
}

/// The real runner: spawns a child process with `std::process::Command`.
#[derive(Default, Debug, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError> {
        if invocation.program.as_os_str().is_empty() {
            return Err(RunError::EmptyCommand);
        }
        debug!("Running {}", invocation);
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RunError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        trace!("{} exited with {:?}", invocation.program.display(), output.status);
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        })
    }
}

/// A fake runner that don't actually spawn anything: it remembers every invocation and always
/// returns the same output.
#[derive(Default, Debug)]
pub struct FakeRunner {
    output: CommandOutput,
    invocations: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    /// Make a fake runner that answers every invocation with `output`.
    pub fn new(output: CommandOutput) -> FakeRunner {
        FakeRunner {
            output,
            invocations: Mutex::new(vec![]),
        }
    }

    /// Make a fake runner whose commands exit with code zero printing `stdout`.
    pub fn with_stdout<S: Into<String>>(stdout: S) -> FakeRunner {
        FakeRunner::new(CommandOutput {
            stdout: stdout.into(),
            stderr: String::new(),
            status: Some(0),
        })
    }

    /// The invocations received so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(invocation.clone());
        Ok(self.output.clone())
    }
}

/// A fake runner that don't actually spawn anything and always fails to launch the program.
#[derive(Default, Debug)]
pub struct ErrorRunner;

impl CommandRunner for ErrorRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError> {
        Err(RunError::Spawn {
            program: invocation.program.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "Nope"),
        })
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError> {
        (**self).run(invocation)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Arc<R> {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError> {
        (**self).run(invocation)
    }
}
