use std::ffi::{OsStr, OsString};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// A program to launch, with its ordered list of arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The program to execute, resolved by the OS using `$PATH` if it is not a path.
    pub program: PathBuf,
    /// The arguments passed to the program, in order.
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Make a new invocation of `program` without arguments.
    pub fn new<P: Into<PathBuf>>(program: P) -> Invocation {
        Invocation {
            program: program.into(),
            args: vec![],
        }
    }

    /// Append an argument to the invocation.
    pub fn arg<S: AsRef<OsStr>>(&mut self, arg: S) -> &mut Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// Append all the arguments to the invocation.
    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.arg(arg);
        }
        self
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// What a finished process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// The standard output of the process, decoded lossily as UTF-8.
    pub stdout: String,
    /// The standard error of the process, decoded lossily as UTF-8.
    pub stderr: String,
    /// The exit code of the process. `None` if it was terminated by a signal.
    pub status: Option<i32>,
}

impl CommandOutput {
    /// Whether the process exited with code zero.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}
