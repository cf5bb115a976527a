use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Interface for testing the binary on one of the folders in `tests/folders`.
#[derive(Debug)]
pub struct TestInterface {
    output: Output,
}

impl TestInterface {
    /// Path to the test folder with the given name.
    pub fn folder<P: AsRef<Path>>(name: P) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("folders")
            .join(name)
    }

    /// The absolute path to `sh`, if available.
    pub fn shell() -> Option<String> {
        which::which("sh")
            .ok()
            .map(|sh| sh.to_string_lossy().into_owned())
    }

    /// Run `batch-checker` inside the test folder with the given arguments, optionally writing
    /// `stdin` to its standard input.
    pub fn run<P: AsRef<Path>>(name: P, args: &[&str], stdin: Option<&str>) -> Self {
        Self::run_with_env(name, args, stdin, &[])
    }

    /// Like `run`, with some additional environment variables.
    pub fn run_with_env<P: AsRef<Path>>(
        name: P,
        args: &[&str],
        stdin: Option<&str>,
        env: &[(&str, &str)],
    ) -> Self {
        super::setup();
        let cwd = Self::folder(name);
        let mut command = Command::new(env!("CARGO_BIN_EXE_batch-checker"));
        command
            .args(args)
            .current_dir(&cwd)
            .env_remove("RUST_LOG")
            .env_remove("FORCE_COLOR")
            .env_remove("CLICOLOR_FORCE")
            .envs(env.iter().copied())
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        let mut child = command.spawn().expect("Cannot spawn batch-checker");
        if let Some(stdin) = stdin {
            child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin.as_bytes())
                .expect("Cannot write stdin");
        }
        let output = child.wait_with_output().expect("batch-checker failed");
        eprintln!("stdout:\n{}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr:\n{}", String::from_utf8_lossy(&output.stderr));
        TestInterface { output }
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Check that the process exited successfully.
    pub fn success(&self) -> &Self {
        assert!(
            self.output.status.success(),
            "batch-checker failed with {:?}",
            self.output.status
        );
        self
    }

    /// Check that the process exited with the given exit code.
    pub fn exit_code(&self, code: i32) -> &Self {
        assert_eq!(self.output.status.code(), Some(code));
        self
    }

    pub fn stdout_contains(&self, text: &str) -> &Self {
        let stdout = self.stdout();
        assert!(stdout.contains(text), "{:?} not in stdout", text);
        self
    }

    pub fn stdout_lacks(&self, text: &str) -> &Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(text), "{:?} in stdout", text);
        self
    }

    pub fn stderr_contains(&self, text: &str) -> &Self {
        let stderr = self.stderr();
        assert!(stderr.contains(text), "{:?} not in stderr", text);
        self
    }

    /// Check the number of lines of stdout containing `text`.
    pub fn stdout_lines_with(&self, text: &str, count: usize) -> &Self {
        let found = self.stdout().lines().filter(|l| l.contains(text)).count();
        assert_eq!(found, count, "lines with {:?}", text);
        self
    }
}
