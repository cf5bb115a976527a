//! The checking pass over a folder of input files.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use batch_checker_exec::{CommandRunner, Invocation};

use crate::printer::{Printer, WriteColor, BOLD, YELLOW};
use crate::{cwrite, cwriteln};

/// Only the files whose name ends with this suffix are checked.
pub const INPUT_SUFFIX: &str = ".txt";

/// Printed, with the path, for an input file that has no output file.
pub const MISSING_OUTPUT: &str = "Arquivo de saída não encontrado";

/// How the checker is launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerCommand {
    /// The interpreter that runs the checker. When `None` the checker is executed directly.
    pub interpreter: Option<PathBuf>,
    /// The checker script or executable.
    pub checker: PathBuf,
}

impl Default for CheckerCommand {
    fn default() -> Self {
        CheckerCommand {
            interpreter: Some("python".into()),
            checker: "checker.py".into(),
        }
    }
}

impl CheckerCommand {
    /// The invocation that checks `output` against `input`. The two paths are always the last
    /// two arguments, input first.
    pub fn invocation(&self, input: &Path, output: &Path) -> Invocation {
        let mut invocation = match &self.interpreter {
            Some(interpreter) => {
                let mut invocation = Invocation::new(interpreter);
                invocation.arg(&self.checker);
                invocation
            }
            None => Invocation::new(&self.checker),
        };
        invocation.arg(input).arg(output);
        invocation
    }
}

/// The configuration of a checking pass.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Where the output files are searched, by the name of the input file.
    pub output_dir: PathBuf,
    /// How to launch the checker.
    pub checker: CheckerCommand,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            output_dir: "output".into(),
            checker: CheckerCommand::default(),
        }
    }
}

/// List the names of the input files inside `input_dir`, sorted.
///
/// The folder is read once: files added or removed afterwards are not considered.
pub fn list_input_files(input_dir: &Path) -> Result<Vec<OsString>, Error> {
    let entries = std::fs::read_dir(input_dir)
        .with_context(|| format!("Failed to list the input folder {}", input_dir.display()))?;
    let mut names = vec![];
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to list the input folder {}", input_dir.display()))?;
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(INPUT_SUFFIX) {
            names.push(name);
        } else {
            trace!("Skipping {:?}", name);
        }
    }
    names.sort();
    Ok(names)
}

/// Run the checker on every input file of `input_dir` that has an output file with the same name
/// in the output folder, printing what the checker writes.
///
/// An input file without the output file is reported and skipped. Failing to list the folder or to
/// launch the checker stops the pass. The exit status of the checker is not considered.
pub fn check_folder<R, W>(
    input_dir: &Path,
    config: &CheckConfig,
    runner: &R,
    printer: &mut Printer<W>,
) -> Result<(), Error>
where
    R: CommandRunner + ?Sized,
    W: WriteColor,
{
    let names = list_input_files(input_dir)?;
    info!("Found {} input files in {}", names.len(), input_dir.display());

    for name in names {
        let input_path = input_dir.join(&name);
        let output_path = config.output_dir.join(&name);

        cwriteln!(printer, BOLD, "\n🧪 Testando {}", name.to_string_lossy())?;

        if !output_path.exists() {
            cwrite!(printer, YELLOW, "⚠️ ")?;
            writeln!(printer.stream, "{}: {}", MISSING_OUTPUT, output_path.display())?;
            continue;
        }

        let invocation = config.checker.invocation(&input_path, &output_path);
        let output = runner
            .run(&invocation)
            .with_context(|| format!("Failed to run the checker on {}", input_path.display()))?;
        if !output.success() {
            debug!(
                "The checker exited with {:?} on {}",
                output.status,
                input_path.display()
            );
        }

        writeln!(printer.stream, "{}", output.stdout)?;
        if !output.stderr.is_empty() {
            cwriteln!(printer, YELLOW, "⚠️ Erro:")?;
            writeln!(printer.stream, "{}", output.stderr)?;
        }
    }
    Ok(())
}
