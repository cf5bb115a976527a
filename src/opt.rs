use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::check::{CheckConfig, CheckerCommand};

#[derive(Parser, Debug)]
#[clap(
    name = "batch-checker",
    version = include_str!(concat!(env!("OUT_DIR"), "/version.txt")),
)]
pub struct Opt {
    /// Folder with the input files to check.
    ///
    /// When omitted, the folder is asked on the console.
    #[clap(value_hint = ValueHint::DirPath)]
    pub input_dir: Option<PathBuf>,

    #[clap(flatten, next_help_heading = Some("CHECKER"))]
    pub check: CheckOpt,

    #[clap(flatten, next_help_heading = Some("LOGGING"))]
    pub logger: LoggerOpt,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckOpt {
    /// Folder with the output files, matched by file name with the input files
    #[clap(short, long, default_value = "output", value_hint = ValueHint::DirPath)]
    pub output_dir: PathBuf,

    /// The checker to run on every input/output pair
    #[clap(short, long, default_value = "checker.py", value_hint = ValueHint::FilePath)]
    pub checker: PathBuf,

    /// Interpreter used to run the checker
    #[clap(short, long, default_value = "python", value_hint = ValueHint::CommandName)]
    pub interpreter: PathBuf,

    /// Execute the checker directly, without the interpreter
    #[clap(long, conflicts_with = "interpreter")]
    pub no_interpreter: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct LoggerOpt {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CheckOpt {
    /// Build the configuration of a checking pass from the command line options.
    pub fn config(&self) -> CheckConfig {
        let interpreter = if self.no_interpreter {
            None
        } else {
            Some(self.interpreter.clone())
        };
        CheckConfig {
            output_dir: self.output_dir.clone(),
            checker: CheckerCommand {
                interpreter,
                checker: self.checker.clone(),
            },
        }
    }
}

impl LoggerOpt {
    /// Configure the global logger based on the verbosity level. Without `-v` the `RUST_LOG`
    /// environment variable is honored.
    pub fn enable_log(&self) {
        if self.verbose > 0 {
            std::env::set_var("RUST_BACKTRACE", "1");
            match self.verbose {
                0 => unreachable!(),
                1 => std::env::set_var("RUST_LOG", "info"),
                2 => std::env::set_var("RUST_LOG", "debug"),
                _ => std::env::set_var("RUST_LOG", "trace"),
            }
        }

        env_logger::Builder::from_default_env()
            .format_timestamp_nanos()
            .init();
        better_panic::install();
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_opt_is_valid() {
        Opt::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_the_classic_layout() {
        let opt = Opt::try_parse_from(["batch-checker"]).unwrap();
        assert_eq!(opt.input_dir, None);
        assert_eq!(opt.logger.verbose, 0);
        let config = opt.check.config();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.checker, CheckerCommand::default());
    }

    #[test]
    fn test_no_interpreter_runs_the_checker_directly() {
        let opt = Opt::try_parse_from([
            "batch-checker",
            "datasets/a",
            "--no-interpreter",
            "-c",
            "./check",
            "-o",
            "solutions",
            "-vv",
        ])
        .unwrap();
        assert_eq!(opt.input_dir, Some(PathBuf::from("datasets/a")));
        assert_eq!(opt.logger.verbose, 2);
        let config = opt.check.config();
        assert_eq!(config.output_dir, PathBuf::from("solutions"));
        assert_eq!(config.checker.interpreter, None);
        assert_eq!(config.checker.checker, PathBuf::from("./check"));
    }

    #[test]
    fn test_interpreter_and_no_interpreter_conflict() {
        let opt = Opt::try_parse_from(["batch-checker", "-i", "python3", "--no-interpreter"]);
        assert!(opt.is_err());
    }
}
