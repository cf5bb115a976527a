//! # batch-checker
//!
//! Run an external checker on every input file of a folder, paired with the file with the same
//! name in the output folder. This is both an application and a library: the library exposes the
//! single pass over the folder with the command runner and the console as parameters, so that it
//! can be driven without spawning real processes.

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

pub mod check;
pub mod error;
pub mod opt;
pub mod printer;
pub mod prompt;

use anyhow::{Context, Error};
use batch_checker_exec::ProcessRunner;

pub use check::*;
pub use opt::*;
pub use printer::Printer;

/// Entry point of the `batch-checker` binary, once the options have been parsed and the logger
/// configured.
///
/// When the input folder is not given on the command line it is asked on the console.
pub fn main_batch_checker(opt: Opt) -> Result<(), Error> {
    let input_dir = match opt.input_dir {
        Some(dir) => dir,
        None => {
            let mut stdin = std::io::stdin().lock();
            let mut stdout = std::io::stdout();
            prompt::prompt_input_dir(&mut stdin, &mut stdout)
                .context("Cannot read the input folder")?
        }
    };
    let config = opt.check.config();
    trace!("Checking {} with {:#?}", input_dir.display(), config);

    let mut printer = Printer::stdout();
    check_folder(&input_dir, &config, &ProcessRunner, &mut printer)
}
