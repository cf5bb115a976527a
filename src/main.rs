use clap::Parser;

use batch_checker::error::NiceError;
use batch_checker::{main_batch_checker, Opt};

fn main() {
    let opt = Opt::parse();
    opt.logger.enable_log();

    main_batch_checker(opt).nice_unwrap()
}
