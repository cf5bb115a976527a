#![allow(dead_code)]

pub use test_interface::*;

mod test_interface;

pub fn setup() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_nanos()
        .is_test(true)
        .try_init();
}
