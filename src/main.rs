//! This is the command line tool that collects
//! the attributes of this machine and prints
//! them together with their fingerprint hash.

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

mod cli;
mod report;

use std::io::Write;

use cli::{command, report_format};
use device_fingerprint_shared::composer::generate_fingerprint;
use report::{write_preamble, write_report};

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        // rust nightly compatibility
        #[allow(unused_unsafe)]
        unsafe {
            std::env::set_var("RUST_LOG", "warn")
        };
    }
    env_logger::init();

    let mut cmd = command();
    cmd.build();
    let format = report_format(&cmd.get_matches());

    let mut stdout = std::io::stdout().lock();
    write_preamble(&mut stdout, format)?;
    stdout.flush()?;

    let result = generate_fingerprint();
    log::info!("fingerprint generated: {}", result.hash);

    write_report(&mut stdout, &result, format)?;
    stdout.flush()?;
    Ok(())
}
