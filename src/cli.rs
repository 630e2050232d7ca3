use clap::{command, Arg, ArgAction, ArgMatches, Command};

use crate::report::ReportFormat;

/// The command line interface of the tool.
pub fn command() -> Command {
    command!()
        .about("Collects attributes of this machine and prints their SHA-256 fingerprint.")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the attributes & hash as json.")
                .required(false)
                .action(ArgAction::SetTrue)
                .conflicts_with("hash-only"),
        )
        .arg(
            Arg::new("hash-only")
                .long("hash-only")
                .help("Only print the hex encoded hash.")
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-banner")
                .long("no-banner")
                .help("Don't print the banner.")
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// `--json` and `--hash-only` exclude each other,
/// `--no-banner` only affects the text report.
pub fn report_format(m: &ArgMatches) -> ReportFormat {
    if m.get_flag("json") {
        ReportFormat::Json
    } else if m.get_flag("hash-only") {
        ReportFormat::HashOnly
    } else {
        ReportFormat::Text {
            banner: !m.get_flag("no-banner"),
        }
    }
}
