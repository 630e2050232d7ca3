use std::io::Write;

use device_fingerprint_shared::composer::FingerprintResult;

pub const BANNER: &str = r"
 +----------------------------------+
 |    Device Fingerprint Builder    |
 +----------------------------------+
";

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Every attribute grouped by domain, followed by the hash.
    Text { banner: bool },
    /// The whole result as pretty json.
    Json,
    /// Only the hex digest.
    HashOnly,
}

/// Replaces `_` by spaces & upper-cases every letter that
/// does not follow another letter, e.g. `os_name` => `Os Name`.
pub fn title_case(key: &str) -> String {
    let mut prev_is_letter = false;
    key.chars()
        .map(|c| if c == '_' { ' ' } else { c })
        .flat_map(|c| {
            let upper = !prev_is_letter;
            prev_is_letter = c.is_alphabetic();
            let converted: Vec<char> = if upper {
                c.to_uppercase().collect()
            } else {
                c.to_lowercase().collect()
            };
            converted
        })
        .collect()
}

/// Written before the attributes are collected.
pub fn write_preamble(w: &mut impl Write, format: ReportFormat) -> std::io::Result<()> {
    if let ReportFormat::Text { banner } = format {
        if banner {
            writeln!(w, "{BANNER}")?;
        }
        writeln!(w, "Generating Device Fingerprint...\n")?;
    }
    Ok(())
}

pub fn write_report(
    w: &mut impl Write,
    result: &FingerprintResult,
    format: ReportFormat,
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text { .. } => {
            writeln!(w, "=== Device Fingerprint Details ===")?;
            for section in &result.sections {
                writeln!(w, "{}:", section.domain)?;
                for (key, value) in &section.attributes {
                    writeln!(w, "  {}: {value}", title_case(key))?;
                }
            }
            writeln!(w, "\n=== Unique Fingerprint Hash ===")?;
            writeln!(w, "SHA-256 Hash: {}", result.hash)?;
            writeln!(w, "\nThank you for using Device Fingerprint Builder!")?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, result)?;
            writeln!(w)?;
        }
        ReportFormat::HashOnly => {
            writeln!(w, "{}", result.hash)?;
        }
    }
    Ok(())
}
