use core::fmt::{self, Write};

use super::super::types::ScanRecord;
use super::table::{bandwidth_label, security_label};

const RULE: &str =
    "==================================================================================";
const DIVIDER: &str =
    "----------------------------------------------------------------------------------";

/// Writes the ranked list as a fixed-width table to a text sink. Purely
/// diagnostic output; never required for correctness.
pub fn write_network_table<W: Write>(out: &mut W, ranked: &[ScanRecord]) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "WiFi Networks (sorted by signal strength)")?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "{:<32} {:>6} {:>7} {:>13} {:<12}",
        "SSID", "RSSI", "Channel", "Channel Width", "Encryption"
    )?;
    writeln!(out, "{DIVIDER}")?;
    for record in ranked {
        writeln!(
            out,
            "{:<32} {:>6} {:>7} {:>13} {:<12}",
            record.ssid.display_name(),
            record.rssi,
            record.channel,
            bandwidth_label(record.second),
            security_label(record.auth)
        )?;
    }
    writeln!(out, "{RULE}")
}
