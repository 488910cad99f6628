//! Alert Batch Rendering

use crate::model::AlertBatch;
use crate::LogError;
use std::io::Write;
use tracing::{debug, error};

/// Timestamp format for the rendered header line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the `=` rule under the header line
const HEADER_RULE_WIDTH: usize = 50;

/// Width of the `-` rule closing each alert block
const ENTRY_RULE_WIDTH: usize = 30;

/// Render one alert batch in the fixed human-readable layout.
///
/// Writes a blank line, the `ALERTE RECUE` header with the supplied
/// timestamp, a 50-character `=` rule, then one block per alert closed
/// by a 30-character `-` rule, in delivery order. An empty batch
/// produces only the header and the `=` rule.
pub fn render_batch(
    w: &mut impl Write,
    timestamp: &str,
    batch: &AlertBatch,
) -> Result<(), LogError> {
    writeln!(w)?;
    writeln!(w, "ALERTE RECUE - {}", timestamp)?;
    writeln!(w, "{}", "=".repeat(HEADER_RULE_WIDTH))?;

    for alert in &batch.alerts {
        writeln!(w, "Status: {}", alert.status().to_uppercase())?;
        writeln!(w, "Alert: {}", alert.alertname())?;
        writeln!(w, "Summary: {}", alert.summary())?;
        writeln!(w, "Description: {}", alert.description())?;
        writeln!(w, "{}", "-".repeat(ENTRY_RULE_WIDTH))?;
    }

    Ok(())
}

/// Write an alert batch to stdout with a timestamp captured now.
///
/// The stdout lock is held for the whole batch so one delivery renders
/// contiguously. Write failures are logged and swallowed: the printed
/// lines are this crate's only observable effect, and the webhook
/// response does not depend on them.
pub fn log_batch(batch: &AlertBatch) {
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    debug!("Rendering {} alert(s) to stdout", batch.alerts.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = render_batch(&mut out, &timestamp, batch) {
        error!("Failed to write alert batch to stdout: {}", e);
    }
}
