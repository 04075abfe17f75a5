//! Text formatting utilities for the ellipsis demo.
//!
//! This module provides helper functions for formatting values in a human-readable way.

use rellipsis::PassReport;
use std::time::Duration;
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
/// assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
/// ```
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

/// Formats a short duration with a unit that keeps it readable.
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{} µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2} ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2} s", duration.as_secs_f64())
    }
}

/// One-line summary of a measuring pass for the status bar.
pub fn format_pass_report(report: &PassReport) -> String {
    match &report.outcome {
        Ok(outcome) if outcome.result.truncated => format!(
            "Pass #{}: cut at {} | {} probes | {}",
            report.generation,
            outcome.result.cut_index,
            outcome.probes,
            format_duration(report.elapsed)
        ),
        Ok(outcome) => format!(
            "Pass #{}: fits | {} probes | {}",
            report.generation,
            outcome.probes,
            format_duration(report.elapsed)
        ),
        Err(err) => format!("Pass #{}: skipped ({})", report.generation, err),
    }
}
