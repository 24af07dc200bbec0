//! Report rendering for the one-shot memory report
//!
//! Rendering is pure: it takes a snapshot and returns the three report
//! lines as a string. No validation, no I/O; printing is the caller's
//! job. That keeps the exact output testable with a fixed snapshot.

use crate::memory::MemorySnapshot;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Render the three-line memory report
///
/// ```
/// use memoria_system::memory::MemorySnapshot;
///
/// let snapshot = MemorySnapshot {
///     total: 17_179_869_184,
///     available: 8_589_934_592,
///     used_percent: 50.0,
/// };
/// assert_eq!(
///     memoria_system::report::render(&snapshot),
///     "Memoria total instalada: 16384.00 MB\n\
///      Memoria disponible: 8192.00 MB\n\
///      Porcentaje de uso de memoria: 50.0%"
/// );
/// ```
#[must_use]
pub fn render(snapshot: &MemorySnapshot) -> String {
    format!(
        "Memoria total instalada: {} MB\nMemoria disponible: {} MB\nPorcentaje de uso de memoria: {}%",
        format_mib(snapshot.total),
        format_mib(snapshot.available),
        format_percent(snapshot.used_percent),
    )
}

/// Mebibytes (1024×1024 bytes) with exactly two decimals
fn format_mib(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_MIB)
}

/// Native-precision percentage: integral values keep one decimal
/// (`50.0` renders as `50.0`), fractional values render shortest
/// (`37.5` renders as `37.5`). No forced rounding.
fn format_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{percent:.1}")
    } else {
        format!("{percent}")
    }
}
