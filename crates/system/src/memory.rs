//! Host memory snapshotting
//!
//! One fresh read of the host's memory accounting per call: total physical
//! memory, available memory, and the utilization percentage derived from
//! them. Nothing is cached between calls beyond the `sysinfo` backend
//! itself; two consecutive snapshots differ only by whatever the OS
//! reports as changed.

use std::sync::LazyLock;

use parking_lot::RwLock;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SystemError, SystemResult};

/// Point-in-time read of host memory state
///
/// `available <= total` is the expected relationship, but it is never
/// validated: anomalous OS accounting is reported verbatim.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemorySnapshot {
    /// Total physical memory in bytes
    pub total: u64,
    /// Memory the OS estimates it can hand to applications without swapping
    pub available: u64,
    /// Utilization percentage, conventionally in [0, 100]
    pub used_percent: f64,
}

/// Narrow capability over the OS memory-accounting facility
///
/// The platform backend lives behind this single operation so the
/// formatting layer stays fully testable with a fixed-value provider.
pub trait MemoryInfoProvider {
    /// Take one fresh snapshot of host memory state
    fn snapshot(&self) -> SystemResult<MemorySnapshot>;
}

/// [`MemoryInfoProvider`] backed by the host OS via `sysinfo`
#[derive(Debug, Clone, Copy, Default)]
pub struct HostMemoryProvider;

// Process-wide sysinfo backend. Memory figures are refreshed on every
// snapshot call; the cached part is only the System handle itself.
static SYSINFO_SYSTEM: LazyLock<RwLock<sysinfo::System>> = LazyLock::new(|| {
    let mut sys = sysinfo::System::new();
    sys.refresh_memory();
    RwLock::new(sys)
});

impl MemoryInfoProvider for HostMemoryProvider {
    fn snapshot(&self) -> SystemResult<MemorySnapshot> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(SystemError::Unsupported {
                platform: std::env::consts::OS,
            });
        }

        let (total, available) = {
            let mut sys = SYSINFO_SYSTEM.write();
            sys.refresh_memory();
            (sys.total_memory(), sys.available_memory())
        };

        debug!(total, available, "host memory refreshed");

        Ok(MemorySnapshot {
            total,
            available,
            used_percent: used_percent(total, available),
        })
    }
}

/// Utilization percentage the way the accounting facility computes it:
/// `(total - available) / total * 100`, rounded to one decimal.
fn used_percent(total: u64, available: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let used = total.saturating_sub(available);

    // (used * 10000) / total keeps basis-point precision without going
    // through f64 on huge values; falls back to f64 on overflow.
    let percent = used
        .checked_mul(10_000)
        .and_then(|v| v.checked_div(total))
        .map_or_else(
            || (used as f64 / total as f64) * 100.0,
            |basis_points| basis_points as f64 / 100.0,
        );

    (percent * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FixedProvider(MemorySnapshot);

    impl MemoryInfoProvider for FixedProvider {
        fn snapshot(&self) -> SystemResult<MemorySnapshot> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn used_percent_half_used() {
        assert_eq!(used_percent(17_179_869_184, 8_589_934_592), 50.0);
    }

    #[test]
    fn used_percent_rounds_to_one_decimal() {
        // 1/3 used → 33.33…% → 33.3%
        assert_eq!(used_percent(3_000, 2_000), 33.3);
    }

    #[test]
    fn used_percent_empty_host_is_zero() {
        assert_eq!(used_percent(0, 0), 0.0);
    }

    #[test]
    fn used_percent_anomalous_available_saturates() {
        // available > total is unusual OS accounting, not a panic
        assert_eq!(used_percent(1_000, 2_000), 0.0);
    }

    #[test]
    fn used_percent_survives_huge_totals() {
        // u64::MAX would overflow the basis-point multiply; the f64
        // fallback still lands on the right answer.
        assert_eq!(used_percent(u64::MAX, u64::MAX / 2), 50.0);
    }

    #[test]
    fn provider_trait_is_object_safe() {
        let fixed = FixedProvider(MemorySnapshot {
            total: 1_048_576,
            available: 524_288,
            used_percent: 50.0,
        });
        let provider: &dyn MemoryInfoProvider = &fixed;
        let snapshot = provider.snapshot().unwrap();
        assert_eq!(snapshot.total, 1_048_576);
        assert_eq!(snapshot.used_percent, 50.0);
    }

    #[test]
    fn host_snapshots_are_independent_reads() {
        let provider = HostMemoryProvider;
        let first = provider.snapshot().unwrap();
        let second = provider.snapshot().unwrap();
        // No hidden accumulation: totals come straight from the OS and
        // do not drift between back-to-back reads.
        assert_eq!(first.total, second.total);
    }
}
