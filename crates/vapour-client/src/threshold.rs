//! Percentages that drive the usage charts.

use crate::model::{ArchiveRecord, Storage};

/// Size below which a game's chart label is hidden: 10 GB.
pub const DEFAULT_LABEL_CUTOFF: f64 = 10e9;

/// Share of a library, in percent, that `cutoff` bytes represent.
///
/// Chart slices smaller than this share have their labels suppressed. The
/// result is capped at 100. A library with no capacity at all has no
/// meaningful share and yields `None`.
#[must_use]
pub fn threshold(free: u64, used: u64, cutoff: f64) -> Option<f64> {
    let total = used.saturating_add(free);
    if total == 0 {
        return None;
    }
    Some((cutoff / total as f64 * 100.0).min(100.0))
}

/// Whether a slice covering `slice_percent` of the chart keeps its label.
#[must_use]
pub fn label_visible(slice_percent: f64, threshold: Option<f64>) -> bool {
    threshold.is_none_or(|threshold| slice_percent >= threshold)
}

/// `part` as a percentage of `whole`, or `None` when `whole` is zero.
#[must_use]
pub fn percent_of(part: u64, whole: u64) -> Option<f64> {
    (whole != 0).then(|| part as f64 / whole as f64 * 100.0)
}

/// Fill level of an archive relative to everything its disk could hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchiveUsage {
    /// Bytes used, in percent of used plus free.
    pub used_percent: f64,
    /// The archive's `maxSize`, in percent of used plus free.
    pub target_percent: f64,
}

impl ArchiveUsage {
    /// Compute usage for an archive; `None` when it reports no capacity.
    #[must_use]
    pub fn of(archive: &ArchiveRecord) -> Option<Self> {
        let potential = archive.potential_size();
        Some(Self {
            used_percent: percent_of(archive.size, potential)?,
            target_percent: percent_of(archive.max_size, potential)?,
        })
    }

    /// The colour band the used percentage falls into.
    #[must_use]
    pub fn band(&self) -> UsageBand {
        UsageBand::for_percent(self.used_percent)
    }

    /// Whether the archive already holds more than its ceiling.
    #[must_use]
    pub fn over_target(&self) -> bool {
        self.used_percent > self.target_percent
    }
}

/// Twenty-percent bands used to shade a usage bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageBand {
    /// 0 to 20 percent.
    Low,
    /// 20 to 40 percent.
    Moderate,
    /// 40 to 60 percent.
    Elevated,
    /// 60 to 80 percent.
    High,
    /// 80 percent and above.
    Critical,
}

impl UsageBand {
    /// All bands, lowest first.
    pub const ALL: [UsageBand; 5] = [
        UsageBand::Low,
        UsageBand::Moderate,
        UsageBand::Elevated,
        UsageBand::High,
        UsageBand::Critical,
    ];

    /// The band containing `percent`.
    #[must_use]
    pub fn for_percent(percent: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|band| percent < band.range().1)
            .unwrap_or(UsageBand::Critical)
    }

    /// Lower and upper bound of the band, in percent.
    #[must_use]
    pub fn range(self) -> (f64, f64) {
        match self {
            UsageBand::Low => (0.0, 20.0),
            UsageBand::Moderate => (20.0, 40.0),
            UsageBand::Elevated => (40.0, 60.0),
            UsageBand::High => (60.0, 80.0),
            UsageBand::Critical => (80.0, 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_whole_library_is_cutoff() {
        let value = threshold(9_000_000_000, 1_000_000_000, DEFAULT_LABEL_CUTOFF);
        assert_eq!(value, Some(100.0));
    }

    #[test]
    fn test_threshold_of_large_library() {
        let value = threshold(60_000_000_000, 40_000_000_000, DEFAULT_LABEL_CUTOFF)
            .expect("non-empty library");
        assert!((value - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_caps_at_hundred() {
        assert_eq!(threshold(1, 1, DEFAULT_LABEL_CUTOFF), Some(100.0));
    }

    #[test]
    fn test_threshold_empty_library_is_guarded() {
        assert_eq!(threshold(0, 0, DEFAULT_LABEL_CUTOFF), None);
    }

    #[test]
    fn test_label_visible() {
        assert!(label_visible(12.0, Some(10.0)));
        assert!(label_visible(10.0, Some(10.0)));
        assert!(!label_visible(9.9, Some(10.0)));
        assert!(label_visible(0.0, None));
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1, 4), Some(25.0));
        assert_eq!(percent_of(5, 0), None);
    }

    #[test]
    fn test_archive_usage() {
        let archive = ArchiveRecord::new_for_test(0, "/archive", 25, 75, 50);
        let usage = ArchiveUsage::of(&archive).expect("capacity");
        assert_eq!(usage.used_percent, 25.0);
        assert_eq!(usage.target_percent, 50.0);
        assert_eq!(usage.band(), UsageBand::Moderate);
        assert!(!usage.over_target());

        let empty = ArchiveRecord::new_for_test(1, "/empty", 0, 0, 10);
        assert!(ArchiveUsage::of(&empty).is_none());
    }

    #[test]
    fn test_usage_bands() {
        assert_eq!(UsageBand::for_percent(0.0), UsageBand::Low);
        assert_eq!(UsageBand::for_percent(19.99), UsageBand::Low);
        assert_eq!(UsageBand::for_percent(20.0), UsageBand::Moderate);
        assert_eq!(UsageBand::for_percent(79.0), UsageBand::High);
        assert_eq!(UsageBand::for_percent(80.0), UsageBand::Critical);
        assert_eq!(UsageBand::for_percent(150.0), UsageBand::Critical);
    }
}
