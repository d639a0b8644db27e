use std::fmt;

use serde::{Deserialize, Serialize};

const UNITS: [&str; 5] = ["B", "kiB", "MiB", "GiB", "TiB"];
const KIB: u64 = 1024;
const GIB: f64 = (1u64 << 30) as f64;

/// Index into `[B, kiB, MiB, GiB, TiB]` for a byte count.
///
/// This is `floor(log1024(size))`, with zero mapped to bytes and anything
/// past the last unit clamped to TiB.
#[must_use]
pub fn unit_index(size: u64) -> usize {
    let mut index = 0;
    let mut scale = KIB;
    while index < UNITS.len() - 1 && size >= scale {
        index += 1;
        scale = scale.saturating_mul(KIB);
    }
    index
}

/// Format a byte count with two decimals in the largest binary unit that
/// keeps the value at or above one.
///
/// ```
/// assert_eq!(vapour_client::humanise(0), "0.00 B");
/// assert_eq!(vapour_client::humanise(1536), "1.50 kiB");
/// ```
#[must_use]
pub fn humanise(size: u64) -> String {
    let index = unit_index(size);
    let divisor = (0..index).fold(1.0_f64, |acc, _| acc * KIB as f64);
    let unit = UNITS.get(index).copied().unwrap_or("TiB");
    format!("{:.2} {unit}", size as f64 / divisor)
}

/// Format a byte count as gibibytes with two decimals, without a unit.
#[must_use]
pub fn gibibytes(size: u64) -> String {
    format!("{:.2}", size as f64 / GIB)
}

/// How sizes are rendered in game lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeDisplay {
    /// Largest fitting binary unit, e.g. `799.98 MiB`.
    #[default]
    Humanised,
    /// Always gibibytes, e.g. `0.78`.
    #[serde(rename = "gib")]
    Gibibytes,
}

impl SizeDisplay {
    /// Render a byte count in this convention.
    #[must_use]
    pub fn format(self, size: u64) -> String {
        match self {
            SizeDisplay::Humanised => humanise(size),
            SizeDisplay::Gibibytes => gibibytes(size),
        }
    }
}

impl fmt::Display for SizeDisplay {
    /// The name used for this convention in the config file.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeDisplay::Humanised => f.write_str("humanised"),
            SizeDisplay::Gibibytes => f.write_str("gib"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn parse(formatted: &str) -> (f64, usize) {
        let (value, unit) = formatted.split_once(' ').expect("value and unit");
        let index = UNITS.iter().position(|u| *u == unit).expect("known unit");
        (value.parse().expect("number"), index)
    }

    #[test]
    fn test_humanise_zero() {
        assert_snapshot!(humanise(0), @"0.00 B");
    }

    #[test]
    fn test_humanise_library_size() {
        assert_snapshot!(humanise(838_843_492), @"799.98 MiB");
        assert_snapshot!(humanise(13_353_078_784), @"12.44 GiB");
        assert_snapshot!(humanise(153_946_082_264), @"143.37 GiB");
    }

    #[test]
    fn test_humanise_unit_boundaries() {
        assert_eq!(humanise(1023), "1023.00 B");
        assert_eq!(humanise(1024), "1.00 kiB");
        assert_eq!(humanise(1024 * 1024), "1.00 MiB");
        assert_eq!(humanise(1 << 30), "1.00 GiB");
        assert_eq!(humanise(1 << 40), "1.00 TiB");
    }

    #[test]
    fn test_humanise_clamps_at_tib() {
        assert_eq!(humanise(1 << 50), "1024.00 TiB");
        assert_eq!(unit_index(u64::MAX), 4);
    }

    #[test]
    fn test_humanise_round_trips_within_rounding() {
        let samples = [
            1,
            999,
            1025,
            65_535,
            1_000_000,
            838_843_492,
            5_000_000_000,
            123_456_789_012_345,
            (1 << 50) - 1,
        ];
        for size in samples {
            let (value, index) = parse(&humanise(size));
            let scale = 1024f64.powi(i32::try_from(index).expect("small index"));
            let restored = value * scale;
            assert!(
                (restored - size as f64).abs() <= 0.005 * scale,
                "{size} formatted as {} restores to {restored}",
                humanise(size)
            );
        }
    }

    #[test]
    fn test_humanise_unit_is_monotonic() {
        let mut previous = 0;
        let mut size = 1u64;
        while size < (1 << 52) {
            let (_, index) = parse(&humanise(size));
            assert!(index >= previous, "unit went backwards at {size}");
            previous = index;
            size = size * 3 + 1;
        }
    }

    #[test]
    fn test_gibibytes() {
        assert_eq!(gibibytes(0), "0.00");
        assert_eq!(gibibytes(838_843_492), "0.78");
        assert_eq!(gibibytes(3 << 30), "3.00");
    }

    #[test]
    fn test_size_display_config_names() {
        let display: SizeDisplay = serde_json::from_str("\"gib\"").expect("deserialize");
        assert_eq!(display, SizeDisplay::Gibibytes);
        let display: SizeDisplay = serde_json::from_str("\"humanised\"").expect("deserialize");
        assert_eq!(display, SizeDisplay::Humanised);
        assert_eq!(SizeDisplay::default().format(2048), "2.00 kiB");
    }

    #[test]
    fn test_size_display_prints_config_name() {
        for display in [SizeDisplay::Humanised, SizeDisplay::Gibibytes] {
            let serialized = serde_json::to_string(&display).expect("serialize");
            assert_eq!(serialized, format!("\"{display}\""));
        }
        assert_eq!(SizeDisplay::Gibibytes.to_string(), "gib");
    }
}
