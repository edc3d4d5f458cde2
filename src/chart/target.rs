//! Cache geometry of the supported target CPUs
//!
//! Capacities are per-core L1D/L2 plus the shared last-level cache, used to
//! place vertical markers on full-size bandwidth charts.

use crate::cli::Target;

/// One cache level marker: label and capacity in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLevel {
    pub label: &'static str,
    pub bytes: u64,
}

impl Target {
    /// Marketing name shown in chart subtitles
    pub fn hardware_name(&self) -> &'static str {
        match self {
            Target::G3 => "AWS Graviton3",
            Target::G3E => "AWS Graviton3E",
            Target::A64fx => "Fujitsu A64FX",
            Target::Grace => "NVIDIA Grace",
            Target::Rhea1 => "SiPearl Rhea1",
        }
    }

    /// Cache levels in ascending capacity order; A64FX has no L3
    pub fn cache_levels(&self) -> Vec<CacheLevel> {
        let (l2, l3) = match self {
            Target::G3 | Target::G3E | Target::Rhea1 => (1_048_576, Some(33_554_432)),
            Target::A64fx => (838_860, None),
            Target::Grace => (1_048_576, Some(245_366_784)),
        };

        let mut levels = vec![
            CacheLevel {
                label: "L1D",
                bytes: 65_536,
            },
            CacheLevel { label: "L2", bytes: l2 },
        ];
        if let Some(bytes) = l3 {
            levels.push(CacheLevel {
                label: "L3",
                bytes,
            });
        }
        levels
    }
}
