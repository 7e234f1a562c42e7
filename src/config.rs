//! Threshold configuration for the chain weight analyzer

use thiserror::Error;

/// Error raised while resolving the threshold configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Absolute mode asked for a resolution without a known macroblock count
    #[error("no macroblock count known for vertical resolution {0}")]
    UnknownResolution(u32),
}

/// Vertical resolutions with a known per-frame macroblock budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    R144,
    R240,
    R360,
    R480,
    R720,
    R1080,
    R1440,
    R2160,
}

impl Resolution {
    /// Total number of macroblocks in a single frame at this resolution,
    /// assuming a 16:9 frame tiled with 16x16 px macroblocks
    pub fn macroblocks(self) -> u32 {
        match self {
            Resolution::R144 => 144,
            Resolution::R240 => 400,
            Resolution::R360 => 900,
            Resolution::R480 => 1602,
            Resolution::R720 => 3600,
            Resolution::R1080 => 8100,
            Resolution::R1440 => 14400,
            Resolution::R2160 => 32400,
        }
    }
}

impl TryFrom<u32> for Resolution {
    type Error = ConfigError;

    fn try_from(vertical: u32) -> Result<Self, ConfigError> {
        match vertical {
            144 => Ok(Resolution::R144),
            240 => Ok(Resolution::R240),
            360 => Ok(Resolution::R360),
            480 => Ok(Resolution::R480),
            720 => Ok(Resolution::R720),
            1080 => Ok(Resolution::R1080),
            1440 => Ok(Resolution::R1440),
            2160 => Ok(Resolution::R2160),
            _ => Err(ConfigError::UnknownResolution(vertical)),
        }
    }
}

/// How the percentage threshold is converted into a macroblock count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdMode {
    /// Percentage of the heaviest reference observed in the segment
    Relative,

    /// Percentage of the fixed macroblock budget for a video resolution
    Absolute(Resolution),
}

impl ThresholdMode {
    /// Resolve the percentage into the minimum number of macroblocks a
    /// reference needs to extend a chain, rounding up
    pub fn macroblock_threshold(self, percent: f64, max_weight: u32) -> u32 {
        let reference_size = match self {
            ThresholdMode::Relative => max_weight,
            ThresholdMode::Absolute(resolution) => resolution.macroblocks(),
        };

        (f64::from(reference_size) * percent / 100.0).ceil() as u32
    }
}
