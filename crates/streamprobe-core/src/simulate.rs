//! Simulated playback fields
//!
//! Stateless generators for the adaptive-bitrate and error-pattern labels
//! merged into the report at the presentation boundary. Generic over `Rng`
//! so tests seed a deterministic generator; the probe core never calls in
//! here, keeping its output deterministic.

use rand::seq::SliceRandom;
use rand::Rng;

/// Error-pattern labels, drawn uniformly
pub const ERROR_PATTERNS: [&str; 4] = [
    "None",
    "Pixelation at 5s",
    "Buffering spikes",
    "Audio Desync",
];

const MOBILE_BITRATES: [u32; 3] = [300, 480, 720];
const SMART_TV_BITRATES: [u32; 3] = [720, 1080, 2160];
const DESKTOP_BITRATES: [u32; 3] = [480, 720, 1080];

/// Declared client-device class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
    SmartTv,
}

impl DeviceClass {
    /// Lenient parse of a query-string value; unknown classes fall back to
    /// Desktop (and its default bitrate ladder).
    pub fn from_param(value: &str) -> Self {
        match value {
            "mobile" => DeviceClass::Mobile,
            "smart_tv" => DeviceClass::SmartTv,
            _ => DeviceClass::Desktop,
        }
    }

    /// Human-readable name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceClass::Desktop => "Desktop",
            DeviceClass::Mobile => "Mobile",
            DeviceClass::SmartTv => "Smart TV",
        }
    }

    fn bitrate_ladder(&self) -> &'static [u32] {
        match self {
            DeviceClass::Mobile => &MOBILE_BITRATES,
            DeviceClass::SmartTv => &SMART_TV_BITRATES,
            DeviceClass::Desktop => &DESKTOP_BITRATES,
        }
    }
}

/// Draw a simulated adaptive bitrate (kbps) from the device's ladder.
pub fn adaptive_bitrate<R: Rng + ?Sized>(device: DeviceClass, rng: &mut R) -> u32 {
    device
        .bitrate_ladder()
        .choose(rng)
        .copied()
        .unwrap_or(DESKTOP_BITRATES[0])
}

/// Draw a simulated error-pattern label, uniformly.
pub fn error_pattern<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ERROR_PATTERNS.choose(rng).copied().unwrap_or("None")
}
