use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::emotion::EmotionKind;

/// A single color stop, each channel 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Ordered gradient stops; first and last entries are the endpoints
pub type ColorRamp = Vec<Rgb>;

/// Phase durations in seconds. Which phases are set depends on the exercise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTimings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inhale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl PhaseTimings {
    pub fn get(&self, phase: &str) -> Option<f64> {
        match phase {
            "inhale" => self.inhale,
            "hold" => self.hold,
            "exhale" => self.exhale,
            "pause" => self.pause,
            "duration" => self.duration,
            _ => None,
        }
    }

    /// Seconds for one breathing cycle, with the pause applied after every phase
    pub fn cycle_seconds(&self) -> f64 {
        let pause = self.pause.unwrap_or(0.0);
        [self.inhale, self.hold, self.exhale]
            .into_iter()
            .flatten()
            .map(|phase| phase + pause)
            .sum()
    }
}

/// Wave visualization parameters. Each range is `(initial, final)` and decays
/// from chaotic to calm over the exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    pub wave_count: u32,
    pub chaos_range: (f64, f64),
    pub speed_range: (f64, f64),
    pub amplitude_range: (f64, f64),
}

impl WaveParams {
    pub fn ranges(&self) -> [(&'static str, (f64, f64)); 3] {
        [
            ("chaos_range", self.chaos_range),
            ("speed_range", self.speed_range),
            ("amplitude_range", self.amplitude_range),
        ]
    }
}

/// Immutable bundle describing one guided exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseConfig {
    pub emotion: EmotionKind,
    pub technique: String,
    pub timings: PhaseTimings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycles: Option<u32>,
    pub color_ramps: BTreeMap<String, ColorRamp>,
    pub messages: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waves: Option<WaveParams>,
}

impl ExerciseConfig {
    pub fn ramp(&self, phase: &str) -> Option<&ColorRamp> {
        self.color_ramps.get(phase)
    }

    pub fn message(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Expected length of the whole exercise in seconds
    pub fn total_seconds(&self) -> f64 {
        match (self.cycles, self.timings.duration) {
            (Some(cycles), _) => f64::from(cycles) * self.timings.cycle_seconds(),
            (None, Some(duration)) => duration,
            (None, None) => 0.0,
        }
    }
}

/// Shared UI timing defaults, in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub fade_duration: f64,
    pub message_display_time: f64,
    pub welcome_duration: f64,
}

impl GeneralConfig {
    pub fn durations(&self) -> [(&'static str, f64); 3] {
        [
            ("fade_duration", self.fade_duration),
            ("message_display_time", self.message_display_time),
            ("welcome_duration", self.welcome_duration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::new(14, 165, 233).to_hex(), "#0ea5e9");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_cycle_seconds_counts_pause_after_each_phase() {
        let timings = PhaseTimings {
            inhale: Some(4.0),
            exhale: Some(4.0),
            pause: Some(0.5),
            ..Default::default()
        };
        assert_eq!(timings.cycle_seconds(), 9.0);

        let no_pause = PhaseTimings {
            inhale: Some(4.0),
            hold: Some(7.0),
            exhale: Some(8.0),
            ..Default::default()
        };
        assert_eq!(no_pause.cycle_seconds(), 19.0);
    }

    #[test]
    fn test_timings_lookup_by_name() {
        let timings = PhaseTimings {
            duration: Some(30.0),
            ..Default::default()
        };
        assert_eq!(timings.get("duration"), Some(30.0));
        assert_eq!(timings.get("inhale"), None);
        assert_eq!(timings.get("unknown"), None);
    }

    #[test]
    fn test_timings_serialize_only_present_phases() {
        let timings = PhaseTimings {
            inhale: Some(4.0),
            hold: Some(7.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&timings).unwrap();
        assert_eq!(json, serde_json::json!({"inhale": 4.0, "hold": 7.0}));
    }
}
