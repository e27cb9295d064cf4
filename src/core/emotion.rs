use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::WellnessError;

/// The closed set of emotional states a visitor can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionKind {
    Anxiety,
    Anger,
    Stress,
}

impl EmotionKind {
    /// Canonical enumeration order, also used to break ties in statistics
    pub const ALL: [EmotionKind; 3] = [EmotionKind::Anxiety, EmotionKind::Anger, EmotionKind::Stress];

    /// Normalize a raw identifier (trim + lowercase) and match it exactly
    /// against the canonical names or the Spanish route slugs.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "anxiety" | "ansiedad" => Some(EmotionKind::Anxiety),
            "anger" | "ira" => Some(EmotionKind::Anger),
            "stress" | "estres" | "estrés" => Some(EmotionKind::Stress),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionKind::Anxiety => "anxiety",
            EmotionKind::Anger => "anger",
            EmotionKind::Stress => "stress",
        }
    }

    /// Spanish path segment (`/select/ansiedad`, ...)
    pub fn slug(&self) -> &'static str {
        match self {
            EmotionKind::Anxiety => "ansiedad",
            EmotionKind::Anger => "ira",
            EmotionKind::Stress => "estres",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmotionKind::Anxiety => "Ansiedad",
            EmotionKind::Anger => "Ira",
            EmotionKind::Stress => "Estrés",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            EmotionKind::Anxiety => "ansiedad.html",
            EmotionKind::Anger => "ira.html",
            EmotionKind::Stress => "estres.html",
        }
    }

    /// Whether the exercise repeats a breathing cycle or runs for a fixed time
    pub fn is_cycle_based(&self) -> bool {
        !matches!(self, EmotionKind::Stress)
    }

    pub fn required_timings(&self) -> &'static [&'static str] {
        match self {
            EmotionKind::Anxiety => &["inhale", "exhale", "pause"],
            EmotionKind::Anger => &["inhale", "hold", "exhale"],
            EmotionKind::Stress => &["duration"],
        }
    }

    pub fn required_ramps(&self) -> &'static [&'static str] {
        match self {
            EmotionKind::Anxiety => &["inhale", "exhale"],
            EmotionKind::Anger => &["red", "red_to_yellow", "yellow_to_violet"],
            EmotionKind::Stress => &["chaos", "calm"],
        }
    }

    pub fn required_messages(&self) -> &'static [&'static str] {
        match self {
            EmotionKind::Anxiety => &["inhale", "exhale", "question", "success"],
            EmotionKind::Anger => &["inhale", "hold", "exhale", "question", "success"],
            EmotionKind::Stress => &["start", "middle", "end", "question", "success"],
        }
    }
}

impl fmt::Display for EmotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionKind {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmotionKind::parse(s).ok_or_else(|| WellnessError::InvalidEmotion(s.to_string()))
    }
}

/// One value per emotion. Completeness is guaranteed by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerEmotion<T> {
    pub anxiety: T,
    pub anger: T,
    pub stress: T,
}

impl<T> PerEmotion<T> {
    pub fn get(&self, emotion: EmotionKind) -> &T {
        match emotion {
            EmotionKind::Anxiety => &self.anxiety,
            EmotionKind::Anger => &self.anger,
            EmotionKind::Stress => &self.stress,
        }
    }

    pub fn get_mut(&mut self, emotion: EmotionKind) -> &mut T {
        match emotion {
            EmotionKind::Anxiety => &mut self.anxiety,
            EmotionKind::Anger => &mut self.anger,
            EmotionKind::Stress => &mut self.stress,
        }
    }

    /// Iterate in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (EmotionKind, &T)> {
        EmotionKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl<T: Default> Default for PerEmotion<T> {
    fn default() -> Self {
        Self {
            anxiety: T::default(),
            anger: T::default(),
            stress: T::default(),
        }
    }
}
