use super::emotion::{EmotionKind, PerEmotion};
use super::error::{Result, WellnessError};
use super::exercise::{ExerciseConfig, GeneralConfig};
use super::presets;
use super::response::ResponseText;
use super::theme::{is_hex_color, UiTheme};

/// Read-only store of every configuration bundle, built once at startup
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
    exercises: PerEmotion<ExerciseConfig>,
    general: GeneralConfig,
    theme: UiTheme,
    responses: PerEmotion<ResponseText>,
}

impl ConfigRegistry {
    /// Build the registry from the embedded tables and validate it
    pub fn load() -> Result<Self> {
        Self::from_parts(
            presets::builtin_exercises(),
            presets::builtin_general(),
            presets::builtin_theme(),
            presets::builtin_responses(),
        )
    }

    pub fn from_parts(
        exercises: PerEmotion<ExerciseConfig>,
        general: GeneralConfig,
        theme: UiTheme,
        responses: PerEmotion<ResponseText>,
    ) -> Result<Self> {
        let registry = Self {
            exercises,
            general,
            theme,
            responses,
        };
        registry.validate()?;
        Ok(registry)
    }

    pub fn exercise(&self, emotion: EmotionKind) -> &ExerciseConfig {
        self.exercises.get(emotion)
    }

    pub fn exercises(&self) -> &PerEmotion<ExerciseConfig> {
        &self.exercises
    }

    pub fn general(&self) -> &GeneralConfig {
        &self.general
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    pub fn response_text(&self, emotion: EmotionKind) -> &ResponseText {
        self.responses.get(emotion)
    }

    fn validate(&self) -> Result<()> {
        for (kind, exercise) in self.exercises.iter() {
            validate_exercise(kind, exercise)?;
        }

        for (name, value) in self.general.durations() {
            if !(value > 0.0) {
                return Err(defect(format!("general.{name} must be positive, got {value}")));
            }
        }

        for (name, color) in self.theme.hex_colors() {
            if !is_hex_color(color) {
                return Err(defect(format!("ui color {name} is not #RRGGBB: {color:?}")));
            }
        }

        for (index, orb) in self.theme.orbs.iter().enumerate() {
            let in_unit = |v: f64| (0.0..=1.0).contains(&v);
            if !in_unit(orb.x) || !in_unit(orb.y) {
                return Err(defect(format!("orb {index} position ({}, {}) outside [0,1]", orb.x, orb.y)));
            }
            if !(orb.r > 0.0 && orb.r <= 1.0) {
                return Err(defect(format!("orb {index} radius {} outside (0,1]", orb.r)));
            }
        }

        for (kind, text) in self.responses.iter() {
            if text.title.trim().is_empty() || text.message.trim().is_empty() {
                return Err(defect(format!("{kind} response text is missing title or message")));
            }
            if text.recommendations.is_empty() {
                return Err(defect(format!("{kind} response text has no recommendations")));
            }
        }

        Ok(())
    }
}

fn defect(message: String) -> WellnessError {
    WellnessError::Configuration(message)
}

fn validate_exercise(kind: EmotionKind, exercise: &ExerciseConfig) -> Result<()> {
    if exercise.emotion != kind {
        return Err(defect(format!(
            "{kind} slot holds the {} exercise",
            exercise.emotion
        )));
    }

    for &phase in kind.required_timings() {
        let value = exercise
            .timings
            .get(phase)
            .ok_or_else(|| defect(format!("{kind} is missing timing {phase:?}")))?;
        let valid = if phase == "pause" { value >= 0.0 } else { value > 0.0 };
        if !valid {
            return Err(defect(format!("{kind} timing {phase:?} is invalid: {value}")));
        }
    }

    if kind.is_cycle_based() {
        match exercise.cycles {
            Some(cycles) if cycles > 0 => {}
            _ => return Err(defect(format!("{kind} needs a positive cycle count"))),
        }
    } else {
        let waves = exercise
            .waves
            .as_ref()
            .ok_or_else(|| defect(format!("{kind} is missing wave parameters")))?;
        if waves.wave_count == 0 {
            return Err(defect(format!("{kind} wave_count must be positive")));
        }
        for (name, (initial, last)) in waves.ranges() {
            if !(initial > last) {
                return Err(defect(format!(
                    "{kind} {name} must decay, got ({initial}, {last})"
                )));
            }
        }
    }

    for &name in kind.required_ramps() {
        let ramp = exercise
            .ramp(name)
            .ok_or_else(|| defect(format!("{kind} is missing color ramp {name:?}")))?;
        if ramp.len() < 2 {
            return Err(defect(format!("{kind} color ramp {name:?} needs at least 2 colors")));
        }
    }

    for &key in kind.required_messages() {
        match exercise.message(key) {
            Some(text) if !text.trim().is_empty() => {}
            _ => return Err(defect(format!("{kind} is missing message {key:?}"))),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::exercise::Rgb;

    fn parts() -> (
        PerEmotion<ExerciseConfig>,
        GeneralConfig,
        UiTheme,
        PerEmotion<ResponseText>,
    ) {
        (
            presets::builtin_exercises(),
            presets::builtin_general(),
            presets::builtin_theme(),
            presets::builtin_responses(),
        )
    }

    fn expect_defect(result: Result<ConfigRegistry>, needle: &str) {
        match result {
            Err(WellnessError::Configuration(message)) => {
                assert!(message.contains(needle), "{message:?} should mention {needle:?}")
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("registry should have been rejected"),
        }
    }

    #[test]
    fn test_builtin_registry_loads() {
        let registry = ConfigRegistry::load().unwrap();
        for kind in EmotionKind::ALL {
            assert_eq!(registry.exercise(kind).emotion, kind);
        }
        assert_eq!(registry.general().welcome_duration, 3.0);
        assert_eq!(registry.theme().orbs.len(), 4);
    }

    #[test]
    fn test_builtin_durations() {
        let registry = ConfigRegistry::load().unwrap();
        assert_eq!(registry.exercise(EmotionKind::Anxiety).total_seconds(), 45.0);
        assert_eq!(registry.exercise(EmotionKind::Anger).total_seconds(), 38.0);
        assert_eq!(registry.exercise(EmotionKind::Stress).total_seconds(), 30.0);
    }

    #[test]
    fn test_stress_bundle() {
        let registry = ConfigRegistry::load().unwrap();
        let stress = registry.exercise(EmotionKind::Stress);
        assert_eq!(stress.timings.duration, Some(30.0));
        assert!(stress.cycles.is_none());
        let waves = stress.waves.as_ref().unwrap();
        assert_eq!(waves.wave_count, 5);
        assert_eq!(waves.chaos_range, (1.0, 0.05));
        assert_eq!(waves.speed_range, (3.0, 0.5));
        assert_eq!(waves.amplitude_range, (80.0, 30.0));
    }

    #[test]
    fn test_ramps_join_up() {
        let registry = ConfigRegistry::load().unwrap();
        let anger = registry.exercise(EmotionKind::Anger);
        let red_to_yellow = anger.ramp("red_to_yellow").unwrap();
        let yellow_to_violet = anger.ramp("yellow_to_violet").unwrap();
        assert_eq!(red_to_yellow.last(), yellow_to_violet.first());
        assert_eq!(yellow_to_violet.last(), Some(&Rgb::new(167, 139, 250)));
    }

    #[test]
    fn test_missing_message_is_defect() {
        let (mut exercises, general, theme, responses) = parts();
        exercises.anger.messages.remove("hold");
        expect_defect(
            ConfigRegistry::from_parts(exercises, general, theme, responses),
            "hold",
        );
    }

    #[test]
    fn test_short_ramp_is_defect() {
        let (mut exercises, general, theme, responses) = parts();
        exercises
            .anxiety
            .color_ramps
            .insert("inhale".to_string(), vec![Rgb::new(0, 0, 0)]);
        expect_defect(
            ConfigRegistry::from_parts(exercises, general, theme, responses),
            "at least 2",
        );
    }

    #[test]
    fn test_missing_ramp_is_defect() {
        let (mut exercises, general, theme, responses) = parts();
        exercises.stress.color_ramps.remove("calm");
        expect_defect(
            ConfigRegistry::from_parts(exercises, general, theme, responses),
            "calm",
        );
    }

    #[test]
    fn test_zero_cycles_is_defect() {
        let (mut exercises, general, theme, responses) = parts();
        exercises.anxiety.cycles = Some(0);
        expect_defect(
            ConfigRegistry::from_parts(exercises, general, theme, responses),
            "cycle",
        );
    }

    #[test]
    fn test_missing_timing_is_defect() {
        let (mut exercises, general, theme, responses) = parts();
        exercises.anger.timings.hold = None;
        expect_defect(
            ConfigRegistry::from_parts(exercises, general, theme, responses),
            "timing \"hold\"",
        );
    }

    #[test]
    fn test_non_decaying_range_is_defect() {
        let (mut exercises, general, theme, responses) = parts();
        if let Some(waves) = exercises.stress.waves.as_mut() {
            waves.speed_range = (0.5, 3.0);
        }
        expect_defect(
            ConfigRegistry::from_parts(exercises, general, theme, responses),
            "speed_range",
        );
    }

    #[test]
    fn test_swapped_bundle_is_defect() {
        let (mut exercises, general, theme, responses) = parts();
        exercises.anger = exercises.anxiety.clone();
        expect_defect(
            ConfigRegistry::from_parts(exercises, general, theme, responses),
            "anger slot",
        );
    }

    #[test]
    fn test_bad_theme_values_are_defects() {
        let (exercises, general, mut theme, responses) = parts();
        theme.emotions.stress.icon = "orange".to_string();
        expect_defect(
            ConfigRegistry::from_parts(exercises.clone(), general.clone(), theme, responses.clone()),
            "stress.icon",
        );

        let mut theme = presets::builtin_theme();
        theme.orbs[2].r = 0.0;
        expect_defect(
            ConfigRegistry::from_parts(exercises, general, theme, responses),
            "orb 2",
        );
    }

    #[test]
    fn test_non_positive_general_duration_is_defect() {
        let (exercises, mut general, theme, responses) = parts();
        general.fade_duration = 0.0;
        expect_defect(
            ConfigRegistry::from_parts(exercises, general, theme, responses),
            "fade_duration",
        );
    }
}
