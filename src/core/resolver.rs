use std::sync::Arc;

use super::emotion::EmotionKind;
use super::error::{Result, WellnessError};
use super::exercise::{ExerciseConfig, GeneralConfig};
use super::registry::ConfigRegistry;

/// A successfully resolved selection: every render needs both bundles
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub emotion: EmotionKind,
    pub config: &'a ExerciseConfig,
    pub general: &'a GeneralConfig,
}

/// Validates raw emotion identifiers against the registry
#[derive(Debug, Clone)]
pub struct EmotionResolver {
    registry: Arc<ConfigRegistry>,
}

impl EmotionResolver {
    pub fn new(registry: Arc<ConfigRegistry>) -> Self {
        Self { registry }
    }

    /// Exact match only, after trimming and lower-casing. Failure carries the
    /// untouched input and has no side effects.
    pub fn resolve(&self, raw: &str) -> Result<Resolved<'_>> {
        let emotion =
            EmotionKind::parse(raw).ok_or_else(|| WellnessError::InvalidEmotion(raw.to_string()))?;
        Ok(Resolved {
            emotion,
            config: self.registry.exercise(emotion),
            general: self.registry.general(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> EmotionResolver {
        EmotionResolver::new(Arc::new(ConfigRegistry::load().unwrap()))
    }

    #[test]
    fn test_resolve_canonical_names_in_any_case() {
        let resolver = resolver();
        for (raw, expected) in [
            ("anxiety", EmotionKind::Anxiety),
            ("ANGER", EmotionKind::Anger),
            (" Stress ", EmotionKind::Stress),
        ] {
            let resolved = resolver.resolve(raw).unwrap();
            assert_eq!(resolved.emotion, expected);
            assert_eq!(resolved.config.emotion, expected);
        }
    }

    #[test]
    fn test_resolve_estres() {
        let resolver = resolver();
        let resolved = resolver.resolve("estres").unwrap();
        assert_eq!(resolved.emotion, EmotionKind::Stress);
        assert_eq!(resolved.config.timings.duration, Some(30.0));
        let waves = resolved.config.waves.as_ref().unwrap();
        assert_eq!(waves.wave_count, 5);
        assert_eq!(waves.chaos_range, (1.0, 0.05));
        assert_eq!(resolved.general.fade_duration, 1.0);
    }

    #[test]
    fn test_resolve_invalid() {
        let resolver = resolver();
        for raw in ["joy", "", "ANXIETY!", "alegria"] {
            match resolver.resolve(raw) {
                Err(WellnessError::InvalidEmotion(input)) => assert_eq!(input, raw),
                other => panic!("{raw:?} resolved unexpectedly: {other:?}"),
            }
        }
    }
}
