//! Built-in exercise, theme and copy tables.
//!
//! # Exercises
//! - **anxiety**: 4-4 breathing, 5 cycles (~45 s)
//! - **anger**: 4-7-8 breathing, 2 cycles (~38 s)
//! - **stress**: 30 s of waves settling from chaotic to calm

use std::collections::BTreeMap;

use super::emotion::{EmotionKind, PerEmotion};
use super::exercise::{ColorRamp, ExerciseConfig, GeneralConfig, PhaseTimings, Rgb, WaveParams};
use super::response::ResponseText;
use super::theme::{EmotionPalette, Orb, ThemeBase, UiTheme};

const QUESTION: &str = "¿Te sientes mucho mejor?";

fn ramps(entries: Vec<(&str, ColorRamp)>) -> BTreeMap<String, ColorRamp> {
    entries
        .into_iter()
        .map(|(name, ramp)| (name.to_string(), ramp))
        .collect()
}

fn messages(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, text)| (key.to_string(), text.to_string()))
        .collect()
}

pub fn builtin_exercises() -> PerEmotion<ExerciseConfig> {
    PerEmotion {
        anxiety: anxiety(),
        anger: anger(),
        stress: stress(),
    }
}

fn anxiety() -> ExerciseConfig {
    ExerciseConfig {
        emotion: EmotionKind::Anxiety,
        technique: "Respiración 4-4".to_string(),
        timings: PhaseTimings {
            inhale: Some(4.0),
            exhale: Some(4.0),
            pause: Some(0.5),
            ..Default::default()
        },
        cycles: Some(5),
        color_ramps: ramps(vec![
            // sky-500 -> cyan-300
            (
                "inhale",
                vec![
                    Rgb::new(14, 165, 233),
                    Rgb::new(56, 189, 248),
                    Rgb::new(125, 211, 252),
                    Rgb::new(6, 182, 212),
                    Rgb::new(34, 211, 238),
                    Rgb::new(103, 232, 249),
                ],
            ),
            // cyan-300 -> emerald-400
            (
                "exhale",
                vec![
                    Rgb::new(103, 232, 249),
                    Rgb::new(45, 212, 191),
                    Rgb::new(20, 184, 166),
                    Rgb::new(13, 148, 136),
                    Rgb::new(16, 185, 129),
                    Rgb::new(52, 211, 153),
                ],
            ),
        ]),
        messages: messages(&[
            ("inhale", "Inhala"),
            ("exhale", "Exhala"),
            ("question", QUESTION),
            ("success", "Ahora estas en control."),
        ]),
        waves: None,
    }
}

fn anger() -> ExerciseConfig {
    ExerciseConfig {
        emotion: EmotionKind::Anger,
        technique: "Respiración 4-7-8".to_string(),
        timings: PhaseTimings {
            inhale: Some(4.0),
            hold: Some(7.0),
            exhale: Some(8.0),
            ..Default::default()
        },
        cycles: Some(2),
        color_ramps: ramps(vec![
            (
                "red",
                vec![
                    Rgb::new(127, 29, 29),
                    Rgb::new(153, 27, 27),
                    Rgb::new(185, 28, 28),
                    Rgb::new(220, 38, 38),
                    Rgb::new(239, 68, 68),
                    Rgb::new(248, 113, 113),
                ],
            ),
            // through the oranges and ambers
            (
                "red_to_yellow",
                vec![
                    Rgb::new(239, 68, 68),
                    Rgb::new(234, 88, 12),
                    Rgb::new(249, 115, 22),
                    Rgb::new(251, 146, 60),
                    Rgb::new(253, 186, 116),
                    Rgb::new(251, 191, 36),
                    Rgb::new(252, 211, 77),
                    Rgb::new(250, 204, 21),
                    Rgb::new(253, 224, 71),
                ],
            ),
            (
                "yellow_to_violet",
                vec![
                    Rgb::new(253, 224, 71),
                    Rgb::new(163, 230, 53),
                    Rgb::new(74, 222, 128),
                    Rgb::new(45, 212, 191),
                    Rgb::new(34, 211, 238),
                    Rgb::new(56, 189, 248),
                    Rgb::new(96, 165, 250),
                    Rgb::new(59, 130, 246),
                    Rgb::new(99, 102, 241),
                    Rgb::new(139, 92, 246),
                    Rgb::new(167, 139, 250),
                ],
            ),
        ]),
        messages: messages(&[
            ("inhale", "Inhala"),
            ("hold", "Manten"),
            ("exhale", "Exhala"),
            ("question", QUESTION),
            ("success", "Ahora estas en control."),
        ]),
        waves: None,
    }
}

fn stress() -> ExerciseConfig {
    ExerciseConfig {
        emotion: EmotionKind::Stress,
        technique: "Ondas de sincronización mental".to_string(),
        timings: PhaseTimings {
            duration: Some(30.0),
            ..Default::default()
        },
        cycles: None,
        color_ramps: ramps(vec![
            (
                "chaos",
                vec![
                    Rgb::new(194, 65, 12),
                    Rgb::new(234, 88, 12),
                    Rgb::new(249, 115, 22),
                    Rgb::new(251, 146, 60),
                ],
            ),
            (
                "calm",
                vec![
                    Rgb::new(45, 212, 191),
                    Rgb::new(94, 234, 212),
                    Rgb::new(167, 139, 250),
                    Rgb::new(196, 181, 253),
                ],
            ),
        ]),
        messages: messages(&[
            ("start", "Observa las ondas..."),
            ("middle", "Siente como se calman..."),
            ("end", "Claridad mental"),
            ("question", QUESTION),
            ("success", "Tu mente esta en calma."),
        ]),
        waves: Some(WaveParams {
            wave_count: 5,
            chaos_range: (1.0, 0.05),
            speed_range: (3.0, 0.5),
            amplitude_range: (80.0, 30.0),
        }),
    }
}

pub fn builtin_general() -> GeneralConfig {
    GeneralConfig {
        fade_duration: 1.0,
        message_display_time: 2.0,
        welcome_duration: 3.0,
    }
}

fn palette(primary: &str, secondary: &str, icon: &str, label: &str) -> EmotionPalette {
    EmotionPalette {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        icon: icon.to_string(),
        label: label.to_string(),
    }
}

pub fn builtin_theme() -> UiTheme {
    UiTheme {
        theme: ThemeBase {
            bg_primary: "#0a0a0f".to_string(),
            bg_secondary: "#12121a".to_string(),
            accent: "#a78bfa".to_string(),
        },
        emotions: PerEmotion {
            // cool: sky / teal
            anxiety: palette("#0ea5e9", "#14b8a6", "#22d3ee", "#22d3ee"),
            // warm: red / pink
            anger: palette("#ef4444", "#ec4899", "#f87171", "#f87171"),
            // energetic: orange / violet
            stress: palette("#f97316", "#a78bfa", "#fb923c", "#fb923c"),
        },
        orbs: vec![
            Orb { x: 0.2, y: 0.3, r: 0.4, color: [167, 139, 250], speed: 0.0003 },
            Orb { x: 0.8, y: 0.2, r: 0.35, color: [236, 72, 153], speed: 0.0004 },
            Orb { x: 0.5, y: 0.7, r: 0.45, color: [14, 165, 233], speed: 0.00035 },
            Orb { x: 0.7, y: 0.8, r: 0.3, color: [249, 115, 34], speed: 0.00045 },
        ],
    }
}

fn response_text(title: &str, message: &str, recommendations: &[&str], color: &str) -> ResponseText {
    ResponseText {
        title: title.to_string(),
        message: message.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        color: color.to_string(),
    }
}

/// Copy returned by the JSON API, separate from the exercise mechanics
pub fn builtin_responses() -> PerEmotion<ResponseText> {
    PerEmotion {
        anxiety: response_text(
            "Respiración para la ansiedad",
            "Vamos a respirar juntos. Inhala y exhala al ritmo del círculo.",
            &[
                "Inhala durante 4 segundos",
                "Exhala durante 4 segundos",
                "Repite el ciclo 5 veces",
                "Concéntrate solo en tu respiración",
            ],
            "blue",
        ),
        anger: response_text(
            "Respiración 4-7-8 para la ira",
            "Reconoce la emoción y déjala ir con cada exhalación.",
            &[
                "Inhala durante 4 segundos",
                "Mantén el aire durante 7 segundos",
                "Exhala lentamente durante 8 segundos",
                "Repite el ciclo 2 veces",
            ],
            "red",
        ),
        stress: response_text(
            "Ondas de calma para el estrés",
            "Observa las ondas y deja que tu mente se sincronice con ellas.",
            &[
                "Observa el movimiento de las ondas",
                "No necesitas controlar tu respiración",
                "Siente cómo el caos se transforma en calma",
                "Dedica 30 segundos solo a observar",
            ],
            "orange",
        ),
    }
}
