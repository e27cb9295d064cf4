pub mod emotion;
pub mod error;
pub mod exercise;
pub mod presets;
pub mod registry;
pub mod resolver;
pub mod response;
pub mod selection;
pub mod theme;

pub use emotion::{EmotionKind, PerEmotion};
pub use error::{Result, WellnessError};
pub use exercise::{ColorRamp, ExerciseConfig, GeneralConfig, PhaseTimings, Rgb, WaveParams};
pub use registry::ConfigRegistry;
pub use resolver::{EmotionResolver, Resolved};
pub use response::{
    ErrorPayload, LandingPayload, PagePayload, ResponseComposer, ResponsePayload, ResponseText,
    SelectionResponse, Variant,
};
pub use selection::{SelectionLog, SelectionRecord, SelectionStats, DEFAULT_RECENT_LIMIT};
pub use theme::{EmotionPalette, Orb, UiTheme};
