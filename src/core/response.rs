use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::emotion::EmotionKind;
use super::exercise::{ExerciseConfig, GeneralConfig};
use super::registry::ConfigRegistry;
use super::resolver::Resolved;
use super::selection::SelectionRecord;
use super::theme::UiTheme;

pub const INDEX_TEMPLATE: &str = "index.html";

/// Copywriting returned by the JSON API for one emotion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseText {
    pub title: String,
    pub message: String,
    pub recommendations: Vec<String>,
    pub color: String,
}

/// Everything an exercise page template needs
#[derive(Debug, Clone, Serialize)]
pub struct PagePayload<'a> {
    pub template: &'static str,
    pub emotion: EmotionKind,
    pub config: &'a ExerciseConfig,
    pub general: &'a GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub message: String,
    pub input: String,
}

/// Landing page data, also used as the fallback for unknown emotions
#[derive(Debug, Clone, Serialize)]
pub struct LandingPayload<'a> {
    pub template: &'static str,
    pub show_welcome: bool,
    pub welcome_duration: f64,
    pub ui: &'a UiTheme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub success: bool,
    pub emotion: EmotionKind,
    pub title: String,
    pub message: String,
    pub recommendations: Vec<String>,
    pub color: String,
    pub timestamp: String,
}

/// Fixed `{error, message}` body for failed requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
    pub message: String,
}

impl ErrorPayload {
    pub fn invalid_emotion() -> Self {
        Self {
            error: "invalid_emotion".to_string(),
            message: "Emoción no válida. Elige ansiedad, ira o estrés.".to_string(),
        }
    }

    pub fn internal() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: "Error interno del servidor".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Page,
    Api,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResponsePayload<'a> {
    Page(PagePayload<'a>),
    Api(SelectionResponse),
}

/// The timestamp form used in API payloads: RFC 3339, microseconds, `Z`
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Bundles resolved configuration into the shapes the presentation layer reads.
/// It does no formatting of its own beyond the timestamp.
#[derive(Debug, Clone)]
pub struct ResponseComposer {
    registry: Arc<ConfigRegistry>,
}

impl ResponseComposer {
    pub fn new(registry: Arc<ConfigRegistry>) -> Self {
        Self { registry }
    }

    pub fn compose<'a>(
        &self,
        resolved: Resolved<'a>,
        record: &SelectionRecord,
        variant: Variant,
    ) -> ResponsePayload<'a> {
        match variant {
            Variant::Page => ResponsePayload::Page(self.compose_page(resolved)),
            Variant::Api => ResponsePayload::Api(self.compose_api(resolved.emotion, record)),
        }
    }

    pub fn compose_page<'a>(&self, resolved: Resolved<'a>) -> PagePayload<'a> {
        PagePayload {
            template: resolved.emotion.template(),
            emotion: resolved.emotion,
            config: resolved.config,
            general: resolved.general,
        }
    }

    pub fn compose_api(&self, emotion: EmotionKind, record: &SelectionRecord) -> SelectionResponse {
        let text = self.registry.response_text(emotion);
        SelectionResponse {
            success: true,
            emotion,
            title: text.title.clone(),
            message: text.message.clone(),
            recommendations: text.recommendations.clone(),
            color: text.color.clone(),
            timestamp: format_timestamp(&record.timestamp),
        }
    }

    pub fn landing(&self, show_welcome: bool) -> LandingPayload<'_> {
        LandingPayload {
            template: INDEX_TEMPLATE,
            show_welcome,
            welcome_duration: self.registry.general().welcome_duration,
            ui: self.registry.theme(),
            notice: None,
        }
    }

    pub fn invalid_emotion_page(&self, raw: &str) -> LandingPayload<'_> {
        LandingPayload {
            notice: Some(Notice {
                message: "invalid emotion".to_string(),
                input: raw.to_string(),
            }),
            ..self.landing(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::EmotionResolver;
    use crate::core::selection::SelectionLog;
    use chrono::TimeZone;

    fn setup() -> (EmotionResolver, ResponseComposer) {
        let registry = Arc::new(ConfigRegistry::load().unwrap());
        (
            EmotionResolver::new(Arc::clone(&registry)),
            ResponseComposer::new(registry),
        )
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-09T14:05:07.000000Z");
    }

    #[test]
    fn test_compose_page_bundles_config_and_general() {
        let (resolver, composer) = setup();
        let resolved = resolver.resolve("ira").unwrap();
        let page = composer.compose_page(resolved);
        assert_eq!(page.template, "ira.html");
        assert_eq!(page.config.cycles, Some(2));
        assert_eq!(page.general.message_display_time, 2.0);
    }

    #[test]
    fn test_compose_api_uses_response_table() {
        let (resolver, composer) = setup();
        let log = SelectionLog::new();
        let resolved = resolver.resolve("anxiety").unwrap();
        let record = log.append(resolved.emotion, "10.0.0.1");

        let response = composer.compose_api(resolved.emotion, &record);
        assert!(response.success);
        assert_eq!(response.emotion, EmotionKind::Anxiety);
        assert_eq!(response.color, "blue");
        assert_eq!(response.recommendations.len(), 4);
        assert_eq!(response.timestamp, format_timestamp(&record.timestamp));
    }

    #[test]
    fn test_compose_dispatches_on_variant() {
        let (resolver, composer) = setup();
        let log = SelectionLog::new();
        let resolved = resolver.resolve("stress").unwrap();
        let record = log.append(resolved.emotion, "10.0.0.9");

        match composer.compose(resolved, &record, Variant::Page) {
            ResponsePayload::Page(page) => assert_eq!(page.template, "estres.html"),
            other => panic!("expected page payload, got {other:?}"),
        }
        match composer.compose(resolved, &record, Variant::Api) {
            ResponsePayload::Api(api) => assert_eq!(api.color, "orange"),
            other => panic!("expected api payload, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_emotion_page_carries_notice() {
        let (_, composer) = setup();
        let page = composer.invalid_emotion_page("alegria");
        assert!(!page.show_welcome);
        assert_eq!(page.template, INDEX_TEMPLATE);
        let notice = page.notice.unwrap();
        assert_eq!(notice.input, "alegria");

        let json = serde_json::to_value(composer.landing(true)).unwrap();
        assert!(json.get("notice").is_none());
        assert_eq!(json["ui"]["theme"]["accent"], "#a78bfa");
    }
}
