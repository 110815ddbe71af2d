/*!
 * `RollbarConfig` — the options bag handed to the reporting client's
 * constructor.
 *
 * Every field is optional. Values are carried through untouched: nothing is
 * validated, derived or rewritten here, apart from what the types themselves
 * enforce (`report_level` can only hold one of the five severities).
 *
 * The config is built once during startup, wrapped in an `Arc`, and passed
 * explicitly to whatever constructs the client. It is never mutated after
 * that point.
 */
use std::fmt;

use serde::{Deserialize, Serialize};

use super::check_ignore::CheckIgnore;
use super::constants::{DEFAULT_ENABLED, DEFAULT_VERBOSE};
use super::level::Level;
use super::payload::RollbarPayload;
use super::scalar;
use crate::error::ConfigError;

/**
 * Options accepted by the Rollbar client.
 *
 * Serializes with the client's camelCase option names. When deserializing,
 * the snake_case spelling of each name is accepted too, so settings files
 * written in either convention load unchanged.
 *
 * # Example
 * ```
 * use rollbar_config::{Level, Person, RollbarConfig, RollbarPayload};
 *
 * let config = RollbarConfig {
 *     access_token: Some("abc123".into()),
 *     enabled: Some(true),
 *     report_level: Some(Level::Error),
 *     payload: Some(RollbarPayload {
 *         environment: Some("production".into()),
 *         person: Some(Person::new("42")),
 *         ..Default::default()
 *     }),
 *     ..Default::default()
 * };
 *
 * assert_eq!(config.report_level, Some(Level::Error));
 * ```
 */
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbarConfig {
    /// Client API access token (`post_client_item` scope for browser use).
    #[serde(
        alias = "access_token",
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub access_token: Option<String>,

    /// Suppression predicate consulted by the client before each send.
    /// Code-only: never read from or written to a document.
    #[serde(skip)]
    pub check_ignore: Option<CheckIgnore>,

    /// Master switch. The client treats `None` as `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// API endpoint items are posted to.
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub endpoint: Option<String>,

    /// Least severe level that is actually sent.
    #[serde(alias = "report_level", skip_serializing_if = "Option::is_none")]
    pub report_level: Option<Level>,

    /// Capture and report uncaught exceptions.
    #[serde(alias = "capture_uncaught", skip_serializing_if = "Option::is_none")]
    pub capture_uncaught: Option<bool>,

    /// Capture and report unhandled promise rejections.
    #[serde(
        alias = "capture_unhandled_rejections",
        alias = "captureUnandledRejections",
        skip_serializing_if = "Option::is_none"
    )]
    pub capture_unhandled_rejections: Option<bool>,

    /// Log to the local console as well as to Rollbar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,

    /// Metadata merged into every item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<RollbarPayload>,
}

impl RollbarConfig {
    /// `enabled`, falling back to the client default (`true`).
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(DEFAULT_ENABLED)
    }

    /// `verbose`, falling back to the client default (`false`).
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(DEFAULT_VERBOSE)
    }

    /**
     * Renders the JSON options object passed to the client constructor.
     *
     * Unset fields are omitted. `check_ignore` cannot be expressed as JSON and
     * is handed over separately by the component that builds the client.
     */
    pub fn to_client_options(&self) -> Result<serde_json::Value, ConfigError> {
        Ok(serde_json::to_value(self)?)
    }
}

/**
 * Hand-written so the access token never ends up in logs.
 */
impl fmt::Debug for RollbarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollbarConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("check_ignore", &self.check_ignore)
            .field("enabled", &self.enabled)
            .field("endpoint", &self.endpoint)
            .field("report_level", &self.report_level)
            .field("capture_uncaught", &self.capture_uncaught)
            .field("capture_unhandled_rejections", &self.capture_unhandled_rejections)
            .field("verbose", &self.verbose)
            .field("payload", &self.payload)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::payload::{ClientInfo, JavascriptInfo, Person, ServerInfo};
    use serde_json::json;

    fn fully_populated() -> RollbarConfig {
        RollbarConfig {
            access_token: Some("POST_CLIENT_ITEM_TOKEN".into()),
            check_ignore: Some(CheckIgnore::new(|is_uncaught, _, _| is_uncaught)),
            enabled: Some(false),
            endpoint: Some("https://api.rollbar.com/api/1/item/".into()),
            report_level: Some(Level::Warning),
            capture_uncaught: Some(true),
            capture_unhandled_rejections: Some(false),
            verbose: Some(true),
            payload: Some(RollbarPayload {
                person: Some(Person {
                    id: "42".into(),
                    username: Some("ada".into()),
                    email: Some("ada@example.com".into()),
                }),
                context: Some("checkout#pay".into()),
                client: Some(ClientInfo {
                    javascript: JavascriptInfo {
                        code_version: "3f2a9c1".into(),
                        source_map_enabled: true,
                        guess_uncaught_frames: true,
                    },
                }),
                server: Some(ServerInfo {
                    branch: Some("main".into()),
                    host: Some("web-01".into()),
                }),
                environment: Some("staging".into()),
            }),
        }
    }

    /**
     * With every field omitted the config is still a valid instance and
     * renders as an empty options object.
     */
    #[test]
    fn test_default_is_empty() {
        let config = RollbarConfig::default();

        assert!(config.access_token.is_none());
        assert!(config.check_ignore.is_none());
        assert!(config.payload.is_none());
        assert!(config.is_enabled());
        assert!(!config.is_verbose());
        assert_eq!(config.to_client_options().unwrap(), json!({}));
    }

    #[test]
    fn test_empty_document_deserializes() {
        let config: RollbarConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RollbarConfig::default());
    }

    /**
     * The canonical example: token, switch, level and a minimal payload.
     */
    #[test]
    fn test_minimal_production_config() {
        let config: RollbarConfig = serde_json::from_value(json!({
            "accessToken": "abc123",
            "enabled": true,
            "reportLevel": "error",
            "payload": {
                "environment": "production",
                "person": { "id": "42" }
            }
        }))
        .unwrap();

        let payload = config.payload.as_ref().unwrap();
        assert_eq!(payload.person.as_ref().unwrap().id, "42");
        assert_eq!(payload.environment.as_deref(), Some("production"));
        assert_eq!(config.report_level, Some(Level::Error));
        assert_eq!(config.access_token.as_deref(), Some("abc123"));
        assert!(config.is_enabled());
    }

    #[test]
    fn test_every_level_is_accepted_as_report_level() {
        for level in Level::ALL {
            let config: RollbarConfig =
                serde_json::from_value(json!({ "reportLevel": level.as_str() })).unwrap();
            assert_eq!(config.report_level, Some(level));
        }
    }

    #[test]
    fn test_unknown_report_level_is_rejected() {
        for bad in ["warn", "fatal", "ERROR", "verbose"] {
            let result = serde_json::from_value::<RollbarConfig>(json!({ "reportLevel": bad }));
            assert!(result.is_err(), "{bad} should be rejected");
        }
    }

    /**
     * Every populated field survives rendering and re-parsing except the
     * predicate, which has no document form.
     */
    #[test]
    fn test_fully_populated_config_preserves_fields() {
        let config = fully_populated();
        let options = config.to_client_options().unwrap();

        assert_eq!(options["accessToken"], "POST_CLIENT_ITEM_TOKEN");
        assert_eq!(options["enabled"], false);
        assert_eq!(options["endpoint"], "https://api.rollbar.com/api/1/item/");
        assert_eq!(options["reportLevel"], "warning");
        assert_eq!(options["captureUncaught"], true);
        assert_eq!(options["captureUnhandledRejections"], false);
        assert_eq!(options["verbose"], true);
        assert_eq!(options["payload"]["person"]["email"], "ada@example.com");
        assert_eq!(options["payload"]["context"], "checkout#pay");
        assert_eq!(options["payload"]["client"]["javascript"]["code_version"], "3f2a9c1");
        assert_eq!(options["payload"]["server"]["host"], "web-01");
        assert_eq!(options["payload"]["environment"], "staging");
        assert!(options.get("checkIgnore").is_none());

        let reparsed: RollbarConfig = serde_json::from_value(options).unwrap();
        assert_eq!(
            reparsed,
            RollbarConfig {
                check_ignore: None,
                ..config
            }
        );
    }

    #[test]
    fn test_snake_case_and_legacy_names_are_accepted() {
        let config: RollbarConfig = serde_json::from_value(json!({
            "access_token": "abc123",
            "report_level": "info",
            "capture_uncaught": true,
            "captureUnandledRejections": true
        }))
        .unwrap();

        assert_eq!(config.access_token.as_deref(), Some("abc123"));
        assert_eq!(config.report_level, Some(Level::Info));
        assert_eq!(config.capture_uncaught, Some(true));
        assert_eq!(config.capture_unhandled_rejections, Some(true));

        let options = config.to_client_options().unwrap();
        assert_eq!(options["captureUnhandledRejections"], true);
        assert!(options.get("captureUnandledRejections").is_none());
    }

    #[test]
    fn test_debug_redacts_access_token() {
        let rendered = format!("{:?}", fully_populated());
        assert!(!rendered.contains("POST_CLIENT_ITEM_TOKEN"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("web-01"));
    }

    #[test]
    fn test_config_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RollbarConfig>();

        let shared = std::sync::Arc::new(fully_populated());
        let handle = {
            let shared = shared.clone();
            std::thread::spawn(move || shared.report_level)
        };
        assert_eq!(handle.join().unwrap(), Some(Level::Warning));
    }
}
