/*!
 * Static metadata merged by the reporting client into every outgoing item.
 *
 * Field names here are the client's own snake_case wire names
 * (`code_version`, `source_map_enabled`, ...), so these structs serialize
 * without any renaming. Every field is optional; absent fields are omitted
 * from the JSON rather than sent as `null`.
 */
use serde::{Deserialize, Serialize};

use super::scalar;

// ---------------------------------------------------------------------------
// RollbarPayload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollbarPayload {
    /// The signed-in user the item is attributed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,

    /// Logical location the item came from (route, controller, job name).
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub context: Option<String>,

    /// Build metadata about the code that produced the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientInfo>,

    /// The server that rendered the page or ran the code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerInfo>,

    /// Deployment tier, e.g. `"production"` or `"staging"`.
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub environment: Option<String>,
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/**
 * The end user attached to reports.
 *
 * `id` is the only required member: the reporting service groups people by it.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(deserialize_with = "scalar::string")]
    pub id: String,

    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,

    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

impl Person {
    /// A person identified by `id` only.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Wrapper matching the client's `client.javascript` nesting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub javascript: JavascriptInfo,
}

/**
 * Versioning metadata that lets the reporting service resolve stack frames.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavascriptInfo {
    /// Git commit hash or other version identifier of the deployed code.
    #[serde(deserialize_with = "scalar::string")]
    pub code_version: String,

    /// Apply source maps to every frame of the stack trace.
    pub source_map_enabled: bool,

    /// Apply source maps even to frames missing column numbers.
    /// Works best when minified output keeps newlines instead of semicolons.
    pub guess_uncaught_frames: bool,
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Branch of the running code; used to link stack frames to source control.
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub branch: Option<String>,

    /// Hostname of the machine that produced the item.
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub host: Option<String>,
}
