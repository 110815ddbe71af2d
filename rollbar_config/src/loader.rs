/*!
 * Loading a `RollbarConfig` from a settings document and the environment.
 *
 * Hierarchy used by `RollbarConfig::load`:
 * 1. The JSON settings file (written with the client's option names).
 * 2. `ROLLBAR_*` environment variables, which override the file.
 *
 * Environment variable names are upper snake case with `__` separating
 * nesting levels. They are rewritten to the client's option names before
 * merging so that a variable overrides the matching file entry instead of
 * colliding with it:
 *
 * ```text
 * ROLLBAR_ACCESS_TOKEN                          -> accessToken
 * ROLLBAR_CAPTURE_UNHANDLED_REJECTIONS          -> captureUnhandledRejections
 * ROLLBAR_PAYLOAD__PERSON__ID                   -> payload.person.id
 * ROLLBAR_PAYLOAD__CLIENT__JAVASCRIPT__CODE_VERSION
 *                                               -> payload.client.javascript.code_version
 * ```
 *
 * The settings file may use either the camelCase or the snake_case option
 * names (and the legacy `captureUnandledRejections`). It is read into a
 * `RollbarConfig` on its own first and re-emitted with the canonical names,
 * so a file key and an environment variable for the same option always meet
 * under one name.
 *
 * Values go through figment's scalar parsing, so `true`/`false` become
 * booleans and `42` a number. String options accept such scalars and keep
 * their text.
 */
use std::path::Path;

use figment::providers::{Env, Format, Json, Serialized};
use figment::Figment;
use tracing::debug;

use crate::error::ConfigError;
use crate::schema::config::RollbarConfig;
use crate::schema::constants::{ENV_NESTING_SEPARATOR, ENV_PREFIX};

impl RollbarConfig {
    /**
     * The provider chain used by `from_env`: only `ROLLBAR_*` variables.
     *
     * Exposed so callers can merge extra providers (defaults, another file
     * format) before extracting.
     */
    pub fn figment() -> Figment {
        Figment::new().merge(env_provider())
    }

    /// Builds a config from `ROLLBAR_*` environment variables alone.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    /**
     * Loads the JSON settings file at `path`, then applies `ROLLBAR_*`
     * environment overrides on top.
     *
     * # Errors
     * * `ConfigError::FileNotFound` if `path` does not exist.
     * * `ConfigError::Parsing` for malformed JSON, wrong value types or an
     *   unknown `reportLevel`.
     */
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        debug!(path = %path.display(), "loading Rollbar configuration");

        let file_config: RollbarConfig = Figment::new().merge(Json::file(path)).extract()?;

        Ok(Figment::from(Serialized::defaults(file_config))
            .merge(env_provider())
            .extract()?)
    }

    /// Parses a JSON settings document. No environment overrides apply.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .split(ENV_NESTING_SEPARATOR)
        .map(|key| option_key(key.as_str()).into())
        .lowercase(false)
}

/**
 * Rewrites a stripped, dot-split variable name to the option path.
 *
 * The first segment names a top-level option and becomes camelCase.
 * Deeper segments are payload members, which already use snake_case,
 * so they are only lowercased.
 */
fn option_key(key: &str) -> String {
    let mut segments = key.split('.');
    let mut mapped = segments.next().map(camel_case).unwrap_or_default();

    for segment in segments {
        mapped.push('.');
        mapped.push_str(&segment.to_ascii_lowercase());
    }

    mapped
}

fn camel_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());

    for (i, word) in segment.split('_').filter(|w| !w.is_empty()).enumerate() {
        let word = word.to_ascii_lowercase();
        if i == 0 {
            out.push_str(&word);
            continue;
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}
