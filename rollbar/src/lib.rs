/*!
 * Rollbar — typed configuration and explicit wiring for a Rollbar client.
 *
 * This is the crate applications depend on. It re-exports the config schema
 * from `rollbar_config` and provides `Rollbar<C>`, the component that builds
 * the reporting client from a config passed in by the caller. There is no
 * container or global registry: whoever needs the service receives it (or the
 * shared config) as a constructor argument.
 *
 * # Quick start
 *
 * ```ignore
 * use std::sync::Arc;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let config = Arc::new(rollbar::RollbarConfig::load("config/rollbar.json")?);
 *
 *     // `MyClient` implements `rollbar::ReportingClient` on top of the SDK.
 *     let rollbar: rollbar::Rollbar<MyClient> = rollbar::Rollbar::new(config)?;
 *
 *     rollbar.info("Application started");
 *     Ok(())
 * }
 * ```
 */

mod service;

// ---------------------------------------------------------------------------
// Re-exports from rollbar_config — the public surface area
// ---------------------------------------------------------------------------

pub use rollbar_config::{
    CheckIgnore, CheckIgnoreFn, ClientInfo, ConfigError, JavascriptInfo, Level, ParseLevelError,
    Person, RollbarConfig, RollbarPayload, ServerInfo, DEFAULT_ENABLED, DEFAULT_VERBOSE,
    ENV_NESTING_SEPARATOR, ENV_PREFIX,
};

pub use service::{ReportingClient, Rollbar};
