/*!
 * Rollbar Config — the typed options bag for the Rollbar reporting client.
 *
 * This crate only describes configuration. Capturing, batching and sending
 * items is the job of the reporting client the config is handed to.
 * End users normally depend on the `rollbar` facade crate, which re-exports
 * everything here and adds the seam that builds a client from a config.
 *
 * # Module structure
 *
 * - `schema/` — what the client accepts: config, payload, level, predicate
 * - `loader` — building a config from JSON settings and `ROLLBAR_*` variables
 * - `error` — parse and load failures
 */

mod error;
mod loader;
mod schema;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use error::{ConfigError, ParseLevelError};
pub use schema::check_ignore::{CheckIgnore, CheckIgnoreFn};
pub use schema::config::RollbarConfig;
pub use schema::constants::{DEFAULT_ENABLED, DEFAULT_VERBOSE, ENV_NESTING_SEPARATOR, ENV_PREFIX};
pub use schema::level::Level;
pub use schema::payload::{ClientInfo, JavascriptInfo, Person, RollbarPayload, ServerInfo};
