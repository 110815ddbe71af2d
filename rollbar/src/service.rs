/*!
 * The explicit wiring between a `RollbarConfig` and the reporting client.
 *
 * Lifecycle:
 * 1. The application loads or builds a `RollbarConfig` at startup.
 * 2. It passes the config to `Rollbar::new`, which asks the client type to
 *    build itself from it.
 * 3. The resulting `Rollbar<C>` is handed to whichever components report
 *    errors. Nothing is looked up from a global.
 *
 * Everything past construction (level filtering, `checkIgnore`, verbose
 * console mirroring, batching, transport) is the client's business. Calls
 * are forwarded verbatim.
 */
use std::sync::Arc;

use rollbar_config::{Level, RollbarConfig};
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// ReportingClient — the external collaborator
// ---------------------------------------------------------------------------

/**
 * The reporting SDK as seen from this crate.
 *
 * Implement it on a thin adapter around the real client. `from_config`
 * receives the config exactly as the application built it; use
 * `RollbarConfig::to_client_options` if the SDK takes a JSON options object,
 * and pass `config.check_ignore` through alongside it.
 */
pub trait ReportingClient: Sized {
    /// Construction failure reported by the SDK (bad token, bad endpoint...).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the client from the config as the application passed it.
    fn from_config(config: &RollbarConfig) -> Result<Self, Self::Error>;

    /// Records one item. Whether and when it is sent is up to the client.
    fn log(&self, level: Level, message: &str);
}

// ---------------------------------------------------------------------------
// Rollbar
// ---------------------------------------------------------------------------

/**
 * A reporting client paired with the config it was built from.
 *
 * The config is shared through an `Arc`, so other components that need to
 * read it (for example to show the environment name) can hold a clone
 * without holding the service.
 */
pub struct Rollbar<C> {
    config: Arc<RollbarConfig>,
    client: C,
}

impl<C: ReportingClient> Rollbar<C> {
    /**
     * Builds the client from `config` and wraps it.
     *
     * # Errors
     * Whatever `C::from_config` reports. No other validation is performed.
     */
    pub fn new(config: impl Into<Arc<RollbarConfig>>) -> Result<Self, C::Error> {
        let config = config.into();
        let client = C::from_config(&config)?;

        debug!(
            enabled = config.is_enabled(),
            verbose = config.is_verbose(),
            report_level = config.report_level.map(|level| level.as_str()),
            has_access_token = config.access_token.is_some(),
            "Rollbar client initialized"
        );

        Ok(Self { config, client })
    }

    /// Wraps a client the caller already built from `config`.
    pub fn with_client(config: impl Into<Arc<RollbarConfig>>, client: C) -> Self {
        Self {
            config: config.into(),
            client,
        }
    }

    pub fn config(&self) -> &Arc<RollbarConfig> {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Forwards one item to the client at `level`.
    pub fn log(&self, level: Level, message: &str) {
        trace!(%level, "forwarding item to Rollbar client");
        self.client.log(level, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.log(Level::Critical, message);
    }

    /**
     * Reports an error the application caught, using its `Display` output as
     * the message at `Level::Error`.
     *
     * This is the hook a framework-level error handler calls; it does not
     * install anything by itself.
     */
    pub fn report_error(&self, error: &(dyn std::error::Error + 'static)) {
        self.error(&error.to_string());
    }
}
