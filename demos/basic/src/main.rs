/*!
 * Minimal harness showing how a config reaches a reporting client.
 *
 * The "client" here prints to stdout instead of talking to Rollbar, so the
 * demo runs without an account:
 *
 *   cargo run -p rollbar_demo
 *   cargo run -p rollbar_demo -- --config demos/basic/rollbar.json
 *   ROLLBAR_REPORT_LEVEL=warning cargo run -p rollbar_demo -- --env
 *   RUST_LOG=debug cargo run -p rollbar_demo   # show the wiring logs
 */
use std::convert::Infallible;

use rollbar::{CheckIgnore, Level, Person, ReportingClient, Rollbar, RollbarConfig, RollbarPayload};
use tracing_subscriber::EnvFilter;

/// Prints items the way a verbose client would mirror them to the console.
struct ConsoleClient {
    enabled: bool,
    threshold: Level,
    check_ignore: Option<CheckIgnore>,
    payload: serde_json::Value,
}

impl ReportingClient for ConsoleClient {
    type Error = Infallible;

    fn from_config(config: &RollbarConfig) -> Result<Self, Self::Error> {
        let options = config.to_client_options().unwrap_or_default();
        println!("[demo] client options: {options}");

        Ok(Self {
            enabled: config.is_enabled(),
            threshold: config.report_level.unwrap_or(Level::Debug),
            check_ignore: config.check_ignore.clone(),
            payload: options.get("payload").cloned().unwrap_or_default(),
        })
    }

    fn log(&self, level: Level, message: &str) {
        if !self.enabled || level < self.threshold {
            return;
        }

        let args = [serde_json::Value::from(message)];
        if let Some(ref check_ignore) = self.check_ignore {
            if check_ignore.should_ignore(false, &args, &self.payload) {
                println!("[demo] ignored: {message}");
                return;
            }
        }

        println!("[rollbar:{level}] {message}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1));
    let from_env = args.iter().any(|a| a == "--env");

    /*
     * Build the config once. File and environment sources are optional;
     * without them a literal config is used.
     */
    let mut config = match (config_path, from_env) {
        (Some(path), _) => RollbarConfig::load(path)?,
        (None, true) => RollbarConfig::from_env()?,
        (None, false) => RollbarConfig {
            access_token: Some("PASTE_YOUR_TOKEN_HERE".into()),
            enabled: Some(true),
            report_level: Some(Level::Info),
            verbose: Some(true),
            payload: Some(RollbarPayload {
                environment: Some("development".into()),
                person: Some(Person::new("42")),
                ..Default::default()
            }),
            ..Default::default()
        },
    };

    /*
     * The predicate is code, so it is attached here rather than loaded.
     * Anything mentioning "healthcheck" is dropped.
     */
    config.check_ignore = Some(CheckIgnore::new(|_, args, _| {
        args.iter()
            .filter_map(serde_json::Value::as_str)
            .any(|message| message.contains("healthcheck"))
    }));

    let rollbar: Rollbar<ConsoleClient> = Rollbar::new(config)?;

    rollbar.debug("below the report level, not printed with the default config");
    rollbar.info("Hello from the Rollbar demo");
    rollbar.warning("healthcheck took 2s");

    match std::fs::read_to_string("/nonexistent/settings.json") {
        Ok(_) => unreachable!(),
        Err(e) => rollbar.report_error(&e),
    }

    println!("[demo] Done.");
    Ok(())
}
