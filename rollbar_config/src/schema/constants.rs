/*!
 * Schema-wide constants.
 *
 * Defaults the external client applies when a field is left unset, and the
 * environment-variable naming used by the loader.
 */

/// Value of `enabled` when the field is omitted.
pub const DEFAULT_ENABLED: bool = true;

/// Value of `verbose` when the field is omitted.
pub const DEFAULT_VERBOSE: bool = false;

/// Prefix shared by every environment variable the loader reads,
/// e.g. `ROLLBAR_ACCESS_TOKEN`.
pub const ENV_PREFIX: &str = "ROLLBAR_";

/// Separator for nested keys in environment variable names:
/// `ROLLBAR_PAYLOAD__PERSON__ID` maps to `payload.person.id`.
pub const ENV_NESTING_SEPARATOR: &str = "__";
