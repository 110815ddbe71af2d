/*!
 * Schema layer — the shape of everything handed to the reporting client.
 *
 * - `config` — `RollbarConfig`, the top-level options bag
 * - `payload` — `RollbarPayload` and its nested metadata records
 * - `level` — the severity enum used by `reportLevel`
 * - `check_ignore` — the caller-supplied suppression predicate
 * - `constants` — defaults and environment naming
 * - `scalar` — string fields that also accept numbers from the environment
 */

pub mod check_ignore;
pub mod config;
pub mod constants;
pub mod level;
pub mod payload;
pub(crate) mod scalar;
