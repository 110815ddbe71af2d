/*!
 * The `checkIgnore` predicate.
 *
 * The reporting client calls it for every captured item with:
 * 1. `is_uncaught` — whether the item came from an uncaught-exception or
 *    unhandled-rejection hook rather than an explicit log call.
 * 2. `args` — the arguments of the originating log call.
 * 3. `payload` — the fully assembled item about to be sent.
 *
 * Returning `true` suppresses the item. The predicate itself is never
 * invoked by this crate; it is carried through to the client untouched.
 */
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Signature shared by every `checkIgnore` predicate.
pub type CheckIgnoreFn = dyn Fn(bool, &[Value], &Value) -> bool + Send + Sync;

/**
 * Shareable handle to a `checkIgnore` predicate.
 *
 * Cloning is cheap (an `Arc` bump). Two handles compare equal only when they
 * point at the same closure, which keeps `RollbarConfig: PartialEq` honest
 * without pretending closures can be compared structurally.
 */
#[derive(Clone)]
pub struct CheckIgnore(Arc<CheckIgnoreFn>);

impl CheckIgnore {
    /// Wraps a predicate so it can be stored in a `RollbarConfig` and shared.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(bool, &[Value], &Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Evaluates the predicate. `true` means "ignore this item".
    pub fn should_ignore(&self, is_uncaught: bool, args: &[Value], payload: &Value) -> bool {
        (self.0)(is_uncaught, args, payload)
    }
}

impl PartialEq for CheckIgnore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CheckIgnore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CheckIgnore(<fn>)")
    }
}
