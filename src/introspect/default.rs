//! Process-wide default introspector
//!
//! Convenience wrappers for callers that do not want to own an
//! [`Introspector`]. The shared instance keeps schemas for the lifetime of
//! the process; call [`reset_default_cache`] to start from a clean slate.
//!
//! The shared instance sits behind a mutex. Using it again from inside a
//! [`with_default_introspector`] closure on the same thread would deadlock,
//! so such calls are refused: [`inspect`] and [`inspect_as`] return
//! [`InspectError::Reentrant`] and the other entry points panic.

use crate::cache::MemoryCache;
use crate::error::{InspectError, Result};
use crate::introspect::config::InspectConfig;
use crate::introspect::inspector::{Inspection, Introspector};
use serde::Serialize;
use std::cell::Cell;
use std::sync::{LazyLock, Mutex, PoisonError};
use tracing::{info, warn};

static DEFAULT_INTROSPECTOR: LazyLock<Mutex<Introspector>> = LazyLock::new(|| {
    let introspector = InspectConfig::from_env()
        .and_then(|config| Introspector::with_config(MemoryCache::new(), config))
        .unwrap_or_else(|e| {
            warn!("Ignoring invalid introspector configuration: {}", e);
            Introspector::new()
        });
    Mutex::new(introspector)
});

thread_local! {
    static IN_USE: Cell<bool> = const { Cell::new(false) };
}

/// Marks the shared introspector as held by this thread until dropped
struct UseGuard;

impl UseGuard {
    fn acquire() -> Option<Self> {
        IN_USE.with(|in_use| {
            if in_use.replace(true) {
                None
            } else {
                Some(UseGuard)
            }
        })
    }
}

impl Drop for UseGuard {
    fn drop(&mut self) {
        IN_USE.with(|in_use| in_use.set(false));
    }
}

fn locked<R>(_guard: UseGuard, f: impl FnOnce(&mut Introspector) -> R) -> R {
    let mut introspector = DEFAULT_INTROSPECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut introspector)
}

/// Run `f` against the shared introspector
///
/// # Panics
///
/// Panics when called from inside another `with_default_introspector`
/// closure on the same thread, or when `f` itself calls
/// [`reset_default_cache`].
pub fn with_default_introspector<R>(f: impl FnOnce(&mut Introspector) -> R) -> R {
    match UseGuard::acquire() {
        Some(guard) => locked(guard, f),
        None => panic!("{}", InspectError::Reentrant),
    }
}

/// Inspect `value` with the shared introspector, deriving its identity
pub fn inspect<T: ?Sized + Serialize>(value: &T) -> Result<Inspection> {
    let guard = UseGuard::acquire().ok_or(InspectError::Reentrant)?;
    locked(guard, |introspector| introspector.inspect(value))
}

/// Inspect `value` with the shared introspector under an explicit identity
pub fn inspect_as<T: ?Sized + Serialize>(identity: &str, value: &T) -> Result<Inspection> {
    let guard = UseGuard::acquire().ok_or(InspectError::Reentrant)?;
    locked(guard, |introspector| introspector.inspect_as(identity, value))
}

/// Drop every schema held by the shared introspector
///
/// # Panics
///
/// Panics when called from inside a [`with_default_introspector`] closure.
pub fn reset_default_cache() {
    info!("Resetting default introspector");
    with_default_introspector(|introspector| introspector.reset());
}
