//! The cache contract the introspector is written against.

/// Minimal key/value cache contract.
///
/// Any storage strategy can sit behind this trait: a plain map, an LRU, a
/// remote store. The introspector depends only on these three operations.
///
/// # Implementation Requirements
///
/// - `reset()` must hand back an empty cache and leave the receiver, and any
///   value already fetched from it, untouched
/// - `set()` always succeeds and replaces any previous value for the key
/// - `fetch()` returns an owned value; a caller mutating it must not be able
///   to change what the cache holds
/// - unknown keys are answered with `None`, never an error
pub trait Cache<V> {
    /// Produce a new, empty cache of the same kind
    fn reset(&self) -> Self
    where
        Self: Sized;

    /// Store `value` under `key`, overwriting any previous entry
    fn set(&mut self, key: &str, value: V);

    /// Look up the value stored under `key`
    fn fetch(&self, key: &str) -> Option<V>;
}
