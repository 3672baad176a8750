//! String interner for type and parameter names.
//!
//! Names flow through the solver constantly (every diagnostic quotes at
//! least one), so they are interned into a shared pool and passed around as
//! `u32` indices. Comparisons become integer comparisons and the registry
//! never stores duplicate name allocations.

use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a `u32`) and can be compared with `==` in
/// O(1). To get the actual string back, use [`Interner::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

#[derive(Default)]
struct InternerState {
    /// Map from string to atom index
    map: FxHashMap<Arc<str>, Atom>,
    /// Vector of all interned strings (index 0 is the empty string)
    strings: Vec<Arc<str>>,
}

/// String interner that deduplicates strings and returns `Atom` handles.
///
/// Interior mutability via `RwLock` so the interner can be shared by
/// reference alongside the type registry without coordination.
///
/// # Example
/// ```
/// use mixc_common::Interner;
/// let interner = Interner::new();
/// let a1 = interner.intern("IDisposable");
/// let a2 = interner.intern("IDisposable");
/// assert_eq!(a1, a2); // Same atom for same string
/// assert_eq!(interner.resolve(a1).as_ref(), "IDisposable");
/// ```
pub struct Interner {
    state: RwLock<InternerState>,
}

impl Interner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let mut state = InternerState {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        let empty: Arc<str> = Arc::from("");
        state.strings.push(empty.clone());
        state.map.insert(empty, Atom::NONE);
        Interner {
            state: RwLock::new(state),
        }
    }

    /// Intern a string, returning its `Atom` handle.
    /// If the string was already interned, returns the existing `Atom`.
    pub fn intern(&self, s: &str) -> Atom {
        if s.is_empty() {
            return Atom::NONE;
        }
        let Ok(mut state) = self.state.write() else {
            // Poisoned lock: fall back to the sentinel rather than panicking.
            return Atom::NONE;
        };
        if let Some(&atom) = state.map.get(s) {
            return atom;
        }
        let atom = Atom(state.strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        state.strings.push(owned.clone());
        state.map.insert(owned, atom);
        atom
    }

    /// Resolve an `Atom` back to its string value.
    /// Returns the empty string if the atom is out of bounds.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        self.try_resolve(atom).unwrap_or_else(|| Arc::from(""))
    }

    /// Try to resolve an `Atom`, returning `None` if invalid.
    pub fn try_resolve(&self, atom: Atom) -> Option<Arc<str>> {
        let state = self.state.read().ok()?;
        state.strings.get(atom.0 as usize).cloned()
    }

    /// Get the number of interned strings.
    pub fn len(&self) -> usize {
        self.state.read().map(|s| s.strings.len()).unwrap_or(0)
    }

    /// Check if the interner is empty (only has the empty string).
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_deduplicates() {
        let interner = Interner::new();
        let a = interner.intern("Target");
        let b = interner.intern("Target");
        let c = interner.intern("Next");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.resolve(a).as_ref(), "Target");
        assert_eq!(interner.resolve(c).as_ref(), "Next");
    }

    #[test]
    fn empty_string_is_none() {
        let interner = Interner::new();
        assert_eq!(interner.intern(""), Atom::NONE);
        assert!(Atom::NONE.is_none());
        assert_eq!(interner.resolve(Atom::NONE).as_ref(), "");
    }

    #[test]
    fn try_resolve_out_of_bounds() {
        let interner = Interner::new();
        assert!(interner.try_resolve(Atom(999)).is_none());
    }
}
