//! String interning for identifier deduplication.
//!
//! Identifiers repeat heavily in declaration files (parameter names, type
//! names); the arena stores an [`Atom`] per identifier and resolves text
//! through the owning [`Interner`].

use rustc_hash::FxHashMap;

/// Handle to an interned string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Atom(pub u32);

impl Atom {
    /// Sentinel for "no interned text".
    pub const NONE: Atom = Atom(u32::MAX);

    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

#[derive(Debug, Default)]
pub struct Interner {
    map: FxHashMap<String, Atom>,
    strings: Vec<String>,
}

impl Interner {
    pub fn new() -> Interner {
        Interner::default()
    }

    pub fn intern(&mut self, text: &str) -> Atom {
        if let Some(&atom) = self.map.get(text) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        self.strings.push(text.to_string());
        self.map.insert(text.to_string(), atom);
        atom
    }

    /// Resolve an atom to its text.
    ///
    /// # Panics
    ///
    /// Panics on `Atom::NONE` or an atom from another interner.
    pub fn resolve(&self, atom: Atom) -> &str {
        &self.strings[atom.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
