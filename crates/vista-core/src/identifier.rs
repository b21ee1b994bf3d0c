//! Identifier management using string interning for efficient string storage and comparison
//!
//! This module provides the [`Id`] type shared by elements, relationships and views.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned identifier naming an element, relationship or view.
///
/// # Examples
///
/// ```
/// use vista_core::identifier::Id;
///
/// let user = Id::new("user");
/// assert_eq!(user, "user");
///
/// // Anonymous identifiers are used for relationships declared without an id
/// let anon = Id::from_anonymous(0);
/// assert_eq!(anon, "__0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str, interning the name if it is new.
    ///
    /// # Examples
    ///
    /// ```
    /// use vista_core::identifier::Id;
    ///
    /// let system = Id::new("online_store");
    /// assert_eq!(system.to_string(), "online_store");
    /// ```
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns the `Id` for `name` only if it has been interned before.
    ///
    /// Lookups of user-supplied tokens go through this so that unknown names
    /// never grow the interner.
    ///
    /// # Examples
    ///
    /// ```
    /// use vista_core::identifier::Id;
    ///
    /// let known = Id::new("known_name");
    /// assert_eq!(Id::lookup("known_name"), Some(known));
    /// assert_eq!(Id::lookup("never_interned_name"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<Self> {
        interner().get(name).map(Self)
    }

    /// Creates an internal `Id` for an entity declared without an identifier.
    ///
    /// # Arguments
    ///
    /// * `idx` - A unique index used to generate the anonymous identifier.
    pub fn from_anonymous(idx: usize) -> Self {
        let name = format!("__{idx}");
        Self::new(&name)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        match interner.resolve(self.0) {
            Some(name) => f.write_str(name),
            None => Err(fmt::Error),
        }
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("webapp");
        let id2 = Id::new("webapp");
        let id3 = Id::new("database");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "webapp");
    }

    #[test]
    fn test_lookup_does_not_intern() {
        assert_eq!(Id::lookup("id_test_lookup_only"), None);
        assert_eq!(Id::lookup("id_test_lookup_only"), None);

        let id = Id::new("id_test_lookup_only");
        assert_eq!(Id::lookup("id_test_lookup_only"), Some(id));
    }

    #[test]
    fn test_from_anonymous() {
        let id1 = Id::from_anonymous(0);
        let id2 = Id::from_anonymous(1);
        let id3 = Id::from_anonymous(0);

        assert_ne!(id1, id2);
        assert_eq!(id1, id3);
        assert_eq!(id2, "__1");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("display_test");
        assert_eq!(format!("{}", id), "display_test");
    }

    #[test]
    fn test_from_trait() {
        let id1: Id = "customer".into();
        let id2 = Id::new("customer");

        assert_eq!(id1, id2);
        assert_eq!(id1, "customer");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("payments");

        assert!(id == "payments");
        assert!(id != "payment");

        let empty = Id::new("");
        assert!(empty == "");
        assert!(empty != "non-empty");
    }
}
