//! Dictionaries.

use crate::object::keys::SIZE;
use crate::object::{Array, Name, Object, PdfString, Stream, Visitor};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::fmt;
use std::sync::Arc;

type Entries = IndexMap<Name, Object, FxBuildHasher>;

/// A PDF dictionary.
///
/// Entries keep their insertion order. Cloning a dictionary is shallow: the
/// clone shares its entries with the original until either of them is
/// modified, which never affects the other one.
#[derive(Clone, Default)]
pub struct Dict {
    entries: Arc<Entries>,
    direct: bool,
}

impl Dict {
    /// Create a new, empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the dictionary has an entry for `key`.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.entries.contains_key(key)
    }

    /// Return the entry for `key` without resolving references.
    pub fn get_raw(&self, key: &[u8]) -> Option<&Object> {
        self.entries.get(key)
    }

    /// Return the entry for `key`, resolving a reference by one level.
    pub fn get(&self, key: &[u8]) -> Option<Object> {
        self.entries.get(key)?.resolve()
    }

    /// Return the resolved entry of the first key in `keys` that has one.
    ///
    /// This is useful for the abbreviated keys of inline images, like
    /// `/ColorSpace` and `/CS`.
    pub fn get_first(&self, keys: &[&[u8]]) -> Option<Object> {
        keys.iter()
            .find_map(|key| self.entries.get(*key))
            .and_then(Object::resolve)
    }

    /// Set the entry for `key`. Setting `null` removes the entry.
    pub fn set(&mut self, key: impl Into<Name>, value: impl Into<Object>) {
        let key = key.into();

        match value.into() {
            Object::Null => {
                self.remove(&key);
            }
            value => {
                self.entries_mut().insert(key, value);
            }
        }
    }

    /// Remove the entry for `key`, returning it.
    pub fn remove(&mut self, key: &[u8]) -> Option<Object> {
        if !self.contains_key(key) {
            return None;
        }

        self.entries_mut().shift_remove(key)
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.entries_mut().clear();
        }
    }

    /// Iterate over the raw entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Object)> {
        self.entries.iter()
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Name> {
        self.entries.keys()
    }

    /// Iterate over the raw values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Object> {
        self.entries.values()
    }

    /// The integer value of `key`, or `default` if it's not a number.
    ///
    /// Reals are truncated.
    pub fn get_int(&self, key: &[u8], default: i64) -> i64 {
        self.get(key)
            .and_then(|o| o.as_i64())
            .unwrap_or(default)
    }

    /// The numeric value of `key`, or `default` if it's not a number.
    pub fn get_float(&self, key: &[u8], default: f64) -> f64 {
        self.get(key)
            .and_then(|o| o.as_f64())
            .unwrap_or(default)
    }

    /// The boolean value of `key`, or `default` if it's not a boolean.
    pub fn get_bool(&self, key: &[u8], default: bool) -> bool {
        self.get(key)
            .and_then(|o| o.as_bool())
            .unwrap_or(default)
    }

    /// The name value of `key`.
    pub fn get_name(&self, key: &[u8]) -> Option<Name> {
        match self.get(key)? {
            Object::Name(n) => Some(n),
            _ => None,
        }
    }

    /// The name value of `key`, or `default` if it's not a name.
    pub fn get_name_or(&self, key: &[u8], default: &[u8]) -> Name {
        self.get_name(key).unwrap_or_else(|| Name::new(default))
    }

    /// The string value of `key`.
    pub fn get_string(&self, key: &[u8]) -> Option<PdfString> {
        match self.get(key)? {
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    /// The string value of `key`, or `default` if it's not a string.
    pub fn get_string_or(&self, key: &[u8], default: &[u8]) -> PdfString {
        self.get_string(key)
            .unwrap_or_else(|| PdfString::new(default))
    }

    /// The value of `key` as text, if it's either a name or a string.
    pub fn get_name_as_string(&self, key: &[u8]) -> Option<String> {
        match self.get(key)? {
            Object::Name(n) => Some(n.as_str().into_owned()),
            Object::String(s) => Some(s.to_text().into_owned()),
            _ => None,
        }
    }

    /// The dictionary value of `key`. Streams yield their dictionary.
    pub fn get_dict(&self, key: &[u8]) -> Option<Self> {
        match self.get(key)? {
            Object::Dict(d) => Some(d),
            Object::Stream(s) => Some(s.dict().clone()),
            _ => None,
        }
    }

    /// The array value of `key`.
    pub fn get_array(&self, key: &[u8]) -> Option<Array> {
        match self.get(key)? {
            Object::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The stream value of `key`.
    pub fn get_stream(&self, key: &[u8]) -> Option<Stream> {
        match self.get(key)? {
            Object::Stream(s) => Some(s),
            _ => None,
        }
    }

    /// Set `key` to an integer.
    pub fn set_int(&mut self, key: impl Into<Name>, value: i64) {
        self.set(key, value);
    }

    /// Set `key` to a real number.
    pub fn set_float(&mut self, key: impl Into<Name>, value: f64) {
        self.set(key, value);
    }

    /// Set `key` to a boolean.
    pub fn set_bool(&mut self, key: impl Into<Name>, value: bool) {
        self.set(key, value);
    }

    /// Set `key` to a name.
    pub fn set_name(&mut self, key: impl Into<Name>, value: impl Into<Name>) {
        self.set(key, value.into());
    }

    /// Set `key` to a string.
    pub fn set_string(&mut self, key: impl Into<Name>, value: impl Into<PdfString>) {
        self.set(key, value.into());
    }

    /// Whether all bits of `flag` are set in the integer value of `key`.
    pub fn get_flag(&self, key: &[u8], flag: i64) -> bool {
        self.get_int(key, 0) & flag == flag
    }

    /// Set or clear the bits of `flag` in the integer value of `key`.
    pub fn set_flag(&mut self, key: impl Into<Name>, flag: i64, value: bool) {
        let key = key.into();
        let current = self.get_int(&key, 0);

        let updated = if value {
            current | flag
        } else {
            current & !flag
        };

        self.set_int(key, updated);
    }

    /// The integer value of `key` in the dictionary stored under `embedded`.
    pub fn get_embedded_int(&self, embedded: &[u8], key: &[u8], default: i64) -> i64 {
        self.get_dict(embedded)
            .map_or(default, |d| d.get_int(key, default))
    }

    /// The string value of `key` in the dictionary stored under `embedded`.
    pub fn get_embedded_string(&self, embedded: &[u8], key: &[u8]) -> Option<PdfString> {
        self.get_dict(embedded)?.get_string(key)
    }

    /// Set `key` in the dictionary stored under `embedded` to an integer.
    ///
    /// The embedded dictionary is created if necessary.
    pub fn set_embedded_int(&mut self, embedded: impl Into<Name>, key: impl Into<Name>, value: i64) {
        self.update_embedded(embedded.into(), |d| d.set_int(key, value));
    }

    /// Set `key` in the dictionary stored under `embedded` to a string, or
    /// remove it if `value` is `None`.
    ///
    /// The embedded dictionary is created if a value is set.
    pub fn set_embedded_string(
        &mut self,
        embedded: impl Into<Name>,
        key: impl Into<Name>,
        value: Option<PdfString>,
    ) {
        let embedded = embedded.into();

        if value.is_none() && self.get_dict(&embedded).is_none() {
            return;
        }

        self.update_embedded(embedded, |d| d.set(key, value));
    }

    fn update_embedded(&mut self, embedded: Name, f: impl FnOnce(&mut Self)) {
        // An indirect embedded dictionary is copied into this one.
        let mut dict = self.get_dict(&embedded).unwrap_or_default();
        f(&mut dict);
        self.set(embedded, dict);
    }

    /// Copy all entries of `other` whose keys are not present yet.
    pub fn merge_into(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            if !self.contains_key(key) {
                self.set(key, value);
            }
        }
    }

    /// Copy all entries of `other`, overwriting existing ones.
    ///
    /// An existing `/Size` entry is kept, so that the entries of an
    /// additional trailer of a linearized file don't override the final
    /// object count.
    pub fn add_all(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            if key.as_bytes() == SIZE && self.contains_key(SIZE) {
                continue;
            }

            self.set(key, value);
        }
    }

    /// Whether any value equals `value`, either directly or after resolving
    /// a reference.
    pub fn contains_value(&self, value: &Object) -> bool {
        self.key_for_value(value).is_some()
    }

    /// The first key whose value equals `value`, either directly or after
    /// resolving a reference.
    pub fn key_for_value(&self, value: &Object) -> Option<Name> {
        self.iter()
            .find(|(_, v)| v.matches_resolved(value))
            .map(|(k, _)| k.clone())
    }

    /// Walk a path like `P/Annots/[2]/Rect` and return the resolved object
    /// at its end.
    ///
    /// Plain segments look up a dictionary key, bracketed segments an
    /// array index. Returns `None` if any segment doesn't exist.
    pub fn get_object_from_path(&self, path: &str) -> Option<Object> {
        let mut current = Object::Dict(self.clone());

        for segment in path.split('/') {
            if let Some(index) = segment.strip_prefix('[') {
                let index = index.strip_suffix(']')?.trim().parse::<usize>().ok()?;
                current = current.as_array()?.get_object(index)?;
            } else {
                current = current.as_dict()?.get(segment.as_bytes())?;
            }
        }

        Some(current)
    }

    /// Copy the dictionary and all of its children.
    pub fn deep_clone(&self) -> Self {
        let entries = self
            .iter()
            .map(|(k, v)| (k.clone(), v.deep_clone()))
            .collect();

        Self {
            entries: Arc::new(entries),
            direct: self.direct,
        }
    }

    /// Whether the dictionary must be written inline.
    pub fn is_direct(&self) -> bool {
        self.direct
    }

    /// Mark the dictionary as one that must be written inline.
    pub fn set_direct(&mut self, direct: bool) {
        self.direct = direct;
    }

    /// Dispatch to [`Visitor::visit_dict`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_dict(self)
    }

    fn entries_mut(&mut self) -> &mut Entries {
        Arc::make_mut(&mut self.entries)
    }
}

impl PartialEq for Dict {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries) || self.entries == other.entries
    }
}

impl<K: Into<Name>, V: Into<Object>> FromIterator<(K, V)> for Dict {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dict = Self::new();

        for (key, value) in iter {
            dict.set(key, value);
        }

        dict
    }
}

impl fmt::Debug for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Dict;
    use crate::object::keys::{COUNT, KIDS, SIZE, TYPE};
    use crate::object::{Array, Name, Object, ObjRef, ObjectPool, PdfString};

    fn dict(entries: &[(&str, i64)]) -> Dict {
        entries.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn insertion_order() {
        let d = dict(&[("B", 1), ("A", 2), ("C", 3)]);
        let keys: Vec<_> = d.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, ["B", "A", "C"]);
    }

    #[test]
    fn set_null_removes() {
        let mut d = dict(&[("A", 1), ("B", 2)]);
        d.set(b"A", Object::Null);
        assert!(!d.contains_key(b"A"));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn typed_getters_with_defaults() {
        let mut d = Dict::new();
        d.set_int(COUNT, 3);
        d.set_name(TYPE, b"Pages");
        d.set_float(b"Scale", 1.5);
        d.set_bool(b"Open", true);

        assert_eq!(d.get_int(COUNT, -1), 3);
        assert_eq!(d.get_int(TYPE, -1), -1);
        assert_eq!(d.get_int(b"Missing", 7), 7);
        assert_eq!(d.get_float(b"Scale", 0.0), 1.5);
        assert_eq!(d.get_float(COUNT, 0.0), 3.0);
        assert!(d.get_bool(b"Open", false));
        assert!(d.get_bool(COUNT, true));
        assert_eq!(d.get_name(TYPE).unwrap(), Name::new(b"Pages"));
        assert_eq!(d.get_name(COUNT), None);
        assert_eq!(d.get_name_or(b"Missing", b"X"), Name::new(b"X"));
        assert_eq!(d.get_string_or(TYPE, b"fallback"), PdfString::new(b"fallback"));
    }

    #[test]
    fn getters_resolve_references() {
        let pool = ObjectPool::new();
        pool.insert(ObjRef::new(4, 0), 12);

        let mut d = Dict::new();
        d.set(b"Length", pool.reference(ObjRef::new(4, 0)));

        assert!(d.get_raw(b"Length").unwrap().as_reference().is_some());
        assert_eq!(d.get_int(b"Length", 0), 12);
    }

    #[test]
    fn first_of_synonyms() {
        let mut d = Dict::new();
        d.set_name(b"F", b"FlateDecode");

        assert_eq!(
            d.get_first(&[b"Filter", b"F"]),
            Some(Object::Name(Name::new(b"FlateDecode")))
        );
        assert_eq!(d.get_first(&[b"DecodeParms", b"DP"]), None);
    }

    #[test]
    fn shallow_clone_is_copy_on_write() {
        let original = dict(&[("A", 1)]);
        let mut copy = original.clone();
        copy.set_int(b"A", 2);

        assert_eq!(original.get_int(b"A", 0), 1);
        assert_eq!(copy.get_int(b"A", 0), 2);
    }

    #[test]
    fn merge_into_keeps_existing() {
        let mut d = dict(&[("A", 1), ("B", 2)]);
        d.merge_into(&dict(&[("B", 20), ("C", 30)]));

        assert_eq!(d.get_int(b"A", 0), 1);
        assert_eq!(d.get_int(b"B", 0), 2);
        assert_eq!(d.get_int(b"C", 0), 30);
    }

    #[test]
    fn add_all_keeps_size() {
        let mut d = dict(&[("Size", 10), ("Root", 1)]);
        d.add_all(&dict(&[("Size", 5), ("Root", 2), ("Info", 3)]));

        assert_eq!(d.get_int(SIZE, 0), 10);
        assert_eq!(d.get_int(b"Root", 0), 2);
        assert_eq!(d.get_int(b"Info", 0), 3);

        let mut empty = Dict::new();
        empty.add_all(&dict(&[("Size", 5)]));
        assert_eq!(empty.get_int(SIZE, 0), 5);
    }

    #[test]
    fn flags() {
        let mut d = Dict::new();
        d.set_flag(b"Ff", 1 << 1, true);
        d.set_flag(b"Ff", 1 << 3, true);
        assert_eq!(d.get_int(b"Ff", 0), 0b1010);
        assert!(d.get_flag(b"Ff", 1 << 3));

        d.set_flag(b"Ff", 1 << 1, false);
        assert!(!d.get_flag(b"Ff", 1 << 1));
        assert_eq!(d.get_int(b"Ff", 0), 0b1000);
    }

    #[test]
    fn embedded_values() {
        let mut d = Dict::new();
        assert_eq!(d.get_embedded_int(b"MK", b"R", 0), 0);

        d.set_embedded_int(b"MK", b"R", 90);
        d.set_embedded_string(b"MK", b"CA", Some(PdfString::new(b"4")));
        assert_eq!(d.get_embedded_int(b"MK", b"R", 0), 90);
        assert_eq!(d.get_embedded_string(b"MK", b"CA").unwrap(), b"4");

        d.set_embedded_string(b"MK", b"CA", None);
        assert_eq!(d.get_embedded_string(b"MK", b"CA"), None);

        d.set_embedded_string(b"Other", b"CA", None);
        assert!(!d.contains_key(b"Other"));
    }

    #[test]
    fn key_for_value() {
        let pool = ObjectPool::new();
        pool.insert(ObjRef::new(2, 0), Name::new(b"Target"));

        let mut d = Dict::new();
        d.set_int(b"A", 1);
        d.set(b"B", pool.reference(ObjRef::new(2, 0)));

        assert_eq!(d.key_for_value(&Object::from(1)).unwrap(), Name::new(b"A"));
        assert_eq!(
            d.key_for_value(&Object::Name(Name::new(b"Target"))).unwrap(),
            Name::new(b"B")
        );
        assert!(!d.contains_value(&Object::from(3)));
    }

    #[test]
    fn object_from_path() {
        let pool = ObjectPool::new();

        let mut annot = Dict::new();
        annot.set(b"Rect", Array::from_f64_slice(&[0.0, 0.0, 10.0, 20.0]));
        pool.insert(ObjRef::new(9, 0), annot);

        let annots: Array = (0..3)
            .map(|_| Object::Reference(pool.reference(ObjRef::new(9, 0))))
            .collect();

        let mut page = Dict::new();
        page.set(b"Annots", annots);
        let mut root = Dict::new();
        root.set(b"P", page);

        let rect = root.get_object_from_path("P/Annots/[2]/Rect").unwrap();
        assert_eq!(rect.as_array().unwrap().to_f64_vec(), [0.0, 0.0, 10.0, 20.0]);

        assert_eq!(root.get_object_from_path("P/Annots/[5]/Rect"), None);
        assert_eq!(root.get_object_from_path("P/Missing/Rect"), None);
        assert_eq!(root.get_object_from_path("P/[0]"), None);
        assert_eq!(root.get_object_from_path("P/Annots/[x]"), None);
    }

    #[test]
    fn remove_keeps_order() {
        let mut d = dict(&[("A", 1), ("B", 2), ("C", 3)]);
        assert_eq!(d.remove(b"B"), Some(Object::from(2)));
        assert_eq!(d.remove(KIDS), None);

        let keys: Vec<_> = d.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, ["A", "C"]);
    }
}
