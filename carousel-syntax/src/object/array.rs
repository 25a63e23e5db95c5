//! Arrays.

use crate::object::{Name, Number, Object, PdfString, Visitor};
use std::fmt;
use std::sync::Arc;

/// A PDF array.
///
/// Like [`Dict`](crate::object::Dict), cloning an array is shallow and
/// copy-on-write.
#[derive(Clone, Default)]
pub struct Array {
    items: Arc<Vec<Object>>,
    direct: bool,
}

impl Array {
    /// Create a new, empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an element.
    pub fn push(&mut self, object: impl Into<Object>) {
        self.items_mut().push(object.into());
    }

    /// Append all elements of `objects`.
    pub fn add_all<T: Into<Object>>(&mut self, objects: impl IntoIterator<Item = T>) {
        self.items_mut()
            .extend(objects.into_iter().map(Into::into));
    }

    /// Insert an element at `index`, shifting all later elements.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, object: impl Into<Object>) {
        self.items_mut().insert(index, object.into());
    }

    /// Replace the element at `index`, returning the previous one.
    ///
    /// Returns `None` and leaves the array unchanged if `index` is out of
    /// bounds.
    pub fn set(&mut self, index: usize, object: impl Into<Object>) -> Option<Object> {
        if index >= self.len() {
            return None;
        }

        Some(std::mem::replace(
            &mut self.items_mut()[index],
            object.into(),
        ))
    }

    /// Return the element at `index` without resolving references.
    pub fn get(&self, index: usize) -> Option<&Object> {
        self.items.get(index)
    }

    /// Return the element at `index`, resolving a reference by one level.
    pub fn get_object(&self, index: usize) -> Option<Object> {
        self.items.get(index)?.resolve()
    }

    /// Remove the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<Object> {
        if index >= self.len() {
            return None;
        }

        Some(self.items_mut().remove(index))
    }

    /// Remove the first element that equals `value`. If there is none, the
    /// first reference whose referent equals `value` is removed instead.
    pub fn remove_value(&mut self, value: &Object) -> bool {
        let index = self.index_of(value).or_else(|| {
            self.items
                .iter()
                .position(|o| o.as_reference().is_some() && o.matches_resolved(value))
        });

        index.and_then(|i| self.remove_at(i)).is_some()
    }

    /// Remove every element that equals one of `values`.
    pub fn remove_all(&mut self, values: &[Object]) -> bool {
        let before = self.len();
        self.items_mut().retain(|o| !values.contains(o));

        self.len() != before
    }

    /// Keep only the elements that equal one of `values`.
    pub fn retain_all(&mut self, values: &[Object]) -> bool {
        let before = self.len();
        self.items_mut().retain(|o| values.contains(o));

        self.len() != before
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.items_mut().clear();
        }
    }

    /// The index of the first element equal to `value`.
    pub fn index_of(&self, value: &Object) -> Option<usize> {
        self.items.iter().position(|o| o == value)
    }

    /// The index of the first element that equals `value`, either directly
    /// or after resolving a reference.
    pub fn index_of_object(&self, value: &Object) -> Option<usize> {
        self.items
            .iter()
            .position(|o| o.matches_resolved(value))
    }

    /// Append `fill` until the array has at least `size` elements.
    pub fn grow_to_size(&mut self, size: usize, fill: impl Into<Object>) {
        if self.len() < size {
            let fill = fill.into();
            self.items_mut().resize(size, fill);
        }
    }

    /// The integer at `index`, or `default` if it's not a number.
    pub fn get_int(&self, index: usize, default: i64) -> i64 {
        self.get_object(index)
            .and_then(|o| o.as_i64())
            .unwrap_or(default)
    }

    /// The name at `index`.
    pub fn get_name(&self, index: usize) -> Option<Name> {
        match self.get_object(index)? {
            Object::Name(n) => Some(n),
            _ => None,
        }
    }

    /// The string at `index`.
    pub fn get_string(&self, index: usize) -> Option<PdfString> {
        match self.get_object(index)? {
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    /// Replace the element at `index` with an integer.
    pub fn set_int(&mut self, index: usize, value: i64) -> Option<Object> {
        self.set(index, value)
    }

    /// Replace the element at `index` with a name.
    pub fn set_name(&mut self, index: usize, value: impl Into<Name>) -> Option<Object> {
        self.set(index, value.into())
    }

    /// Replace the element at `index` with a string.
    pub fn set_string(&mut self, index: usize, value: impl Into<PdfString>) -> Option<Object> {
        self.set(index, value.into())
    }

    /// The elements as floats. Elements that aren't numbers become zero.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| {
                self.get_object(i)
                    .and_then(|o| o.as_f64())
                    .unwrap_or(0.0)
            })
            .collect()
    }

    /// Create an array of reals.
    pub fn from_f64_slice(values: &[f64]) -> Self {
        values.iter().map(|v| Object::Number(Number::Real(*v))).collect()
    }

    /// Iterate over the raw elements.
    pub fn iter(&self) -> impl Iterator<Item = &Object> {
        self.items.iter()
    }

    /// Copy the array and all of its children.
    pub fn deep_clone(&self) -> Self {
        Self {
            items: Arc::new(self.iter().map(Object::deep_clone).collect()),
            direct: self.direct,
        }
    }

    /// Whether the array must be written inline.
    pub fn is_direct(&self) -> bool {
        self.direct
    }

    /// Mark the array as one that must be written inline.
    pub fn set_direct(&mut self, direct: bool) {
        self.direct = direct;
    }

    /// Dispatch to [`Visitor::visit_array`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_array(self)
    }

    fn items_mut(&mut self) -> &mut Vec<Object> {
        Arc::make_mut(&mut self.items)
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items) || self.items == other.items
    }
}

impl<T: Into<Object>> FromIterator<T> for Array {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Arc::new(iter.into_iter().map(Into::into).collect()),
            direct: false,
        }
    }
}

impl From<Vec<Object>> for Array {
    fn from(items: Vec<Object>) -> Self {
        Self {
            items: Arc::new(items),
            direct: false,
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Array;
    use crate::object::{Dict, Name, Object, ObjRef, ObjectPool};

    fn ints(values: &[i64]) -> Array {
        values.iter().copied().collect()
    }

    #[test]
    fn insert_and_set() {
        let mut a = ints(&[1, 3]);
        a.insert(1, 2);
        assert_eq!(a, ints(&[1, 2, 3]));

        assert_eq!(a.set(0, 10), Some(Object::from(1)));
        assert_eq!(a.set(5, 10), None);
        assert_eq!(a, ints(&[10, 2, 3]));
    }

    #[test]
    #[should_panic]
    fn insert_out_of_bounds() {
        ints(&[1]).insert(3, 0);
    }

    #[test]
    fn remove_at_and_value() {
        let mut a = ints(&[1, 2, 3, 2]);
        assert_eq!(a.remove_at(0), Some(Object::from(1)));
        assert_eq!(a.remove_at(9), None);

        assert!(a.remove_value(&Object::from(2)));
        assert_eq!(a, ints(&[3, 2]));
        assert!(!a.remove_value(&Object::from(7)));
    }

    #[test]
    fn remove_value_through_reference() {
        let pool = ObjectPool::new();
        pool.insert(ObjRef::new(3, 0), Name::new(b"Page"));

        let mut a = Array::new();
        a.push(1);
        a.push(pool.reference(ObjRef::new(3, 0)));

        assert!(a.remove_value(&Object::Name(Name::new(b"Page"))));
        assert_eq!(a, ints(&[1]));
    }

    #[test]
    fn remove_and_retain_all() {
        let mut a = ints(&[1, 2, 3, 4, 2]);
        assert!(a.remove_all(&[Object::from(2), Object::from(4)]));
        assert_eq!(a, ints(&[1, 3]));
        assert!(!a.remove_all(&[Object::from(9)]));

        let mut b = ints(&[1, 2, 3, 4]);
        assert!(b.retain_all(&[Object::from(2), Object::from(4)]));
        assert_eq!(b, ints(&[2, 4]));
    }

    #[test]
    fn index_of_object_matches_referents() {
        let pool = ObjectPool::new();
        let mut page = Dict::new();
        page.set_name(b"Type", b"Page");
        pool.insert(ObjRef::new(5, 0), page.clone());

        let mut kids = Array::new();
        kids.push(pool.reference(ObjRef::new(4, 0)));
        kids.push(pool.reference(ObjRef::new(5, 0)));

        assert_eq!(kids.index_of(&Object::Dict(page.clone())), None);
        assert_eq!(kids.index_of_object(&Object::Dict(page)), Some(1));
        assert_eq!(
            kids.index_of_object(&Object::Reference(pool.reference(ObjRef::new(4, 0)))),
            Some(0)
        );
    }

    #[test]
    fn resolved_and_raw_access() {
        let pool = ObjectPool::new();
        pool.insert(ObjRef::new(1, 0), 99);

        let mut a = Array::new();
        a.push(pool.reference(ObjRef::new(1, 0)));
        a.push(Object::Null);

        assert!(a.get(0).unwrap().as_reference().is_some());
        assert_eq!(a.get_object(0), Some(Object::from(99)));
        assert_eq!(a.get_int(0, 0), 99);
        assert_eq!(a.get_object(1), None);
        assert_eq!(a.get_object(2), None);
    }

    #[test]
    fn grow_to_size() {
        let mut a = ints(&[1]);
        a.grow_to_size(3, Object::Null);
        assert_eq!(a.len(), 3);
        assert!(a.get(2).unwrap().is_null());

        a.grow_to_size(2, 5);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn typed_access() {
        let mut a = ints(&[0, 0, 0]);
        a.set_name(0, b"Fit");
        a.set_string(1, "label");
        a.set_int(2, 4);

        assert_eq!(a.get_name(0).unwrap(), Name::new(b"Fit"));
        assert_eq!(a.get_string(1).unwrap(), b"label");
        assert_eq!(a.get_int(2, 0), 4);
        assert_eq!(a.get_int(0, -1), -1);
        assert_eq!(a.get_name(1), None);
    }

    #[test]
    fn floats() {
        let a = Array::from_f64_slice(&[0.5, 1.0]);
        assert_eq!(a.to_f64_vec(), [0.5, 1.0]);

        let mut mixed = ints(&[1, 2]);
        mixed.push(Name::new(b"X"));
        assert_eq!(mixed.to_f64_vec(), [1.0, 2.0, 0.0]);
    }

    #[test]
    fn shallow_clone_is_copy_on_write() {
        let original = ints(&[1, 2]);
        let mut copy = original.clone();
        copy.push(3);

        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 3);
    }
}
