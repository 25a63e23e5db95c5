//! Indirect references and the object pool they are resolved against.

use crate::object::Object;
use crate::sync::RwLockExt;
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock, Weak};

/// The identifier of an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjRef {
    /// The object number.
    pub obj_number: u64,
    /// The generation number.
    pub gen_number: u32,
}

impl ObjRef {
    /// Create a new object identifier.
    pub fn new(obj_number: u64, gen_number: u32) -> Self {
        Self {
            obj_number,
            gen_number,
        }
    }
}

impl fmt::Display for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.obj_number, self.gen_number)
    }
}

/// Looks up indirect objects by their identifier.
///
/// The document layer owns the actual objects; the object model only keeps
/// weak handles to a resolver.
pub trait Resolver: Send + Sync {
    /// Return the object with the given identifier, if it exists.
    fn resolve(&self, id: ObjRef) -> Option<Object>;
}

/// An indirect reference inside of the object graph.
///
/// The reference does not own its referent. It keeps a weak handle to the
/// resolver it was created with, so a reference that outlives its pool
/// simply resolves to nothing.
#[derive(Clone)]
pub struct Reference {
    id: ObjRef,
    resolver: Option<Weak<dyn Resolver>>,
}

impl Reference {
    /// Create a reference that is resolved against `resolver`.
    pub fn new(id: ObjRef, resolver: &Arc<dyn Resolver>) -> Self {
        Self {
            id,
            resolver: Some(Arc::downgrade(resolver)),
        }
    }

    /// Create a reference that cannot be resolved.
    pub fn unresolved(id: ObjRef) -> Self {
        Self { id, resolver: None }
    }

    /// The identifier of the referenced object.
    pub fn id(&self) -> ObjRef {
        self.id
    }

    /// Resolve the reference by one level.
    ///
    /// A referent of `null` is treated like a missing object.
    pub fn resolve(&self) -> Option<Object> {
        let resolver = self.resolver.as_ref()?.upgrade()?;

        match resolver.resolve(self.id)? {
            Object::Null => None,
            object => Some(object),
        }
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Reference {}

impl Hash for Reference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A simple in-memory object pool.
#[derive(Default)]
pub struct ObjectPool {
    objects: RwLock<FxHashMap<ObjRef, Object>>,
}

impl ObjectPool {
    /// Create a new, empty pool.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Store `object` under `id`, returning the previous object.
    pub fn insert(&self, id: ObjRef, object: impl Into<Object>) -> Option<Object> {
        self.objects.put().insert(id, object.into())
    }

    /// Remove the object stored under `id`.
    pub fn remove(&self, id: ObjRef) -> Option<Object> {
        self.objects.put().remove(&id)
    }

    /// Return the object stored under `id`.
    pub fn get(&self, id: ObjRef) -> Option<Object> {
        self.objects.get().get(&id).cloned()
    }

    /// The number of objects in the pool.
    pub fn len(&self) -> usize {
        self.objects.get().len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a reference to `id` that resolves against this pool.
    pub fn reference(self: &Arc<Self>, id: ObjRef) -> Reference {
        let resolver: Arc<dyn Resolver> = self.clone();
        Reference::new(id, &resolver)
    }
}

impl Resolver for ObjectPool {
    fn resolve(&self, id: ObjRef) -> Option<Object> {
        self.get(id)
    }
}

impl fmt::Debug for ObjectPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ObjRef, ObjectPool, Reference};
    use crate::object::Object;

    #[test]
    fn resolve_through_pool() {
        let pool = ObjectPool::new();
        pool.insert(ObjRef::new(3, 0), 42);

        let reference = pool.reference(ObjRef::new(3, 0));
        assert_eq!(reference.resolve(), Some(Object::from(42)));
        assert_eq!(pool.reference(ObjRef::new(4, 0)).resolve(), None);
    }

    #[test]
    fn null_referent() {
        let pool = ObjectPool::new();
        pool.insert(ObjRef::new(1, 0), Object::Null);
        assert_eq!(pool.reference(ObjRef::new(1, 0)).resolve(), None);
    }

    #[test]
    fn pool_dropped() {
        let pool = ObjectPool::new();
        pool.insert(ObjRef::new(1, 0), true);
        let reference = pool.reference(ObjRef::new(1, 0));
        drop(pool);

        assert_eq!(reference.resolve(), None);
    }

    #[test]
    fn equality_by_id() {
        let pool = ObjectPool::new();
        assert_eq!(
            pool.reference(ObjRef::new(5, 1)),
            Reference::unresolved(ObjRef::new(5, 1))
        );
        assert_eq!(ObjRef::new(5, 1).to_string(), "5 1 R");
    }
}
