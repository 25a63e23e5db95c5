//! The object model.
//!
//! Objects form a tree: arrays and dictionaries own their children, while
//! indirect objects are owned by an object pool and referred to through
//! [`Reference`]s.

mod array;
mod dict;
pub mod keys;
mod name;
mod number;
mod reference;
mod stream;
mod string;
mod visitor;

pub use array::Array;
pub use dict::Dict;
pub use name::{Name, NameRegistry, registry};
pub use number::Number;
pub use reference::{ObjRef, ObjectPool, Reference, Resolver};
pub use stream::Stream;
pub use string::PdfString;
pub use visitor::Visitor;

/// A PDF object.
///
/// Cloning an object is cheap: containers share their children until one of
/// the clones is modified. Use [`Object::deep_clone`] for a fully independent
/// copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Object {
    /// The null object.
    #[default]
    Null,
    /// A boolean.
    Boolean(bool),
    /// A number.
    Number(Number),
    /// A string.
    String(PdfString),
    /// A name.
    Name(Name),
    /// An array.
    Array(Array),
    /// A dictionary.
    Dict(Dict),
    /// A stream.
    Stream(Stream),
    /// An indirect reference.
    Reference(Reference),
}

impl Object {
    /// Resolve indirect references by one level.
    ///
    /// Returns `None` for `null` and for references that point to nothing.
    pub fn resolve(&self) -> Option<Self> {
        match self {
            Self::Null => None,
            Self::Reference(r) => r.resolve(),
            other => Some(other.clone()),
        }
    }

    /// Whether `self` equals `other`, or is a reference whose referent
    /// equals `other`.
    ///
    /// Equality is structural.
    pub fn matches_resolved(&self, other: &Self) -> bool {
        if self == other {
            return true;
        }

        match self {
            Self::Reference(r) => r.resolve().is_some_and(|resolved| resolved == *other),
            _ => false,
        }
    }

    /// Whether this object must be written inline.
    ///
    /// Only arrays and dictionaries carry a flag, all other objects except
    /// streams are always direct.
    pub fn is_direct(&self) -> bool {
        match self {
            Self::Array(a) => a.is_direct(),
            Self::Dict(d) => d.is_direct(),
            Self::Stream(_) => false,
            _ => true,
        }
    }

    /// Mark an array or dictionary as direct. Has no effect on other
    /// objects.
    pub fn set_direct(&mut self, direct: bool) {
        match self {
            Self::Array(a) => a.set_direct(direct),
            Self::Dict(d) => d.set_direct(direct),
            _ => {}
        }
    }

    /// Copy the object and all of its children.
    ///
    /// Nested streams are shared with the original, since a stream is always
    /// an indirect object.
    pub fn deep_clone(&self) -> Self {
        match self {
            Self::Array(a) => Self::Array(a.deep_clone()),
            Self::Dict(d) => Self::Dict(d.deep_clone()),
            other => other.clone(),
        }
    }

    /// Dispatch to the method of `visitor` that matches this object.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Null => visitor.visit_null(),
            Self::Boolean(b) => visitor.visit_boolean(*b),
            Self::Number(n) => visitor.visit_number(n),
            Self::String(s) => visitor.visit_string(s),
            Self::Name(n) => visitor.visit_name(n),
            Self::Array(a) => a.accept(visitor),
            Self::Dict(d) => d.accept(visitor),
            Self::Stream(s) => s.accept(visitor),
            Self::Reference(r) => visitor.visit_reference(r),
        }
    }

    /// Whether this is the null object.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The value of a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The value of a number.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value of a number as an integer, truncating reals.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().map(|n| n.as_i64())
    }

    /// The value of a number as a float.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|n| n.as_f64())
    }

    /// The name, if this is one.
    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Self::Name(n) => Some(n),
            _ => None,
        }
    }

    /// The string, if this is one.
    pub fn as_string(&self) -> Option<&PdfString> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The array, if this is one.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The dictionary, if this is one. Streams yield their dictionary.
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Self::Dict(d) => Some(d),
            Self::Stream(s) => Some(s.dict()),
            _ => None,
        }
    }

    /// The stream, if this is one.
    pub fn as_stream(&self) -> Option<&Stream> {
        match self {
            Self::Stream(s) => Some(s),
            _ => None,
        }
    }

    /// The reference, if this is one.
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Reference(r) => Some(r),
            _ => None,
        }
    }
}

macro_rules! object_from {
    ($($ty:ty => |$v:ident| $e:expr),* $(,)?) => {
        $(
            impl From<$ty> for Object {
                fn from($v: $ty) -> Self {
                    $e
                }
            }
        )*
    };
}

object_from! {
    bool => |v| Self::Boolean(v),
    i64 => |v| Self::Number(Number::Integer(v)),
    i32 => |v| Self::Number(Number::from(v)),
    u32 => |v| Self::Number(Number::from(v)),
    f64 => |v| Self::Number(Number::Real(v)),
    f32 => |v| Self::Number(Number::from(v)),
    Number => |v| Self::Number(v),
    Name => |v| Self::Name(v),
    &Name => |v| Self::Name(v.clone()),
    PdfString => |v| Self::String(v),
    Array => |v| Self::Array(v),
    Dict => |v| Self::Dict(v),
    Stream => |v| Self::Stream(v),
    Reference => |v| Self::Reference(v),
    &Object => |v| v.clone(),
}

impl<T: Into<Self>> From<Option<T>> for Object {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
