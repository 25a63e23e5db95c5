//! Names and the process-wide name registry.

use crate::object::keys;
use crate::sync::RwLockExt;
use rustc_hash::FxHashSet;
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{Arc, LazyLock, RwLock};

/// A PDF name.
///
/// Names are interned: creating the same name twice yields two handles to
/// the same allocation. The content is the decoded byte sequence, without
/// the leading slash and with `#xx` escapes resolved.
#[derive(Clone)]
pub struct Name(Arc<[u8]>);

impl Name {
    /// Return the interned name with the given content.
    pub fn new(bytes: &[u8]) -> Self {
        registry().intern(bytes)
    }

    /// The decoded content of the name.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The content of the name as a string, replacing invalid UTF-8.
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Whether this is the empty name `/`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether both handles point to the same interned name.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Append the PDF representation of the name to `out`.
    ///
    /// Every byte outside of `[A-Za-z0-9+-_.@*$;]` is written as `#XX`.
    pub fn write_pdf(&self, out: &mut Vec<u8>) {
        out.push(b'/');

        for &b in self.as_bytes() {
            if b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'_' | b'.' | b'@' | b'*' | b'$' | b';')
            {
                out.push(b);
            } else {
                out.push(b'#');
                out.push(HEX_DIGITS[(b >> 4) as usize]);
                out.push(HEX_DIGITS[(b & 0x0f) as usize]);
            }
        }
    }

    /// The PDF representation of the name.
    pub fn to_pdf_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.0.len() + 1);
        self.write_pdf(&mut out);
        out
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Borrow<[u8]> for Name {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Name {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Name {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<[u8]> for Name {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for Name {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Name {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl From<&[u8]> for Name {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> From<&[u8; N]> for Name {
    fn from(value: &[u8; N]) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl From<&Self> for Name {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.as_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

/// The registry all names are interned in.
///
/// The well-known names are registered when the registry is first used and
/// stay for the lifetime of the process. Other names are kept in a dynamic
/// table that can be emptied with [`NameRegistry::clear`].
pub struct NameRegistry {
    well_known: FxHashSet<Name>,
    dynamic: RwLock<FxHashSet<Name>>,
}

static REGISTRY: LazyLock<NameRegistry> = LazyLock::new(NameRegistry::new);

/// The process-wide name registry.
pub fn registry() -> &'static NameRegistry {
    &REGISTRY
}

impl NameRegistry {
    fn new() -> Self {
        let well_known = keys::ALL
            .iter()
            .map(|bytes| Name(Arc::from(*bytes)))
            .collect();

        Self {
            well_known,
            dynamic: RwLock::new(FxHashSet::default()),
        }
    }

    /// Return the name with the given content, registering it if necessary.
    pub fn intern(&self, bytes: &[u8]) -> Name {
        if let Some(name) = self.well_known.get(bytes) {
            return name.clone();
        }

        if let Some(name) = self.dynamic.get().get(bytes) {
            return name.clone();
        }

        let mut dynamic = self.dynamic.put();

        // Another thread might have been faster.
        if let Some(name) = dynamic.get(bytes) {
            return name.clone();
        }

        let name = Name(Arc::from(bytes));
        dynamic.insert(name.clone());

        name
    }

    /// Whether `bytes` is one of the predefined names.
    pub fn is_well_known(&self, bytes: &[u8]) -> bool {
        self.well_known.contains(bytes)
    }

    /// The number of registered names.
    pub fn len(&self) -> usize {
        self.well_known.len() + self.dynamic.get().len()
    }

    /// Whether no names are registered, which is never the case.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all names that are not predefined.
    ///
    /// Existing handles stay valid, but names created afterwards are no
    /// longer pointer-equal to them.
    pub fn clear(&self) {
        self.dynamic.put().clear();
    }
}
