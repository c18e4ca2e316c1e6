use core::any::{Any, TypeId, type_name};
use core::fmt;
use core::hash::{Hash, Hasher};

use alloc::string::String;

// -----------------------------------------------------------------------------
// TypeToken

/// An opaque, comparable type identity.
///
/// Pairs the [`TypeId`] of a type with its display name. Equality and hashing
/// consider only the id; the name exists for error messages and logging.
///
/// A token can name unsized types, so trait objects participate in
/// polymorphic dispatch the same way concrete types do:
///
/// ```
/// use gx_ser::TypeToken;
///
/// trait Animal {}
///
/// let declared = TypeToken::of::<dyn Animal>();
/// let actual = TypeToken::of::<u32>();
/// assert_ne!(declared, actual);
/// assert_eq!(declared, TypeToken::of::<dyn Animal>());
/// ```
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// The token of the type `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying [`TypeId`].
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// The display name of the type.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken(`{}`)", self.name)
    }
}

// -----------------------------------------------------------------------------
// ObjectIdentity

/// The runtime identity of a value, distinct from its content equality.
///
/// Identity is the address of the referent. A serialization call is a single
/// synchronous pass over a graph the caller keeps alive and borrowed for the
/// whole call, so referent addresses are stable for exactly the lifetime the
/// reference table needs them.
///
/// ```
/// use gx_ser::ObjectIdentity;
///
/// let a = String::from("left");
/// let b = a.clone();
///
/// assert_eq!(ObjectIdentity::of(&a), ObjectIdentity::of(&a));
/// // Equal content, distinct objects.
/// assert_ne!(ObjectIdentity::of(&a), ObjectIdentity::of(&b));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ObjectIdentity(usize);

impl ObjectIdentity {
    /// The identity of the referenced value.
    #[inline]
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self(core::ptr::from_ref(value).cast::<()>() as usize)
    }
}

// -----------------------------------------------------------------------------
// GraphObject

/// A value that can appear in a serialized object graph.
///
/// The trait exposes the two facts the write context needs about any value:
/// its runtime type (as a [`TypeToken`]) and a way to reach the concrete
/// value again ([`as_any`](GraphObject::as_any), used by contracts to
/// downcast).
///
/// It is implemented for every `T: Any`. Polymorphic object models declare
/// `GraphObject` as a supertrait of their own object trait and upcast at the
/// call site:
///
/// ```
/// use gx_ser::{GraphObject, TypeToken};
///
/// trait Animal: GraphObject {}
///
/// struct Dog;
/// impl Animal for Dog {}
///
/// let dog: &dyn Animal = &Dog;
/// let object: &dyn GraphObject = dog;
/// assert_eq!(object.type_token(), TypeToken::of::<Dog>());
/// ```
pub trait GraphObject: Any {
    /// The token of the value's runtime type.
    fn type_token(&self) -> TypeToken;

    /// The value as [`Any`], for downcasting inside contracts.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> GraphObject for T {
    #[inline]
    fn type_token(&self) -> TypeToken {
        TypeToken::of::<T>()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// -----------------------------------------------------------------------------
// Leaf value types

/// A locator (URI) leaf value.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Locator(pub String);

impl Locator {
    /// The locator as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A qualified-name leaf value.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct QualifiedName {
    pub name: String,
    pub namespace: String,
}

impl QualifiedName {
    #[inline]
    pub const fn new(name: String, namespace: String) -> Self {
        Self { name, namespace }
    }
}

/// A primitive value handed to the markup sink.
///
/// Wire-level rendering (escaping, base64 and the like) belongs to the sink.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Primitive<'a> {
    /// A text string.
    Text(&'a str),
    /// A binary blob.
    Binary(&'a [u8]),
    /// A locator (URI).
    Locator(&'a str),
    /// A qualified name.
    QName(&'a QualifiedName),
}

// -----------------------------------------------------------------------------
// Tests
