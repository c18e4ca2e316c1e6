//! Reserved names for serialization metadata.
//!
//! Identity and type metadata produced by the write context live under two
//! reserved namespace/prefix pairs, so they can never collide with
//! contract-defined element or attribute names:
//!
//! - the serialization namespace carries [`ID_LOCAL_NAME`],
//!   [`REF_LOCAL_NAME`] and [`SIZE_LOCAL_NAME`];
//! - the schema-instance namespace carries [`NIL_LOCAL_NAME`] and
//!   [`TYPE_LOCAL_NAME`].

use alloc::string::String;
use alloc::format;

/// Prefix reserved for the serialization metadata namespace.
pub const SER_PREFIX: &str = "z";

/// Namespace holding session-scoped serialization metadata.
pub const SER_NAMESPACE: &str = "urn:gx:serialization";

/// Prefix reserved for the schema-instance namespace.
pub const XSI_PREFIX: &str = "i";

/// The XML schema-instance namespace (nil and type markers).
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Prefix used for elements written into an explicit namespace.
pub const ELEMENT_PREFIX: &str = "q";

/// Attribute marking the first occurrence of a tracked object.
pub const ID_LOCAL_NAME: &str = "id";

/// Attribute carrying a backreference to a previously written object.
pub const REF_LOCAL_NAME: &str = "ref";

/// Attribute marking an element with empty content.
pub const NIL_LOCAL_NAME: &str = "nil";

/// Attribute hinting the length of an array element to the reader.
pub const SIZE_LOCAL_NAME: &str = "size";

/// Attribute carrying an explicit type annotation.
pub const TYPE_LOCAL_NAME: &str = "type";

/// Renders a namespace/name pair as a single attribute value.
///
/// Uses Clark notation (`{namespace}name`) when the namespace is non-empty,
/// and the bare name otherwise, keeping annotation values self-contained for
/// sinks that do not track namespace bindings.
pub fn annotation_value(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        String::from(name)
    } else {
        format!("{{{namespace}}}{name}")
    }
}
