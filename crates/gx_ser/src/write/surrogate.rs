use core::any::TypeId;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::WriteError;
use crate::sink::MarkupSink;
use crate::value::{GraphObject, Locator, ObjectIdentity, QualifiedName, TypeToken};

use super::context::WriteContext;

/// The leaf kinds whose content the context writes itself; they never carry
/// a contract and are serializable by construction.
fn is_leaf_type(id: TypeId) -> bool {
    id == TypeId::of::<String>()
        || id == TypeId::of::<Vec<u8>>()
        || id == TypeId::of::<Locator>()
        || id == TypeId::of::<QualifiedName>()
}

// -----------------------------------------------------------------------------
// SurrogateProvider

/// A pluggable substitute for objects and types, swapped in immediately
/// before a value is written and transparent to the rest of the pipeline.
///
/// The provider is optional and injected per session; its absence is the
/// null-object configuration in which every operation below is a pass-through.
///
/// Substitute objects are handed out as `Rc` so a provider can cache one
/// substitute per original and keep the substitute's identity stable across
/// repeated writes within a session.
pub trait SurrogateProvider {
    /// The replacement for a declared type. Returning the input unchanged
    /// means no substitution.
    fn surrogate_type(&self, ty: TypeToken) -> TypeToken;

    /// The replacement for an object about to be written under the (already
    /// substituted) declared type. `None` means the object is unchanged.
    fn surrogate_object(
        &self,
        object: &dyn GraphObject,
        declared: TypeToken,
    ) -> Option<Rc<dyn GraphObject>>;
}

// -----------------------------------------------------------------------------
// Substitution pipeline

impl WriteContext<'_> {
    /// Resolves the (possibly substituted) declared type.
    ///
    /// Pass-through without a provider. With one, a substitution that changes
    /// the type of a get-only collection is an error: such collections are
    /// populated in place and can never be replaced by a different type.
    pub fn surrogate_type(&self, ty: TypeToken) -> Result<TypeToken, WriteError> {
        let Some(provider) = self.surrogate else {
            return Ok(ty);
        };
        let substituted = provider.surrogate_type(ty);
        if self.is_get_only_collection() && substituted != ty {
            return Err(WriteError::SurrogateOnGetOnlyCollection {
                type_name: ty.name(),
            });
        }
        Ok(substituted)
    }

    /// Verifies that a member type participates in serialization.
    ///
    /// With a provider, the member type is first mapped to its contract type;
    /// built-in leaf kinds pass unconditionally, anything else requires a
    /// registered contract and fails naming the offending type otherwise.
    /// Without one, the caller's own knowledge (`is_member_serializable`)
    /// decides.
    ///
    /// Container members are checked through their element tokens; a Rust
    /// collection has no runtime dimensions to strip.
    pub fn check_serializable(
        &self,
        member: TypeToken,
        is_member_serializable: bool,
    ) -> Result<(), WriteError> {
        if let Some(provider) = self.surrogate {
            let contract_type = provider.surrogate_type(member);
            if is_leaf_type(contract_type.id()) || self.registry.contains(contract_type.id()) {
                return Ok(());
            }
            return Err(WriteError::NotSerializable {
                type_name: contract_type.name(),
            });
        }
        if is_member_serializable {
            Ok(())
        } else {
            Err(WriteError::NotSerializable {
                type_name: member.name(),
            })
        }
    }

    /// The surrogate-aware counterpart of [`write_value`].
    ///
    /// Substitutes the declared type, then the object. When the substitution
    /// replaced the object, the nested write runs inside a reference-table
    /// re-key window: the original's id (if any) is moved onto the substitute
    /// before writing and moved back on every exit path afterwards, so later
    /// re-encounters of the original still resolve to its stable id.
    ///
    /// [`write_value`]: WriteContext::write_value
    pub(super) fn serialize_with_surrogate(
        &mut self,
        provider: &dyn SurrogateProvider,
        sink: &mut dyn MarkupSink,
        object: &dyn GraphObject,
        is_declared_type: bool,
        write_explicit_type: bool,
        declared: TypeToken,
    ) -> Result<(), WriteError> {
        let actual = if is_declared_type {
            declared
        } else {
            object.type_token()
        };
        let declared = self.surrogate_type(declared)?;

        match provider.surrogate_object(object, declared) {
            None => self.write_with_dispatch(sink, object, actual, declared, write_explicit_type),
            Some(substitute) => {
                let substitute: &dyn GraphObject = &*substitute;
                let original_identity = ObjectIdentity::of(object);
                let substitute_identity = ObjectIdentity::of(substitute);
                let actual = substitute.type_token();

                if substitute_identity == original_identity {
                    return self.write_with_dispatch(
                        sink,
                        substitute,
                        actual,
                        declared,
                        write_explicit_type,
                    );
                }

                log::trace!(
                    "substituting object of type `{}` for writing as `{}`",
                    object.type_token().name(),
                    actual.name(),
                );
                self.with_reassigned(original_identity, substitute_identity, |ctx| {
                    ctx.write_with_dispatch(sink, substitute, actual, declared, write_explicit_type)
                })
            }
        }
    }

    /// Runs `write` inside a re-key window: `original`'s id is moved onto
    /// `substitute` before, and restored after, on every exit path including
    /// early error returns.
    fn with_reassigned<R>(
        &mut self,
        original: ObjectIdentity,
        substitute: ObjectIdentity,
        write: impl FnOnce(&mut Self) -> Result<R, WriteError>,
    ) -> Result<R, WriteError> {
        let moved = self.refs.reassign(None, original, substitute);
        let result = write(self);
        self.refs.reassign(moved, substitute, original);
        result
    }
}

// -----------------------------------------------------------------------------
// Tests
