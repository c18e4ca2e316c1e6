use alloc::string::ToString;

use crate::contract::ContractRegistry;
use crate::error::WriteError;
use crate::names;
use crate::sink::MarkupSink;
use crate::value::{GraphObject, ObjectIdentity, TypeToken};

use super::ref_table::ReferenceTable;
use super::surrogate::SurrogateProvider;

// -----------------------------------------------------------------------------
// SessionOptions

/// Configuration of one serialization session.
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    /// Identity preservation: repeated references to the same object are
    /// encoded once and backreferenced thereafter.
    pub preserve_references: bool,

    /// Upper bound on the number of values written in one session.
    pub max_items: usize,
}

impl SessionOptions {
    /// Options with identity preservation off and no item quota.
    #[inline]
    pub const fn new() -> Self {
        Self {
            preserve_references: false,
            max_items: usize::MAX,
        }
    }

    /// Options with identity preservation on and no item quota.
    #[inline]
    pub const fn preserving() -> Self {
        Self {
            preserve_references: true,
            max_items: usize::MAX,
        }
    }
}

impl Default for SessionOptions {
    /// See [`SessionOptions::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// WriteContext

/// The orchestrator of one serialization call.
///
/// For each value, the context runs surrogate substitution, then reference
/// tracking, then polymorphic dispatch, and finally delegates structural
/// writing to the value's [`Contract`]. Contracts recurse into nested values
/// back through [`write_value`](Self::write_value), so the whole graph shares
/// one [`ReferenceTable`].
///
/// [`Contract`]: crate::contract::Contract
///
/// A context is exclusively owned by one in-flight call and must not be
/// reused across logically separate documents; construct a fresh one per
/// top-level serialization.
///
/// # Example
///
/// ```
/// use gx_ser::contract::ContractRegistry;
/// use gx_ser::write::{SessionOptions, WriteContext};
/// use gx_ser::NullSink;
///
/// let registry = ContractRegistry::new();
/// let mut ctx = WriteContext::new(&registry, SessionOptions::preserving());
/// let mut sink = NullSink;
///
/// // A leaf write assigns id 1 to the string's identity.
/// let greeting = String::from("hello");
/// ctx.write_text_element(&mut sink, Some(&greeting), "Greeting", "").unwrap();
/// ```
pub struct WriteContext<'a> {
    pub(super) registry: &'a ContractRegistry,
    pub(super) surrogate: Option<&'a dyn SurrogateProvider>,
    pub(super) options: SessionOptions,
    pub(super) refs: ReferenceTable,
    item_count: usize,
    get_only_collection: bool,
}

impl<'a> WriteContext<'a> {
    /// Creates a context without surrogate substitution.
    pub fn new(registry: &'a ContractRegistry, options: SessionOptions) -> Self {
        Self {
            registry,
            surrogate: None,
            options,
            refs: ReferenceTable::new(),
            item_count: 0,
            get_only_collection: false,
        }
    }

    /// Creates a context with an injected surrogate provider.
    pub fn with_surrogate(
        registry: &'a ContractRegistry,
        options: SessionOptions,
        provider: &'a dyn SurrogateProvider,
    ) -> Self {
        Self {
            surrogate: Some(provider),
            ..Self::new(registry, options)
        }
    }

    /// The session options.
    #[inline]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Whether the current traversal position is inside a get-only
    /// collection (a collection exposed without a setter, populated in place).
    ///
    /// Identity preservation and type-changing substitution are both
    /// suspended inside such collections.
    #[inline]
    pub fn is_get_only_collection(&self) -> bool {
        self.get_only_collection
    }

    /// Marks the traversal as inside (or outside) a get-only collection,
    /// returning the previous value so contract implementations can restore
    /// it after writing the collection's members.
    #[inline]
    pub fn set_get_only_collection(&mut self, value: bool) -> bool {
        core::mem::replace(&mut self.get_only_collection, value)
    }

    /// Counts `count` values against the session item quota.
    pub fn increment_item_count(&mut self, count: usize) -> Result<(), WriteError> {
        self.item_count = self.item_count.saturating_add(count);
        if self.item_count > self.options.max_items {
            return Err(WriteError::QuotaExceeded {
                max: self.options.max_items,
            });
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Orchestration

    /// Writes one value: the single entry point used for every non-leaf value
    /// in the graph.
    ///
    /// `declared` is the statically expected type at this position.
    /// `is_declared_type` asserts that the value's runtime type is known to
    /// equal `declared`, skipping the runtime lookup. `write_explicit_type`
    /// forces a type annotation regardless of the comparison (used for roots
    /// declared as "any value").
    pub fn write_value(
        &mut self,
        sink: &mut dyn MarkupSink,
        object: &dyn GraphObject,
        is_declared_type: bool,
        write_explicit_type: bool,
        declared: TypeToken,
    ) -> Result<(), WriteError> {
        self.increment_item_count(1)?;
        match self.surrogate {
            None => {
                let actual = if is_declared_type {
                    declared
                } else {
                    object.type_token()
                };
                self.write_with_dispatch(sink, object, actual, declared, write_explicit_type)
            }
            Some(provider) => self.serialize_with_surrogate(
                provider,
                sink,
                object,
                is_declared_type,
                write_explicit_type,
                declared,
            ),
        }
    }

    /// Polymorphic dispatch: actual equals declared writes without a type
    /// annotation; a mismatch (or a forced annotation) writes through the
    /// actual type's contract with exactly one annotation.
    pub(super) fn write_with_dispatch(
        &mut self,
        sink: &mut dyn MarkupSink,
        object: &dyn GraphObject,
        actual: TypeToken,
        declared: TypeToken,
        write_explicit_type: bool,
    ) -> Result<(), WriteError> {
        let registry = self.registry;
        if !write_explicit_type && actual == declared {
            let contract =
                registry
                    .get(declared.id())
                    .ok_or(WriteError::NotSerializable {
                        type_name: declared.name(),
                    })?;
            contract.write_without_type_annotation(self, sink, object)
        } else {
            let contract = registry.get(actual.id()).ok_or(WriteError::NotSerializable {
                type_name: actual.name(),
            })?;
            contract.write_with_type_annotation(self, sink, object)
        }
    }

    // -------------------------------------------------------------------------
    // Reference handling

    /// Runs identity tracking for `identity` on the currently open element.
    ///
    /// Active only when identity preservation is enabled and the traversal is
    /// not inside a get-only collection. A new object gets an `id` attribute
    /// and returns `false` (content follows); a previously written object
    /// gets `ref` plus a `nil` marker and returns `true` (content must be
    /// skipped).
    pub fn handle_reference(
        &mut self,
        sink: &mut dyn MarkupSink,
        identity: ObjectIdentity,
    ) -> Result<bool, WriteError> {
        if !self.options.preserve_references || self.get_only_collection {
            return Ok(false);
        }
        let (id, is_new) = self.refs.get_or_assign(identity);
        if is_new {
            sink.write_attribute(
                Some(names::SER_PREFIX),
                names::ID_LOCAL_NAME,
                names::SER_NAMESPACE,
                &id.to_string(),
            )?;
            Ok(false)
        } else {
            log::trace!("object already written with id {id}, emitting backreference");
            sink.write_attribute(
                Some(names::SER_PREFIX),
                names::REF_LOCAL_NAME,
                names::SER_NAMESPACE,
                &id.to_string(),
            )?;
            sink.write_attribute(
                Some(names::XSI_PREFIX),
                names::NIL_LOCAL_NAME,
                names::XSI_NAMESPACE,
                "true",
            )?;
            Ok(true)
        }
    }

    /// The symmetric end-of-reference-handling hook.
    ///
    /// A no-op while identity preservation is active, because the
    /// backreference short-circuit in [`handle_reference`] already terminated
    /// repeated objects. With preservation off, graph-cycle bookkeeping is
    /// owned by the caller's traversal, so there is nothing to do here
    /// either.
    ///
    /// [`handle_reference`]: Self::handle_reference
    #[inline]
    pub fn end_handle_reference(&mut self, _sink: &mut dyn MarkupSink, _identity: ObjectIdentity) {}

    // -------------------------------------------------------------------------
    // Null protocol

    /// Writes an absent value as an empty, nil-marked element tagged with the
    /// member's static type.
    pub fn write_null(
        &mut self,
        sink: &mut dyn MarkupSink,
        declared: TypeToken,
        is_member_serializable: bool,
        name: &str,
        namespace: &str,
    ) -> Result<(), WriteError> {
        self.check_serializable(declared, is_member_serializable)?;
        sink.write_start_element(None, name, namespace)?;
        sink.write_attribute(
            Some(names::XSI_PREFIX),
            names::NIL_LOCAL_NAME,
            names::XSI_NAMESPACE,
            "true",
        )?;
        sink.write_end_element()
    }

    // -------------------------------------------------------------------------
    // Annotation hooks

    /// Emits an array-length hint for the counterpart reader.
    ///
    /// Written only when identity preservation is active and the size is
    /// known; purely advisory, never required for correctness of the writer.
    pub fn write_array_size(
        &mut self,
        sink: &mut dyn MarkupSink,
        size: Option<usize>,
    ) -> Result<(), WriteError> {
        if self.options.preserve_references
            && let Some(size) = size
        {
            sink.write_attribute(
                Some(names::SER_PREFIX),
                names::SIZE_LOCAL_NAME,
                names::SER_NAMESPACE,
                &size.to_string(),
            )?;
        }
        Ok(())
    }

    /// Extension point for alternate type-annotation schemes, handed the
    /// name and namespace the standard annotation would use.
    ///
    /// Declines in this configuration: returns `false`, meaning no extra
    /// info was written and the standard annotation applies.
    #[inline]
    pub fn write_extra_type_info(
        &mut self,
        _sink: &mut dyn MarkupSink,
        _name: &str,
        _namespace: &str,
    ) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// Tests
