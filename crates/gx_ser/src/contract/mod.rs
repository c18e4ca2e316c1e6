//! The contract model seam.
//!
//! A [`Contract`] describes how one type's members map to markup. The write
//! context never enumerates members itself: it resolves the contract for a
//! value's type from the [`ContractRegistry`] and delegates, choosing between
//! the annotated and unannotated write paths.
//!
//! Contracts receive the [`WriteContext`] back, so nested member values
//! recurse through the context and stay inside the same identity-tracking
//! session.
//!
//! [`WriteContext`]: crate::write::WriteContext

mod registry;

pub use registry::ContractRegistry;

use crate::error::WriteError;
use crate::names;
use crate::sink::MarkupSink;
use crate::value::GraphObject;
use crate::write::WriteContext;

// -----------------------------------------------------------------------------
// Contract

/// A type-specific descriptor of how to structurally write a value.
///
/// Implementations hold whatever per-type knowledge they need (field lists,
/// element ordering) and downcast the value through
/// [`GraphObject::as_any`]. Only [`write_value`](Contract::write_value) must
/// be provided; the annotated/unannotated entry points the write context
/// dispatches to have default implementations.
pub trait Contract {
    /// The element-name of the type, used for explicit type annotation.
    fn name(&self) -> &str;

    /// The namespace of the type's name.
    fn namespace(&self) -> &str;

    /// Writes the structural content of `object` through the sink.
    ///
    /// Implementations for identity-tracked types should call
    /// [`WriteContext::handle_reference`] first and skip their content when
    /// it reports a backreference was emitted.
    fn write_value(
        &self,
        ctx: &mut WriteContext<'_>,
        sink: &mut dyn MarkupSink,
        object: &dyn GraphObject,
    ) -> Result<(), WriteError>;

    /// Writes `object` without any type annotation.
    ///
    /// Taken when the value's runtime type equals its declared type.
    fn write_without_type_annotation(
        &self,
        ctx: &mut WriteContext<'_>,
        sink: &mut dyn MarkupSink,
        object: &dyn GraphObject,
    ) -> Result<(), WriteError> {
        self.write_value(ctx, sink, object)
    }

    /// Writes `object` with exactly one explicit type annotation.
    ///
    /// Taken when the runtime type differs from the declared type. The
    /// annotation names this contract's [`name`](Contract::name) and
    /// [`namespace`](Contract::namespace).
    fn write_with_type_annotation(
        &self,
        ctx: &mut WriteContext<'_>,
        sink: &mut dyn MarkupSink,
        object: &dyn GraphObject,
    ) -> Result<(), WriteError> {
        // Extension point for alternate annotation schemes; declines in this
        // configuration, so the standard annotation below is always written.
        if !ctx.write_extra_type_info(sink, self.name(), self.namespace()) {
            let annotation = names::annotation_value(self.namespace(), self.name());
            sink.write_attribute(
                Some(names::XSI_PREFIX),
                names::TYPE_LOCAL_NAME,
                names::XSI_NAMESPACE,
                &annotation,
            )?;
        }
        self.write_value(ctx, sink, object)
    }
}
