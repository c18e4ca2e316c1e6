use crate::error::WriteError;
use crate::value::Primitive;

// -----------------------------------------------------------------------------
// MarkupSink

/// The low-level markup writer consumed by the write context.
///
/// The sink owns everything wire-level: element nesting, attribute encoding,
/// escaping, and the textual rendering of [`Primitive`] values. The write
/// context only ever calls these four operations, synchronously, in document
/// order.
///
/// A `prefix` of `None` leaves prefix selection to the sink.
pub trait MarkupSink {
    /// Opens an element `name` in `namespace`.
    fn write_start_element(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        namespace: &str,
    ) -> Result<(), WriteError>;

    /// Closes the most recently opened element.
    fn write_end_element(&mut self) -> Result<(), WriteError>;

    /// Writes an attribute on the currently open element.
    fn write_attribute(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        namespace: &str,
        value: &str,
    ) -> Result<(), WriteError>;

    /// Writes a primitive value as the content of the open element.
    fn write_primitive(&mut self, value: Primitive<'_>) -> Result<(), WriteError>;
}

// -----------------------------------------------------------------------------
// NullSink

/// A sink that discards everything.
///
/// Useful for dry runs, examples, and exercising context bookkeeping without
/// a real document writer.
#[derive(Clone, Copy, Default, Debug)]
pub struct NullSink;

impl MarkupSink for NullSink {
    #[inline]
    fn write_start_element(
        &mut self,
        _prefix: Option<&str>,
        _name: &str,
        _namespace: &str,
    ) -> Result<(), WriteError> {
        Ok(())
    }

    #[inline]
    fn write_end_element(&mut self) -> Result<(), WriteError> {
        Ok(())
    }

    #[inline]
    fn write_attribute(
        &mut self,
        _prefix: Option<&str>,
        _name: &str,
        _namespace: &str,
        _value: &str,
    ) -> Result<(), WriteError> {
        Ok(())
    }

    #[inline]
    fn write_primitive(&mut self, _value: Primitive<'_>) -> Result<(), WriteError> {
        Ok(())
    }
}
