//! Leaf value writers.
//!
//! One writer per primitive kind, each following the same template: null
//! handling, element opening, reference-table lookup, primitive content,
//! element close. The bare variants (`write_text` and friends) write only the
//! value into an element the caller already opened; the `_element` variants
//! own the full template including the null protocol.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::WriteError;
use crate::names;
use crate::sink::MarkupSink;
use crate::value::{Locator, ObjectIdentity, Primitive, QualifiedName, TypeToken};

use super::context::WriteContext;

impl WriteContext<'_> {
    // -------------------------------------------------------------------------
    // Text

    /// Writes a text value into the currently open element.
    ///
    /// Zero-length values are never identity-tracked: every empty slice
    /// shares the dangling sentinel address, so distinct empty values would
    /// alias in the reference table.
    pub fn write_text(
        &mut self,
        sink: &mut dyn MarkupSink,
        value: &str,
    ) -> Result<(), WriteError> {
        if value.is_empty() {
            return sink.write_primitive(Primitive::Text(value));
        }
        if !self.handle_reference(sink, ObjectIdentity::of(value))? {
            sink.write_primitive(Primitive::Text(value))?;
        }
        Ok(())
    }

    /// Writes a text member as its own element, honoring the null protocol.
    pub fn write_text_element(
        &mut self,
        sink: &mut dyn MarkupSink,
        value: Option<&str>,
        name: &str,
        namespace: &str,
    ) -> Result<(), WriteError> {
        match value {
            None => self.write_null(sink, TypeToken::of::<String>(), true, name, namespace),
            Some(value) => {
                self.increment_item_count(1)?;
                sink.write_start_element(None, name, namespace)?;
                self.write_text(sink, value)?;
                self.end_handle_reference(sink, ObjectIdentity::of(value));
                sink.write_end_element()
            }
        }
    }

    // -------------------------------------------------------------------------
    // Binary

    /// Writes a binary blob into the currently open element.
    ///
    /// Zero-length blobs are never identity-tracked, for the same reason as
    /// [`write_text`](Self::write_text).
    pub fn write_binary(
        &mut self,
        sink: &mut dyn MarkupSink,
        value: &[u8],
    ) -> Result<(), WriteError> {
        if value.is_empty() {
            return sink.write_primitive(Primitive::Binary(value));
        }
        if !self.handle_reference(sink, ObjectIdentity::of(value))? {
            sink.write_primitive(Primitive::Binary(value))?;
        }
        Ok(())
    }

    /// Writes a binary member as its own element, honoring the null protocol.
    pub fn write_binary_element(
        &mut self,
        sink: &mut dyn MarkupSink,
        value: Option<&[u8]>,
        name: &str,
        namespace: &str,
    ) -> Result<(), WriteError> {
        match value {
            None => self.write_null(sink, TypeToken::of::<Vec<u8>>(), true, name, namespace),
            Some(value) => {
                self.increment_item_count(1)?;
                sink.write_start_element(None, name, namespace)?;
                self.write_binary(sink, value)?;
                self.end_handle_reference(sink, ObjectIdentity::of(value));
                sink.write_end_element()
            }
        }
    }

    // -------------------------------------------------------------------------
    // Locator

    /// Writes a locator into the currently open element.
    pub fn write_locator(
        &mut self,
        sink: &mut dyn MarkupSink,
        value: &Locator,
    ) -> Result<(), WriteError> {
        if !self.handle_reference(sink, ObjectIdentity::of(value))? {
            sink.write_primitive(Primitive::Locator(value.as_str()))?;
        }
        Ok(())
    }

    /// Writes a locator member as its own element, honoring the null
    /// protocol.
    pub fn write_locator_element(
        &mut self,
        sink: &mut dyn MarkupSink,
        value: Option<&Locator>,
        name: &str,
        namespace: &str,
    ) -> Result<(), WriteError> {
        match value {
            None => self.write_null(sink, TypeToken::of::<Locator>(), true, name, namespace),
            Some(value) => {
                self.increment_item_count(1)?;
                sink.write_start_element(None, name, namespace)?;
                self.write_locator(sink, value)?;
                self.end_handle_reference(sink, ObjectIdentity::of(value));
                sink.write_end_element()
            }
        }
    }

    // -------------------------------------------------------------------------
    // Qualified name

    /// Writes a qualified name into the currently open element.
    pub fn write_qname(
        &mut self,
        sink: &mut dyn MarkupSink,
        value: &QualifiedName,
    ) -> Result<(), WriteError> {
        if !self.handle_reference(sink, ObjectIdentity::of(value))? {
            sink.write_primitive(Primitive::QName(value))?;
        }
        Ok(())
    }

    /// Writes a qualified-name member as its own element, honoring the null
    /// protocol.
    ///
    /// Unlike the other kinds, an element in a non-empty namespace is opened
    /// with the reserved element prefix, so the qualified-name content can
    /// bind its own prefixes without colliding.
    pub fn write_qname_element(
        &mut self,
        sink: &mut dyn MarkupSink,
        value: Option<&QualifiedName>,
        name: &str,
        namespace: &str,
    ) -> Result<(), WriteError> {
        match value {
            None => self.write_null(sink, TypeToken::of::<QualifiedName>(), true, name, namespace),
            Some(value) => {
                self.increment_item_count(1)?;
                if namespace.is_empty() {
                    sink.write_start_element(None, name, namespace)?;
                } else {
                    sink.write_start_element(Some(names::ELEMENT_PREFIX), name, namespace)?;
                }
                self.write_qname(sink, value)?;
                self.end_handle_reference(sink, ObjectIdentity::of(value));
                sink.write_end_element()
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use crate::contract::ContractRegistry;
    use crate::value::QualifiedName;
    use crate::write::test_util::{Event, RecordingSink, id_attr, nil_attr, ref_attr};
    use crate::write::{SessionOptions, WriteContext};

    #[test]
    fn new_text_gets_an_id_attribute() {
        let registry = ContractRegistry::new();
        let mut ctx = WriteContext::new(&registry, SessionOptions::preserving());
        let mut sink = RecordingSink::new();

        let value = String::from("hello");
        ctx.write_text_element(&mut sink, Some(&value), "Greeting", "")
            .unwrap();

        assert_eq!(
            sink.events,
            vec![
                Event::start("Greeting", ""),
                id_attr(1),
                Event::Primitive(String::from("text:hello")),
                Event::End,
            ],
        );
    }

    #[test]
    fn repeated_text_becomes_a_backreference() {
        let registry = ContractRegistry::new();
        let mut ctx = WriteContext::new(&registry, SessionOptions::preserving());
        let mut sink = RecordingSink::new();

        let value = String::from("hello");
        ctx.write_text_element(&mut sink, Some(&value), "First", "")
            .unwrap();
        ctx.write_text_element(&mut sink, Some(&value), "Second", "")
            .unwrap();

        assert_eq!(
            sink.events,
            vec![
                Event::start("First", ""),
                id_attr(1),
                Event::Primitive(String::from("text:hello")),
                Event::End,
                Event::start("Second", ""),
                ref_attr(1),
                nil_attr(),
                Event::End,
            ],
        );
    }

    #[test]
    fn null_text_member_writes_an_empty_nil_element() {
        // Identity preservation must not matter for the null protocol.
        for options in [SessionOptions::new(), SessionOptions::preserving()] {
            let registry = ContractRegistry::new();
            let mut ctx = WriteContext::new(&registry, options);
            let mut sink = RecordingSink::new();

            ctx.write_text_element(&mut sink, None, "Name", "").unwrap();

            assert_eq!(
                sink.events,
                vec![Event::start("Name", ""), nil_attr(), Event::End],
            );
        }
    }

    #[test]
    fn preservation_off_writes_no_identity_attributes() {
        let registry = ContractRegistry::new();
        let mut ctx = WriteContext::new(&registry, SessionOptions::new());
        let mut sink = RecordingSink::new();

        let value = String::from("hello");
        ctx.write_text_element(&mut sink, Some(&value), "First", "")
            .unwrap();
        ctx.write_text_element(&mut sink, Some(&value), "Second", "")
            .unwrap();

        assert_eq!(
            sink.events,
            vec![
                Event::start("First", ""),
                Event::Primitive(String::from("text:hello")),
                Event::End,
                Event::start("Second", ""),
                Event::Primitive(String::from("text:hello")),
                Event::End,
            ],
        );
    }

    #[test]
    fn get_only_collections_suspend_identity_tracking() {
        let registry = ContractRegistry::new();
        let mut ctx = WriteContext::new(&registry, SessionOptions::preserving());
        let mut sink = RecordingSink::new();

        let value = String::from("hello");
        let was = ctx.set_get_only_collection(true);
        assert!(!was);
        ctx.write_text_element(&mut sink, Some(&value), "First", "")
            .unwrap();
        ctx.write_text_element(&mut sink, Some(&value), "Second", "")
            .unwrap();
        ctx.set_get_only_collection(was);

        // No id, no ref: both occurrences carry full content.
        assert_eq!(
            sink.events,
            vec![
                Event::start("First", ""),
                Event::Primitive(String::from("text:hello")),
                Event::End,
                Event::start("Second", ""),
                Event::Primitive(String::from("text:hello")),
                Event::End,
            ],
        );
    }

    #[test]
    fn distinct_empty_texts_are_both_written_in_full() {
        let registry = ContractRegistry::new();
        let mut ctx = WriteContext::new(&registry, SessionOptions::preserving());
        let mut sink = RecordingSink::new();

        let first = String::new();
        let second = String::new();
        ctx.write_text_element(&mut sink, Some(&first), "First", "")
            .unwrap();
        ctx.write_text_element(&mut sink, Some(&second), "Second", "")
            .unwrap();

        // Empty values carry no identity: no id, no backreference.
        assert_eq!(
            sink.events,
            vec![
                Event::start("First", ""),
                Event::Primitive(String::from("text:")),
                Event::End,
                Event::start("Second", ""),
                Event::Primitive(String::from("text:")),
                Event::End,
            ],
        );
    }

    #[test]
    fn empty_text_and_empty_binary_never_alias() {
        let registry = ContractRegistry::new();
        let mut ctx = WriteContext::new(&registry, SessionOptions::preserving());
        let mut sink = RecordingSink::new();

        let text = String::new();
        let blob: vec::Vec<u8> = vec::Vec::new();
        ctx.write_text_element(&mut sink, Some(&text), "Text", "")
            .unwrap();
        ctx.write_binary_element(&mut sink, Some(&blob), "Blob", "")
            .unwrap();

        assert_eq!(
            sink.events,
            vec![
                Event::start("Text", ""),
                Event::Primitive(String::from("text:")),
                Event::End,
                Event::start("Blob", ""),
                Event::Primitive(String::from("binary:")),
                Event::End,
            ],
        );
    }

    #[test]
    fn binary_and_text_identities_do_not_collide() {
        let registry = ContractRegistry::new();
        let mut ctx = WriteContext::new(&registry, SessionOptions::preserving());
        let mut sink = RecordingSink::new();

        let text = String::from("hello");
        let blob = vec![1_u8, 2, 3];
        ctx.write_text_element(&mut sink, Some(&text), "Text", "")
            .unwrap();
        ctx.write_binary_element(&mut sink, Some(&blob), "Blob", "")
            .unwrap();

        assert_eq!(
            sink.events,
            vec![
                Event::start("Text", ""),
                id_attr(1),
                Event::Primitive(String::from("text:hello")),
                Event::End,
                Event::start("Blob", ""),
                id_attr(2),
                Event::Primitive(String::from("binary:010203")),
                Event::End,
            ],
        );
    }

    #[test]
    fn qname_element_uses_the_reserved_prefix_in_a_namespace() {
        let registry = ContractRegistry::new();
        let mut ctx = WriteContext::new(&registry, SessionOptions::new());
        let mut sink = RecordingSink::new();

        let value = QualifiedName::new(String::from("Color"), String::from("urn:paint"));
        ctx.write_qname_element(&mut sink, Some(&value), "Kind", "urn:doc")
            .unwrap();
        ctx.write_qname_element(&mut sink, Some(&value), "Kind", "")
            .unwrap();

        assert_eq!(
            sink.events,
            vec![
                Event::Start {
                    prefix: Some(String::from("q")),
                    name: String::from("Kind"),
                    namespace: String::from("urn:doc"),
                },
                Event::Primitive(String::from("qname:{urn:paint}Color")),
                Event::End,
                Event::start("Kind", ""),
                Event::Primitive(String::from("qname:{urn:paint}Color")),
                Event::End,
            ],
        );
    }
}
