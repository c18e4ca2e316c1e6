//! A recording sink and event helpers shared by the write-side tests.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::WriteError;
use crate::names;
use crate::sink::MarkupSink;
use crate::value::Primitive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Start {
        prefix: Option<String>,
        name: String,
        namespace: String,
    },
    End,
    Attribute {
        prefix: Option<String>,
        name: String,
        namespace: String,
        value: String,
    },
    Primitive(String),
}

impl Event {
    pub(crate) fn start(name: &str, namespace: &str) -> Self {
        Event::Start {
            prefix: None,
            name: name.to_string(),
            namespace: namespace.to_string(),
        }
    }
}

/// An attribute event under arbitrary names.
pub(crate) fn attr(prefix: &str, name: &str, namespace: &str, value: &str) -> Event {
    Event::Attribute {
        prefix: Some(prefix.to_string()),
        name: name.to_string(),
        namespace: namespace.to_string(),
        value: value.to_string(),
    }
}

/// The `z:id` attribute written for a newly tracked object.
pub(crate) fn id_attr(id: u32) -> Event {
    attr(
        names::SER_PREFIX,
        names::ID_LOCAL_NAME,
        names::SER_NAMESPACE,
        &id.to_string(),
    )
}

/// The `z:ref` attribute written for a backreference.
pub(crate) fn ref_attr(id: u32) -> Event {
    attr(
        names::SER_PREFIX,
        names::REF_LOCAL_NAME,
        names::SER_NAMESPACE,
        &id.to_string(),
    )
}

/// The `i:nil="true"` marker attribute.
pub(crate) fn nil_attr() -> Event {
    attr(
        names::XSI_PREFIX,
        names::NIL_LOCAL_NAME,
        names::XSI_NAMESPACE,
        "true",
    )
}

/// The `i:type` explicit type annotation attribute.
pub(crate) fn type_attr(value: &str) -> Event {
    attr(
        names::XSI_PREFIX,
        names::TYPE_LOCAL_NAME,
        names::XSI_NAMESPACE,
        value,
    )
}

/// The `z:size` array-length hint attribute.
pub(crate) fn size_attr(size: usize) -> Event {
    attr(
        names::SER_PREFIX,
        names::SIZE_LOCAL_NAME,
        names::SER_NAMESPACE,
        &size.to_string(),
    )
}

/// A sink that records every operation as an [`Event`].
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub events: Vec<Event>,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl MarkupSink for RecordingSink {
    fn write_start_element(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        namespace: &str,
    ) -> Result<(), WriteError> {
        self.events.push(Event::Start {
            prefix: prefix.map(ToString::to_string),
            name: name.to_string(),
            namespace: namespace.to_string(),
        });
        Ok(())
    }

    fn write_end_element(&mut self) -> Result<(), WriteError> {
        self.events.push(Event::End);
        Ok(())
    }

    fn write_attribute(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        namespace: &str,
        value: &str,
    ) -> Result<(), WriteError> {
        self.events.push(Event::Attribute {
            prefix: prefix.map(ToString::to_string),
            name: name.to_string(),
            namespace: namespace.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn write_primitive(&mut self, value: Primitive<'_>) -> Result<(), WriteError> {
        let rendered = match value {
            Primitive::Text(text) => format!("text:{text}"),
            Primitive::Binary(bytes) => {
                let mut rendered = String::from("binary:");
                for byte in bytes {
                    rendered.push_str(&format!("{byte:02x}"));
                }
                rendered
            }
            Primitive::Locator(uri) => format!("locator:{uri}"),
            Primitive::QName(qname) => format!(
                "qname:{}",
                names::annotation_value(&qname.namespace, &qname.name)
            ),
        };
        self.events.push(Event::Primitive(rendered));
        Ok(())
    }
}
