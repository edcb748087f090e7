// open-ended `<data>` payload attached to a payment method
use std::io::Write;

use xml::attribute::OwnedAttribute;
use xml::namespace::Namespace;
use xml::writer::XmlEvent;
use yaserde::ser::Serializer;
use yaserde::YaSerialize;

use crate::error::{Result, XmlError};

pub const DATA_TAG: &str = "data";

#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    Nested(Metadata),
}

impl MetadataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&Metadata> {
        match self {
            MetadataValue::Nested(nested) => Some(nested),
            _ => None,
        }
    }

    fn write<W: Write>(&self, key: &str, writer: &mut Serializer<W>) -> std::result::Result<(), String> {
        writer
            .write(XmlEvent::start_element(key))
            .map_err(|e| e.to_string())?;
        match self {
            MetadataValue::Nested(nested) => nested.write_entries(writer)?,
            scalar => {
                let text = scalar.scalar_text();
                writer
                    .write(XmlEvent::characters(&text))
                    .map_err(|e| e.to_string())?;
            }
        }
        writer
            .write(XmlEvent::end_element())
            .map_err(|e| e.to_string())
    }

    fn scalar_text(&self) -> String {
        match self {
            MetadataValue::Text(text) => text.clone(),
            MetadataValue::Integer(value) => value.to_string(),
            MetadataValue::Decimal(value) => value.to_string(),
            MetadataValue::Boolean(value) => value.to_string(),
            MetadataValue::Nested(_) => String::new(),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_owned())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Integer(value)
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        MetadataValue::Integer(i64::from(value))
    }
}

impl From<u32> for MetadataValue {
    fn from(value: u32) -> Self {
        MetadataValue::Integer(i64::from(value))
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Decimal(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Boolean(value)
    }
}

impl From<Metadata> for MetadataValue {
    fn from(value: Metadata) -> Self {
        MetadataValue::Nested(value)
    }
}

/// Caller-supplied key/value pairs, kept in insertion order.
///
/// Each key becomes a child element, so keys are restricted to valid XML
/// element names. Nested maps render as nested elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: Vec<(String, MetadataValue)>,
}

impl Metadata {
    pub fn new() -> Self {
        Metadata::default()
    }

    /// Returns the previous value when `key` was already present. The entry
    /// keeps its original position. NaN and infinite decimals are rejected.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<Option<MetadataValue>>
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        let key = key.into();
        if !is_element_name(&key) {
            return Err(XmlError::InvalidMetadataKey(key));
        }
        let value = value.into();
        if matches!(value, MetadataValue::Decimal(d) if !d.is_finite()) {
            return Err(XmlError::NonFiniteMetadataValue(key));
        }

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Ok(Some(std::mem::replace(slot, value))),
            None => {
                self.entries.push((key, value));
                Ok(None)
            }
        }
    }

    pub fn with<K, V>(mut self, key: K, value: V) -> Result<Self>
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.insert(key, value)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn write_entries<W: Write>(&self, writer: &mut Serializer<W>) -> std::result::Result<(), String> {
        for (key, value) in &self.entries {
            value.write(key, writer)?;
        }
        Ok(())
    }
}

impl YaSerialize for Metadata {
    fn serialize<W: Write>(&self, writer: &mut Serializer<W>) -> std::result::Result<(), String> {
        let name = writer
            .get_start_event_name()
            .unwrap_or_else(|| DATA_TAG.to_owned());
        writer.set_start_event_name(None);

        let skip_start_end = writer.skip_start_end();
        if !skip_start_end {
            writer
                .write(XmlEvent::start_element(name.as_str()))
                .map_err(|e| e.to_string())?;
        }

        self.write_entries(writer)?;

        if !skip_start_end {
            writer
                .write(XmlEvent::end_element())
                .map_err(|e| e.to_string())?;
        }
        Ok(())
    }

    fn serialize_attributes(
        &self,
        attributes: Vec<OwnedAttribute>,
        namespace: Namespace,
    ) -> std::result::Result<(Vec<OwnedAttribute>, Namespace), String> {
        Ok((attributes, namespace))
    }
}

fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !name.to_ascii_lowercase().starts_with("xml")
}
