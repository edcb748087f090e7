use std::any::type_name;
use std::str::FromStr;

use xml::reader::{EventReader, XmlEvent};
use yaserde::{YaDeserialize, YaSerialize};

use crate::config::XmlConfig;
use crate::error::{Result, XmlError};

/// A value bound to an XML document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xml<T>(pub T);

impl<T> Xml<T>
where
    T: YaDeserialize,
{
    pub fn parse(document: &str) -> Result<Self> {
        from_xml(document).map(Self)
    }
}

impl<T> Xml<T>
where
    T: YaSerialize,
{
    pub fn render(&self, config: &XmlConfig) -> Result<String> {
        to_xml_with_config(&self.0, config)
    }
}

impl<T> Xml<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromStr for Xml<T>
where
    T: YaDeserialize,
{
    type Err = XmlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

pub fn from_xml<T>(document: &str) -> Result<T>
where
    T: YaDeserialize,
{
    tracing::debug!(target_type = type_name::<T>(), len = document.len(), "parsing xml");
    yaserde::de::from_str(document).map_err(|err| {
        tracing::warn!(target_type = type_name::<T>(), error = %err, "invalid input XML");
        XmlError::Deserialize(err)
    })
}

/// Types bound to a fixed document root element.
pub trait XmlRoot {
    const ROOT: &'static str;
}

/// Like [`from_xml`], but first requires the document root to be `T::ROOT`.
pub fn from_xml_rooted<T>(document: &str) -> Result<T>
where
    T: YaDeserialize + XmlRoot,
{
    check_root(document, T::ROOT)?;
    from_xml(document)
}

fn check_root(document: &str, expected: &str) -> Result<()> {
    for event in EventReader::from_str(document) {
        match event {
            Ok(XmlEvent::StartElement { name, .. }) if name.local_name == expected => return Ok(()),
            Ok(XmlEvent::StartElement { name, .. }) => {
                tracing::warn!(expected, found = %name.local_name, "unexpected root element");
                return Err(XmlError::Deserialize(format!(
                    "expected root element `{expected}`, found `{}`",
                    name.local_name
                )));
            }
            Ok(_) => {}
            Err(err) => return Err(XmlError::Deserialize(err.to_string())),
        }
    }
    Err(XmlError::Deserialize(format!(
        "document has no root element, expected `{expected}`"
    )))
}

pub fn to_xml<T>(value: &T) -> Result<String>
where
    T: YaSerialize,
{
    to_xml_with_config(value, &XmlConfig::default())
}

pub fn to_xml_with_config<T>(value: &T, config: &XmlConfig) -> Result<String>
where
    T: YaSerialize,
{
    let body = yaserde::ser::to_string_with_config(value, &config.to_yaserde()).map_err(|err| {
        tracing::warn!(source_type = type_name::<T>(), error = %err, "cannot render XML");
        XmlError::Serialize(err)
    })?;
    tracing::debug!(source_type = type_name::<T>(), len = body.len(), "rendered xml");
    Ok(body)
}
