use std::fmt;

use yaserde_derive::YaDeserialize;

use crate::codec::{from_xml_rooted, XmlRoot};
use crate::error::Result;

/// A single error reported by the gateway, e.g.
/// `<error attribute="first_name" key="errors.blank">First name can't be blank</error>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, YaDeserialize)]
#[yaserde(rename = "error")]
pub struct GatewayError {
    #[yaserde(text)]
    pub error: String,
    #[yaserde(attribute)]
    pub key: String,
    #[yaserde(attribute)]
    pub attribute: Option<String>,
}

impl XmlRoot for GatewayError {
    const ROOT: &'static str = "error";
}

impl GatewayError {
    pub fn from_xml(document: &str) -> Result<GatewayError> {
        from_xml_rooted(document)
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(attribute) => write!(f, "{} {} ({})", attribute, self.error, self.key),
            None => write!(f, "{} ({})", self.error, self.key),
        }
    }
}

/// The `<errors>` wrapper the gateway sends back on a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Eq, YaDeserialize)]
#[yaserde(rename = "errors")]
pub struct GatewayErrors {
    #[yaserde(rename = "error")]
    pub errors: Vec<GatewayError>,
}

impl XmlRoot for GatewayErrors {
    const ROOT: &'static str = "errors";
}

impl GatewayErrors {
    pub fn from_xml(document: &str) -> Result<GatewayErrors> {
        from_xml_rooted(document)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GatewayError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn for_attribute<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a GatewayError> {
        self.errors
            .iter()
            .filter(move |e| e.attribute.as_deref() == Some(attribute))
    }
}

impl<'a> IntoIterator for &'a GatewayErrors {
    type Item = &'a GatewayError;
    type IntoIter = std::slice::Iter<'a, GatewayError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for GatewayErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}: {}", error.key, error.error)?;
        }
        Ok(())
    }
}
