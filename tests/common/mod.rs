// list-binding fixtures: a group root with repeated `thing` children
use std::fmt;
use std::io::Write;

use xml::attribute::OwnedAttribute;
use xml::namespace::Namespace;
use xml::writer::XmlEvent;
use yaserde::ser::Serializer;
use yaserde::YaSerialize;
use yaserde_derive::{YaDeserialize, YaSerialize};

/// Non-numeric `id` text panics inside the derived deserializer, which
/// unwraps `i64::from_str`; yaserde 0.8 has no error path for text content.
#[derive(Debug, Clone, Default, PartialEq, Eq, YaDeserialize)]
#[yaserde(rename = "thing")]
pub struct Thing {
    #[yaserde(text)]
    pub id: i64,
    #[yaserde(attribute)]
    pub name: String,
}

impl Thing {
    pub fn new(id: i64, name: &str) -> Thing {
        Thing {
            id,
            name: name.to_owned(),
        }
    }
}

// the id travels as text content, which the derive only writes for strings
impl YaSerialize for Thing {
    fn serialize<W: Write>(&self, writer: &mut Serializer<W>) -> Result<(), String> {
        let name = writer
            .get_start_event_name()
            .unwrap_or_else(|| "thing".to_owned());
        writer.set_start_event_name(None);

        let skip_start_end = writer.skip_start_end();
        if !skip_start_end {
            writer
                .write(XmlEvent::start_element(name.as_str()).attr("name", &self.name))
                .map_err(|e| e.to_string())?;
        }
        let id = self.id.to_string();
        writer
            .write(XmlEvent::characters(&id))
            .map_err(|e| e.to_string())?;
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
    ) -> Result<(Vec<OwnedAttribute>, Namespace), String> {
        Ok((attributes, namespace))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, YaSerialize, YaDeserialize)]
#[yaserde(rename = "thing_group")]
pub struct ThingGroup {
    #[yaserde(rename = "thing")]
    pub things: Vec<Thing>,
}

impl fmt::Display for ThingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for thing in &self.things {
            writeln!(f, "{}", thing.name)?;
        }
        Ok(())
    }
}
