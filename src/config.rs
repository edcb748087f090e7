use yaserde::ser::Config;

pub const INDENT_VAR: &str = "SPREEDLY_XML_INDENT";
pub const DECLARATION_VAR: &str = "SPREEDLY_XML_DECLARATION";

/// Output options for rendered documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlConfig {
    pub indent: bool,
    pub indent_string: String,
    pub write_declaration: bool,
}

impl Default for XmlConfig {
    fn default() -> Self {
        XmlConfig {
            indent: false,
            indent_string: "  ".to_owned(),
            write_declaration: true,
        }
    }
}

impl XmlConfig {
    /// Reads overrides from `SPREEDLY_XML_INDENT` and `SPREEDLY_XML_DECLARATION`.
    /// Unset or unrecognised values keep the defaults.
    pub fn from_env() -> Self {
        let defaults = XmlConfig::default();
        let indent = std::env::var(INDENT_VAR)
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.indent);
        let write_declaration = std::env::var(DECLARATION_VAR)
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.write_declaration);

        tracing::debug!(indent, write_declaration, "loaded xml config from environment");

        XmlConfig {
            indent,
            write_declaration,
            ..defaults
        }
    }

    pub fn pretty() -> Self {
        XmlConfig {
            indent: true,
            ..XmlConfig::default()
        }
    }

    pub(crate) fn to_yaserde(&self) -> Config {
        Config {
            perform_indent: self.indent,
            write_document_declaration: self.write_declaration,
            indent_string: self.indent.then(|| self.indent_string.clone()),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
