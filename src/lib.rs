//! XML bindings for the Spreedly payment gateway: error responses and the
//! payment method creation envelope.

pub mod codec;
pub mod config;
pub mod error;
pub mod models;

pub use crate::codec::{from_xml, from_xml_rooted, to_xml, to_xml_with_config, Xml, XmlRoot};
pub use crate::config::XmlConfig;
pub use crate::error::{Result, XmlError};
pub use crate::models::credit_card::CreditCard;
pub use crate::models::errors::{GatewayError, GatewayErrors};
pub use crate::models::metadata::{Metadata, MetadataValue};
pub use crate::models::payment_method::PaymentMethodCreateRequest;
