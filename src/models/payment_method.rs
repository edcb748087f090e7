use yaserde_derive::YaSerialize;

use crate::codec::to_xml_with_config;
use crate::config::XmlConfig;
use crate::error::Result;
use crate::models::credit_card::CreditCard;
use crate::models::metadata::Metadata;

/// Body of a payment method creation call. Unset members are omitted from
/// the rendered document rather than sent as empty elements.
#[derive(Debug, Clone, Default, PartialEq, YaSerialize)]
#[yaserde(rename = "payment_method")]
pub struct PaymentMethodCreateRequest {
    #[yaserde(rename = "credit_card")]
    pub credit_card: Option<CreditCard>,
    #[yaserde(rename = "email")]
    pub email: Option<String>,
    #[yaserde(rename = "data")]
    pub data: Option<Metadata>,
}

impl PaymentMethodCreateRequest {
    pub fn new() -> Self {
        PaymentMethodCreateRequest::default()
    }

    pub fn with_credit_card(mut self, credit_card: CreditCard) -> Self {
        self.credit_card = Some(credit_card);
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_owned());
        self
    }

    pub fn with_data(mut self, data: Metadata) -> Self {
        self.data = Some(data);
        self
    }

    pub fn to_xml(&self) -> Result<String> {
        self.to_xml_with_config(&XmlConfig::default())
    }

    pub fn to_xml_with_config(&self, config: &XmlConfig) -> Result<String> {
        to_xml_with_config(self, config)
    }
}
