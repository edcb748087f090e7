use spreedly_xml::{
    CreditCard, GatewayError, GatewayErrors, Metadata, PaymentMethodCreateRequest, XmlConfig,
    XmlError,
};

fn bare() -> XmlConfig {
    XmlConfig {
        write_declaration: false,
        ..XmlConfig::default()
    }
}

#[test]
fn error_record_from_response_body() {
    let error = GatewayError::from_xml(
        r#"<?xml version="1.0" encoding="UTF-8"?><error key="invalid_email" attribute="email">is not valid</error>"#,
    )
    .unwrap();

    assert_eq!(error.error, "is not valid");
    assert_eq!(error.key, "invalid_email");
    assert_eq!(error.attribute.as_deref(), Some("email"));
}

#[test]
fn error_without_attribute() {
    let error = GatewayError::from_xml(r#"<error key="bad">broken</error>"#).unwrap();
    assert_eq!(error.attribute, None);
}

#[test]
fn wrong_root_is_rejected_both_ways() {
    let list = GatewayErrors::from_xml(r#"<error key="a">one</error>"#);
    assert!(matches!(list, Err(XmlError::Deserialize(_))));

    let single =
        GatewayError::from_xml(r#"<errors><error key="a" attribute="x">one</error></errors>"#);
    assert!(matches!(single, Err(XmlError::Deserialize(_))));
}

#[test]
fn malformed_error_document_propagates() {
    let err = GatewayErrors::from_xml("<errors><error key=").unwrap_err();
    assert!(matches!(err, XmlError::Deserialize(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn email_only_request() {
    let body = PaymentMethodCreateRequest::new()
        .with_email("a@b.com")
        .to_xml_with_config(&bare())
        .unwrap();

    assert!(body.starts_with("<payment_method>"));
    assert!(body.contains("<email>a@b.com</email>"));
    assert!(!body.contains("credit_card"));
    assert!(!body.contains("<data"));
}

#[test]
fn nested_data_renders_as_child_elements() {
    let data = Metadata::new()
        .with("source", "web")
        .unwrap()
        .with(
            "customer",
            Metadata::new()
                .with("id", 881)
                .unwrap()
                .with("vip", true)
                .unwrap(),
        )
        .unwrap();

    let body = PaymentMethodCreateRequest::new()
        .with_credit_card(
            CreditCard::new("Ada", "Lovelace", "4111111111111111", 12, 2031)
                .with_address("1 Main St", None)
                .with_zip("02134"),
        )
        .with_data(data)
        .to_xml_with_config(&bare())
        .unwrap();

    assert!(body.contains("<address1>1 Main St</address1><zip>02134</zip>"));
    assert!(!body.contains("address2"));
    assert!(body.ends_with(
        "<data><source>web</source><customer><id>881</id><vip>true</vip></customer></data></payment_method>"
    ));
}

#[test]
fn pretty_output_is_indented() {
    let body = PaymentMethodCreateRequest::new()
        .with_email("a@b.com")
        .to_xml_with_config(&XmlConfig::pretty())
        .unwrap();

    assert!(body.contains("\n  <email>a@b.com</email>"));
}
