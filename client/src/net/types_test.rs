use super::*;

#[test]
fn contact_request_serializes_with_server_field_names() {
    let req = ContactRequest {
        name: "Alex".into(),
        contact_detail: "alex@example.com".into(),
        phone: "+992000000".into(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["name"], "Alex");
    assert_eq!(json["contact_detail"], "alex@example.com");
    assert_eq!(json["phone"], "+992000000");
}

#[test]
fn contact_request_keeps_values_verbatim() {
    let req = ContactRequest { name: "  A ".into(), contact_detail: "not an email".into(), phone: "call me".into() };
    let back: ContactRequest = serde_json::from_str(&serde_json::to_string(&req).unwrap()).unwrap();
    assert_eq!(back, req);
}
