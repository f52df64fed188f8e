use super::*;

#[test]
fn greet_request_serializes_wire_field_names() {
    let request = GreetRequest { name: "Ahmet".to_owned(), surname: String::new() };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Ahmet", "surname": "" }));
}

#[test]
fn greet_response_deserializes_message() {
    let body: GreetResponse =
        serde_json::from_str(r#"{"message":"Selam Ahmet Yılmaz"}"#).unwrap();
    assert_eq!(body.message, "Selam Ahmet Yılmaz");
}
