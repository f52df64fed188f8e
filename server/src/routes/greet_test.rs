use super::*;

#[test]
fn build_greeting_joins_name_and_surname() {
    assert_eq!(build_greeting("Ahmet", "Yılmaz").unwrap(), "Selam Ahmet Yılmaz");
}

#[test]
fn build_greeting_trims_both_fields() {
    assert_eq!(build_greeting("  Ahmet ", " Yılmaz  ").unwrap(), "Selam Ahmet Yılmaz");
}

#[test]
fn build_greeting_empty_surname_has_no_trailing_space() {
    assert_eq!(build_greeting("Ahmet", "").unwrap(), "Selam Ahmet");
    assert_eq!(build_greeting("Ahmet", "   ").unwrap(), "Selam Ahmet");
}

#[test]
fn build_greeting_rejects_missing_name() {
    let err = build_greeting("", "Yılmaz").unwrap_err();
    assert_eq!(err.to_string(), "name alanı gerekli.");
}

#[test]
fn build_greeting_rejects_whitespace_only_name() {
    assert!(build_greeting(" \t ", "").is_err());
}

#[test]
fn greet_request_defaults_missing_fields_to_empty() {
    let request: GreetRequest = serde_json::from_str(r#"{"name":"Ali"}"#).unwrap();
    assert_eq!(request.name, "Ali");
    assert_eq!(request.surname, "");
}

#[test]
fn name_required_error_maps_to_bad_request() {
    let response = GreetError::NameRequired.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn malformed_json_is_rejected_with_plain_text_4xx() {
    let rejection = Json::<GreetRequest>::from_bytes(b"{not json").unwrap_err();
    assert!(rejection.status().is_client_error());
    assert!(!rejection.body_text().is_empty());
}

#[tokio::test]
async fn greet_returns_greeting_for_valid_request() {
    let request = GreetRequest { name: "Ahmet".to_owned(), surname: "Yılmaz".to_owned() };
    let Json(body) = greet(Json(request)).await.unwrap();
    assert_eq!(body.message, "Selam Ahmet Yılmaz");
}

#[tokio::test]
async fn hello_returns_fixed_message() {
    let Json(body) = hello().await;
    assert_eq!(body.message, "Hello, world!");
}
