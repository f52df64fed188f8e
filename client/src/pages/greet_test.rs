use super::*;

#[test]
fn validate_submission_trims_both_fields() {
    let request = validate_submission("  Ahmet  ", "  Yılmaz  ").unwrap();
    assert_eq!(request.name, "Ahmet");
    assert_eq!(request.surname, "Yılmaz");
}

#[test]
fn validate_submission_allows_empty_surname() {
    let request = validate_submission("Ahmet", "").unwrap();
    assert_eq!(request.name, "Ahmet");
    assert_eq!(request.surname, "");
}

#[test]
fn validate_submission_rejects_empty_name() {
    assert_eq!(validate_submission("", "Yılmaz"), Err("Lütfen adınızı girin."));
}

#[test]
fn validate_submission_rejects_whitespace_only_name() {
    assert_eq!(validate_submission("   \t ", "Yılmaz"), Err("Lütfen adınızı girin."));
}

#[test]
fn outcome_status_success_shows_message_verbatim() {
    let status = outcome_status(Ok("Selam Ahmet Yılmaz".to_owned()));
    assert_eq!(status, StatusMessage::success("Selam Ahmet Yılmaz"));
}

#[test]
fn outcome_status_failure_prefixes_error_label() {
    let status = outcome_status(Err("Invalid surname".to_owned()));
    assert_eq!(status, StatusMessage::error("Hata: Invalid surname"));
}

#[test]
fn outcome_status_network_failure_keeps_description() {
    let status = outcome_status(Err("connection refused".to_owned()));
    assert_eq!(status.text, "Hata: connection refused");
}

#[test]
fn outcome_status_is_idempotent_for_identical_outcomes() {
    let first = outcome_status(Ok("Selam Ahmet".to_owned()));
    let second = outcome_status(Ok("Selam Ahmet".to_owned()));
    assert_eq!(first, second);
}
