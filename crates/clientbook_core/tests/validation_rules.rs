use clientbook_core::validation::rule_for;
use clientbook_core::{check_field, check_input, FieldCheck, FieldRole, NewClient, REQUIRED_MESSAGE};

#[test]
fn name_rule_accepts_letters_and_requires_three_chars() {
    assert!(check_field(FieldRole::Name, "Ana").is_valid());
    assert_eq!(
        check_field(FieldRole::Name, "An"),
        FieldCheck::Invalid(rule_for(FieldRole::Name).message)
    );
}

#[test]
fn empty_input_reports_required_before_pattern() {
    assert_eq!(
        check_field(FieldRole::Name, ""),
        FieldCheck::Invalid(REQUIRED_MESSAGE)
    );
    for role in FieldRole::ALL {
        assert_eq!(check_field(role, "").message(), Some(REQUIRED_MESSAGE));
    }
}

#[test]
fn digits_in_name_report_pattern_message() {
    let check = check_field(FieldRole::Name, "123");
    assert_eq!(check.message(), Some(rule_for(FieldRole::Name).message));
    assert_ne!(check.message(), Some(REQUIRED_MESSAGE));
}

#[test]
fn phone_rule_requires_exactly_nine_digits() {
    assert!(check_field(FieldRole::Phone, "612345678").is_valid());
    assert!(!check_field(FieldRole::Phone, "61234567").is_valid());
    assert!(!check_field(FieldRole::Phone, "61234567a").is_valid());
    assert!(!check_field(FieldRole::Phone, "6123456789").is_valid());
}

#[test]
fn email_rule_requires_local_domain_tld_shape() {
    assert!(check_field(FieldRole::Email, "juan@example.com").is_valid());
    assert!(!check_field(FieldRole::Email, "juan@example").is_valid());
    assert!(!check_field(FieldRole::Email, "juan example@x.com").is_valid());
    assert!(!check_field(FieldRole::Email, "@example.com").is_valid());
}

#[test]
fn company_rule_matches_name_rule() {
    assert!(check_field(FieldRole::Company, "Acme Corp").is_valid());
    assert!(!check_field(FieldRole::Company, "AC").is_valid());
    assert!(!check_field(FieldRole::Company, "Acme 2000").is_valid());
}

#[test]
fn check_input_maps_persisted_names() {
    assert!(!check_input("telefono", "12").is_valid());
    assert!(check_input("empresa", "Globex").is_valid());
    assert!(check_input("hidden", "").is_valid());
}

#[test]
fn record_validation_reports_first_failing_field() {
    let client = NewClient::new("Juan Perez", "", "1", "Acme");
    let err = client.validate().unwrap_err();
    assert_eq!(err.role, FieldRole::Email);
    assert_eq!(err.message, REQUIRED_MESSAGE);
    assert!(err.to_string().contains("email"));
}
