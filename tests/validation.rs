use storefront_api::{
    dto::users::UpdateProfileRequest,
    services::{product_service::validate_product, user_service::validate_profile_update},
    validation::{FieldErrors, is_valid_color_code, is_valid_email, is_valid_phone},
};

#[test]
fn email_rule_matches_profile_form() {
    assert!(is_valid_email("abduqodiir@gmail.com"));
    assert!(is_valid_email("a.b@c.uz"));
    assert!(!is_valid_email("no-at-sign.com"));
    assert!(!is_valid_email("user@nodot"));
    assert!(!is_valid_email("sp ace@mail.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn phone_rule_accepts_twelve_digits_with_optional_plus() {
    assert!(is_valid_phone("+998884891727"));
    assert!(is_valid_phone("998884891727"));
    assert!(!is_valid_phone("+99888489172"));
    assert!(!is_valid_phone("+9988848917270"));
    assert!(!is_valid_phone("+99888-489-1727"));
}

#[test]
fn color_code_rule() {
    assert!(is_valid_color_code("#FF0000"));
    assert!(is_valid_color_code("#00ff7a"));
    assert!(!is_valid_color_code("FF0000"));
    assert!(!is_valid_color_code("#FFF"));
}

#[test]
fn profile_update_reports_every_bad_field() {
    let payload = UpdateProfileRequest {
        fullname: Some("  ab  ".to_string()),
        email: Some("broken".to_string()),
        phone_number: Some("12345".to_string()),
    };

    let errors = validate_profile_update(&payload).expect_err("should fail");
    assert_eq!(errors.len(), 3);
    assert!(errors.get("fullname").is_some());
    assert!(errors.get("email").is_some());
    assert!(errors.get("phone_number").is_some());
}

#[test]
fn profile_update_checks_only_supplied_fields() {
    let payload = UpdateProfileRequest {
        fullname: Some("Abduqodir".to_string()),
        ..Default::default()
    };
    assert!(validate_profile_update(&payload).is_ok());
    assert!(validate_profile_update(&UpdateProfileRequest::default()).is_ok());
}

#[test]
fn product_rules() {
    assert!(validate_product("Play Station 5", 599, 4).is_ok());

    let errors = validate_product(" ", -1, 6).expect_err("should fail");
    assert_eq!(errors.len(), 3);
    assert!(errors.get("price").is_some());
    assert!(errors.get("rating").is_some());
}

#[test]
fn field_errors_serialize_as_flat_map() {
    let mut errors = FieldErrors::new();
    errors.add("email", "invalid email format");
    errors.add("email", "second message is ignored");

    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "invalid email format" }));
}
