//! Input rules shared by registration, profile editing and catalog writes.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// Optional leading `+` followed by exactly twelve digits, e.g. `+998901234567`.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{12}$").expect("Invalid regex"));

static COLOR_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid regex"));

pub const MIN_FULLNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_RATING: i32 = 5;

/// Per-field validation messages, keyed by request field name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn is_valid_color_code(code: &str) -> bool {
    COLOR_CODE_RE.is_match(code)
}

pub fn check_fullname(errors: &mut FieldErrors, fullname: &str) {
    if fullname.trim().chars().count() < MIN_FULLNAME_LEN {
        errors.add(
            "fullname",
            format!("fullname must be at least {MIN_FULLNAME_LEN} characters"),
        );
    }
}

pub fn check_email(errors: &mut FieldErrors, email: &str) {
    if !is_valid_email(email) {
        errors.add("email", "invalid email format");
    }
}

pub fn check_phone(errors: &mut FieldErrors, phone: &str) {
    if !is_valid_phone(phone) {
        errors.add("phone_number", "invalid phone number format");
    }
}

pub fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
            "password",
            format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }
}

pub fn check_not_blank(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{field} must not be empty"));
    }
}

pub fn check_price(errors: &mut FieldErrors, price: i64) {
    if price < 0 {
        errors.add("price", "price must not be negative");
    }
}

pub fn check_rating(errors: &mut FieldErrors, rating: i32) {
    if !(0..=MAX_RATING).contains(&rating) {
        errors.add("rating", format!("rating must be between 0 and {MAX_RATING}"));
    }
}

pub fn check_color_code(errors: &mut FieldErrors, code: &str) {
    if !is_valid_color_code(code) {
        errors.add("color_code", "color_code must look like #RRGGBB");
    }
}
