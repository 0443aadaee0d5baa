//! Field Rules
//!
//! Pure predicates over single field values. Every account and listing
//! rule lives here so the services, the form DTOs and the tests agree on
//! one definition.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

/// Starting balance credited to every new account.
pub const DEFAULT_BALANCE: i64 = 100;

pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 19;
pub const PASSWORD_MIN_CHARS: usize = 6;
pub const TITLE_MAX_CHARS: usize = 80;
pub const DESCRIPTION_MIN_CHARS: usize = 20;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;
pub const PRICE_MIN: i64 = 10;
pub const PRICE_MAX: i64 = 10_000;

/// Canada Post format without separator: letter digit letter digit letter digit.
/// D, F, I, O, Q, U never appear; W and Z never lead.
static POSTAL_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z][0-9][ABCEGHJ-NPRSTV-Z][0-9]$")
        .expect("postal code pattern is valid")
});

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

/// `local@domain.tld`, as accepted by RFC 5322 addr-spec, with a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }

    match email.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

/// At least six characters with an uppercase, a lowercase and a special character.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_CHARS
        && password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_lowercase)
        && password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

/// Alphanumeric words separated by spaces, no space at either end.
fn is_spaced_alphanumeric(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with(' ')
        && !value.ends_with(' ')
        && value.chars().all(|c| c.is_alphanumeric() || c == ' ')
}

pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    (USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&len) && is_spaced_alphanumeric(username)
}

pub fn is_valid_postal_code(postal_code: &str) -> bool {
    !postal_code.is_empty()
        && postal_code.chars().all(char::is_alphanumeric)
        && POSTAL_CODE.is_match(postal_code)
}

pub fn is_valid_title(title: &str) -> bool {
    title.chars().count() <= TITLE_MAX_CHARS && is_spaced_alphanumeric(title)
}

/// 20 to 2000 characters and strictly longer than the listing title.
pub fn is_valid_description(description: &str, title: &str) -> bool {
    let len = description.chars().count();
    (DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&len) && len > title.chars().count()
}

pub fn is_valid_price(price: i64) -> bool {
    (PRICE_MIN..=PRICE_MAX).contains(&price)
}

/// Listings may only be created with a date strictly inside
/// 2021-01-02 .. 2025-01-02.
pub fn is_valid_listing_date(date: NaiveDate) -> bool {
    match (
        NaiveDate::from_ymd_opt(2021, 1, 2),
        NaiveDate::from_ymd_opt(2025, 1, 2),
    ) {
        (Some(start), Some(end)) => date > start && date < end,
        _ => false,
    }
}

/// Strict `YYYY-MM-DD`; calendar-impossible dates yield `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if !ISO_DATE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
