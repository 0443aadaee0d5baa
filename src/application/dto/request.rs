//! Request DTOs
//!
//! `application/x-www-form-urlencoded` bodies. Every field defaults to the
//! empty string so a missing input reaches the business rules instead of
//! failing extraction.

use serde::Deserialize;

use crate::application::services::{
    CreateBookingDto, CreateListingDto, LoginDto, UpdateListingDto, UpdateUserDto,
};

/// Blank form fields mean "leave unchanged".
pub fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Price fields must be plain integers.
pub fn parse_price(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Login form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl From<LoginForm> for LoginDto {
    fn from(form: LoginForm) -> Self {
        Self {
            email: form.email,
            password: form.password,
        }
    }
}

/// Registration form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

impl RegisterForm {
    pub fn passwords_match(&self) -> bool {
        self.password == self.password2
    }
}

/// Listing creation form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateListingForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub last_modified_date: String,
    pub email: String,
}

impl CreateListingForm {
    /// `None` when the price is not an integer.
    pub fn into_dto(self) -> Option<CreateListingDto> {
        let price = parse_price(&self.price)?;
        Some(CreateListingDto {
            title: self.title,
            description: self.description,
            price,
            last_modified_date: self.last_modified_date,
            owner_email: self.email,
        })
    }
}

/// Listing update form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateListingForm {
    pub email: String,
    pub listing_title: String,
    pub title: String,
    pub description: String,
    pub price: String,
}

impl UpdateListingForm {
    /// `None` when a price was entered but is not an integer.
    pub fn into_dto(self) -> Option<UpdateListingDto> {
        let price = match non_empty(self.price) {
            Some(price) => Some(parse_price(&price)?),
            None => None,
        };
        Some(UpdateListingDto {
            owner_email: self.email,
            listing_title: non_empty(self.listing_title),
            title: non_empty(self.title),
            description: non_empty(self.description),
            price,
        })
    }
}

/// Profile update form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProfileForm {
    pub old_email: String,
    pub new_email: String,
    pub username: String,
    pub billing_address: String,
    pub postal_code: String,
}

impl From<UpdateProfileForm> for UpdateUserDto {
    fn from(form: UpdateProfileForm) -> Self {
        Self {
            old_email: form.old_email,
            username: non_empty(form.username),
            email: non_empty(form.new_email),
            billing_address: non_empty(form.billing_address),
            // always checked, so an empty code fails the update
            postal_code: Some(form.postal_code),
        }
    }
}

/// Booking form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateBookingForm {
    pub user_email: String,
    pub listing_title: String,
    pub start_date: String,
    pub end_date: String,
}

impl From<CreateBookingForm> for CreateBookingDto {
    fn from(form: CreateBookingForm) -> Self {
        Self {
            user_email: form.user_email,
            listing_title: form.listing_title,
            start_date: form.start_date,
            end_date: form.end_date,
        }
    }
}
