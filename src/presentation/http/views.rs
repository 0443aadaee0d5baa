//! HTML Views
//!
//! Server-rendered pages. Every interpolated value goes through [`escape`].

use std::fmt::Write;

use crate::domain::{Booking, Listing, User};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Rental Marketplace</title>
</head>
<body>
<nav><a href="/">Home</a> | <a href="/create_listing">Create Listing</a> | <a href="/update_listing">Update Listing</a> | <a href="/create_booking">Book</a> | <a href="/update_profile">Profile</a> | <a href="/logout">Logout</a></nav>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// A form page: heading, status message and the given input fields.
fn form_page(title: &str, message: &str, action: &str, fields: &[(&str, &str, &str)]) -> String {
    let mut inputs = String::new();
    for (name, label, kind) in fields {
        let _ = writeln!(
            inputs,
            r#"<label for="{name}">{label}</label>
<input type="{kind}" id="{name}" name="{name}">"#
        );
    }

    let body = format!(
        r#"<h1>{title}</h1>
<h4 id="message">{message}</h4>
<form method="post" action="{action}">
{inputs}<input type="submit" id="btn-submit" value="Submit">
</form>"#,
        title = escape(title),
        message = escape(message),
    );

    layout(title, &body)
}

pub fn login_page(message: &str) -> String {
    form_page(
        "Log In",
        message,
        "/login",
        &[("email", "Email", "email"), ("password", "Password", "password")],
    )
}

pub fn register_page(message: &str) -> String {
    form_page(
        "Register",
        message,
        "/register",
        &[
            ("email", "Email", "email"),
            ("name", "Name", "text"),
            ("password", "Password", "password"),
            ("password2", "Confirm Password", "password"),
        ],
    )
}

pub fn create_listing_page(message: &str) -> String {
    form_page(
        "Create Listing",
        message,
        "/create_listing",
        &[
            ("title", "Title", "text"),
            ("description", "Description", "text"),
            ("price", "Price", "text"),
            ("last_modified_date", "Date (YYYY-MM-DD)", "text"),
            ("email", "Owner Email", "email"),
        ],
    )
}

pub fn update_listing_page(message: &str) -> String {
    form_page(
        "Update Listing",
        message,
        "/update_listing",
        &[
            ("email", "Owner Email", "email"),
            ("listing_title", "Listing to Update (blank for your first)", "text"),
            ("title", "New Title", "text"),
            ("description", "New Description", "text"),
            ("price", "New Price", "text"),
        ],
    )
}

pub fn update_profile_page(message: &str) -> String {
    form_page(
        "Update Profile",
        message,
        "/update_profile",
        &[
            ("old_email", "Current Email", "email"),
            ("new_email", "New Email", "email"),
            ("username", "Username", "text"),
            ("billing_address", "Billing Address", "text"),
            ("postal_code", "Postal Code", "text"),
        ],
    )
}

pub fn create_booking_page(message: &str) -> String {
    form_page(
        "Create Booking",
        message,
        "/create_booking",
        &[
            ("user_email", "Your Email", "email"),
            ("listing_title", "Listing Title", "text"),
            ("start_date", "Start Date (YYYY-MM-DD)", "text"),
            ("end_date", "End Date (YYYY-MM-DD)", "text"),
        ],
    )
}

fn listing_rows(listings: &[Listing]) -> String {
    let mut rows = String::new();
    for listing in listings {
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&listing.title),
            escape(&listing.description),
            listing.price,
            listing.last_modified_date,
        );
    }
    rows
}

/// The signed-in user's dashboard.
pub fn home_page(
    user: &User,
    own_listings: &[Listing],
    bookings: &[Booking],
    all_listings: &[Listing],
) -> String {
    let mut booking_rows = String::new();
    for booking in bookings {
        let title = all_listings
            .iter()
            .find(|l| l.id == booking.listing_id)
            .map(|l| l.title.as_str())
            .unwrap_or("(unknown listing)");
        let nights = booking.dates().map(|d| d.nights()).unwrap_or_default();
        let _ = writeln!(
            booking_rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(title),
            booking.start_date,
            booking.end_date,
            nights,
        );
    }

    let body = format!(
        r#"<h2 id="welcome-header">Welcome {username}!</h2>
<p id="profile">Email: {email}<br>Billing address: {billing}<br>Postal code: {postal}<br>Balance: <span id="balance">{balance}</span></p>
<h3>Your Listings</h3>
<table id="own-listings">
<tr><th>Title</th><th>Description</th><th>Price</th><th>Last Modified</th></tr>
{own}</table>
<h3>Your Bookings</h3>
<table id="bookings">
<tr><th>Listing</th><th>Start</th><th>End</th><th>Nights</th></tr>
{booking_rows}</table>
<h3>All Listings</h3>
<table id="listings">
<tr><th>Title</th><th>Description</th><th>Price</th><th>Last Modified</th></tr>
{all}</table>"#,
        username = escape(&user.username),
        email = escape(&user.email),
        billing = escape(&user.billing_address),
        postal = escape(&user.postal_code),
        balance = user.balance,
        own = listing_rows(own_listings),
        all = listing_rows(all_listings),
    );

    layout("Home", &body)
}

/// Minimal page for errors that have no form to return to.
pub fn error_page(status: u16, message: &str) -> String {
    let body = format!(
        "<h1>Error {status}</h1>\n<p id=\"message\">{}</p>",
        escape(message)
    );
    layout("Error", &body)
}
