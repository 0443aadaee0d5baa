//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AccountService**: registration, login, profile updates
//! - **ListingService**: listing creation and updates
//! - **BookingService**: bookings and the balance transfer that pays for them
//! - **SessionService**: signed session tokens carried in a cookie

pub mod account_service;
pub mod booking_service;
pub mod listing_service;
pub mod session_service;

pub use account_service::{
    AccountError, AccountService, AccountServiceImpl, LoginDto, RegisterUserDto, UpdateUserDto,
};
pub use booking_service::{BookingError, BookingService, BookingServiceImpl, CreateBookingDto};
pub use listing_service::{
    CreateListingDto, ListingError, ListingService, ListingServiceImpl, UpdateListingDto,
};
pub use session_service::{SessionClaims, SessionError, SessionService};
