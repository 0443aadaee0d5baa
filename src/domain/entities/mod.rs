//! # Domain Entities
//!
//! Core domain entities representing the marketplace's business objects.
//! All entities map directly to their corresponding database tables.
//!
//! - **User**: account with credentials, billing details and balance
//! - **Listing**: a property offered for rent by its owner
//! - **Booking**: a user's reservation of a listing for a date range
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod booking;
mod listing;
mod user;

pub use booking::{Booking, BookingRepository};
pub use listing::{Listing, ListingRepository};
pub use user::{User, UserRepository};

#[cfg(test)]
pub use booking::MockBookingRepository;
#[cfg(test)]
pub use listing::MockListingRepository;
#[cfg(test)]
pub use user::MockUserRepository;
