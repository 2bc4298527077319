//! Domain layer for the Carfinder plugin.
//!
//! Core domain types and business rules, independent of Zellij-specific APIs
//! and infrastructure concerns: the car record as delivered by the inventory
//! endpoint, the wishlist with its membership rules, and the crate-wide
//! error type.
//!
//! # Organization
//!
//! - [`car`]: inventory record model
//! - [`wishlist`]: order-preserving, duplicate-free retained-car set
//! - [`error`]: error types and result alias

pub mod car;
pub mod error;
pub mod wishlist;

pub use car::CarRecord;
pub use error::{CarfinderError, Result};
pub use wishlist::{Wishlist, WishlistEntry};
