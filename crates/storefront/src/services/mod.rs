//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - The persisted visitor cart

pub mod cart;

pub use cart::{AddedToCart, CART_STORAGE_KEY, CartStore};
