//! Gadget Bazaar Core - Shared domain types.
//!
//! This crate provides the domain model used by every Gadget Bazaar component:
//! - `storefront` - Server-rendered shop with a persisted visitor cart
//! - `cli` - Command-line tools for inspecting the catalog and cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! storage, no HTTP. Persistence and rendering live in the storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, and emails
//! - [`catalog`] - The immutable product list
//! - [`cart`] - Cart lines and the cart mutation rules
//! - [`contact`] - Contact form validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod types;

pub use cart::{Cart, CartLine, QuantityChange};
pub use catalog::{Catalog, Product};
pub use contact::{ContactError, ContactField, ContactForm, ContactMessage};
pub use types::*;
