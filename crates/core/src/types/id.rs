//! Product identifiers.
//!
//! Catalog entries and cart lines refer to products by a small integer that is
//! stable for the lifetime of the catalog. Wrapping it keeps quantities,
//! deltas, and ids from being mixed up at call sites.

use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique, stable identifier of a catalog product.
///
/// Serializes as a bare integer so persisted carts stay a flat JSON array of
/// `{ "id": 1, ... }` objects.
///
/// ```
/// use gadget_bazaar_core::ProductId;
///
/// let id: ProductId = "3".parse().unwrap();
/// assert_eq!(id, ProductId::new(3));
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    /// Create a product ID from its raw value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
