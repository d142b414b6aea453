//! Shopping cart lines and mutation rules.
//!
//! The cart is an ordered list of lines, unique by product ID, where every
//! line has a quantity of at least one. All mutations here are pure; the
//! storefront's cart store is responsible for persisting the result.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// One product in the cart with its quantity.
///
/// The product fields are a snapshot taken when the line was created, so a
/// persisted cart renders without consulting the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product snapshot.
    #[serde(flatten)]
    pub product: Product,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Product ID of this line.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Result of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// No line exists for the product; nothing changed.
    Absent,
    /// The line now has this quantity.
    Updated(u32),
    /// The quantity dropped to zero or below and the line was removed.
    Removed,
}

/// An ordered collection of cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a cart from raw lines, restoring the cart invariants.
    ///
    /// Lines with a zero quantity are dropped and repeated product IDs are
    /// merged into the first occurrence.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.line_mut(line.id()) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The line for a product, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line or appends a new line with quantity 1.
    /// Returns the product's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        1
    }

    /// Change a line's quantity by `delta`.
    ///
    /// A resulting quantity of zero or less removes the line.
    pub fn update_quantity(&mut self, id: ProductId, delta: i32) -> QuantityChange {
        let Some(line) = self.line_mut(id) else {
            return QuantityChange::Absent;
        };

        let next = i64::from(line.quantity) + i64::from(delta);
        if next <= 0 {
            self.remove(id);
            return QuantityChange::Removed;
        }

        line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        QuantityChange::Updated(line.quantity)
    }

    /// Remove a product's line. Returns whether a line was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Sum of `price x quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        Self::from_lines(lines)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}
