//! Catalog commands.

use gadget_bazaar_core::Catalog;
use gadget_bazaar_storefront::catalog;

/// One line per product: ID, name and price.
pub fn listing(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .map(|product| {
            let id = product.id.to_string();
            format!("{id:>3}  {:<28} {}", product.name, product.price)
        })
        .collect()
}

/// Print the built-in catalog.
pub fn list() {
    let catalog = catalog::builtin();
    tracing::info!("{} products", catalog.len());
    for line in listing(&catalog) {
        tracing::info!("{line}");
    }
}
