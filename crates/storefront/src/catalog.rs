//! The shop's built-in product catalog.

use gadget_bazaar_core::{Catalog, Price, Product, ProductId};

/// (id, name, price, image, description)
const PRODUCTS: [(i32, &str, i64, &str, &str); 8] = [
    (
        1,
        "Wireless Headphones",
        400,
        "photos/headphone.jpg",
        "High-quality wireless headphones with noise cancellation for an immersive audio experience.",
    ),
    (
        2,
        "Smart Watch",
        350,
        "photos/smartwatch.jpg",
        "Stay connected and track your fitness goals with this feature-rich smart watch.",
    ),
    (
        3,
        "Portable Speaker",
        2000,
        "photos/speaker.jpg",
        "Compact and powerful portable speaker for on-the-go music and entertainment.",
    ),
    (
        4,
        "HD Webcam",
        3000,
        "photos/webcam.jpg",
        "Crystal clear video calls with this high-definition webcam. Perfect for remote work.",
    ),
    (
        5,
        "Gaming Mouse",
        459,
        "photos/mouse.jpg",
        "Precision gaming mouse with customizable RGB lighting and ergonomic design.",
    ),
    (
        6,
        "Ergonomic Keyboard",
        509,
        "photos/keyboard.jpg",
        "A comfortable and responsive keyboard designed for long hours of typing and use.",
    ),
    (
        7,
        "External SSD",
        829,
        "photos/ssd.jpg",
        "Fast and reliable external storage for all your files and data backups.",
    ),
    (
        8,
        "Desk Monitor",
        457,
        "photos/monitor.jpg",
        "A large, high-resolution monitor perfect for productivity and immersive entertainment.",
    ),
];

/// Build the catalog the storefront sells from.
#[must_use]
pub fn builtin() -> Catalog {
    Catalog::new(
        PRODUCTS
            .iter()
            .map(|&(id, name, price, image, description)| Product {
                id: ProductId::new(id),
                name: name.to_owned(),
                price: Price::from_units(price),
                image: image.to_owned(),
                description: description.to_owned(),
            })
            .collect(),
    )
}
