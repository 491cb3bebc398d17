//! Demo catalog seed data.
//!
//! The catalog is static configuration: eight demo products inserted once
//! when the `products` table is empty. Nothing mutates them afterwards.

use sqlx::SqlitePool;

/// The demo catalog: (name, price, image URL, description).
const DEMO_PRODUCTS: &[(&str, f64, &str, &str)] = &[
    (
        "AirPods Pro (2nd Gen)",
        249.99,
        "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/MQD83?wid=400&hei=400&fmt=jpeg&qlt=90&.v=1660803972361",
        "Active Noise Cancellation, Transparency mode, and Spatial Audio with dynamic head tracking",
    ),
    (
        "iPhone 15 Pro Case",
        59.99,
        "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/MT223?wid=400&hei=400&fmt=jpeg&qlt=90&.v=1693340489013",
        "Premium leather case with MagSafe compatibility and military-grade drop protection",
    ),
    (
        "JBL Charge 5 Speaker",
        179.99,
        "https://www.jbl.com/dw/image/v2/BFND_PRD/on/demandware.static/-/Sites-masterCatalog_Harman/default/dw7c537c5b/JBL_Charge5_Hero_Blue_0148_x1.png",
        "Waterproof portable speaker with 20 hours of playtime and powerbank feature",
    ),
    (
        "USB-C to Lightning Cable",
        29.99,
        "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/MQGH3?wid=400&hei=400&fmt=jpeg&qlt=90&.v=1661957814407",
        "Apple MFi certified fast charging cable, 6ft braided design",
    ),
    (
        "MacBook Pro Stand",
        89.99,
        "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=400&h=300&fit=crop&crop=center",
        "Adjustable aluminum laptop stand with cooling design and cable management",
    ),
    (
        "Logitech MX Master 3S",
        99.99,
        "https://resource.logitech.com/w_692,c_lpad,ar_4:3,q_auto,f_auto,dpr_1.0/d_transparent.gif/content/dam/logitech/en/products/mice/mx-master-3s/gallery/mx-master-3s-mouse-top-view-graphite.png",
        "Advanced wireless mouse with ultra-fast scrolling and multi-device connectivity",
    ),
    (
        "Anker PowerCore 26800",
        65.99,
        "https://cdn.shopify.com/s/files/1/0057/8938/4802/products/A1277011_TD01_600x.jpg",
        "High-capacity portable charger with PowerIQ technology and triple USB ports",
    ),
    (
        "Screen Cleaning Kit Pro",
        24.99,
        "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=300&fit=crop&crop=center",
        "Professional cleaning solution with microfiber cloths for all electronic screens",
    ),
];

/// Insert the demo catalog if the `products` table is empty.
///
/// # Errors
///
/// Returns `sqlx::Error` if any query fails.
pub async fn seed_products(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    for (name, price, image, description) in DEMO_PRODUCTS {
        sqlx::query(
            r"
            INSERT INTO products (name, price, image, description)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(name)
        .bind(price)
        .bind(image)
        .bind(description)
        .execute(pool)
        .await?;
    }

    tracing::info!(count = DEMO_PRODUCTS.len(), "Seeded demo catalog");

    Ok(())
}
