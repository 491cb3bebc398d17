//! Domain models shared by repositories and route handlers.

pub mod cart;
pub mod order;
pub mod product;

pub use cart::{CartLine, CartView};
pub use order::{CheckoutItem, CustomerInfo, Order, Receipt};
pub use product::Product;
