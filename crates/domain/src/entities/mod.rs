//! Entities and payload records flowing between stages

mod delivery;
mod order;
mod shirt;

pub use delivery::{DeliveryState, DeliveryStatus};
pub use order::{Order, OrderStatus};
pub use shirt::{PackedShirts, Shirt, ShirtStyle};
