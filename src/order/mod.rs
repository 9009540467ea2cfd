//! Order service client module for HTTP communication

mod client;
mod traits;

pub use client::{OrderClient, OrderClientError, OrderResponse, DEFAULT_ENDPOINT};
pub use traits::OrderService;

#[cfg(test)]
pub use traits::MockOrderService;
