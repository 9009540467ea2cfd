//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `order_form`: The pizza order form

mod field_renderer;
mod order_form;

pub use order_form::draw_order;
