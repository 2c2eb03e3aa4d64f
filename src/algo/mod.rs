//! Percolation systems, percolation trials and depth-first orders.

pub mod percolation;
pub mod trials;

mod depth_first_order;
pub use depth_first_order::*;
