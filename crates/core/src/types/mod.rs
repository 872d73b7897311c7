//! Core types for Tiffin.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod food;
pub mod id;

pub use cart::Cart;
pub use food::{FoodInput, FoodItem, filter_by_category};
pub use id::FoodId;
