pub mod allergen;
pub mod availability;
pub mod common;
pub mod compatibility;
pub mod menu;
pub mod safety;
