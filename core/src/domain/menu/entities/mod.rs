pub mod cooking_step;
pub mod dish;
pub mod ingredient;

pub use cooking_step::*;
pub use dish::*;
pub use ingredient::*;
