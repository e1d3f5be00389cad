pub mod in_memory_menu_repository;

pub use in_memory_menu_repository::*;
