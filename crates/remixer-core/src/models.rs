pub mod candidate;
pub mod generation;
pub mod saved_item;
