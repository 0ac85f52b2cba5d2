pub mod category;
pub mod pivot;
pub mod punch;
