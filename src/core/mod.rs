pub mod categorize;
pub mod logic;
pub mod parse;
pub mod pivot;
pub mod schema;
