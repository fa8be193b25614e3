mod generator;
mod sqlite;

pub use generator::*;
pub use sqlite::*;
