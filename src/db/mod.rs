pub mod connection;
pub use connection::{open, Connection};

pub mod results;
pub mod schema;
