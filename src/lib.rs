// Operations
mod operations;
pub use operations::*;

mod args;
pub use args::Arg;

mod errors;
pub use errors::InsertError;

mod insert;
pub use insert::insert;

// Executors
pub mod db;
pub mod stub;

// Models
pub mod models;

pub mod cli;
pub mod commands;
