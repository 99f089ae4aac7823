pub mod analyzers;
pub mod config;
pub mod error;
pub mod matrix;
pub mod methods;
pub mod output;

pub use error::{Result, TableError};
