pub mod ai;
pub mod config;
pub mod error;
pub mod server;
pub mod shopify;
mod upstream;

pub use error::{Error, Result};
