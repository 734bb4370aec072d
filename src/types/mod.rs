// src/types/mod.rs
pub mod claims;
pub mod output;

pub use claims::Claims;
pub use output::{Output, Status};
