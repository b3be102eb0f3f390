//! Console admin API client and wire types.

mod client;
mod types;

pub use client::ConsoleClient;
pub use types::{Bucket, validate_bucket_name};
