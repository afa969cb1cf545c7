//! Image store adapter over Apache OpenDAL.
//!
//! Vendor-agnostic object storage for catalog images:
//! - S3-compatible: Cloudflare R2, Supabase Storage, AWS S3
//! - Local filesystem (development)
//!
//! Uploads write the bytes directly and return the publicly resolvable URL;
//! deletion is advisory cleanup and is offered as a best-effort call.

mod config;
mod error;
mod service;

pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::{ImageStore, NewImage};
