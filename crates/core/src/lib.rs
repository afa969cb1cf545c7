//! Core domain logic for Stoneline.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies.
//!
//! # Modules
//!
//! - `auth` - Password hashing and admin roles
//! - `content` - Catalog enums and the gallery reconciliation plan
//! - `storage` - Image store adapter over object storage

pub mod auth;
pub mod content;
pub mod storage;
