//! Shared types and configuration for Stoneline.
//!
//! This crate provides common pieces used across all other crates:
//! - Configuration management
//! - JWT token service and claims
//! - Email service for contact notifications

pub mod config;
pub mod email;
pub mod jwt;

pub use config::AppConfig;
pub use email::{EmailConfig, EmailError, EmailService};
pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
