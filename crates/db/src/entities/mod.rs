//! `SeaORM` entity definitions.

pub mod admins;
pub mod contacts;
pub mod faqs;
pub mod gallery_items;
pub mod products;
pub mod team_members;
pub mod testimonials;
