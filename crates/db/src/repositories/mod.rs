//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod admin;
pub mod contact;
pub mod faq;
pub mod gallery;
pub mod product;
pub mod team;
pub mod testimonial;

pub use admin::AdminRepository;
pub use contact::{ContactRepository, ContactStats, NewContactInput};
pub use faq::{CreateFaqInput, FaqRepository, UpdateFaqInput};
pub use gallery::{CreateGalleryItemInput, GalleryFilter, GalleryRepository, UpdateGalleryItemInput};
pub use product::{CreateProductInput, ProductFilter, ProductRepository, UpdateProductInput};
pub use team::{CreateTeamMemberInput, TeamRepository, UpdateTeamMemberInput};
pub use testimonial::{CreateTestimonialInput, TestimonialRepository, UpdateTestimonialInput};
