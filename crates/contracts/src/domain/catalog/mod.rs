//! Static venue content: menu, testimonials and business details.

pub mod aggregate;
pub mod data;
pub mod filter;

pub use aggregate::{BusinessInfo, Catalog, CatalogError, CatalogItem, OpeningHours, SocialLinks, Testimonial};
pub use data::catalog;
pub use filter::filter_by_category;
