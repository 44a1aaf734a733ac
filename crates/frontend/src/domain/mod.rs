pub mod catalog;
pub mod image_generation;
pub mod recommendation;
pub mod testimonial;
