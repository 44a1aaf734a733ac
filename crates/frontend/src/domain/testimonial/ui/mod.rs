pub mod reviews_carousel;

pub use reviews_carousel::ReviewsCarousel;
