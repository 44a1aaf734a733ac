pub mod about;
pub mod hero;
pub mod view;

pub use view::HomePage;
