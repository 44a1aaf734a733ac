pub mod header;
pub mod mobile_menu;

pub use header::{Header, MystLogo};
pub use mobile_menu::MobileMenu;
