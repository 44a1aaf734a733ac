pub mod menu_section;
pub mod product_card;
pub mod product_modal;

pub use menu_section::MenuSection;
pub use product_card::ProductCard;
pub use product_modal::{ProductModal, ProductModalHost};
