pub mod badge;
pub mod button;
pub mod input;
pub mod textarea;

pub use badge::Badge;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use input::Input;
pub use textarea::Textarea;
