pub mod view;

pub use view::LabPage;
