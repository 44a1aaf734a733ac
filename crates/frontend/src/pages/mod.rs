pub mod home;
pub mod lab;
