pub mod config;
pub mod gemini;
pub mod navigation;
pub mod rotation;
pub mod typewriter;
