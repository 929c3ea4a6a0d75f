pub mod display;
pub mod wei;
