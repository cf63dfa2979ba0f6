pub mod color;
pub mod random;
