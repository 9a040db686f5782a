pub mod hex;
pub mod point;

pub use point::Point;
