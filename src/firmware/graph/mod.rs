pub mod draw;
pub mod geometry;
