pub mod align;
pub mod grid;
pub mod image;
pub mod uv;
pub mod view;
