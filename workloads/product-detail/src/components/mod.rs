//! Components of the product detail block.

mod controls;
mod description;
mod image_slider;
mod name;
mod price;

pub use controls::*;
pub use description::*;
pub use image_slider::*;
pub use name::*;
pub use price::*;
