//! Various unsorted geometrical and logical operators.

pub use self::clamp::clamp_to_grid_height;
pub use self::point_in_triangle::{
    is_point_in_closed_triangle, same_side, side_of_line, Orientation,
};

mod clamp;
pub mod point_in_triangle;
