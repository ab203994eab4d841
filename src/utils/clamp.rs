use crate::math::{GRID_MAX_HEIGHT, GRID_MIN_HEIGHT};

/// Clamps `value` to the valid vertical range `[0, 255]` of the voxel grid.
///
/// Values already inside of the range are returned unchanged. This is generic
/// over every scalar type that can be built from a `u8` so it applies equally to
/// integer cell coordinates and to real plane heights.
///
/// A NaN input is returned as-is since it compares neither below nor above the
/// bounds.
#[inline]
pub fn clamp_to_grid_height<N: PartialOrd + From<u8>>(value: N) -> N {
    num::clamp(value, N::from(GRID_MIN_HEIGHT), N::from(GRID_MAX_HEIGHT))
}
