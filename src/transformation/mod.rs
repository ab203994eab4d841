//! Transformation of continuous shapes into discrete voxel data.

pub mod rasterization;
