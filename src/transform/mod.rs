//! Builders for homogeneous 4x4 transforms and compact 3x4 affine poses.
//!
//! Every builder returns a column-major matrix meant to be applied as
//! `m * v` to column vectors.

pub mod affine;
pub mod projection;
mod rigid;

pub use affine::{
    affine_to_homogeneous, compose_affine, invert_ortho, rotation_scale_translation,
    transform_point_affine,
};
pub use projection::{ortho, perspective, Handedness};
pub use rigid::{
    cross_product_matrix, rotation_axis, rotation_x, rotation_x_cs, rotation_y, rotation_y_cs,
    rotation_z, rotation_z_cs, scaling, scaling_xyz, translation,
};
