//! Mutable view over an interleaved vertex buffer.

use std::mem::size_of;
use std::ops::Range;

use bytemuck::Pod;

use crate::error::{BufferError, Result};
use crate::math::Float3;

const FLOAT3_SIZE: usize = size_of::<Float3>();

/// `count` vertex records of `stride` bytes each, with a `Float3` position at
/// byte offset 0 and a `Float3` normal at `normal_offset`.
///
/// The layout is validated once on construction. Fields are copied in and out
/// unaligned, so the underlying bytes need no particular alignment.
#[derive(Debug)]
pub struct VertexBufferMut<'a> {
    bytes: &'a mut [u8],
    count: usize,
    stride: usize,
    normal_offset: usize,
}

impl<'a> VertexBufferMut<'a> {
    /// Creates a view over raw vertex bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::FieldOutsideStride`] if the position or normal
    /// does not fit inside one record, or [`BufferError::BufferTooSmall`] if
    /// `bytes` is shorter than `count * stride`.
    pub fn new(
        bytes: &'a mut [u8],
        count: usize,
        stride: usize,
        normal_offset: usize,
    ) -> Result<Self> {
        for offset in [0, normal_offset] {
            if !offset.checked_add(FLOAT3_SIZE).is_some_and(|end| end <= stride) {
                return Err(BufferError::FieldOutsideStride {
                    offset,
                    size: FLOAT3_SIZE,
                    stride,
                }
                .into());
            }
        }
        let required = count.saturating_mul(stride);
        if bytes.len() < required {
            return Err(BufferError::BufferTooSmall {
                required,
                actual: bytes.len(),
            }
            .into());
        }
        Ok(Self {
            bytes,
            count,
            stride,
            normal_offset,
        })
    }

    /// Views a slice of vertex structs whose first field is the position.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::FieldOutsideStride`] if a `Float3` at
    /// `normal_offset` does not fit inside `V`.
    pub fn from_vertices<V: Pod>(vertices: &'a mut [V], normal_offset: usize) -> Result<Self> {
        let count = vertices.len();
        Self::new(
            bytemuck::cast_slice_mut(vertices),
            count,
            size_of::<V>(),
            normal_offset,
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn field(&self, i: usize, offset: usize) -> Range<usize> {
        debug_assert!(i < self.count, "vertex {i} of {}", self.count);
        let start = i * self.stride + offset;
        start..start + FLOAT3_SIZE
    }

    #[must_use]
    pub fn position(&self, i: usize) -> Float3 {
        bytemuck::pod_read_unaligned(&self.bytes[self.field(i, 0)])
    }

    #[must_use]
    pub fn normal(&self, i: usize) -> Float3 {
        bytemuck::pod_read_unaligned(&self.bytes[self.field(i, self.normal_offset)])
    }

    pub fn set_normal(&mut self, i: usize, n: Float3) {
        let range = self.field(i, self.normal_offset);
        self.bytes[range].copy_from_slice(bytemuck::bytes_of(&n));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeomkitError;

    #[test]
    fn reads_and_writes_at_offsets() {
        // Position, 4 bytes of padding, normal: 28-byte records.
        let mut bytes = vec![0u8; 2 * 28];
        bytes[28..40].copy_from_slice(bytemuck::bytes_of(&Float3::new(1.0, 2.0, 3.0)));
        let mut buf = VertexBufferMut::new(&mut bytes, 2, 28, 16).unwrap();
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.position(1), Float3::new(1.0, 2.0, 3.0));

        buf.set_normal(0, Float3::new(0.0, 0.0, 1.0));
        assert_eq!(buf.normal(0), Float3::new(0.0, 0.0, 1.0));
        assert_eq!(buf.position(0), Float3::zero());
        assert_eq!(buf.normal(1), Float3::zero());
    }

    #[test]
    fn unaligned_storage_is_fine() {
        let mut bytes = vec![0u8; 1 + 24];
        let mut buf = VertexBufferMut::new(&mut bytes[1..], 1, 24, 12).unwrap();
        buf.set_normal(0, Float3::new(0.5, 0.25, 0.125));
        assert_eq!(buf.normal(0), Float3::new(0.5, 0.25, 0.125));
    }

    #[test]
    fn normal_must_fit_in_stride() {
        let mut bytes = vec![0u8; 64];
        let err = VertexBufferMut::new(&mut bytes, 2, 24, 16).unwrap_err();
        assert!(matches!(
            err,
            GeomkitError::Buffer(BufferError::FieldOutsideStride {
                offset: 16,
                size: 12,
                stride: 24
            })
        ));
    }

    #[test]
    fn huge_normal_offset_is_rejected() {
        let mut bytes = [0u8; 48];
        let err = VertexBufferMut::new(&mut bytes, 2, 24, usize::MAX - 5).unwrap_err();
        assert!(matches!(
            err,
            GeomkitError::Buffer(BufferError::FieldOutsideStride {
                offset,
                size: 12,
                stride: 24
            }) if offset == usize::MAX - 5
        ));
    }

    #[test]
    fn position_must_fit_in_stride() {
        let mut bytes = vec![0u8; 64];
        assert!(VertexBufferMut::new(&mut bytes, 1, 8, 0).is_err());
    }

    #[test]
    fn buffer_must_hold_all_records() {
        let mut bytes = vec![0u8; 47];
        let err = VertexBufferMut::new(&mut bytes, 2, 24, 12).unwrap_err();
        assert!(matches!(
            err,
            GeomkitError::Buffer(BufferError::BufferTooSmall {
                required: 48,
                actual: 47
            })
        ));
    }

    #[test]
    fn views_vertex_structs() {
        let mut verts = [[1.0_f32, 2.0, 3.0, 0.0, 0.0, 0.0, 9.0]; 3];
        let mut buf = VertexBufferMut::from_vertices(&mut verts, 12).unwrap();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.position(2), Float3::new(1.0, 2.0, 3.0));
        buf.set_normal(2, Float3::new(0.0, 1.0, 0.0));
        assert_eq!(verts[2], [1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 9.0]);
    }
}
