use tracing::{debug, warn};

use crate::error::{BufferError, GeometryError, Result};
use crate::math::Float3;

use super::strided::VertexBufferMut;

/// Options for [`VertexNormals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalOptions {
    /// Skip triangles with coincident corners instead of failing.
    pub ignore_bad_triangles: bool,
}

impl Default for NormalOptions {
    fn default() -> Self {
        Self {
            ignore_bad_triangles: true,
        }
    }
}

/// Summary of a [`VertexNormals`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalStats {
    /// Triangles that contributed to the normals.
    pub triangles: usize,
    /// Triangles skipped because two corners coincide.
    pub degenerate_skipped: usize,
    /// Vertices left with a zero normal.
    pub isolated_vertices: usize,
}

/// Recomputes smooth per-vertex normals of an indexed triangle mesh.
///
/// Each triangle adds its unit face normal to its three corners, weighted by
/// `1 - cos` of the corner angle, and the sums are renormalized. Face normals
/// point along `(p3 - p1) x (p2 - p1)`. Vertices that no triangle touches keep
/// a zero normal.
pub struct VertexNormals {
    options: NormalOptions,
}

impl VertexNormals {
    /// Creates a new `VertexNormals` operation.
    #[must_use]
    pub fn new(options: NormalOptions) -> Self {
        Self { options }
    }

    /// Executes the operation, overwriting every normal in `buffer`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IncompleteTriangle`] if the index count is not a
    /// multiple of 3, [`BufferError::IndexOutOfBounds`] for an index past the
    /// last vertex, and, unless `ignore_bad_triangles` is set,
    /// [`GeometryError::DegenerateTriangle`] for the first triangle with
    /// coincident corners. The buffer is left untouched on error.
    pub fn execute(&self, indices: &[u32], buffer: &mut VertexBufferMut<'_>) -> Result<NormalStats> {
        if indices.len() % 3 != 0 {
            return Err(BufferError::IncompleteTriangle { len: indices.len() }.into());
        }
        let count = buffer.len();
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= count) {
            return Err(BufferError::IndexOutOfBounds {
                index: index as usize,
                count,
            }
            .into());
        }

        if !self.options.ignore_bad_triangles {
            if let Some(triangle) = indices
                .chunks_exact(3)
                .position(|tri| is_degenerate(buffer, corners(tri)))
            {
                return Err(GeometryError::DegenerateTriangle { triangle }.into());
            }
        }

        for i in 0..count {
            buffer.set_normal(i, Float3::zero());
        }

        let mut stats = NormalStats::default();
        for (t, tri) in indices.chunks_exact(3).enumerate() {
            let [i1, i2, i3] = corners(tri);
            if is_degenerate(buffer, [i1, i2, i3]) {
                debug!(triangle = t, "skipping degenerate triangle");
                stats.degenerate_skipped += 1;
                continue;
            }
            let (p1, p2, p3) = (buffer.position(i1), buffer.position(i2), buffer.position(i3));
            let v12 = (p2 - p1).normalize();
            let v13 = (p3 - p1).normalize();
            let v23 = (p3 - p2).normalize();
            let d = v13.cross(v12).normalize();

            let w1 = 1.0 - v12.dot(v13);
            let w2 = 1.0 - (-v12).dot(v23);
            let w3 = 1.0 - (-v23).dot(-v13);
            buffer.set_normal(i1, buffer.normal(i1) + d * w1);
            buffer.set_normal(i2, buffer.normal(i2) + d * w2);
            buffer.set_normal(i3, buffer.normal(i3) + d * w3);
            stats.triangles += 1;
        }

        for i in 0..count {
            let n = buffer.normal(i);
            if n == Float3::zero() {
                stats.isolated_vertices += 1;
            } else {
                buffer.set_normal(i, n.normalize());
            }
        }

        if stats.degenerate_skipped > 0 {
            warn!(
                skipped = stats.degenerate_skipped,
                triangles = indices.len() / 3,
                "degenerate triangles ignored while computing normals"
            );
        }
        debug!(
            vertices = count,
            triangles = stats.triangles,
            isolated = stats.isolated_vertices,
            "vertex normals computed"
        );
        Ok(stats)
    }
}

fn corners(tri: &[u32]) -> [usize; 3] {
    [tri[0] as usize, tri[1] as usize, tri[2] as usize]
}

/// Two corners of the triangle share a position.
fn is_degenerate(buffer: &VertexBufferMut<'_>, [a, b, c]: [usize; 3]) -> bool {
    let (p1, p2, p3) = (buffer.position(a), buffer.position(b), buffer.position(c));
    p1 == p2 || p1 == p3 || p2 == p3
}
