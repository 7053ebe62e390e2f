pub mod strided;
mod vertex_normals;

pub use strided::VertexBufferMut;
pub use vertex_normals::{NormalOptions, NormalStats, VertexNormals};
