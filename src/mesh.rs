use glam::{Vec3, Vec4};
use itertools::Itertools;
use thiserror::Error;

use crate::geom::AABox;

/// Linear RGBA with components in `[0, 1]`.
pub type Color = Vec4;

pub const WHITE: Color = Vec4::ONE;
pub const RED: Color = Vec4::new(1.0, 0.0, 0.0, 1.0);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MeshError {
	#[error("{colors} colors for {vertices} vertices")]
	ColorCountMismatch { vertices: usize, colors: usize },

	#[error("triangle index count {0} is not a multiple of 3")]
	PartialTriangle(usize),

	#[error("triangle index {index} out of range for {vertices} vertices")]
	IndexOutOfRange { index: u32, vertices: usize },
}

static_assertions::assert_impl_all!(MeshError: std::error::Error, Send, Sync);

/// The vertex, triangle index and per-vertex color arrays of a mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
	pub vertices: Vec<Vec3>,
	pub triangles: Vec<u32>,
	pub colors: Vec<Color>,
}

impl MeshBuffers {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn validate(&self) -> Result<(), MeshError> {
		let vertices = self.vertices.len();
		if self.colors.len() != vertices {
			return Err(MeshError::ColorCountMismatch {
				vertices,
				colors: self.colors.len(),
			});
		}
		if self.triangles.len() % 3 != 0 {
			return Err(MeshError::PartialTriangle(self.triangles.len()));
		}
		if let Some(&index) = self.triangles.iter().find(|&&i| i as usize >= vertices) {
			return Err(MeshError::IndexOutOfRange { index, vertices });
		}
		Ok(())
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	pub fn triangle_count(&self) -> usize {
		self.triangles.len() / 3
	}

	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}

	pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
		self.triangles.iter().copied().tuples().map(|(a, b, c)| [a, b, c])
	}

	pub fn bounds(&self) -> AABox {
		AABox::containing(self.vertices.iter().map(|v| v.truncate()))
	}

	pub fn vertex_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.vertices)
	}

	pub fn index_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.triangles)
	}

	pub fn color_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.colors)
	}
}

/// Storage a stroke is extruded into.
///
/// `commit` replaces all three arrays at once. Implementations must reject a triple that fails
/// [`MeshBuffers::validate`] and keep their previous contents in that case.
pub trait MeshResource {
	fn buffers(&self) -> &MeshBuffers;

	fn commit(&mut self, buffers: MeshBuffers) -> Result<(), MeshError>;
}

/// A mesh owned by a single drawer.
#[derive(Clone, Debug, Default)]
pub struct StrokeMesh {
	buffers: MeshBuffers,
	revision: u64,
}

impl StrokeMesh {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reuses existing geometry, e.g. a mesh that outlived a previous drawer.
	pub fn from_buffers(buffers: MeshBuffers) -> Result<Self, MeshError> {
		buffers.validate()?;
		Ok(Self {
			buffers,
			revision: 0,
		})
	}

	/// Incremented on every successful commit.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	pub fn into_buffers(self) -> MeshBuffers {
		self.buffers
	}
}

impl MeshResource for StrokeMesh {
	fn buffers(&self) -> &MeshBuffers {
		&self.buffers
	}

	fn commit(&mut self, buffers: MeshBuffers) -> Result<(), MeshError> {
		buffers.validate()?;
		self.buffers = buffers;
		self.revision += 1;
		Ok(())
	}
}

impl std::ops::Deref for StrokeMesh {
	type Target = MeshBuffers;
	fn deref(&self) -> &MeshBuffers {
		&self.buffers
	}
}
