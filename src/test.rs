use glam::Vec2;

use crate::*;

/// Keeps every committed triple so tests can inspect the commit history.
#[derive(Debug, Default)]
pub struct RecordingMesh {
	pub current: MeshBuffers,
	pub commits: Vec<MeshBuffers>,
	/// Refuse every commit.
	pub reject: bool,
}

impl MeshResource for RecordingMesh {
	fn buffers(&self) -> &MeshBuffers {
		&self.current
	}

	fn commit(&mut self, buffers: MeshBuffers) -> Result<(), MeshError> {
		if self.reject {
			return Err(MeshError::PartialTriangle(buffers.triangles.len() + 1));
		}
		buffers.validate()?;
		self.commits.push(buffers.clone());
		self.current = buffers;
		Ok(())
	}
}

/// A drawer on an unscaled overlay canvas.
pub fn overlay_drawer(width: f32, color: Color) -> Drawer<RectProjector, Vec2, StrokeMesh> {
	let config = DrawerConfig::builder().width(width).color(color).build();
	Drawer::new(config, RectProjector, Vec2::ONE, StrokeMesh::new()).unwrap()
}
