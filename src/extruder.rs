use glam::Vec2;

use crate::config::DrawerConfig;
use crate::geom::RectFrame;
use crate::mesh::{Color, MeshResource};
use crate::projector::{CoordinateProjector, PlanarCamera, ScaleProvider};

/// What [`StrokeExtruder::commit_segment`] did with a segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentOutcome {
	Committed { first: bool, vertices: usize },
	/// Both endpoints landed on the same local point.
	Degenerate,
	/// An endpoint could not be projected into the frame.
	Unprojected,
	/// The mesh resource refused the new buffers.
	Rejected,
}

impl SegmentOutcome {
	pub fn is_committed(&self) -> bool {
		matches!(self, SegmentOutcome::Committed { .. })
	}
}

/// Extrudes drag segments into a constant-width ribbon.
#[derive(Debug)]
pub struct StrokeExtruder<P, S, M> {
	width: f32,
	color: Color,
	camera: Option<PlanarCamera>,
	frame: RectFrame,
	projector: P,
	scale: S,
	mesh: M,
}

impl<P: CoordinateProjector, S: ScaleProvider, M: MeshResource> StrokeExtruder<P, S, M> {
	/// `config` is assumed to have been validated.
	pub fn new(config: &DrawerConfig, projector: P, scale: S, mesh: M) -> Self {
		Self {
			width: config.width,
			color: config.color,
			camera: config.camera,
			frame: config.frame,
			projector,
			scale,
			mesh,
		}
	}

	pub fn mesh(&self) -> &M {
		&self.mesh
	}

	pub fn into_mesh(self) -> M {
		self.mesh
	}

	fn to_local(&self, screen_point: Vec2) -> Option<Vec2> {
		match self
			.projector
			.project(screen_point, self.camera.as_ref(), &self.frame)
		{
			Ok(local) => Some(local),
			Err(err) => {
				tracing::warn!(%err, ?screen_point, "cannot project pointer into frame");
				None
			}
		}
	}

	/// Appends the quad between `prev` and `end`, both in screen space.
	///
	/// A first segment seeds four vertices; later ones add two and stitch to the previous pair.
	pub fn commit_segment(&mut self, prev: Vec2, end: Vec2, is_first: bool) -> SegmentOutcome {
		let (Some(local_prev), Some(local_end)) = (self.to_local(prev), self.to_local(end)) else {
			return SegmentOutcome::Unprojected;
		};

		let scale = self.scale.lossy_scale();
		let local_prev = local_prev * scale;
		let local_end = local_end * scale;

		let Some(direction) = (local_prev - local_end).try_normalize() else {
			tracing::warn!(?prev, ?end, "skipping degenerate segment");
			return SegmentOutcome::Degenerate;
		};
		let offset = direction.perp() * (0.5 * self.width) * scale;

		let mut buffers = self.mesh.buffers().clone();
		let base = buffers.vertices.len() as u32;

		let is_first = if !is_first && base < 2 {
			tracing::debug!(base, "no previous pair to stitch to, seeding a new strip");
			true
		} else {
			is_first
		};

		let new_vertices = if is_first {
			buffers.vertices.extend([
				(local_prev + offset).extend(0.0),
				(local_prev - offset).extend(0.0),
				(local_end + offset).extend(0.0),
				(local_end - offset).extend(0.0),
			]);
			buffers
				.triangles
				.extend([base, base + 1, base + 2, base + 1, base + 3, base + 2]);
			4
		} else {
			buffers.vertices.extend([
				(local_end + offset).extend(0.0),
				(local_end - offset).extend(0.0),
			]);
			buffers
				.triangles
				.extend([base - 2, base - 1, base, base - 1, base + 1, base]);
			2
		};
		buffers
			.colors
			.extend(std::iter::repeat(self.color).take(new_vertices));

		match self.mesh.commit(buffers) {
			Ok(()) => {
				tracing::debug!(?local_prev, ?local_end, first = is_first, "committed segment");
				SegmentOutcome::Committed {
					first: is_first,
					vertices: new_vertices,
				}
			}
			Err(err) => {
				tracing::error!(%err, "mesh rejected segment");
				SegmentOutcome::Rejected
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mesh::{MeshBuffers, StrokeMesh, RED};
	use crate::projector::RectProjector;
	use crate::test::RecordingMesh;
	use approx::assert_abs_diff_eq;
	use glam::{vec2, vec3};

	fn extruder(width: f32, scale: Vec2) -> StrokeExtruder<RectProjector, Vec2, StrokeMesh> {
		let config = DrawerConfig::builder().width(width).color(RED).build();
		StrokeExtruder::new(&config, RectProjector, scale, StrokeMesh::new())
	}

	#[test]
	fn first_segment_is_a_quad() {
		let mut extruder = extruder(10.0, Vec2::ONE);
		let outcome = extruder.commit_segment(vec2(0.0, 0.0), vec2(100.0, 0.0), true);
		assert_eq!(
			outcome,
			SegmentOutcome::Committed {
				first: true,
				vertices: 4
			}
		);

		let mesh = extruder.mesh();
		assert_eq!(
			mesh.vertices,
			vec![
				vec3(0.0, -5.0, 0.0),
				vec3(0.0, 5.0, 0.0),
				vec3(100.0, -5.0, 0.0),
				vec3(100.0, 5.0, 0.0),
			]
		);
		assert_eq!(mesh.triangles, vec![0, 1, 2, 1, 3, 2]);
		assert_eq!(mesh.colors, vec![RED; 4]);
	}

	#[test]
	fn continuation_stitches_to_previous_pair() {
		let mut extruder = extruder(10.0, Vec2::ONE);
		extruder.commit_segment(vec2(0.0, 0.0), vec2(100.0, 0.0), true);
		let outcome = extruder.commit_segment(vec2(100.0, 0.0), vec2(100.0, 50.0), false);
		assert_eq!(
			outcome,
			SegmentOutcome::Committed {
				first: false,
				vertices: 2
			}
		);

		let mesh = extruder.mesh();
		assert_eq!(mesh.vertex_count(), 6);
		assert_eq!(mesh.triangles.len(), 12);
		assert_eq!(&mesh.triangles[6..], &[2, 3, 4, 3, 5, 4]);
		assert_eq!(mesh.vertices[4], vec3(105.0, 50.0, 0.0));
		assert_eq!(mesh.vertices[5], vec3(95.0, 50.0, 0.0));
		assert_eq!(mesh.colors, vec![RED; 6]);
	}

	#[test]
	fn scale_applies_to_points_and_width() {
		let mut extruder = extruder(10.0, vec2(2.0, 0.5));
		extruder.commit_segment(vec2(0.0, 0.0), vec2(10.0, 0.0), true);

		let mesh = extruder.mesh();
		assert_abs_diff_eq!(mesh.vertices[2].x, 20.0);
		// Offset is perpendicular to x, so only the y scale applies to it.
		assert_abs_diff_eq!(mesh.vertices[2].y, -2.5);
		assert_abs_diff_eq!(mesh.vertices[3].y, 2.5);
	}

	#[test]
	fn degenerate_segment_is_skipped() {
		let mut extruder = extruder(10.0, Vec2::ZERO);
		let outcome = extruder.commit_segment(vec2(0.0, 0.0), vec2(50.0, 0.0), true);
		assert_eq!(outcome, SegmentOutcome::Degenerate);
		assert!(extruder.mesh().is_empty());
		assert_eq!(extruder.mesh().revision(), 0);
	}

	#[test]
	fn unprojected_segment_is_skipped() {
		let config = DrawerConfig::builder()
			.width(1.0)
			.frame(RectFrame::from_scale_angle_translation(
				Vec2::ZERO,
				0.0,
				Vec2::ZERO,
			))
			.build();
		let mut extruder = StrokeExtruder::new(&config, RectProjector, Vec2::ONE, StrokeMesh::new());
		let outcome = extruder.commit_segment(vec2(0.0, 0.0), vec2(50.0, 0.0), true);
		assert_eq!(outcome, SegmentOutcome::Unprojected);
		assert!(extruder.mesh().is_empty());
	}

	#[test]
	fn continuation_on_empty_mesh_seeds_quad() {
		let mut extruder = extruder(2.0, Vec2::ONE);
		let outcome = extruder.commit_segment(vec2(0.0, 0.0), vec2(0.0, 10.0), false);
		assert_eq!(
			outcome,
			SegmentOutcome::Committed {
				first: true,
				vertices: 4
			}
		);
		assert_eq!(extruder.mesh().buffers().validate(), Ok(()));
	}

	#[test]
	fn reused_mesh_is_extended() {
		let mut existing = extruder(2.0, Vec2::ONE);
		existing.commit_segment(vec2(0.0, 0.0), vec2(10.0, 0.0), true);
		let buffers: MeshBuffers = existing.into_mesh().into_buffers();

		let config = DrawerConfig::builder().width(2.0).build();
		let mesh = StrokeMesh::from_buffers(buffers).unwrap();
		let mut extruder = StrokeExtruder::new(&config, RectProjector, Vec2::ONE, mesh);
		extruder.commit_segment(vec2(20.0, 0.0), vec2(30.0, 0.0), true);
		assert_eq!(extruder.mesh().vertex_count(), 8);
		assert_eq!(&extruder.mesh().triangles[6..], &[4, 5, 6, 5, 7, 6]);
	}

	#[test]
	fn every_commit_replaces_all_buffers() {
		let config = DrawerConfig::builder().width(4.0).build();
		let mut extruder =
			StrokeExtruder::new(&config, RectProjector, Vec2::ONE, RecordingMesh::default());
		extruder.commit_segment(vec2(0.0, 0.0), vec2(10.0, 0.0), true);
		extruder.commit_segment(vec2(10.0, 0.0), vec2(20.0, 5.0), false);

		let commits = &extruder.mesh().commits;
		assert_eq!(commits.len(), 2);
		for commit in commits {
			assert_eq!(commit.validate(), Ok(()));
		}
		assert_eq!(commits[0].vertex_count(), 4);
		assert_eq!(commits[1].vertex_count(), 6);
	}

	#[test]
	fn rejected_commit_leaves_mesh() {
		let config = DrawerConfig::builder().width(4.0).build();
		let mut extruder = StrokeExtruder::new(
			&config,
			RectProjector,
			Vec2::ONE,
			RecordingMesh {
				reject: true,
				..Default::default()
			},
		);
		let outcome = extruder.commit_segment(vec2(0.0, 0.0), vec2(10.0, 0.0), true);
		assert_eq!(outcome, SegmentOutcome::Rejected);
		assert!(extruder.mesh().buffers().is_empty());
	}
}
