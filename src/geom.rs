use glam::{Affine2, Vec2};

use crate::projector::ProjectionError;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x && self.min.y > self.max.y
	}

	pub fn min(&self) -> Vec2 {
		self.min
	}

	pub fn max(&self) -> Vec2 {
		self.max
	}

	pub fn size(&self) -> Vec2 {
		if self.is_empty() {
			Vec2::ZERO
		} else {
			self.max - self.min
		}
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = Vec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	/// Half-open containment: the max edges are excluded.
	pub fn contains(&self, point: Vec2) -> bool {
		point.x < self.max.x
			&& point.y < self.max.y
			&& !(point.x < self.min.x)
			&& !(point.y < self.min.y)
	}
}

/// The planar frame strokes are drawn into, given by its local-to-world transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectFrame {
	local_to_world: Affine2,
}

impl Default for RectFrame {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl RectFrame {
	pub const IDENTITY: Self = Self {
		local_to_world: Affine2::IDENTITY,
	};

	pub fn new(local_to_world: Affine2) -> Self {
		Self { local_to_world }
	}

	pub fn from_scale_angle_translation(scale: Vec2, angle: f32, translation: Vec2) -> Self {
		Self::new(Affine2::from_scale_angle_translation(
			scale,
			angle,
			translation,
		))
	}

	pub fn local_to_world(&self) -> Affine2 {
		self.local_to_world
	}

	pub fn world_to_local(&self, point: Vec2) -> Result<Vec2, ProjectionError> {
		let determinant = self.local_to_world.matrix2.determinant();
		if determinant == 0.0 || !determinant.is_finite() {
			return Err(ProjectionError::SingularFrame);
		}
		Ok(self.local_to_world.inverse().transform_point2(point))
	}

	/// Lengths of the frame's basis vectors, ignoring rotation.
	pub fn scale(&self) -> Vec2 {
		let m = self.local_to_world.matrix2;
		Vec2::new(m.x_axis.length(), m.y_axis.length())
	}
}
