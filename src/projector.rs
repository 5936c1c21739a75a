use glam::Vec2;
use thiserror::Error;

use crate::geom::RectFrame;

#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ProjectionError {
	#[error("target frame is not invertible")]
	SingularFrame,

	#[error("camera zoom must be positive and finite, got {0}")]
	InvalidCamera(f32),

	#[error("screen point {0} is not finite")]
	NonFinitePoint(Vec2),
}

static_assertions::assert_impl_all!(ProjectionError: std::error::Error, Send, Sync);

/// An orthographic camera looking at the drawing plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanarCamera {
	/// World position at the center of the viewport.
	pub position: Vec2,
	/// Screen pixels per world unit.
	pub zoom: f32,
	/// Viewport size in screen pixels.
	pub viewport: Vec2,
}

impl PlanarCamera {
	pub fn new(position: Vec2, zoom: f32, viewport: Vec2) -> Self {
		Self {
			position,
			zoom,
			viewport,
		}
	}

	pub fn screen_to_world(&self, screen_point: Vec2) -> Result<Vec2, ProjectionError> {
		if !(self.zoom > 0.0 && self.zoom.is_finite()) {
			return Err(ProjectionError::InvalidCamera(self.zoom));
		}
		Ok((screen_point - 0.5 * self.viewport) / self.zoom + self.position)
	}
}

/// Converts device coordinates into coordinates local to a target frame.
///
/// Implementations must be deterministic in their arguments.
pub trait CoordinateProjector {
	fn project(
		&self,
		screen_point: Vec2,
		camera: Option<&PlanarCamera>,
		frame: &RectFrame,
	) -> Result<Vec2, ProjectionError>;
}

impl<P: CoordinateProjector + ?Sized> CoordinateProjector for &P {
	fn project(
		&self,
		screen_point: Vec2,
		camera: Option<&PlanarCamera>,
		frame: &RectFrame,
	) -> Result<Vec2, ProjectionError> {
		(**self).project(screen_point, camera, frame)
	}
}

/// Projects through an optional camera into a [`RectFrame`].
///
/// Without a camera, screen coordinates are taken to be world coordinates, which is how an
/// overlay canvas behaves.
#[derive(Copy, Clone, Debug, Default)]
pub struct RectProjector;

impl CoordinateProjector for RectProjector {
	fn project(
		&self,
		screen_point: Vec2,
		camera: Option<&PlanarCamera>,
		frame: &RectFrame,
	) -> Result<Vec2, ProjectionError> {
		if !screen_point.is_finite() {
			return Err(ProjectionError::NonFinitePoint(screen_point));
		}
		let world = match camera {
			Some(camera) => camera.screen_to_world(screen_point)?,
			None => screen_point,
		};
		frame.world_to_local(world)
	}
}

/// The non-uniform scale the drawing surface inherits from its ancestors.
pub trait ScaleProvider {
	fn lossy_scale(&self) -> Vec2;
}

impl ScaleProvider for Vec2 {
	fn lossy_scale(&self) -> Vec2 {
		*self
	}
}

impl ScaleProvider for RectFrame {
	fn lossy_scale(&self) -> Vec2 {
		self.scale()
	}
}

impl<S: ScaleProvider + ?Sized> ScaleProvider for &S {
	fn lossy_scale(&self) -> Vec2 {
		(**self).lossy_scale()
	}
}
