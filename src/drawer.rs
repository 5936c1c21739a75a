use glam::Vec2;

use crate::config::{ConfigError, DrawerConfig};
use crate::extruder::{SegmentOutcome, StrokeExtruder};
use crate::input::PointerHandler;
use crate::mesh::MeshResource;
use crate::projector::{CoordinateProjector, ScaleProvider};
use crate::tracker::InputStateTracker;

/// Turns pointer drags into a single growing ribbon mesh.
#[derive(Debug)]
pub struct Drawer<P, S, M> {
	tracker: InputStateTracker,
	extruder: StrokeExtruder<P, S, M>,
}

impl<P: CoordinateProjector, S: ScaleProvider, M: MeshResource> Drawer<P, S, M> {
	#[tracing::instrument(err, skip_all)]
	pub fn new(config: DrawerConfig, projector: P, scale: S, mesh: M) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			tracker: InputStateTracker::new(config.move_threshold),
			extruder: StrokeExtruder::new(&config, projector, scale, mesh),
		})
	}

	pub fn tracker(&self) -> &InputStateTracker {
		&self.tracker
	}

	pub fn mesh(&self) -> &M {
		self.extruder.mesh()
	}

	pub fn into_mesh(self) -> M {
		self.extruder.into_mesh()
	}

	/// Device-space distance from the current anchor to `position`.
	pub fn distance_from_anchor(&self, position: Vec2) -> f32 {
		self.tracker.distance_to(position)
	}

	/// Draws to `position` if it is far enough from the anchor, then moves the anchor there.
	///
	/// Returns `None` for jitter, which leaves all state untouched.
	pub fn draw_to(&mut self, position: Vec2) -> Option<SegmentOutcome> {
		let Some(step) = self.tracker.step(position) else {
			tracing::trace!(?position, "ignoring jitter");
			return None;
		};
		let outcome = self.extruder.commit_segment(step.from, step.to, step.is_first);
		self.tracker.advance(position, outcome.is_committed());
		Some(outcome)
	}

	/// Draws from the anchor to `position` without moving the anchor or closing the seed.
	pub fn draw_to_in_place(&mut self, position: Vec2) -> SegmentOutcome {
		let step = self.tracker.step_unchecked(position);
		self.extruder.commit_segment(step.from, step.to, step.is_first)
	}
}

impl<P: CoordinateProjector, S: ScaleProvider, M: MeshResource> PointerHandler
	for Drawer<P, S, M>
{
	fn on_press(&mut self, position: Vec2) {
		self.tracker.begin(position);
	}

	fn on_drag_begin(&mut self, position: Vec2) {
		self.tracker.begin(position);
	}

	fn on_drag_move(&mut self, position: Vec2) {
		self.draw_to(position);
	}

	fn on_drag_end(&mut self, _position: Vec2) {
		self.tracker.end();
	}

	fn on_release(&mut self, _position: Vec2) {
		self.tracker.end();
	}
}
