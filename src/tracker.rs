use glam::Vec2;

use crate::config::MOVE_THRESHOLD;

/// A drag step that travelled far enough to be drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokeStep {
	pub from: Vec2,
	pub to: Vec2,
	/// No geometry has been committed for the current stroke yet.
	pub is_first: bool,
}

/// Tells a fresh stroke apart from a continuing one and filters jitter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputStateTracker {
	is_new: bool,
	prev_pos: Vec2,
	threshold: f32,
}

impl Default for InputStateTracker {
	fn default() -> Self {
		Self::new(MOVE_THRESHOLD)
	}
}

impl InputStateTracker {
	pub fn new(threshold: f32) -> Self {
		Self {
			is_new: false,
			prev_pos: Vec2::ZERO,
			threshold,
		}
	}

	pub fn is_new(&self) -> bool {
		self.is_new
	}

	pub fn prev_pos(&self) -> Vec2 {
		self.prev_pos
	}

	pub fn threshold(&self) -> f32 {
		self.threshold
	}

	/// Handles press and drag-begin. Returns `false` for a duplicate begin.
	pub fn begin(&mut self, position: Vec2) -> bool {
		if self.is_new {
			return false;
		}
		self.is_new = true;
		self.prev_pos = position;
		true
	}

	/// Handles release and drag-end.
	pub fn end(&mut self) {
		self.is_new = false;
	}

	pub fn distance_to(&self, position: Vec2) -> f32 {
		self.prev_pos.distance(position)
	}

	/// The segment a move to `position` would draw, or `None` if it is jitter or not finite.
	///
	/// Does not change any state; call [`Self::advance`] once the step has been handled.
	pub fn step(&self, position: Vec2) -> Option<StrokeStep> {
		let distance = self.distance_to(position);
		if !distance.is_finite() || distance < self.threshold {
			return None;
		}
		Some(self.step_unchecked(position))
	}

	/// The segment from the anchor to `position`, regardless of distance.
	pub fn step_unchecked(&self, position: Vec2) -> StrokeStep {
		StrokeStep {
			from: self.prev_pos,
			to: position,
			is_first: self.is_new,
		}
	}

	/// Moves the anchor to `position`. The stroke only stops being new once geometry exists.
	pub fn advance(&mut self, position: Vec2, committed: bool) {
		self.prev_pos = position;
		if committed {
			self.is_new = false;
		}
	}
}
