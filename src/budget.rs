use glam::{vec2, Vec2};

use crate::config::{validate_limit, ConfigError};
use crate::drawer::Drawer;
use crate::input::PointerHandler;
use crate::mesh::MeshResource;
use crate::projector::{CoordinateProjector, ScaleProvider};

/// Total drawable length. Only ever decreases.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InkBudget {
	limit: f32,
	remaining: f32,
}

impl InkBudget {
	pub fn new(limit: f32) -> Result<Self, ConfigError> {
		let limit = validate_limit(limit)?;
		Ok(Self {
			limit,
			remaining: limit,
		})
	}

	pub fn limit(&self) -> f32 {
		self.limit
	}

	pub fn remaining(&self) -> f32 {
		self.remaining
	}

	pub fn is_exhausted(&self) -> bool {
		self.remaining <= 0.0
	}

	/// Remaining ink as a fraction of the limit, in `[0, 1]`.
	pub fn fraction(&self) -> f32 {
		self.remaining / self.limit
	}

	/// Spends up to `length` and returns how much was actually spent.
	pub fn consume(&mut self, length: f32) -> f32 {
		if !length.is_finite() {
			return 0.0;
		}
		let spent = length.clamp(0.0, self.remaining);
		self.remaining -= spent;
		spent
	}

	pub fn exhaust(&mut self) -> f32 {
		self.consume(self.remaining)
	}
}

/// A host rectangle whose width shows the remaining ink.
pub trait GaugeRect {
	fn size(&self) -> Vec2;
	fn set_size(&mut self, size: Vec2);
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GaugeBar {
	pub size: Vec2,
}

impl GaugeBar {
	pub fn new(width: f32, height: f32) -> Self {
		Self {
			size: vec2(width, height),
		}
	}
}

impl GaugeRect for GaugeBar {
	fn size(&self) -> Vec2 {
		self.size
	}

	fn set_size(&mut self, size: Vec2) {
		self.size = size;
	}
}

#[derive(Debug)]
pub struct InkGauge<G> {
	rect: G,
	full_width: f32,
}

impl<G: GaugeRect> InkGauge<G> {
	/// The rectangle's current width is taken as the width of a full budget.
	pub fn new(rect: G) -> Self {
		let full_width = rect.size().x;
		Self { rect, full_width }
	}

	pub fn full_width(&self) -> f32 {
		self.full_width
	}

	pub fn width(&self) -> f32 {
		self.rect.size().x
	}

	pub fn rect(&self) -> &G {
		&self.rect
	}

	pub fn update(&mut self, budget: &InkBudget) {
		let size = self.rect.size();
		self
			.rect
			.set_size(vec2(budget.fraction() * self.full_width, size.y));
	}
}

/// A [`Drawer`] that stops drawing once a fixed length of ink has been spent.
#[derive(Debug)]
pub struct BudgetedDrawer<P, S, M, G> {
	drawer: Drawer<P, S, M>,
	budget: InkBudget,
	gauge: InkGauge<G>,
}

impl<P, S, M, G> BudgetedDrawer<P, S, M, G>
where
	P: CoordinateProjector,
	S: ScaleProvider,
	M: MeshResource,
	G: GaugeRect,
{
	#[tracing::instrument(err, skip(drawer, gauge))]
	pub fn new(drawer: Drawer<P, S, M>, limit: f32, gauge: G) -> Result<Self, ConfigError> {
		let budget = InkBudget::new(limit)?;
		let mut gauge = InkGauge::new(gauge);
		gauge.update(&budget);
		Ok(Self {
			drawer,
			budget,
			gauge,
		})
	}

	pub fn drawer(&self) -> &Drawer<P, S, M> {
		&self.drawer
	}

	pub fn budget(&self) -> &InkBudget {
		&self.budget
	}

	pub fn gauge(&self) -> &InkGauge<G> {
		&self.gauge
	}

	pub fn mesh(&self) -> &M {
		self.drawer.mesh()
	}

	pub fn into_parts(self) -> (Drawer<P, S, M>, InkBudget, InkGauge<G>) {
		(self.drawer, self.budget, self.gauge)
	}
}

impl<P, S, M, G> PointerHandler for BudgetedDrawer<P, S, M, G>
where
	P: CoordinateProjector,
	S: ScaleProvider,
	M: MeshResource,
	G: GaugeRect,
{
	fn on_press(&mut self, position: Vec2) {
		self.drawer.on_press(position);
	}

	fn on_drag_begin(&mut self, position: Vec2) {
		self.drawer.on_drag_begin(position);
	}

	fn on_drag_move(&mut self, position: Vec2) {
		if self.budget.is_exhausted() {
			tracing::trace!(?position, "out of ink");
			return;
		}

		let distance = self.drawer.distance_from_anchor(position);
		if !distance.is_finite() {
			tracing::trace!(?position, "ignoring non-finite move");
			return;
		}
		if distance >= self.budget.remaining() {
			// The full segment is drawn, and the anchor stays where it was.
			let spent = self.budget.exhaust();
			self.gauge.update(&self.budget);
			self.drawer.draw_to_in_place(position);
			tracing::info!(spent, distance, "ink exhausted");
			return;
		}

		if distance < self.drawer.tracker().threshold() {
			tracing::trace!(?position, "ignoring jitter");
			return;
		}

		self.budget.consume(distance);
		self.gauge.update(&self.budget);
		self.drawer.draw_to(position);
	}

	fn on_drag_end(&mut self, position: Vec2) {
		self.drawer.on_drag_end(position);
	}

	fn on_release(&mut self, position: Vec2) {
		self.drawer.on_release(position);
	}
}
