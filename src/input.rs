use glam::Vec2;

/// Receives pointer events from whatever event loop hosts the drawer.
///
/// Handlers run to completion and never fail; anything that cannot be drawn is dropped.
pub trait PointerHandler {
	fn on_press(&mut self, position: Vec2);
	fn on_drag_begin(&mut self, position: Vec2);
	fn on_drag_move(&mut self, position: Vec2);
	fn on_drag_end(&mut self, position: Vec2);
	fn on_release(&mut self, position: Vec2);
}

#[derive(Copy, Clone, Debug, PartialEq, derive_more::Display)]
pub enum PointerEvent {
	#[display("press {_0}")]
	Press(Vec2),
	#[display("begin {_0}")]
	DragBegin(Vec2),
	#[display("move {_0}")]
	DragMove(Vec2),
	#[display("end {_0}")]
	DragEnd(Vec2),
	#[display("release {_0}")]
	Release(Vec2),
}

impl PointerEvent {
	pub fn position(&self) -> Vec2 {
		match *self {
			PointerEvent::Press(p)
			| PointerEvent::DragBegin(p)
			| PointerEvent::DragMove(p)
			| PointerEvent::DragEnd(p)
			| PointerEvent::Release(p) => p,
		}
	}
}

pub fn dispatch(handler: &mut (impl PointerHandler + ?Sized), event: PointerEvent) {
	tracing::trace!(%event, "dispatch");
	match event {
		PointerEvent::Press(p) => handler.on_press(p),
		PointerEvent::DragBegin(p) => handler.on_drag_begin(p),
		PointerEvent::DragMove(p) => handler.on_drag_move(p),
		PointerEvent::DragEnd(p) => handler.on_drag_end(p),
		PointerEvent::Release(p) => handler.on_release(p),
	}
}
