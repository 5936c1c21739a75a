//! Freehand drawing: pointer drags become a continuously extruded ribbon mesh, optionally limited
//! by an ink budget.
//!
//! A [`Drawer`] receives pointer events through [`PointerHandler`], filters jitter, and extrudes
//! each drag step into the triangle list of a [`MeshResource`]. Wrapping it in a
//! [`BudgetedDrawer`] limits the total length that can be drawn and drives a gauge.

mod budget;
pub use budget::*;

mod config;
pub use config::*;

mod drawer;
pub use drawer::*;

mod extruder;
pub use extruder::*;

mod geom;
pub use geom::*;

mod input;
pub use input::*;

mod mesh;
pub use mesh::*;

mod projector;
pub use projector::*;

pub mod script;

mod tracker;
pub use tracker::*;

#[cfg(test)]
pub mod test;
