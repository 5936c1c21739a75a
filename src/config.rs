use thiserror::Error;

use crate::geom::RectFrame;
use crate::mesh::{Color, WHITE};
use crate::projector::PlanarCamera;

/// Drags shorter than this, in device units, are treated as jitter.
pub const MOVE_THRESHOLD: f32 = 2.0;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
	#[error("stroke width must be finite and non-negative, got {0}")]
	InvalidWidth(f32),

	#[error("stroke color components must be finite, got {0}")]
	InvalidColor(Color),

	#[error("move threshold must be finite and non-negative, got {0}")]
	InvalidThreshold(f32),

	#[error("ink limit must be finite and positive, got {0}")]
	InvalidLimit(f32),

	#[error("cannot parse color {input:?}: {message}")]
	ParseColor { input: String, message: String },
}

static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct DrawerConfig {
	/// Ribbon width in frame-local units, before the surface scale is applied.
	pub width: f32,
	#[builder(default = WHITE)]
	pub color: Color,
	/// Without a camera, screen points are projected as if on an overlay canvas.
	pub camera: Option<PlanarCamera>,
	#[builder(default)]
	pub frame: RectFrame,
	#[builder(default = MOVE_THRESHOLD)]
	pub move_threshold: f32,
}

impl DrawerConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !(self.width >= 0.0 && self.width.is_finite()) {
			return Err(ConfigError::InvalidWidth(self.width));
		}
		if !self.color.is_finite() {
			return Err(ConfigError::InvalidColor(self.color));
		}
		if !(self.move_threshold >= 0.0 && self.move_threshold.is_finite()) {
			return Err(ConfigError::InvalidThreshold(self.move_threshold));
		}
		Ok(())
	}
}

pub fn validate_limit(limit: f32) -> Result<f32, ConfigError> {
	if limit > 0.0 && limit.is_finite() {
		Ok(limit)
	} else {
		Err(ConfigError::InvalidLimit(limit))
	}
}

/// Parses any CSS color, e.g. `"red"`, `"#ff8000"` or `"rgb(0 128 255 / 50%)"`.
pub fn parse_color(input: &str) -> Result<Color, ConfigError> {
	let color = csscolorparser::parse(input).map_err(|err| ConfigError::ParseColor {
		input: input.to_owned(),
		message: err.to_string(),
	})?;
	Ok(Color::new(
		color.r as f32,
		color.g as f32,
		color.b as f32,
		color.a as f32,
	))
}
