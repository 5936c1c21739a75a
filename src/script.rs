//! A line-oriented gesture script, used to replay strokes outside a host event loop.
//!
//! ```text
//! # Settings come first. Comments take a whole line.
//! width 10
//! color red
//! limit 100
//! gauge 200 12
//! press 0 0
//! move 100 0
//! release
//! ```

use glam::{vec2, Vec2};
use thiserror::Error;

use crate::config::{parse_color, ConfigError, DrawerConfig};
use crate::input::PointerEvent;
use crate::mesh::Color;

#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ScriptError {
	pub line: usize,
	pub kind: ScriptErrorKind,
}

#[derive(Debug, Error)]
pub enum ScriptErrorKind {
	#[error("unknown directive {0:?}")]
	UnknownDirective(String),

	#[error("expected {expected} arguments, got {got}")]
	ArgumentCount { expected: usize, got: usize },

	#[error("invalid number {0:?}")]
	InvalidNumber(String),

	#[error("setting {0:?} after the first event")]
	LateSetting(String),

	#[error("missing width directive")]
	MissingWidth,

	#[error(transparent)]
	Config(#[from] ConfigError),
}

static_assertions::assert_impl_all!(ScriptError: std::error::Error, Send, Sync);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script {
	pub width: Option<f32>,
	pub color: Option<Color>,
	pub threshold: Option<f32>,
	pub limit: Option<f32>,
	pub gauge: Option<Vec2>,
	pub events: Vec<PointerEvent>,
}

impl Script {
	pub fn parse(source: &str) -> Result<Self, ScriptError> {
		let mut script = Script::default();
		for (index, line) in source.lines().enumerate() {
			script
				.parse_line(line)
				.map_err(|kind| ScriptError {
					line: index + 1,
					kind,
				})?;
		}
		Ok(script)
	}

	fn parse_line(&mut self, line: &str) -> Result<(), ScriptErrorKind> {
		let line = line.trim();
		if line.starts_with('#') {
			return Ok(());
		}
		let Some((directive, rest)) = split_directive(line) else {
			return Ok(());
		};

		let event = match directive {
			"press" => PointerEvent::Press(point(rest)?),
			"begin" => PointerEvent::DragBegin(point(rest)?),
			"move" => PointerEvent::DragMove(point(rest)?),
			"end" => PointerEvent::DragEnd(self.optional_point(rest)?),
			"release" => PointerEvent::Release(self.optional_point(rest)?),
			setting => return self.parse_setting(setting, rest),
		};
		self.events.push(event);
		Ok(())
	}

	fn parse_setting(&mut self, setting: &str, rest: &str) -> Result<(), ScriptErrorKind> {
		let known = ["width", "color", "threshold", "limit", "gauge"];
		if !known.contains(&setting) {
			return Err(ScriptErrorKind::UnknownDirective(setting.to_owned()));
		}
		if !self.events.is_empty() {
			return Err(ScriptErrorKind::LateSetting(setting.to_owned()));
		}
		match setting {
			"width" => self.width = Some(number(rest)?),
			"threshold" => self.threshold = Some(number(rest)?),
			"limit" => self.limit = Some(number(rest)?),
			"gauge" => self.gauge = Some(point(rest)?),
			_ => self.color = Some(parse_color(rest)?),
		}
		Ok(())
	}

	/// Parses a position, defaulting to where the previous event happened.
	fn optional_point(&self, rest: &str) -> Result<Vec2, ScriptErrorKind> {
		if !rest.is_empty() {
			return point(rest);
		}
		Ok(self
			.events
			.last()
			.map(PointerEvent::position)
			.unwrap_or_default())
	}

	pub fn config(&self) -> Result<DrawerConfig, ScriptErrorKind> {
		let width = self.width.ok_or(ScriptErrorKind::MissingWidth)?;
		let config = DrawerConfig::builder()
			.width(width)
			.maybe_color(self.color)
			.maybe_move_threshold(self.threshold)
			.build();
		config.validate()?;
		Ok(config)
	}
}

fn split_directive(line: &str) -> Option<(&str, &str)> {
	if line.is_empty() {
		return None;
	}
	Some(match line.split_once(char::is_whitespace) {
		Some((directive, rest)) => (directive, rest.trim()),
		None => (line, ""),
	})
}

fn numbers<const N: usize>(rest: &str) -> Result<[f32; N], ScriptErrorKind> {
	let words: Vec<&str> = rest.split_whitespace().collect();
	if words.len() != N {
		return Err(ScriptErrorKind::ArgumentCount {
			expected: N,
			got: words.len(),
		});
	}
	let mut values = [0.0; N];
	for (value, word) in values.iter_mut().zip(words) {
		*value = word
			.parse()
			.map_err(|_| ScriptErrorKind::InvalidNumber(word.to_owned()))?;
	}
	Ok(values)
}

fn number(rest: &str) -> Result<f32, ScriptErrorKind> {
	let [value] = numbers::<1>(rest)?;
	Ok(value)
}

fn point(rest: &str) -> Result<Vec2, ScriptErrorKind> {
	let [x, y] = numbers::<2>(rest)?;
	Ok(vec2(x, y))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mesh::RED;

	#[test]
	fn parses_settings_and_events() {
		let script = Script::parse(
			"# demo\n\
			 width 10\n\
			 color #f00\n\
			 limit 100\n\
			 gauge 200 12\n\
			 \n\
			 press 0 0\n\
			 move 100 0\n\
			 end\n\
			 release 90 5\n",
		)
		.unwrap();
		assert_eq!(script.width, Some(10.0));
		assert_eq!(script.color, Some(RED));
		assert_eq!(script.limit, Some(100.0));
		assert_eq!(script.gauge, Some(vec2(200.0, 12.0)));
		assert_eq!(
			script.events,
			vec![
				PointerEvent::Press(vec2(0.0, 0.0)),
				PointerEvent::DragMove(vec2(100.0, 0.0)),
				PointerEvent::DragEnd(vec2(100.0, 0.0)),
				PointerEvent::Release(vec2(90.0, 5.0)),
			]
		);

		let config = script.config().unwrap();
		assert_eq!(config.width, 10.0);
		assert_eq!(config.color, RED);
	}

	#[test]
	fn reports_line_numbers() {
		let err = Script::parse("width 1\npress 0\n").unwrap_err();
		assert_eq!(err.line, 2);
		assert!(matches!(
			err.kind,
			ScriptErrorKind::ArgumentCount {
				expected: 2,
				got: 1
			}
		));
	}

	#[test]
	fn rejects_bad_input() {
		let err = Script::parse("wobble 1 2").unwrap_err();
		assert!(matches!(err.kind, ScriptErrorKind::UnknownDirective(_)));

		let err = Script::parse("width ten").unwrap_err();
		assert!(matches!(err.kind, ScriptErrorKind::InvalidNumber(_)));

		let err = Script::parse("press 0 0\nwidth 3").unwrap_err();
		assert!(matches!(err.kind, ScriptErrorKind::LateSetting(_)));

		let err = Script::parse("color nonsense").unwrap_err();
		assert!(matches!(
			err.kind,
			ScriptErrorKind::Config(ConfigError::ParseColor { .. })
		));
	}

	#[test]
	fn config_requires_width() {
		let script = Script::parse("press 0 0").unwrap();
		assert!(matches!(script.config(), Err(ScriptErrorKind::MissingWidth)));
	}
}
