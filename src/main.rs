use std::io::Read;

use anyhow::Context;
use drawmesh::script::Script;
use drawmesh::*;
use glam::Vec2;

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.with_writer(std::io::stderr)
			.finish(),
	)?;
	Ok(())
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

fn read_source() -> anyhow::Result<String> {
	match std::env::args().nth(1) {
		Some(path) => {
			std::fs::read_to_string(&path).with_context(|| format!("reading script {path}"))
		}
		None => {
			let mut source = String::new();
			std::io::stdin()
				.read_to_string(&mut source)
				.context("reading script from stdin")?;
			Ok(source)
		}
	}
}

fn report(mesh: &StrokeMesh) {
	println!("vertices:  {}", mesh.vertex_count());
	println!("indices:   {}", mesh.triangles.len());
	println!("colors:    {}", mesh.colors.len());
	println!("commits:   {}", mesh.revision());
	let bounds = mesh.bounds();
	if !bounds.is_empty() {
		println!("bounds:    {} .. {}", bounds.min(), bounds.max());
	}
	println!(
		"upload:    {} bytes",
		mesh.vertex_bytes().len() + mesh.index_bytes().len() + mesh.color_bytes().len()
	);
}

fn run() -> anyhow::Result<()> {
	let source = read_source()?;
	let script = Script::parse(&source)?;
	let config = script.config().context("invalid settings")?;
	tracing::info!(?config, events = script.events.len(), "replaying");

	let drawer = Drawer::new(config, RectProjector, Vec2::ONE, StrokeMesh::new())?;
	match script.limit {
		Some(limit) => {
			let gauge = GaugeBar {
				size: script.gauge.unwrap_or(Vec2::new(100.0, 10.0)),
			};
			let mut drawer = BudgetedDrawer::new(drawer, limit, gauge)?;
			for &event in &script.events {
				dispatch(&mut drawer, event);
			}
			report(drawer.mesh());
			println!("remaining: {}", drawer.budget().remaining());
			println!("gauge:     {}", drawer.gauge().width());
		}
		None => {
			let mut drawer = drawer;
			for &event in &script.events {
				dispatch(&mut drawer, event);
			}
			report(drawer.mesh());
		}
	}
	Ok(())
}

fn main() {
	if let Err(error) = configure_logging() {
		// We can technically continue without logging.
		eprintln!("{error}");
	}

	if let Err(error) = run() {
		tracing::error!(error = format!("{error:#}"));
		std::process::exit(1);
	}
}
