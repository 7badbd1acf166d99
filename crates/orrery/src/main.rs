//! Headless driver: runs the scene at a fixed step, resolves texture loads
//! against the filesystem and logs what a renderer would draw.

use anyhow::{Context, Result};
use engine_core::Time;
use orrery::{Action, Frame, FrameSink, Material, Scene, SceneConfig, StaticAssets};
use std::path::Path;

/// Logs a one-line summary of every `every`-th frame.
struct LogSink {
    every: u64,
    frames: u64,
    fallback_bodies: u64,
}

impl LogSink {
    fn new(every: u64) -> Self {
        Self {
            every,
            frames: 0,
            fallback_bodies: 0,
        }
    }
}

impl FrameSink for LogSink {
    fn submit(&mut self, frame: &Frame) {
        self.frames += 1;
        self.fallback_bodies += frame
            .bodies
            .iter()
            .filter(|b| b.material == Material::Fallback)
            .count() as u64;

        if self.every == 0 || frame.frame_index % self.every != 0 {
            return;
        }
        let scanning = frame
            .bodies
            .iter()
            .find_map(|b| match b.material {
                Material::Scan { progress, .. } => Some((b.id.clone(), progress)),
                _ => None,
            });
        log::info!(
            "frame {:>5} t={:>7.2}s eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}){}",
            frame.frame_index,
            frame.elapsed,
            frame.camera.eye.x,
            frame.camera.eye.y,
            frame.camera.eye.z,
            frame.camera.target.x,
            frame.camera.target.y,
            frame.camera.target.z,
            match scanning {
                Some((id, progress)) => format!(" scanning {} ({:.3})", id, progress),
                None => String::new(),
            }
        );
    }
}

/// Hand every pending texture request to the filesystem.
fn resolve_loads(scene: &mut Scene) {
    for path in scene.drain_load_requests() {
        if Path::new(&path).is_file() {
            scene.texture_loaded(&path);
        } else {
            scene.texture_failed(&path, "file not found");
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SceneConfig::load();
    if !SceneConfig::exists() {
        log::info!("No orrery.ron found, writing defaults");
        config.save();
    }
    let headless = config.headless.clone();
    let assets = StaticAssets::new(config.textures.clone(), config.clouds.clone());
    let mut scene = Scene::new(config, &assets).context("failed to build scene")?;

    log::info!(
        "Starting orrery: {} bodies, {} frames at {} Hz",
        scene.body_count(),
        headless.frames,
        headless.frame_rate
    );

    let mut time = Time::new();
    let mut sink = LogSink::new(headless.log_every);
    let mut since_cycle = 0.0;

    for _ in 0..headless.frames {
        resolve_loads(&mut scene);
        time.advance_fixed(headless.frame_rate);
        let dt = time.delta_seconds();

        if headless.cycle_seconds > 0.0 {
            since_cycle += dt;
            if since_cycle >= headless.cycle_seconds {
                since_cycle -= headless.cycle_seconds;
                let next = (scene.state().target_index + 1) % scene.body_count();
                scene.queue(Action::Next);
                scene.queue(Action::ToggleScan);
                if let Some(id) = scene.body_ids().get(next).cloned() {
                    scene.queue(Action::PointerOver(id));
                }
            }
        }

        let hovered_before = scene.state().hovered.clone();
        scene.tick_into(dt, time.elapsed_seconds(), &mut sink);
        if scene.state().hovered != hovered_before {
            if let Some(record) = scene.hovered_record() {
                log::info!("Hovering {}", record.summary());
            }
        }
    }

    log::info!(
        "Finished {} frames ({:.1}s simulated), generation {}, target {}",
        sink.frames,
        time.elapsed_seconds(),
        scene.generation(),
        scene.target_record().summary()
    );
    if sink.fallback_bodies > 0 {
        log::info!(
            "{} body-frames drawn with the fallback material",
            sink.fallback_bodies
        );
    }
    Ok(())
}
