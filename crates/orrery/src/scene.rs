//! The planetary scene: owns the generated system and the session, applies UI
//! actions and produces one [`Frame`] per tick.
//!
//! Per tick, in order: queued actions are applied, every body is integrated,
//! the camera follows the target, the scan sweep advances, and the frame is
//! rebuilt. Nothing in the tick path fails; asset problems only change which
//! material a body is drawn with.

use crate::actions::{Action, ActionQueue};
use crate::assets::{AssetProvider, AssetTracker};
use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::frame::{BodyFrame, CloudLayer, Frame, FrameSink, Material, OrbitRing, StarFrame};
use crate::scan::ScanSweep;
use crate::session::{Session, SessionState};
use camera::CameraRig;
use engine_core::Transform;
use procgen::{
    assign, generate_orbits, integrate, validate_pools, BodyId, OrbitalParameters, OrbitalPose,
    PlanetRecord, SphereMesh, SpinState, TextureAssignment, TextureRecord, TextureSlot,
};
use rand::prelude::*;

/// Orbits and textures of one generation. Replaced as a whole on regeneration.
#[derive(Debug, Clone)]
struct StarSystem {
    orbits: Vec<OrbitalParameters>,
    textures: TextureAssignment,
}

impl StarSystem {
    fn generate(
        rng: &mut StdRng,
        ids: &[BodyId],
        config: &SceneConfig,
        texture_pool: &[TextureRecord],
        cloud_pool: &[String],
    ) -> Self {
        let orbits = generate_orbits(rng, ids.len(), &config.orbit);
        let textures = assign(rng, ids, texture_pool, cloud_pool);
        Self { orbits, textures }
    }
}

/// Read-only view of one body for UI panels.
#[derive(Debug, Clone, Copy)]
pub struct BodyView<'a> {
    pub index: usize,
    pub record: &'a PlanetRecord,
    pub orbit: &'a OrbitalParameters,
    pub slot: Option<&'a TextureSlot>,
}

pub struct Scene {
    config: SceneConfig,
    records: Vec<PlanetRecord>,
    ids: Vec<BodyId>,
    texture_pool: Vec<TextureRecord>,
    cloud_pool: Vec<String>,
    rng: StdRng,
    system: StarSystem,
    generation: u64,
    spins: Vec<SpinState>,
    cloud_spins: Vec<SpinState>,
    poses: Vec<OrbitalPose>,
    session: Session,
    scan: ScanSweep,
    camera: CameraRig,
    assets: AssetTracker,
    actions: ActionQueue,
    planet_mesh: SphereMesh,
    cloud_mesh: SphereMesh,
    frame: Frame,
}

impl Scene {
    /// Build a scene from `config`, drawing textures from `provider`.
    ///
    /// Fails on setup defects: invalid config values, no bodies, or empty
    /// texture/cloud pools.
    pub fn new(config: SceneConfig, provider: &dyn AssetProvider) -> Result<Self, SceneError> {
        config.validate()?;

        let texture_pool = provider.planet_textures();
        let cloud_pool = provider.cloud_overlays();
        validate_pools(&texture_pool, &cloud_pool)
            .map_err(|e| SceneError::InvalidConfiguration(e.to_string()))?;

        let records = config.planets.clone();
        let ids: Vec<BodyId> = records.iter().map(|r| r.id.clone()).collect();
        let session = Session::new(ids.len())?;

        let planet_mesh = SphereMesh::flattened(
            1.0,
            config.sphere_segments,
            config.sphere_rings,
            config.cap_angle_degrees,
        )?;
        let cloud_mesh = SphereMesh::uv(1.0, config.sphere_segments, config.sphere_rings);

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let system = StarSystem::generate(&mut rng, &ids, &config, &texture_pool, &cloud_pool);

        let count = ids.len();
        let camera = config.initial_camera;
        let scan = ScanSweep::new(config.scan_rate, config.scan_wrap);
        let poses = system
            .orbits
            .iter()
            .map(|p| integrate(p, 0.0, &SpinState::default()))
            .collect();
        let frame = Frame {
            frame_index: 0,
            elapsed: 0.0,
            bodies: Vec::with_capacity(count),
            star: StarFrame {
                radius: config.star_radius,
            },
            camera,
            orbit_ring: None,
        };

        log::info!(
            "Scene ready: {} bodies, {} planet textures, {} cloud overlays, {} planet vertices",
            count,
            texture_pool.len(),
            cloud_pool.len(),
            planet_mesh.vertex_count()
        );

        let mut scene = Self {
            config,
            records,
            ids,
            texture_pool,
            cloud_pool,
            rng,
            system,
            generation: 0,
            spins: vec![SpinState::default(); count],
            cloud_spins: vec![SpinState::default(); count],
            poses,
            session,
            scan,
            camera,
            assets: AssetTracker::new(),
            actions: ActionQueue::new(),
            planet_mesh,
            cloud_mesh,
            frame,
        };
        scene.request_textures();
        Ok(scene)
    }

    // ---- Actions ----

    /// Apply one UI action immediately.
    pub fn dispatch(&mut self, action: Action) -> Result<(), SceneError> {
        log::debug!("Action {:?}", action);
        match action {
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::ResetView => self.reset_view(),
            Action::ToggleScan => self.toggle_scan(),
            Action::ToggleCameraLock => self.toggle_camera_lock(),
            Action::RandomizeSystem => self.randomize_system(),
            Action::PointerOver(id) => return self.pointer_over(id),
            Action::PointerOut => self.pointer_out(),
        }
        Ok(())
    }

    /// Queue an action for the start of the next tick.
    pub fn queue(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn next(&mut self) {
        self.session.next();
        self.scan.reset();
    }

    pub fn previous(&mut self) {
        self.session.previous();
        self.scan.reset();
    }

    pub fn pointer_over(&mut self, id: BodyId) -> Result<(), SceneError> {
        if !self.ids.contains(&id) {
            return Err(SceneError::UnknownBody(id));
        }
        self.session.pointer_over(id);
        Ok(())
    }

    pub fn pointer_out(&mut self) {
        self.session.pointer_out();
    }

    pub fn toggle_scan(&mut self) {
        self.session.toggle_scan();
        if !self.session.state().is_scanning {
            self.scan.reset();
        }
    }

    pub fn toggle_camera_lock(&mut self) {
        self.session.toggle_camera_lock();
    }

    /// Target the first body, re-lock the camera and regenerate the system.
    pub fn reset_view(&mut self) {
        self.session.reset_target();
        self.scan.reset();
        self.regenerate();
    }

    /// New orbits and textures; target and camera lock are kept.
    pub fn randomize_system(&mut self) {
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.system = StarSystem::generate(
            &mut self.rng,
            &self.ids,
            &self.config,
            &self.texture_pool,
            &self.cloud_pool,
        );
        self.generation += 1;
        self.assets.forget_failures();
        self.request_textures();
        log::info!(
            "Regenerated system (generation {}, texture assignment {})",
            self.generation,
            self.system.textures.id()
        );
    }

    /// Drag the camera around its look-at target. Ignored while locked.
    pub fn orbit_camera(&mut self, drag_x: f32, drag_y: f32) {
        if self.session.state().is_camera_locked {
            return;
        }
        self.camera = self.camera.orbit(drag_x, drag_y, &self.config.free_look);
    }

    /// Scale the eye distance. While locked, follow pulls it back.
    pub fn zoom_camera(&mut self, factor: f32) {
        self.camera = self.camera.zoom(factor, &self.config.free_look);
    }

    // ---- Assets ----

    fn request_textures(&mut self) {
        let paths: Vec<String> = self.system.textures.paths().map(str::to_string).collect();
        for path in &paths {
            self.assets.request(path);
        }
    }

    /// Paths the renderer still has to fetch.
    pub fn drain_load_requests(&mut self) -> Vec<String> {
        self.assets.drain_requests()
    }

    pub fn texture_loaded(&mut self, path: &str) {
        log::debug!("Texture ready: {}", path);
        self.assets.mark_ready(path);
    }

    /// Record a failed fetch. Affected bodies keep the fallback material.
    pub fn texture_failed(&mut self, path: &str, reason: &str) {
        self.assets.mark_failed(path, reason);
        for id in &self.ids {
            let uses_path = self.system.textures.get(id).map_or(false, |slot| {
                slot.color_map == path || slot.normal_map.as_deref() == Some(path)
            });
            if uses_path {
                let err = SceneError::AssetUnavailable {
                    body: id.clone(),
                    detail: format!("{}: {}", path, reason),
                };
                log::warn!("{}", err);
            }
        }
        if self.system.textures.cloud_overlay() == Some(path) {
            log::warn!("Cloud overlay unavailable: {}: {}", path, reason);
        }
    }

    pub fn assets(&self) -> &AssetTracker {
        &self.assets
    }

    // ---- Queries ----

    pub fn state(&self) -> &SessionState {
        self.session.state()
    }

    pub fn body_count(&self) -> usize {
        self.ids.len()
    }

    pub fn body_ids(&self) -> &[BodyId] {
        &self.ids
    }

    /// Descriptive record of the hovered body, for the info panel.
    pub fn hovered_record(&self) -> Option<&PlanetRecord> {
        let hovered = self.session.state().hovered.as_ref()?;
        self.records.iter().find(|r| &r.id == hovered)
    }

    pub fn target_record(&self) -> &PlanetRecord {
        &self.records[self.session.target_index()]
    }

    pub fn body(&self, index: usize) -> Result<BodyView<'_>, SceneError> {
        let count = self.ids.len();
        match (self.records.get(index), self.system.orbits.get(index)) {
            (Some(record), Some(orbit)) => Ok(BodyView {
                index,
                record,
                orbit,
                slot: self.system.textures.get(&record.id),
            }),
            _ => Err(SceneError::IndexOutOfRange { index, count }),
        }
    }

    /// Texture slot assigned to `id` in the current generation.
    pub fn texture_slot(&self, id: &BodyId) -> Result<&TextureSlot, SceneError> {
        if !self.ids.contains(id) {
            return Err(SceneError::UnknownBody(id.clone()));
        }
        self.system
            .textures
            .get(id)
            .ok_or_else(|| SceneError::AssetUnavailable {
                body: id.clone(),
                detail: "no texture assigned".to_string(),
            })
    }

    pub fn texture_assignment(&self) -> &TextureAssignment {
        &self.system.textures
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn scan_progress(&self) -> f32 {
        self.scan.progress()
    }

    /// Unit-radius planet mesh with flattened poles, shared by every body.
    pub fn planet_mesh(&self) -> &SphereMesh {
        &self.planet_mesh
    }

    /// Unit-radius cloud shell mesh.
    pub fn cloud_mesh(&self) -> &SphereMesh {
        &self.cloud_mesh
    }

    /// Number of regenerations since the scene was built.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    // ---- Tick ----

    /// Advance one frame. `delta_seconds` must be non-negative and
    /// `elapsed_seconds` non-decreasing between calls.
    pub fn tick(&mut self, delta_seconds: f32, elapsed_seconds: f32) -> &Frame {
        let pending: Vec<Action> = self.actions.drain().collect();
        for action in pending {
            if let Err(e) = self.dispatch(action) {
                log::warn!("Dropped action: {}", e);
            }
        }

        let base = self.config.spin_time_base;
        let cloud_speed = self.config.cloud_spin;
        self.poses.clear();
        for (i, params) in self.system.orbits.iter().enumerate() {
            self.spins[i].advance(params, base, delta_seconds);
            self.cloud_spins[i].angle += base.increment(cloud_speed, delta_seconds);
            self.poses.push(integrate(params, elapsed_seconds, &self.spins[i]));
        }

        let state = self.session.state().clone();
        let target = state.target_index;
        if let (Some(pose), Some(params)) = (self.poses.get(target), self.system.orbits.get(target)) {
            self.camera = self.config.follow.follow(
                self.camera,
                pose.position,
                params.body_radius,
                state.is_camera_locked,
                delta_seconds,
            );
        }

        self.scan.tick(state.is_scanning, target, delta_seconds);

        self.build_frame(&state, elapsed_seconds);
        &self.frame
    }

    /// Tick and hand the frame to `sink`.
    pub fn tick_into(&mut self, delta_seconds: f32, elapsed_seconds: f32, sink: &mut dyn FrameSink) {
        let frame = self.tick(delta_seconds, elapsed_seconds);
        sink.submit(frame);
    }

    fn build_frame(&mut self, state: &SessionState, elapsed_seconds: f32) {
        let textures = &self.system.textures;
        let cloud_overlay = textures
            .cloud_overlay()
            .filter(|path| self.assets.is_ready(path))
            .map(str::to_string);

        self.frame.frame_index += 1;
        self.frame.elapsed = elapsed_seconds;
        self.frame.camera = self.camera;
        self.frame.orbit_ring = None;
        self.frame.bodies.clear();

        for (i, (id, params)) in self.ids.iter().zip(&self.system.orbits).enumerate() {
            let pose = self.poses[i];
            let scanned = state.is_scanning && i == state.target_index;
            let highlighted = state.hovered.as_ref() == Some(id);

            let material = match textures.get(id) {
                Some(slot) if self.assets.is_ready(&slot.color_map) => {
                    if scanned {
                        Material::Scan {
                            color_map: slot.color_map.clone(),
                            progress: self.scan.progress(),
                        }
                    } else {
                        Material::Standard {
                            color_map: slot.color_map.clone(),
                            normal_map: slot
                                .normal_map
                                .clone()
                                .filter(|p| self.assets.is_ready(p)),
                        }
                    }
                }
                _ => Material::Fallback,
            };

            let transform = Transform::from_position_yaw(pose.position, pose.rotation_y)
                .with_uniform_scale(params.body_radius);

            let cloud = if scanned {
                None
            } else {
                let mut cloud_transform =
                    transform.with_uniform_scale(params.body_radius + self.config.cloud_offset);
                cloud_transform.rotate_y(self.cloud_spins[i].angle);
                Some(CloudLayer {
                    transform: cloud_transform,
                    overlay: cloud_overlay.clone(),
                })
            };

            if highlighted {
                let half = self.config.orbit_ring_half_width;
                self.frame.orbit_ring = Some(OrbitRing {
                    inner_radius: (params.orbital_radius - half).max(0.0),
                    outer_radius: params.orbital_radius + half,
                });
            }

            self.frame.bodies.push(BodyFrame {
                index: i,
                id: id.clone(),
                transform,
                material,
                cloud,
                highlighted,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{LoadState, StaticAssets};
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    fn config() -> SceneConfig {
        SceneConfig {
            seed: Some(7),
            sphere_segments: 12,
            sphere_rings: 12,
            ..Default::default()
        }
    }

    fn scene_with(config: SceneConfig) -> Scene {
        let assets = StaticAssets::new(config.textures.clone(), config.clouds.clone());
        Scene::new(config, &assets).unwrap()
    }

    fn scene() -> Scene {
        scene_with(config())
    }

    fn load_everything(scene: &mut Scene) {
        for path in scene.drain_load_requests() {
            scene.texture_loaded(&path);
        }
    }

    fn run(scene: &mut Scene, ticks: usize, dt: f32, elapsed: &mut f32) {
        for _ in 0..ticks {
            *elapsed += dt;
            scene.tick(dt, *elapsed);
        }
    }

    #[test]
    fn starts_with_default_session() {
        let scene = scene();
        assert_eq!(*scene.state(), SessionState::default());
        assert_eq!(scene.body_count(), 5);
        assert_eq!(scene.generation(), 0);
        assert_eq!(*scene.camera(), CameraRig::default());
    }

    #[test]
    fn next_five_times_returns_to_first_body() {
        let mut scene = scene();
        for _ in 0..5 {
            scene.next();
        }
        assert_eq!(scene.state().target_index, 0);
    }

    #[test]
    fn scan_accumulates_and_resets() {
        let mut scene = scene();
        let mut elapsed = 0.0;
        scene.toggle_scan();
        run(&mut scene, 10, 0.1, &mut elapsed);
        assert!((scene.scan_progress() - 0.1).abs() < 1e-6);

        scene.toggle_scan();
        assert_eq!(scene.scan_progress(), 0.0);
        run(&mut scene, 1, 0.1, &mut elapsed);
        assert_eq!(scene.scan_progress(), 0.0);
    }

    #[test]
    fn scan_restarts_when_target_changes() {
        let mut scene = scene();
        let mut elapsed = 0.0;
        scene.toggle_scan();
        run(&mut scene, 10, 0.1, &mut elapsed);
        scene.next();
        assert_eq!(scene.scan_progress(), 0.0);
        run(&mut scene, 1, 0.1, &mut elapsed);
        assert!((scene.scan_progress() - 0.01).abs() < 1e-6);

        run(&mut scene, 10, 0.1, &mut elapsed);
        scene.previous();
        assert_eq!(scene.scan_progress(), 0.0);
        run(&mut scene, 10, 0.1, &mut elapsed);
        scene.reset_view();
        assert_eq!(scene.scan_progress(), 0.0);
    }

    #[test]
    fn randomize_replaces_assignment_and_keeps_session() {
        let mut scene = scene();
        scene.next();
        scene.next();
        scene.toggle_camera_lock();
        let before = scene.texture_assignment().id();

        scene.randomize_system();

        assert_ne!(scene.texture_assignment().id(), before);
        assert_eq!(scene.state().target_index, 2);
        assert!(!scene.state().is_camera_locked);
        assert_eq!(scene.generation(), 1);
    }

    #[test]
    fn reset_view_retargets_relocks_and_regenerates() {
        let mut scene = scene();
        scene.next();
        scene.toggle_camera_lock();
        let before = scene.texture_assignment().id();

        scene.dispatch(Action::ResetView).unwrap();

        assert_eq!(scene.state().target_index, 0);
        assert!(scene.state().is_camera_locked);
        assert_ne!(scene.texture_assignment().id(), before);
    }

    #[test]
    fn locked_camera_converges_on_target() {
        let mut scene = scene();
        let params = *scene.body(0).unwrap().orbit;
        let follow = scene.config.follow;
        // Freeze orbital motion by keeping elapsed at zero.
        for _ in 0..200 {
            scene.tick(DT, 0.0);
        }
        let desired = follow.desired(params.position_at(0.0), params.body_radius);
        assert!((scene.camera().eye - desired.eye).length() < 1e-3);
        assert!((scene.camera().target - desired.target).length() < 1e-3);
    }

    #[test]
    fn unlocked_camera_is_left_alone() {
        let mut scene = scene();
        scene.toggle_camera_lock();
        let start = *scene.camera();
        let mut elapsed = 0.0;
        run(&mut scene, 200, DT, &mut elapsed);
        assert_eq!(*scene.camera(), start);

        scene.orbit_camera(100.0, 0.0);
        assert_ne!(*scene.camera(), start);
        assert!((scene.camera().distance() - start.distance()).abs() < 1e-3);
    }

    #[test]
    fn free_look_drag_ignored_while_locked() {
        let mut scene = scene();
        let start = *scene.camera();
        scene.orbit_camera(50.0, 20.0);
        assert_eq!(*scene.camera(), start);
    }

    #[test]
    fn bodies_stay_on_their_orbits() {
        let mut scene = scene();
        let radii: Vec<f32> = (0..5).map(|i| scene.body(i).unwrap().orbit.orbital_radius).collect();
        let mut elapsed = 0.0;
        for _ in 0..50 {
            elapsed += 1.3;
            let frame = scene.tick(1.3, elapsed);
            for (body, r) in frame.bodies.iter().zip(&radii) {
                let p = body.transform.position;
                assert_eq!(p.y, 0.0);
                assert!((Vec3::new(p.x, 0.0, p.z).length() - r).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn materials_follow_load_state() {
        let mut scene = scene();
        let frame = scene.tick(DT, DT).clone();
        assert!(frame.bodies.iter().all(|b| b.material == Material::Fallback));
        assert!(frame.bodies.iter().all(|b| b.cloud.as_ref().map_or(false, |c| c.overlay.is_none())));

        load_everything(&mut scene);
        let frame = scene.tick(DT, 2.0 * DT).clone();
        for body in &frame.bodies {
            let slot = scene.texture_slot(&body.id).unwrap();
            match &body.material {
                Material::Standard {
                    color_map,
                    normal_map,
                } => {
                    assert_eq!(color_map, &slot.color_map);
                    assert_eq!(normal_map, &slot.normal_map);
                }
                other => panic!("expected standard material, got {:?}", other),
            }
            assert!(body.cloud.as_ref().and_then(|c| c.overlay.as_ref()).is_some());
        }
    }

    #[test]
    fn scanned_target_swaps_material_and_hides_clouds() {
        let mut scene = scene();
        load_everything(&mut scene);
        scene.next();
        scene.toggle_scan();
        let frame = scene.tick(0.5, 0.5).clone();
        let target = &frame.bodies[1];
        assert!(matches!(target.material, Material::Scan { progress, .. } if (progress - 0.05).abs() < 1e-6));
        assert!(target.cloud.is_none());
        assert!(frame.bodies[0].cloud.is_some());
        assert!(matches!(frame.bodies[0].material, Material::Standard { .. }));
    }

    #[test]
    fn failed_texture_keeps_fallback_until_regenerated() {
        let mut scene = scene();
        let id = scene.body_ids()[0].clone();
        let path = scene.texture_slot(&id).unwrap().color_map.clone();
        load_everything(&mut scene);
        scene.texture_failed(&path, "not found");
        assert!(matches!(scene.assets().state(&path), Some(LoadState::Failed(_))));

        let frame = scene.tick(DT, DT);
        assert_eq!(frame.bodies[0].material, Material::Fallback);

        scene.randomize_system();
        assert!(!matches!(scene.assets().state(&path), Some(LoadState::Failed(_))));
    }

    #[test]
    fn hover_highlights_and_draws_orbit_ring() {
        let mut scene = scene();
        let id = scene.body_ids()[2].clone();
        let radius = scene.body(2).unwrap().orbit.orbital_radius;
        scene.queue(Action::PointerOver(id.clone()));
        let frame = scene.tick(DT, DT).clone();

        assert!(frame.bodies[2].highlighted);
        assert_eq!(frame.bodies.iter().filter(|b| b.highlighted).count(), 1);
        let ring = frame.orbit_ring.unwrap();
        assert!((ring.inner_radius - (radius - 0.2)).abs() < 1e-5);
        assert!((ring.outer_radius - (radius + 0.2)).abs() < 1e-5);
        assert_eq!(scene.hovered_record().map(|r| &r.id), Some(&id));

        scene.queue(Action::PointerOut);
        let frame = scene.tick(DT, 2.0 * DT);
        assert!(frame.orbit_ring.is_none());
        assert!(scene.hovered_record().is_none());
    }

    #[test]
    fn unknown_body_is_rejected() {
        let mut scene = scene();
        let err = scene.pointer_over(BodyId::new("nowhere")).unwrap_err();
        assert!(matches!(err, SceneError::UnknownBody(_)));
        assert!(scene.state().hovered.is_none());
        assert!(matches!(
            scene.texture_slot(&BodyId::new("nowhere")),
            Err(SceneError::UnknownBody(_))
        ));
    }

    #[test]
    fn body_lookup_out_of_range() {
        let scene = scene();
        assert!(scene.body(4).is_ok());
        assert!(matches!(
            scene.body(5),
            Err(SceneError::IndexOutOfRange { index: 5, count: 5 })
        ));
    }

    #[test]
    fn empty_pools_fail_construction() {
        let config = config();
        let assets = StaticAssets::new(Vec::new(), config.clouds.clone());
        assert!(matches!(
            Scene::new(config.clone(), &assets),
            Err(SceneError::InvalidConfiguration(_))
        ));
        let assets = StaticAssets::new(config.textures.clone(), Vec::new());
        assert!(matches!(
            Scene::new(config, &assets),
            Err(SceneError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn seeded_scenes_generate_the_same_system() {
        let a = scene();
        let b = scene();
        for i in 0..5 {
            assert_eq!(a.body(i).unwrap().orbit, b.body(i).unwrap().orbit);
        }
    }

    #[test]
    fn meshes_are_unit_sized_with_flat_caps() {
        let scene = scene();
        let cap_y = 10f32.to_radians().cos();
        let top = scene.planet_mesh().positions.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!((top - cap_y).abs() < 1e-5);
        let cloud_top = scene.cloud_mesh().positions.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!((cloud_top - 1.0).abs() < 1e-5);
    }

    #[test]
    fn clouds_drift_ahead_of_their_body() {
        let mut scene = scene();
        let frame = scene.tick(DT, DT).clone();
        let body = &frame.bodies[0];
        let cloud = body.cloud.as_ref().unwrap();
        let r = scene.body(0).unwrap().orbit.body_radius;
        assert_eq!(cloud.transform.position, body.transform.position);
        assert!((cloud.transform.scale.x - (r + 0.03)).abs() < 1e-6);
        assert_ne!(cloud.transform.rotation, body.transform.rotation);
    }

    #[test]
    fn frame_sink_receives_each_tick() {
        struct Count(u64);
        impl FrameSink for Count {
            fn submit(&mut self, frame: &Frame) {
                self.0 = frame.frame_index;
            }
        }
        let mut scene = scene();
        let mut sink = Count(0);
        for i in 1..=3 {
            scene.tick_into(DT, i as f32 * DT, &mut sink);
        }
        assert_eq!(sink.0, 3);
        assert_eq!(scene.frame().star.radius, 5.0);
    }
}
