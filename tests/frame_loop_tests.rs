use std::cell::{Cell, RefCell};
use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;

use bouncing_shadow::camera::PerspectiveCamera;
use bouncing_shadow::config::SceneConfig;
use bouncing_shadow::context::AppContext;
use bouncing_shadow::core::{FrameLoop, LoopState, ManualClock, TickOutcome};
use bouncing_shadow::demo::DemoScene;
use bouncing_shadow::scene::{Material, ObjectId, Scene};
use bouncing_shadow::traits::{CameraControl, SceneRenderer, SurfaceErrorAction};
use bouncing_shadow::viewport::{RenderTarget, ViewportSize};
use glam::Vec3;

/// What the renderer saw when it was asked to draw
#[derive(Debug, Clone, Copy)]
struct Seen {
    sphere: Vec3,
    shadow: Vec3,
    opacity: f32,
    ambient: f32,
    sphere_roughness: f32,
}

/// Mock renderer that snapshots the scene on every render
struct MockRenderer {
    sphere: ObjectId,
    shadow: ObjectId,
    frames: Rc<RefCell<Vec<Seen>>>,
    fail_with: Option<SurfaceErrorAction>,
}

impl SceneRenderer for MockRenderer {
    fn resize(&mut self, _target: RenderTarget) {}

    fn render(&mut self, scene: &Scene, _camera: &PerspectiveCamera) -> Result<(), SurfaceErrorAction> {
        if let Some(action) = self.fail_with {
            return Err(action);
        }
        let sphere_roughness = match &scene.object(self.sphere).material {
            Material::Standard(m) => m.roughness,
            Material::Basic(_) => f32::NAN,
        };
        self.frames.borrow_mut().push(Seen {
            sphere: scene.position(self.sphere),
            shadow: scene.position(self.shadow),
            opacity: scene.opacity(self.shadow),
            ambient: scene.ambient_light.intensity,
            sphere_roughness,
        });
        Ok(())
    }
}

/// Mock controls counting update calls
#[derive(Default)]
struct MockControls {
    updates: Rc<Cell<u32>>,
}

impl CameraControl for MockControls {
    fn update(&mut self, _camera: &mut PerspectiveCamera) -> bool {
        self.updates.set(self.updates.get() + 1);
        false
    }
}

struct Harness {
    ctx: AppContext,
    renderer: MockRenderer,
    controls: MockControls,
    frames: Rc<RefCell<Vec<Seen>>>,
    clock: ManualClock,
    frame_loop: FrameLoop<ManualClock>,
}

fn harness() -> Harness {
    let config = SceneConfig::default();
    let demo = DemoScene::from_config(&config);
    let frames = Rc::new(RefCell::new(Vec::new()));
    let renderer = MockRenderer {
        sphere: demo.sphere,
        shadow: demo.shadow,
        frames: frames.clone(),
        fail_with: None,
    };
    let ctx = AppContext::new(demo, &config.camera, ViewportSize::new(800, 600), 1.0);
    let clock = ManualClock::new();

    Harness {
        ctx,
        renderer,
        controls: MockControls::default(),
        frames,
        frame_loop: FrameLoop::new(clock.clone()),
        clock,
    }
}

impl Harness {
    fn tick(&mut self) -> TickOutcome {
        self.frame_loop
            .tick(&mut self.ctx, &mut self.controls, &mut self.renderer)
    }
}

// ============================================================================
// Per-frame properties
// ============================================================================

#[test]
fn test_every_frame_satisfies_motion_and_shadow_rules() {
    let mut h = harness();
    let decal_height = h.ctx.scene.position(h.ctx.shadow).y;

    for _ in 0..600 {
        h.clock.advance(1.0 / 60.0);
        assert_eq!(h.tick(), TickOutcome::Reschedule);
    }

    let frames = h.frames.borrow();
    assert_eq!(frames.len(), 600);
    for seen in frames.iter() {
        assert!((seen.sphere.x.hypot(seen.sphere.z) - 1.5).abs() < 1e-4);
        assert!((0.0..=1.0).contains(&seen.sphere.y));
        assert!((0.0..=0.3).contains(&seen.opacity));
        assert!((seen.opacity - (1.0 - seen.sphere.y) * 0.3).abs() < 1e-5);
        // Same frame, no lag
        assert_eq!((seen.shadow.x, seen.shadow.z), (seen.sphere.x, seen.sphere.z));
        assert_eq!(seen.shadow.y, decal_height);
    }
}

#[test]
fn test_first_frame_at_time_zero() {
    let mut h = harness();
    h.tick();

    let seen = h.frames.borrow()[0];
    assert_eq!(seen.sphere, Vec3::new(1.5, 0.0, 0.0));
    assert_eq!(seen.opacity, 0.3);

    let snapshot = h.frame_loop.last_frame().unwrap();
    assert_eq!(snapshot.number, 0);
    assert_eq!(snapshot.elapsed, 0.0);
}

#[test]
fn test_quarter_orbit_frame() {
    let mut h = harness();
    h.clock.set(FRAC_PI_2);
    h.tick();

    let seen = h.frames.borrow()[0];
    assert!(seen.sphere.x.abs() < 1e-5);
    assert!((seen.sphere.z - 1.5).abs() < 1e-5);
    assert!(seen.opacity.abs() < 1e-5);
}

#[test]
fn test_controls_step_once_per_tick() {
    let mut h = harness();
    let updates = h.controls.updates.clone();

    for _ in 0..5 {
        h.tick();
    }

    assert_eq!(updates.get(), 5);
}

#[test]
fn test_debug_parameter_changes_are_read_live() {
    let mut h = harness();
    h.tick();

    // Mutation between ticks, as the panel does
    h.ctx.scene.ambient_light.intensity = 0.8;
    if let Some(material) = h.ctx.scene.standard_material_mut(h.ctx.sphere) {
        material.roughness = 0.2;
    }
    h.tick();

    let frames = h.frames.borrow();
    assert_eq!(frames[0].ambient, 0.3);
    assert_eq!(frames[1].ambient, 0.8);
    assert_eq!(frames[1].sphere_roughness, 0.2);
}

// ============================================================================
// Stopping
// ============================================================================

#[test]
fn test_stop_handle_ends_loop_after_current_frame() {
    let mut h = harness();
    let stop = h.frame_loop.stop_handle();

    assert_eq!(h.tick(), TickOutcome::Reschedule);
    stop.stop();
    assert_eq!(h.tick(), TickOutcome::Stopped);
    assert_eq!(h.frame_loop.state(), LoopState::Stopped);

    // The stopping tick still rendered; later ticks do nothing
    assert_eq!(h.frames.borrow().len(), 2);
    assert_eq!(h.tick(), TickOutcome::Stopped);
    assert_eq!(h.frames.borrow().len(), 2);
}

#[test]
fn test_destroyed_surface_stops_rescheduling() {
    let mut h = harness();
    h.renderer.fail_with = Some(SurfaceErrorAction::Fatal);

    assert_eq!(h.tick(), TickOutcome::Stopped);
    assert_eq!(h.frame_loop.frame_count(), 0);
}

#[test]
fn test_transient_surface_errors_keep_animating() {
    let mut h = harness();
    h.renderer.fail_with = Some(SurfaceErrorAction::SkipFrame);
    h.clock.set(1.0);
    assert_eq!(h.tick(), TickOutcome::Reschedule);

    // Scene still advanced even though nothing was drawn
    assert_eq!(h.ctx.sphere_position().x, (1.0f64.cos() * 1.5) as f32);

    h.renderer.fail_with = None;
    assert_eq!(h.tick(), TickOutcome::Reschedule);
    assert_eq!(h.frame_loop.frame_count(), 1);
}
