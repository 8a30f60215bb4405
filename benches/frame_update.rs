use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bouncing_shadow::camera::PerspectiveCamera;
use bouncing_shadow::config::SceneConfig;
use bouncing_shadow::context::AppContext;
use bouncing_shadow::controls::{Gesture, OrbitControls};
use bouncing_shadow::core::{FrameLoop, ManualClock};
use bouncing_shadow::demo::DemoScene;
use bouncing_shadow::motion::orbit_position;
use bouncing_shadow::scene::Scene;
use bouncing_shadow::shadow::sync_shadow;
use bouncing_shadow::traits::{CameraControl, SceneRenderer, SurfaceErrorAction};
use bouncing_shadow::viewport::{RenderTarget, ViewportSize};
use glam::Vec3;

/// Renderer that only builds the uniforms a GPU frame would upload
struct UniformRenderer;

impl SceneRenderer for UniformRenderer {
    fn resize(&mut self, _target: RenderTarget) {}

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), SurfaceErrorAction> {
        black_box(camera.to_uniform());
        black_box(scene.lights_uniform());
        for object in scene.objects() {
            black_box(object.to_uniform());
        }
        Ok(())
    }
}

fn context(config: &SceneConfig) -> AppContext {
    AppContext::new(
        DemoScene::from_config(config),
        &config.camera,
        ViewportSize::new(800, 600),
        2.0,
    )
}

fn bench_rules(c: &mut Criterion) {
    c.bench_function("orbit_and_shadow", |b| {
        let mut t = 0.0f64;
        b.iter(|| {
            t += 1.0 / 60.0;
            sync_shadow(orbit_position(black_box(t)))
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let config = SceneConfig::default();

    c.bench_function("frame_tick", |b| {
        let mut ctx = context(&config);
        let mut controls = OrbitControls::new(&config.controls, Vec3::ZERO);
        let clock = ManualClock::new();
        let mut frame_loop = FrameLoop::new(clock.clone());
        let mut renderer = UniformRenderer;

        b.iter(|| {
            clock.advance(1.0 / 60.0);
            frame_loop.tick(&mut ctx, &mut controls, &mut renderer)
        })
    });

    c.bench_function("damped_orbit_update", |b| {
        let mut camera = context(&config).camera;
        let mut controls = OrbitControls::new(&config.controls, Vec3::ZERO);

        b.iter(|| {
            controls.apply(Gesture::Rotate { dx: 2.0, dy: 1.0 }, &camera, 600.0);
            controls.update(black_box(&mut camera))
        })
    });
}

criterion_group!(benches, bench_rules, bench_tick);
criterion_main!(benches);
