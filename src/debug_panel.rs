use std::ops::RangeInclusive;

use winit::window::Window;

use crate::scene::{Material, ObjectId, Scene, StandardMaterial};

/// Slider granularity shared by every tunable parameter
pub const PARAM_STEP: f64 = 0.001;

/// Live read/write handle onto one numeric scene field
pub struct ParamBinding<'a> {
    pub label: &'static str,
    pub value: &'a mut f32,
    pub range: RangeInclusive<f32>,
    pub step: f64,
}

impl<'a> ParamBinding<'a> {
    pub fn unit(label: &'static str, value: &'a mut f32) -> Self {
        Self {
            label,
            value,
            range: 0.0..=1.0,
            step: PARAM_STEP,
        }
    }

    pub fn get(&self) -> f32 {
        *self.value
    }

    /// Write through to the scene, clamped to the binding's range
    pub fn set(&mut self, value: f32) {
        *self.value = value.clamp(*self.range.start(), *self.range.end());
    }
}

/// Bindings for light intensities and the sphere/plane materials
///
/// Borrowed fresh before each panel run so the frame loop always renders the
/// values the user just set.
pub fn debug_bindings(scene: &mut Scene, sphere: ObjectId, plane: ObjectId) -> Vec<ParamBinding<'_>> {
    let (ambient, directional, objects) = scene.split_mut();

    let mut sphere_material = None;
    let mut plane_material = None;
    for (index, object) in objects.iter_mut().enumerate() {
        if let Material::Standard(material) = &mut object.material {
            if index == sphere.index() {
                sphere_material = Some(material);
            } else if index == plane.index() {
                plane_material = Some(material);
            }
        }
    }

    let mut bindings = vec![
        ParamBinding::unit("Ambient light intensity", &mut ambient.intensity),
        ParamBinding::unit("Directional light intensity", &mut directional.intensity),
    ];
    push_material(&mut bindings, ["Sphere metalness", "Sphere roughness"], sphere_material);
    push_material(&mut bindings, ["Plane metalness", "Plane roughness"], plane_material);
    bindings
}

fn push_material<'a>(
    bindings: &mut Vec<ParamBinding<'a>>,
    [metal_label, rough_label]: [&'static str; 2],
    material: Option<&'a mut StandardMaterial>,
) {
    let Some(StandardMaterial { metalness, roughness, .. }) = material else {
        return;
    };
    bindings.push(ParamBinding::unit(metal_label, metalness));
    bindings.push(ParamBinding::unit(rough_label, roughness));
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelStats {
    pub fps: f32,
    pub frame: u64,
}

/// Tessellated panel output, ready for the renderer's overlay pass
pub struct OverlayFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

impl OverlayFrame {
    pub fn from_output(ctx: &egui::Context, output: egui::FullOutput) -> Self {
        let pixels_per_point = output.pixels_per_point;
        Self {
            primitives: ctx.tessellate(output.shapes, pixels_per_point),
            textures_delta: output.textures_delta,
            pixels_per_point,
        }
    }

    /// Fold a newer frame into one that was never drawn.
    ///
    /// Shapes come from the newer frame. Texture uploads and frees
    /// accumulate in order, since egui sends each allocation only once.
    pub fn merge(&mut self, newer: OverlayFrame) {
        self.primitives = newer.primitives;
        self.pixels_per_point = newer.pixels_per_point;
        self.textures_delta.append(newer.textures_delta);
    }
}

/// egui window with one slider per binding plus a frame-rate readout
pub struct DebugPanel {
    ctx: egui::Context,
    state: egui_winit::State,
}

impl DebugPanel {
    pub fn new(window: &Window) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        Self { ctx, state }
    }

    /// Returns true when the panel consumed the event
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    pub fn run(&mut self, window: &Window, bindings: &mut [ParamBinding<'_>], stats: PanelStats) -> OverlayFrame {
        let raw_input = self.state.take_egui_input(window);
        let mut full_output = self.ctx.run(raw_input, |ctx| build_ui(ctx, bindings, stats));

        self.state
            .handle_platform_output(window, std::mem::take(&mut full_output.platform_output));

        OverlayFrame::from_output(&self.ctx, full_output)
    }
}

fn build_ui(ctx: &egui::Context, bindings: &mut [ParamBinding<'_>], stats: PanelStats) {
    egui::Window::new("FPS")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{:.0}", stats.fps))
                    .size(32.0)
                    .color(egui::Color32::from_rgb(74, 158, 255)),
            );
            ui.label(egui::RichText::new("FPS").size(12.0).color(egui::Color32::GRAY));
        });

    egui::Window::new("Debug")
        .default_pos(egui::pos2(10.0, 80.0))
        .resizable(false)
        .show(ctx, |ui| {
            for binding in bindings.iter_mut() {
                let mut value = binding.get();
                let slider = egui::Slider::new(&mut value, binding.range.clone())
                    .step_by(binding.step)
                    .text(binding.label);
                if ui.add(slider).changed() {
                    binding.set(value);
                }
            }
            ui.separator();
            ui.label(format!("frame {}", stats.frame));
        });
}
