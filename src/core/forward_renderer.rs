use std::sync::Arc;

use anyhow::Result;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::PerspectiveCamera;
use crate::debug_panel::OverlayFrame;
use crate::geometry::{self, MeshData};
use crate::scene::{Geometry, Scene, SceneObject};
use crate::texture::AlphaMapImage;
use crate::traits::{SceneRenderer, SurfaceErrorAction};
use crate::types::{CameraUniform, LightsUniform, ObjectUniform, Vertex};
use crate::viewport::RenderTarget;

use super::gpu_context::GpuContext;

/// Offscreen scene buffer format; shaders write linear color
pub const SCENE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// GPU buffers for one scene object
struct GpuMesh {
    geometry: Geometry,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Color and depth attachments sized to the render target
struct SceneBuffers {
    size: (u32, u32),
    color_view: wgpu::TextureView,
    depth_view: wgpu::TextureView,
    present_bind_group: wgpu::BindGroup,
}

/// Rasterizes the scene into an offscreen buffer, then presents it with the
/// debug overlay on top
pub struct ForwardRenderer {
    window: Arc<Window>,
    gpu: GpuContext,
    target: Option<RenderTarget>,
    buffers: SceneBuffers,

    frame_bind_group: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
    present_layout: wgpu::BindGroupLayout,
    camera_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,

    lit_pipeline: wgpu::RenderPipeline,
    decal_pipeline: wgpu::RenderPipeline,
    present_pipeline: wgpu::RenderPipeline,

    alpha_view: wgpu::TextureView,
    alpha_sampler: wgpu::Sampler,
    present_sampler: wgpu::Sampler,
    meshes: Vec<GpuMesh>,

    egui_renderer: egui_wgpu::Renderer,
    overlay: Option<OverlayFrame>,
}

impl ForwardRenderer {
    pub async fn new(window: Arc<Window>, target: RenderTarget) -> Result<Self> {
        let gpu = GpuContext::new(window.clone()).await?;
        let device = gpu.device();

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let lights_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Lights Buffer"),
            size: std::mem::size_of::<LightsUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bind_group_layout"),
            entries: &[
                uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                uniform_entry(1, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bind_group_layout"),
            entries: &[
                uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                texture_entry(1),
                sampler_entry(2),
            ],
        });
        let present_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("present_bind_group_layout"),
            entries: &[texture_entry(0), sampler_entry(1)],
        });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bind_group"),
            layout: &frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lights_buffer.as_entire_binding(),
                },
            ],
        });

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../scene.wgsl").into()),
        });
        let scene_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&frame_layout, &object_layout],
            push_constant_ranges: &[],
        });
        let lit_pipeline = create_mesh_pipeline(
            device,
            &scene_layout,
            &scene_shader,
            MeshPass {
                label: "Lit Pipeline",
                fragment_entry: "fs_lit",
                blend: wgpu::BlendState::REPLACE,
                depth_write: true,
            },
        );
        let decal_pipeline = create_mesh_pipeline(
            device,
            &scene_layout,
            &scene_shader,
            MeshPass {
                label: "Decal Pipeline",
                fragment_entry: "fs_basic",
                blend: wgpu::BlendState::ALPHA_BLENDING,
                depth_write: false,
            },
        );
        let present_pipeline = create_present_pipeline(device, &present_layout, gpu.surface_format());

        // Transparent until the real alpha map arrives
        let (_, alpha_view) = create_alpha_texture(device, gpu.queue(), 1, 1, &[0, 0, 0, 0]);
        let alpha_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Alpha Map Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let present_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Present Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let buffers = SceneBuffers::new(device, &present_layout, &present_sampler, target.buffer_size());
        let egui_renderer =
            egui_wgpu::Renderer::new(device, gpu.surface_format(), egui_wgpu::RendererOptions::default());

        log::info!("forward renderer ready, scene buffer {:?}", buffers.size);

        Ok(Self {
            window,
            gpu,
            target: Some(target),
            buffers,
            frame_bind_group,
            object_layout,
            present_layout,
            camera_buffer,
            lights_buffer,
            lit_pipeline,
            decal_pipeline,
            present_pipeline,
            alpha_view,
            alpha_sampler,
            present_sampler,
            meshes: Vec::new(),
            egui_renderer,
            overlay: None,
        })
    }

    /// Panel output drawn over the next frame.
    ///
    /// A frame skipped on acquire leaves its overlay pending; the next one
    /// is merged into it so no texture upload is lost.
    pub fn set_overlay(&mut self, overlay: OverlayFrame) {
        match &mut self.overlay {
            Some(pending) => pending.merge(overlay),
            None => self.overlay = Some(overlay),
        }
    }

    /// Replace the placeholder alpha map with decoded pixels
    pub fn upload_alpha_map(&mut self, image: &AlphaMapImage) {
        let (_, view) = create_alpha_texture(
            self.gpu.device(),
            self.gpu.queue(),
            image.width,
            image.height,
            &image.rgba,
        );
        self.alpha_view = view;

        for mesh in &mut self.meshes {
            mesh.bind_group = create_object_bind_group(
                self.gpu.device(),
                &self.object_layout,
                &mesh.uniform_buffer,
                &self.alpha_view,
                &self.alpha_sampler,
            );
        }
        log::debug!("alpha map uploaded: {}x{}", image.width, image.height);
    }

    /// Create or refresh GPU meshes so they mirror the scene's objects
    fn sync_meshes(&mut self, scene: &Scene) {
        let objects = scene.objects();
        self.meshes.truncate(objects.len());

        for (index, object) in objects.iter().enumerate() {
            let stale = self
                .meshes
                .get(index)
                .is_none_or(|mesh| mesh.geometry != object.geometry);
            if !stale {
                continue;
            }

            let mesh = self.create_mesh(object);
            if index < self.meshes.len() {
                self.meshes[index] = mesh;
            } else {
                self.meshes.push(mesh);
            }
        }
    }

    fn create_mesh(&self, object: &SceneObject) -> GpuMesh {
        let device = self.gpu.device();
        let data = mesh_data(&object.geometry);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertices", object.name)),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Indices", object.name)),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Uniform", object.name)),
            contents: bytemuck::cast_slice(&[object.to_uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = create_object_bind_group(
            device,
            &self.object_layout,
            &uniform_buffer,
            &self.alpha_view,
            &self.alpha_sampler,
        );

        log::debug!("uploaded mesh '{}': {} triangles", object.name, data.triangle_count());

        GpuMesh {
            geometry: object.geometry.clone(),
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    fn draw_overlay(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) -> Vec<wgpu::CommandBuffer> {
        let Some(overlay) = self.overlay.take() else {
            return Vec::new();
        };
        let device = self.gpu.device();
        let queue = self.gpu.queue();

        for (id, image_delta) in &overlay.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        let (width, height) = self.gpu.surface_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: overlay.pixels_per_point,
        };

        let command_buffers =
            self.egui_renderer
                .update_buffers(device, queue, encoder, &overlay.primitives, &screen_descriptor);

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &overlay.primitives, &screen_descriptor);
        }

        for id in &overlay.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        command_buffers
    }
}

impl SceneRenderer for ForwardRenderer {
    fn resize(&mut self, target: RenderTarget) {
        // The window may change size while the capped target stays the same
        self.gpu.resize_surface(self.window.inner_size());

        if self.target == Some(target) {
            return;
        }
        self.target = Some(target);

        let size = target.buffer_size();
        if size != self.buffers.size {
            self.buffers = SceneBuffers::new(self.gpu.device(), &self.present_layout, &self.present_sampler, size);
            log::debug!("scene buffer resized to {}x{}", size.0, size.1);
        }
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), SurfaceErrorAction> {
        self.sync_meshes(scene);

        let queue = self.gpu.queue();
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[camera.to_uniform()]));
        queue.write_buffer(&self.lights_buffer, 0, bytemuck::cast_slice(&[scene.lights_uniform()]));
        for (mesh, object) in self.meshes.iter().zip(scene.objects()) {
            let uniform: ObjectUniform = object.to_uniform();
            queue.write_buffer(&mesh.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));
        }

        let output = match self.gpu.acquire() {
            Ok(output) => output,
            Err(err) => return Err(self.gpu.handle_surface_error(err)),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        // Scene pass - opaque meshes, then the decal
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.buffers.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.buffers.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_bind_group(0, &self.frame_bind_group, &[]);

            for (id, object) in scene.draw_order() {
                let Some(mesh) = self.meshes.get(id.index()) else {
                    continue;
                };
                let pipeline = if object.material.is_transparent() {
                    &self.decal_pipeline
                } else {
                    &self.lit_pipeline
                };
                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(1, &mesh.bind_group, &[]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        // Present pass - scale the scene buffer onto the surface
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Present Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_pipeline(&self.present_pipeline);
            render_pass.set_bind_group(0, &self.buffers.present_bind_group, &[]);
            render_pass.draw(0..3, 0..1);
        }

        let overlay_buffers = self.draw_overlay(&mut encoder, &view);

        self.gpu
            .queue()
            .submit(overlay_buffers.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();
        Ok(())
    }
}

impl SceneBuffers {
    fn new(
        device: &wgpu::Device,
        present_layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        size: (u32, u32),
    ) -> Self {
        let extent = wgpu::Extent3d {
            width: size.0.max(1),
            height: size.1.max(1),
            depth_or_array_layers: 1,
        };

        let color = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Scene Color"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: SCENE_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let depth = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Scene Depth"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        let color_view = color.create_view(&wgpu::TextureViewDescriptor::default());
        let depth_view = depth.create_view(&wgpu::TextureViewDescriptor::default());

        let present_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("present_bind_group"),
            layout: present_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&color_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        Self {
            size,
            color_view,
            depth_view,
            present_bind_group,
        }
    }
}

fn mesh_data(geometry: &Geometry) -> MeshData {
    match *geometry {
        Geometry::Sphere {
            radius,
            width_segments,
            height_segments,
        } => geometry::sphere(radius, width_segments, height_segments),
        Geometry::Plane { width, height } => geometry::plane(width, height),
    }
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

fn create_object_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniform_buffer: &wgpu::Buffer,
    alpha_view: &wgpu::TextureView,
    alpha_sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("object_bind_group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(alpha_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(alpha_sampler),
            },
        ],
    })
}

/// Alpha maps hold coverage data, so they are not sRGB-decoded
fn create_alpha_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> (wgpu::Texture, wgpu::TextureView) {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Alpha Map"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        texture.as_image_copy(),
        rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

struct MeshPass {
    label: &'static str,
    fragment_entry: &'static str,
    blend: wgpu::BlendState,
    depth_write: bool,
}

fn create_mesh_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    pass: MeshPass,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(pass.label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(pass.fragment_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: SCENE_FORMAT,
                blend: Some(pass.blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: pass.depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
        cache: None,
    })
}

fn create_present_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Display Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("../display.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Present Pipeline Layout"),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Present Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_data_matches_geometry() {
        let sphere = mesh_data(&Geometry::Sphere {
            radius: 0.5,
            width_segments: 32,
            height_segments: 32,
        });
        assert_eq!(sphere.triangle_count(), 32 * 62);

        let plane = mesh_data(&Geometry::Plane { width: 5.0, height: 5.0 });
        assert_eq!(plane.triangle_count(), 2);
    }

    #[test]
    fn scene_buffer_formats_are_renderable() {
        assert!(SCENE_FORMAT.is_srgb());
        assert!(DEPTH_FORMAT.is_depth_stencil_format());
    }
}
