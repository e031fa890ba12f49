use dash_engine::canvas::Canvas;
use dash_engine::coords::Size;
use dash_engine::graphics::Graphics;
use dash_engine::paint::Color;

use crate::device::{Gpu, GpuFrame};

use super::Letterbox;

/// Uploads a [`Canvas`] and draws it letterboxed into the acquired frame.
///
/// GPU objects are created on first use and rebuilt only when the surface
/// format or the canvas size changes.
pub struct CanvasPresenter {
    bar_color: Color,

    // pipeline
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    sampler: Option<wgpu::Sampler>,

    // canvas texture (rebuilt on resize)
    texture: Option<wgpu::Texture>,
    texture_size: Size,
    bind_group: Option<wgpu::BindGroup>,
}

impl CanvasPresenter {
    /// `bar_color` fills the window area outside the letterbox.
    pub fn new(bar_color: Color) -> Self {
        Self {
            bar_color,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            sampler: None,
            texture: None,
            texture_size: Size::default(),
            bind_group: None,
        }
    }

    /// Uploads `canvas` and records the present pass into `frame`.
    ///
    /// Returns the letterbox used, or `None` if there was nothing to draw
    /// (empty canvas or window); the frame is then only cleared.
    pub fn present(&mut self, gpu: &Gpu<'_>, frame: &mut GpuFrame, canvas: &Canvas) -> Option<Letterbox> {
        let (fw, fh) = frame.size();
        let letterbox = Letterbox::fit(canvas.size(), Size::new(fw, fh));

        let format = gpu.surface_format();
        self.ensure_pipeline(gpu.device(), format);
        self.ensure_sampler(gpu.device());
        if letterbox.is_some() {
            self.ensure_texture(gpu.device(), format, canvas.size());
            self.upload(gpu.queue(), canvas);
        }

        let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("dash present pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color(self.bar_color, format.is_srgb())),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let lb = letterbox?;
        let Some(pipeline) = self.pipeline.as_ref() else { return None; };
        let Some(bind_group) = self.bind_group.as_ref() else { return None; };

        rpass.set_viewport(
            lb.x as f32,
            lb.y as f32,
            lb.width as f32,
            lb.height as f32,
            0.0,
            1.0,
        );
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..3, 0..1);

        Some(lb)
    }

    fn upload(&self, queue: &wgpu::Queue, canvas: &Canvas) {
        let Some(texture) = self.texture.as_ref() else { return; };
        let size = canvas.size();

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            canvas.as_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(size.width * 4),
                rows_per_image: Some(size.height),
            },
            wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
        );
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, device: &wgpu::Device, format: wgpu::TextureFormat) {
        if self.pipeline_format == Some(format) && self.pipeline.is_some() {
            return;
        }

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("dash present shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/present.wgsl").into()),
        });

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("dash present bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("dash present pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("dash present pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
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
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        // Texture format follows the surface format; force a rebuild.
        self.texture = None;
        self.bind_group = None;
    }

    fn ensure_sampler(&mut self, device: &wgpu::Device) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("dash present sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_texture(&mut self, device: &wgpu::Device, surface_format: wgpu::TextureFormat, size: Size) {
        if self.texture.is_some() && self.bind_group.is_some() && self.texture_size == size {
            return;
        }

        let Some(bgl) = self.bind_group_layout.as_ref() else { return; };
        let Some(sampler) = self.sampler.as_ref() else { return; };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("dash canvas texture"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: canvas_texture_format(surface_format),
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("dash present bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        log::debug!("canvas texture {}x{}", size.width, size.height);
        self.texture = Some(texture);
        self.texture_size = size;
        self.bind_group = Some(bind_group);
    }
}

/// Canvas bytes are sRGB. Decoding them on sample and re-encoding on an sRGB
/// target is a no-op; on a linear target both steps are skipped.
fn canvas_texture_format(surface_format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    if surface_format.is_srgb() {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

/// Clear values are linear; an sRGB target encodes them on store.
fn clear_color(c: Color, srgb_target: bool) -> wgpu::Color {
    let (r, g, b, a) = c.to_f32();
    let (r, g, b) = if srgb_target {
        (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    } else {
        (r, g, b)
    };
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_format_tracks_surface_encoding() {
        assert_eq!(
            canvas_texture_format(wgpu::TextureFormat::Bgra8UnormSrgb),
            wgpu::TextureFormat::Rgba8UnormSrgb
        );
        assert_eq!(
            canvas_texture_format(wgpu::TextureFormat::Bgra8Unorm),
            wgpu::TextureFormat::Rgba8Unorm
        );
    }

    #[test]
    fn clear_color_linearizes_for_srgb_targets() {
        let white = clear_color(Color::WHITE, true);
        assert!((white.r - 1.0).abs() < 1e-6);

        let grey = Color::rgb(128, 128, 128);
        let linear = clear_color(grey, true);
        let raw = clear_color(grey, false);
        assert!((raw.r - 128.0 / 255.0).abs() < 1e-6);
        // sRGB 0.502 decodes to roughly 0.216 linear.
        assert!((linear.r - 0.216).abs() < 1e-3);
        assert_eq!(linear.a, 1.0);
    }

    #[test]
    fn black_stays_black() {
        let c = clear_color(Color::BLACK, true);
        assert_eq!((c.r, c.g, c.b), (0.0, 0.0, 0.0));
    }
}
