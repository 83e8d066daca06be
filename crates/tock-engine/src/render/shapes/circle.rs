use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::common::{
    load_pass, quad_pipeline, InstanceBuffer, LayerBatches, QuadGeometry, ViewportUniform,
    QUAD_INDEX_COUNT,
};

/// Renderer for `DrawCmd::Circle`.
///
/// Fill and border are resolved per fragment from the distance to the center,
/// with one pixel of analytic anti-aliasing on each edge.
pub struct CircleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    quad: QuadGeometry,
    instances: InstanceBuffer,
    batches: LayerBatches,
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            viewport_ubo: None,
            quad: QuadGeometry::default(),
            instances: InstanceBuffer::new("tock circle instance vbo"),
            batches: LayerBatches::default(),
        }
    }
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads every circle in `draw_list` for this frame.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, draw_list: &mut DrawList) {
        self.ensure_pipeline(ctx);
        self.quad.ensure(ctx, "tock circle");
        self.ensure_bindings(ctx);

        self.batches.clear();
        let mut instances: Vec<CircleInstance> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Circle(cmd) = &item.cmd else { continue };
            if cmd.radius <= 0.0 || !cmd.center.is_finite() {
                continue;
            }

            let (border_width, border_color) = match &cmd.border {
                Some(b) => (b.width.clamp(0.0, cmd.radius), b.color.to_array()),
                None => (0.0, [0.0; 4]),
            };

            instances.push(CircleInstance {
                center: [cmd.center.x, cmd.center.y],
                radius_bw: [cmd.radius, border_width],
                fill: cmd.fill.to_array(),
                border_color,
            });
            self.batches.push(item.key.z);
        }

        if instances.is_empty() {
            return;
        }

        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
        }
        self.instances.upload(ctx, &instances);
    }

    /// Draws the circles prepared for layer `z`.
    pub fn render_layer(&self, target: &mut RenderTarget<'_>, z: ZIndex) {
        if let Some(range) = self.batches.range_for(z) {
            self.draw(target, range);
        }
    }

    fn draw(&self, target: &mut RenderTarget<'_>, instances: std::ops::Range<u32>) {
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(instance_vbo) = self.instances.buffer() else { return };

        let mut rpass = load_pass(target.encoder, target.color_view, "tock circle pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        if !self.quad.bind(&mut rpass) {
            return;
        }
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.draw_indexed(0..QUAD_INDEX_COUNT, 0, instances);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tock circle bgl"),
                entries: &[ViewportUniform::layout_entry(0)],
            });

        let pipeline = quad_pipeline(
            ctx,
            "tock circle",
            include_str!("shaders/circle.wgsl"),
            &bind_group_layout,
            CircleInstance::layout(),
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ViewportUniform::create_buffer(ctx, "tock circle viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tock circle bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  center       [f32; 2]   loc 1
///  offset  8  radius_bw    [f32; 2]   loc 2  (.x = radius, .y = border_width)
///  offset 16  fill         [f32; 4]   loc 3
///  offset 32  border_color [f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius_bw: [f32; 2],
    fill: [f32; 4],
    border_color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radius_bw
        3 => Float32x4, // fill
        4 => Float32x4  // border_color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
