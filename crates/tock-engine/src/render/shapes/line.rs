use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::common::{
    load_pass, quad_pipeline, InstanceBuffer, LayerBatches, QuadGeometry, ViewportUniform,
    QUAD_INDEX_COUNT,
};

/// Renderer for `DrawCmd::Line`.
///
/// Each segment is an oriented quad padded by one pixel; the fragment shader
/// computes coverage from the distance to the stroke edges and the butt caps.
pub struct LineRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    quad: QuadGeometry,
    instances: InstanceBuffer,
    batches: LayerBatches,
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            viewport_ubo: None,
            quad: QuadGeometry::default(),
            instances: InstanceBuffer::new("tock line instance vbo"),
            batches: LayerBatches::default(),
        }
    }
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads every visible line in `draw_list` for this frame.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, draw_list: &mut DrawList) {
        self.ensure_pipeline(ctx);
        self.quad.ensure(ctx, "tock line");
        self.ensure_bindings(ctx);

        self.batches.clear();
        let mut instances: Vec<LineInstance> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Line(cmd) = &item.cmd else { continue };
            if !cmd.is_visible() {
                continue;
            }

            instances.push(LineInstance {
                from: [cmd.from.x, cmd.from.y],
                to: [cmd.to.x, cmd.to.y],
                width: [cmd.width, 0.0],
                color: cmd.color.to_array(),
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

    /// Draws the lines prepared for layer `z`.
    pub fn render_layer(&self, target: &mut RenderTarget<'_>, z: ZIndex) {
        if let Some(range) = self.batches.range_for(z) {
            self.draw(target, range);
        }
    }

    fn draw(&self, target: &mut RenderTarget<'_>, instances: std::ops::Range<u32>) {
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(instance_vbo) = self.instances.buffer() else { return };

        let mut rpass = load_pass(target.encoder, target.color_view, "tock line pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        if !self.quad.bind(&mut rpass) {
            return;
        }
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.draw_indexed(0..QUAD_INDEX_COUNT, 0, instances);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tock line bgl"),
                entries: &[ViewportUniform::layout_entry(0)],
            });

        let pipeline = quad_pipeline(
            ctx,
            "tock line",
            include_str!("shaders/line.wgsl"),
            &bind_group_layout,
            LineInstance::layout(),
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

        let viewport_ubo = ViewportUniform::create_buffer(ctx, "tock line viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tock line bind group"),
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

/// Instance data layout (40 bytes):
///
///  offset  0  from   [f32; 2]   loc 1
///  offset  8  to     [f32; 2]   loc 2
///  offset 16  width  [f32; 2]   loc 3  (.x = stroke width, .y unused)
///  offset 24  color  [f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineInstance {
    from: [f32; 2],
    to: [f32; 2],
    width: [f32; 2],
    color: [f32; 4],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // from
        2 => Float32x2, // to
        3 => Float32x2, // width
        4 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_is_40_bytes() {
        assert_eq!(std::mem::size_of::<LineInstance>(), 40);
    }
}
