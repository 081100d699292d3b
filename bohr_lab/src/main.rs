//! Quantum vs Bohr Laboratory
//!
//! Rotating electron cloud rejection-sampled from the quantum radial density,
//! next to Bohr and quantum comparison charts.
//!
//! Controls:
//! - n slider: energy level (1-4)
//! - l slider: orbital shape (clamped to n-1)

use bohr_lab::constants::CLOUD_POINTS;
use bohr_lab::controller::Controller;
use bohr_lab::projector::{project_cloud, Rotation};
use bohr_lab::renderer::{
    chart_lines, cloud_to_instances, nucleus_instance, ChartRect, CloudRenderer, BOHR_RED,
    QUANTUM_BLUE,
};
use bohr_lab::ui;
use common::GraphicsContext;
use winit::{
    event::{Event, WindowEvent},
    event_loop::ControlFlow,
};

const WINDOW_WIDTH: u32 = 1300;
const WINDOW_HEIGHT: u32 = 850;

const CHART_WIDTH: f32 = 400.0;
const CHART_HEIGHT: f32 = 250.0;

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: CloudRenderer,
    controller: Controller,
    rotation: Rotation,
    slider_n: u32,
    slider_l: u32,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        // cloud + nucleus marker; two chart frames and polylines
        let renderer = CloudRenderer::new(&ctx, CLOUD_POINTS + 1, 1024);
        let controller = Controller::new();

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        let slider_n = controller.state().n();
        let slider_l = controller.state().l();

        Self {
            ctx,
            renderer,
            controller,
            rotation: Rotation::default(),
            slider_n,
            slider_l,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    /// Advance the cosmetic tumble by one frame
    fn update(&mut self) {
        self.rotation.advance();
    }

    /// Charts stack top-right, mirroring the window as it resizes
    fn chart_rects(&self) -> (ChartRect, ChartRect) {
        let w = self.ctx.size.width as f32;
        let bohr = ChartRect {
            x: w - CHART_WIDTH - 50.0,
            y: 50.0,
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        };
        let quantum = ChartRect {
            x: bohr.x,
            y: 320.0,
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        };
        (bohr, quantum)
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (bohr_rect, quantum_rect) = self.chart_rects();

        // Build egui UI and pick up slider movement
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let mut sliders_moved = false;
        let state = self.controller.state();
        let cloud_len = self.controller.cloud().len();
        let target = self.controller.target_points();
        let nodes = self.controller.curves().radial_nodes;
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            ui::draw_status_bar(ctx, state, cloud_len, target);
            sliders_moved = ui::draw_controls(ctx, &mut self.slider_n, &mut self.slider_l, state);
            ui::draw_chart_titles(ctx, bohr_rect, quantum_rect, nodes);
            ui::draw_comparison_window(ctx);
        });

        if sliders_moved {
            self.controller.set_sliders(self.slider_n, self.slider_l);
        }

        // Project and upload this frame's scene
        let viewport = self.ctx.viewport();
        self.renderer.update_viewport(&self.ctx.queue, &viewport);

        let anchor = (
            (viewport.width / 3) as i32,
            (viewport.height / 2) as i32,
        );
        let projected = project_cloud(self.controller.cloud(), self.rotation, viewport, anchor);
        let mut instances = cloud_to_instances(&projected);
        instances.push(nucleus_instance(anchor));
        self.renderer.update_points(&self.ctx.queue, &instances);

        let curves = self.controller.curves();
        let mut lines = chart_lines(bohr_rect, &curves.bohr, BOHR_RED);
        lines.extend(chart_lines(quantum_rect, &curves.quantum, QUANTUM_BLUE));
        self.renderer.update_lines(&self.ctx.queue, &lines);

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer
            .render_points(&mut encoder, &view, instances.len() as u32, true);
        self.renderer
            .render_lines(&mut encoder, &view, lines.len() as u32);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui
            .state
            .on_window_event(&self.ctx.window, event)
            .consumed
    }
}

fn main() {
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        "Quantum vs Bohr Laboratory",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
    ));

    let mut app = App::new(ctx);

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, .. } => {
                    let consumed = app.handle_window_event(event);

                    if !consumed {
                        match event {
                            WindowEvent::CloseRequested => elwt.exit(),
                            WindowEvent::Resized(size) => app.resize(*size),
                            WindowEvent::RedrawRequested => {
                                app.update();
                                match app.render() {
                                    Ok(_) => {}
                                    Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                    Err(e) => eprintln!("Render error: {:?}", e),
                                }
                            }
                            _ => {}
                        }
                    }
                }
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
