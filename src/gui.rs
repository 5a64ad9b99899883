use std::ops::RangeInclusive;

use egui::{Align2, Color32, Context, FontId};
use egui_wgpu::Renderer;
use egui_winit::State;
use particle_simulation::{ComputeMode, ParticleSimulation};
use wgpu::{Device, TextureFormat};
use winit::{event::WindowEvent, window::Window};

/// Convert a palette entry into an egui color
pub fn palette_color(color: &catppuccin::Color) -> Color32 {
    Color32::from_rgb(color.rgb.r, color.rgb.g, color.rgb.b)
}

/// A setter call requested by the control panel, applied between frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiCommand {
    TogglePause,
    Reset,
    Gravity(f32),
    Friction(f32),
    Restitution(f32),
    VelocityScale(f32),
    ParticleRadius(f32),
    Population(usize),
    CursorActive(bool),
    CursorRadius(f32),
    CursorStrength(f32),
    ComputeMode(ComputeMode),
}

impl UiCommand {
    pub fn apply(self, simulation: &mut ParticleSimulation) {
        match self {
            UiCommand::TogglePause => simulation.toggle_pause(),
            UiCommand::Reset => simulation.reset(),
            UiCommand::Gravity(v) => simulation.set_gravity(v),
            UiCommand::Friction(v) => simulation.set_friction(v),
            UiCommand::Restitution(v) => simulation.set_restitution(v),
            UiCommand::VelocityScale(v) => simulation.set_velocity_scale(v),
            UiCommand::ParticleRadius(v) => simulation.set_particle_radius(v),
            UiCommand::Population(n) => simulation.set_population(n),
            UiCommand::CursorActive(on) => simulation.set_cursor_active(on),
            UiCommand::CursorRadius(v) => simulation.set_cursor_radius(v),
            UiCommand::CursorStrength(v) => simulation.set_cursor_strength(v),
            UiCommand::ComputeMode(mode) => simulation.set_compute_mode(mode),
        }
    }
}

/// Slider positions. Only written back to the simulation when a widget changes.
#[derive(Clone, Debug)]
pub struct Controls {
    pub gravity: f32,
    pub friction: f32,
    pub restitution: f32,
    pub velocity_scale: f32,
    pub particle_radius: f32,
    pub population: usize,
    pub cursor_active: bool,
    pub cursor_radius: f32,
    pub cursor_strength: f32,
    pub compute_mode: ComputeMode,
}

impl Controls {
    pub fn from_simulation(simulation: &ParticleSimulation) -> Self {
        let params = simulation.params();
        let cursor = simulation.cursor();
        Self {
            gravity: params.gravity,
            friction: params.friction,
            restitution: params.restitution,
            velocity_scale: params.velocity_scale,
            particle_radius: params.particle_radius,
            population: params.target_population,
            cursor_active: cursor.active,
            cursor_radius: cursor.radius,
            cursor_strength: cursor.strength,
            compute_mode: simulation.compute_mode(),
        }
    }
}

pub struct UiState {
    pub fps: f32,
    pub frame_time: f32,
    pub controls: Controls,
}

impl UiState {
    pub fn new(simulation: &ParticleSimulation) -> Self {
        Self {
            fps: 0.0,
            frame_time: 0.0,
            controls: Controls::from_simulation(simulation),
        }
    }
}

pub struct Gui {
    context: Context,
    state: State,
    renderer: Renderer,
}

impl Gui {
    pub fn new(device: &Device, output_color_format: TextureFormat, window: &Window) -> Self {
        let context = Context::default();
        let id = context.viewport_id();

        let state = State::new(
            context.clone(),
            id,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(device.limits().max_texture_dimension_2d as usize),
        );

        let renderer = Renderer::new(
            device,
            output_color_format,
            egui_wgpu::RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                ..Default::default()
            },
        );

        Self {
            context,
            state,
            renderer,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.consumed
    }

    /// Draw particles, overlay and controls. Returns the setter calls the user made.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        device: &Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        view: &wgpu::TextureView,
        ui_state: &mut UiState,
        simulation: &ParticleSimulation,
    ) -> Vec<UiCommand> {
        let raw_input = self.state.take_egui_input(window);

        let mut commands = Vec::new();
        let full_output = self.context.run(raw_input, |ctx| {
            commands = Self::ui(ctx, ui_state, simulation);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let clipped_primitives = self
            .context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = window.inner_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Egui Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        depth_slice: None,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();

            self.renderer
                .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        commands
    }

    fn ui(ctx: &Context, state: &mut UiState, simulation: &ParticleSimulation) -> Vec<UiCommand> {
        Self::paint_scene(ctx, state, simulation);

        let mut commands = Vec::new();
        let c = &mut state.controls;

        egui::Window::new("Simulation state")
            .anchor(Align2::RIGHT_TOP, [-10.0, 10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let label = if simulation.is_paused() { "Play" } else { "Pause" };
                    if ui.button(label).clicked() {
                        commands.push(UiCommand::TogglePause);
                    }
                    if ui.button("Refresh").clicked() {
                        commands.push(UiCommand::Reset);
                    }
                });

                ui.separator();
                ui.heading("Physics parameters");
                if slider(ui, &mut c.gravity, 0.0..=20.0, "Gravity") {
                    commands.push(UiCommand::Gravity(c.gravity));
                }
                if slider(ui, &mut c.friction, 0.0..=1.0, "Friction") {
                    commands.push(UiCommand::Friction(c.friction));
                }
                if slider(ui, &mut c.restitution, 0.0..=1.0, "Restitution") {
                    commands.push(UiCommand::Restitution(c.restitution));
                }
                if slider(ui, &mut c.velocity_scale, 0.0..=5.0, "Initial speed") {
                    commands.push(UiCommand::VelocityScale(c.velocity_scale));
                }
                if slider(ui, &mut c.particle_radius, 1.0..=20.0, "Particle size") {
                    commands.push(UiCommand::ParticleRadius(c.particle_radius));
                }
                if ui
                    .add(egui::Slider::new(&mut c.population, 0..=5000).text("Particles"))
                    .changed()
                {
                    commands.push(UiCommand::Population(c.population));
                }

                ui.separator();
                ui.heading("Cursor field");
                if ui.checkbox(&mut c.cursor_active, "Enabled").changed() {
                    commands.push(UiCommand::CursorActive(c.cursor_active));
                }
                if slider(ui, &mut c.cursor_radius, 10.0..=500.0, "Radius") {
                    commands.push(UiCommand::CursorRadius(c.cursor_radius));
                }
                if slider(ui, &mut c.cursor_strength, -20.0..=20.0, "Strength") {
                    commands.push(UiCommand::CursorStrength(c.cursor_strength));
                }

                ui.separator();
                ui.heading("Compute");
                ui.horizontal(|ui| {
                    let cpu = ui.radio_value(&mut c.compute_mode, ComputeMode::Cpu, "CPU");
                    let gpu = ui.radio_value(&mut c.compute_mode, ComputeMode::Gpu, "GPU");
                    if cpu.changed() || gpu.changed() {
                        commands.push(UiCommand::ComputeMode(c.compute_mode));
                    }
                });
            });

        commands
    }

    /// Particles and overlay text, painted behind every window
    fn paint_scene(ctx: &Context, state: &UiState, simulation: &ParticleSimulation) {
        let palette = &catppuccin::PALETTE.mocha.colors;
        let painter = ctx.layer_painter(egui::LayerId::background());

        for p in simulation.particles() {
            let [r, g, b, a] = p.color;
            painter.circle_filled(
                egui::pos2(p.position[0], p.position[1]),
                p.radius,
                Color32::from_rgba_unmultiplied(r, g, b, a),
            );
        }

        let stats = simulation.stats();
        painter.text(
            egui::pos2(10.0, 10.0),
            Align2::LEFT_TOP,
            format!("{:.0} FPS", state.fps),
            FontId::proportional(20.0),
            palette_color(&palette.green),
        );
        painter.text(
            egui::pos2(10.0, 34.0),
            Align2::LEFT_TOP,
            format!(
                "{} particles | {:.2} ms | {}",
                stats.population,
                state.frame_time,
                stats.compute_mode.label()
            ),
            FontId::proportional(14.0),
            palette_color(&palette.subtext0),
        );
        if !stats.collisions_resolved {
            painter.text(
                egui::pos2(10.0, 52.0),
                Align2::LEFT_TOP,
                "collisions off (population above limit)",
                FontId::proportional(14.0),
                palette_color(&palette.peach),
            );
        }

        if stats.paused {
            let bounds = simulation.bounds();
            painter.text(
                egui::pos2(bounds.width / 2.0, bounds.height / 2.0),
                Align2::CENTER_CENTER,
                "PAUSE",
                FontId::proportional(40.0),
                palette_color(&palette.text),
            );
        }
    }
}

fn slider(ui: &mut egui::Ui, value: &mut f32, range: RangeInclusive<f32>, text: &str) -> bool {
    ui.add(egui::Slider::new(value, range).text(text)).changed()
}
