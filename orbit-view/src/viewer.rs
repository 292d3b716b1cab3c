//! Three-canvas celestial mechanics viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Scene`] and implements
//! [`eframe::App`]: each repaint advances the scene by one tick and paints
//! the spiral, parabola and orbit canvases side by side.

use eframe::App;
use glam::DVec2;
use orbit_core::{
    Animation, Scene,
    body::{CelestialBody, Fill},
    types::Rgb,
};

/// Main application state for the viewer.
///
/// The per-frame update is:
/// 1. [`Scene::tick`] advances all three trajectories once.
/// 2. Each canvas is painted back to front: background, fading satellite
///    trail, planet, satellite.
/// 3. A repaint is requested so the next frame ticks again.
///
/// ### Fields
/// - `scene` - The three animations.
/// - `canvas_size` - Side of each square canvas, in points.
/// - `background` - Background raster, handed to egui on the first frame.
/// - `background_size` - Raster size in pixels, painted at native scale.
/// - `texture` - Uploaded background texture.
pub struct Viewer {
    scene: Scene,
    canvas_size: f32,
    background: Option<egui::ColorImage>,
    background_size: [usize; 2],
    texture: Option<egui::TextureHandle>,
}

/// Converts a core colour to egui with the given opacity.
fn color32(c: Rgb, opacity: f64) -> egui::Color32 {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, a)
}

impl Viewer {
    /// Horizontal spacing between canvases, in points.
    pub const GAP: f32 = 12.0;

    /// Rings and segments of the tessellated gradient disc.
    const RINGS: usize = 10;
    const SEGMENTS: usize = 48;

    pub fn new(scene: Scene, background: egui::ColorImage, canvas_size: f32) -> Self {
        Self {
            scene,
            canvas_size,
            background_size: background.size,
            background: Some(background),
            texture: None,
        }
    }

    /// Returns the background texture, uploading it on first use.
    fn background_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        if self.texture.is_none() {
            let image = self.background.take().unwrap_or_default();
            self.texture = Some(ctx.load_texture("background", image, egui::TextureOptions::LINEAR));
        }
        self.texture
            .as_ref()
            .map_or(egui::TextureId::default(), |t| t.id())
    }

    /// Converts a canvas position (origin at the centre, y down) to screen.
    fn canvas_to_screen(p: DVec2, rect: egui::Rect, scale: f32) -> egui::Pos2 {
        rect.center() + egui::vec2(p.x as f32, p.y as f32) * scale
    }

    /// Tessellates a body into a mesh whose vertex colours sample its fill.
    ///
    /// The disc is split into [`Self::RINGS`] concentric rings of
    /// [`Self::SEGMENTS`] vertices around a centre vertex; egui interpolates
    /// colours across each triangle.
    fn disc_mesh(body: &CelestialBody, rect: egui::Rect, scale: f32, opacity: f64) -> egui::Mesh {
        let mut mesh = egui::Mesh::default();
        let vertex = |mesh: &mut egui::Mesh, p: DVec2| {
            mesh.colored_vertex(
                Self::canvas_to_screen(p, rect, scale),
                color32(body.fill.color_at(p), opacity),
            );
        };

        vertex(&mut mesh, body.pos);
        for ring in 1..=Self::RINGS {
            let r = body.radius * ring as f64 / Self::RINGS as f64;
            for seg in 0..Self::SEGMENTS {
                let theta = std::f64::consts::TAU * seg as f64 / Self::SEGMENTS as f64;
                vertex(&mut mesh, body.pos + DVec2::new(theta.cos(), theta.sin()) * r);
            }
        }

        let n = Self::SEGMENTS as u32;
        let at = |ring: u32, seg: u32| 1 + (ring - 1) * n + seg % n;
        for seg in 0..n {
            mesh.add_triangle(0, at(1, seg), at(1, seg + 1));
        }
        for ring in 2..=Self::RINGS as u32 {
            for seg in 0..n {
                let (a, b) = (at(ring - 1, seg), at(ring - 1, seg + 1));
                let (c, d) = (at(ring, seg), at(ring, seg + 1));
                mesh.add_triangle(a, c, d);
                mesh.add_triangle(a, d, b);
            }
        }
        mesh
    }

    fn paint_body(
        painter: &egui::Painter,
        rect: egui::Rect,
        scale: f32,
        body: &CelestialBody,
        opacity: f64,
    ) {
        match &body.fill {
            Fill::Solid(c) => {
                let center = Self::canvas_to_screen(body.pos, rect, scale);
                painter.circle_filled(center, body.radius as f32 * scale, color32(*c, opacity));
            }
            Fill::Gradient { .. } => {
                painter.add(egui::Shape::mesh(Self::disc_mesh(body, rect, scale, opacity)));
            }
        }
    }

    /// Paints one animation onto its canvas rectangle.
    fn paint_animation(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        animation: &Animation,
        texture: egui::TextureId,
    ) {
        let scale = rect.width() / self.canvas_size;

        // Background at native size, anchored to the canvas top-left.
        let bg_size = egui::vec2(self.background_size[0] as f32, self.background_size[1] as f32);
        painter.image(
            texture,
            egui::Rect::from_min_size(rect.min, bg_size * scale),
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        // Older satellite positions show through the translucent repaint.
        let satellite = animation.satellite();
        for (pos, opacity) in animation.trail().faded() {
            let ghost = CelestialBody {
                pos,
                ..satellite.clone()
            };
            Self::paint_body(painter, rect, scale, &ghost, opacity);
        }

        Self::paint_body(painter, rect, scale, animation.planet(), 1.0);
        Self::paint_body(painter, rect, scale, satellite, 1.0);
    }

    /// Builds the bottom status bar (tick counter, frame time).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dt = ctx.input(|i| i.stable_dt);
                ui.label(format!("frame = {:.1} ms", dt * 1000.0));
                ui.separator();
                ui.label(format!("tick = {}", self.scene.ticks()));
            });
        });
    }

    /// Builds the central panel holding the three canvases.
    fn ui_canvases(&mut self, ctx: &egui::Context) {
        let texture = self.background_texture(ctx);
        let size = egui::vec2(self.canvas_size, self.canvas_size);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                for animation in self.scene.animations() {
                    ui.vertical(|ui| {
                        ui.label(animation.kind().title());
                        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                        let painter = ui.painter_at(rect);
                        self.paint_animation(&painter, rect, animation, texture);
                    });
                    ui.add_space(Self::GAP);
                }
            });
        });
    }

    /// One frame: tick the scene, then build the UI.
    fn frame(&mut self, ctx: &egui::Context) {
        self.scene.tick();
        self.ui_status_bar(ctx);
        self.ui_canvases(ctx);
        ctx.request_repaint();
    }
}

impl App for Viewer {
    /// eframe callback, called once per display frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}
