use eframe::egui;
use egui::{Color32, CornerRadius, Frame, Margin, Stroke};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed night-sky palette. Not user-configurable and never persisted.
#[derive(Clone)]
pub struct Theme {
    pub sky: Color32,
    pub accent: Color32,
    pub text_dim: Color32,
    pub panel_fill: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub chart_line: Color32,
    pub chart_fill: Color32,
    pub grid: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            sky: Color32::from_rgb(16, 14, 40),
            accent: Color32::from_rgb(255, 215, 0),
            text_dim: Color32::from_rgb(200, 200, 215),
            panel_fill: Color32::from_rgba_unmultiplied(255, 255, 255, 18),
            warning: Color32::from_rgb(240, 190, 80),
            error: Color32::from_rgb(225, 85, 85),
            chart_line: Color32::from_rgb(255, 215, 0),
            chart_fill: Color32::from_rgba_unmultiplied(255, 215, 0, 40),
            grid: Color32::from_rgba_unmultiplied(255, 255, 255, 40),
        }
    }
}

impl Theme {
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.sky;
        visuals.window_fill = self.sky;
        ctx.set_visuals(visuals);
    }

    /// Frame used for every content card.
    pub fn section_frame(&self) -> Frame {
        Frame::new()
            .fill(self.panel_fill)
            .corner_radius(CornerRadius::same(12))
            .inner_margin(Margin::symmetric(16, 12))
    }

    /// Tinted frame for warnings and errors.
    pub fn notice_frame(&self, color: Color32) -> Frame {
        Frame::new()
            .fill(color.gamma_multiply(0.15))
            .stroke(Stroke::new(1.0, color.gamma_multiply(0.6)))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::symmetric(12, 8))
    }
}

/// Scatters a constellation of faint stars over `rect`. Fixed seed so every
/// frame draws the same sky.
pub fn paint_starfield(painter: &egui::Painter, rect: egui::Rect) {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..140 {
        let x = rect.left() + rng.gen::<f32>() * rect.width();
        let y = rect.top() + rng.gen::<f32>() * rect.height();
        let radius = 0.5 + rng.gen::<f32>() * 1.2;
        let alpha: u8 = rng.gen_range(40..=160);
        painter.circle_filled(
            egui::pos2(x, y),
            radius,
            Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
        );
    }
}
