use eframe::egui;
use egui::RichText;

use crate::ui::app::{DashboardApp, Page};
use crate::ui::theme;

pub fn draw_landing_panel(ctx: &egui::Context, app: &mut DashboardApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        theme::paint_starfield(ui.painter(), ui.max_rect());

        ui.add_space(ui.available_height() * 0.28);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Welcome to SoulBuddy 🔮")
                    .size(34.0)
                    .color(app.theme.accent)
                    .strong(),
            );
            ui.add_space(12.0);
            ui.label(
                RichText::new(
                    "Your guide to personalized insights, horoscopes, \
                     and spiritual wellness recommendations.",
                )
                .size(16.0)
                .color(app.theme.text_dim),
            );
            ui.add_space(24.0);
            if ui.button(RichText::new("Get Started").size(18.0)).clicked() {
                app.ui.page = Page::Form;
            }
        });
    });
}
