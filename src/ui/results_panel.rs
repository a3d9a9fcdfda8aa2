use eframe::egui;
use egui::RichText;

use crate::model::reading::{Reading, Slot};
use crate::ui::app::{DashboardApp, Page, ReadingTab, ReadingView};
use crate::ui::birth_chart::draw_birth_chart;
use crate::ui::theme::Theme;

pub fn draw_results_panel(ctx: &egui::Context, app: &mut DashboardApp) {
    let theme = app.theme.clone();

    egui::TopBottomPanel::top("reading_nav").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            if ui.button("⬅ New Reading").clicked() {
                app.start_new_reading();
            }
            ui.separator();
            for tab in ReadingTab::ALL {
                ui.selectable_value(&mut app.ui.reading_tab, tab, tab.title());
            }
        });
        ui.add_space(4.0);
    });

    if app.ui.page != Page::Reading {
        return;
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        let tab = app.ui.reading_tab;
        let Some(view) = &app.ui.view else {
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(720.0);
                ui.add_space(16.0);
                match tab {
                    ReadingTab::Dashboard => draw_dashboard(ui, &theme, view),
                    ReadingTab::Horoscope => draw_section(
                        ui,
                        &theme,
                        ReadingTab::Horoscope.title(),
                        view.reading.display_text(Slot::Horoscope),
                    ),
                    ReadingTab::Recommendations => draw_section(
                        ui,
                        &theme,
                        ReadingTab::Recommendations.title(),
                        view.reading.display_text(Slot::Recommendations),
                    ),
                    ReadingTab::Wellness => draw_section(
                        ui,
                        &theme,
                        ReadingTab::Wellness.title(),
                        view.reading.display_text(Slot::Spiritual),
                    ),
                    ReadingTab::Advisor => draw_advisor(ui, &theme, &view.reading),
                }
                ui.add_space(24.0);
            });
        });
    });
}

fn draw_dashboard(ui: &mut egui::Ui, theme: &Theme, view: &ReadingView) {
    draw_heading(ui, theme, "Birth Chart & Personalized Insights");

    theme.section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("12 Houses Birth Chart").size(18.0).strong());
        ui.add_space(8.0);
        draw_birth_chart(ui, theme, &view.chart);
    });
    ui.add_space(12.0);

    theme.section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(view.reading.display_text(Slot::Insights)).size(15.0));
    });
}

fn draw_section(ui: &mut egui::Ui, theme: &Theme, title: &str, body: &str) {
    draw_heading(ui, theme, title);
    theme.section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(body).size(15.0));
    });
}

fn draw_advisor(ui: &mut egui::Ui, theme: &Theme, reading: &Reading) {
    draw_heading(ui, theme, ReadingTab::Advisor.title());

    theme.section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        for slot in [Slot::Horoscope, Slot::Recommendations, Slot::Spiritual] {
            if reading.is_blank(slot) {
                ui.label(
                    RichText::new(format!("⚠ {}", slot.unavailable_notice()))
                        .color(theme.warning),
                );
            } else {
                ui.label(
                    RichText::new(format!("{}:", slot.label()))
                        .strong()
                        .color(theme.accent),
                );
                ui.label(RichText::new(reading.display_text(slot)).size(15.0));
            }
            ui.add_space(10.0);
        }
    });
}

fn draw_heading(ui: &mut egui::Ui, theme: &Theme, title: &str) {
    ui.label(
        RichText::new(title)
            .size(24.0)
            .color(theme.accent)
            .strong(),
    );
    ui.add_space(12.0);
}
