use eframe::egui;
use egui::{Align2, FontId, Pos2, Sense, Shape, Stroke, Vec2};

use crate::model::birth_chart::{BirthChartData, HOUSES, MAX_SCORE};
use crate::ui::theme::Theme;

const GRID_RINGS: u32 = 5;
const LABEL_GUTTER: f32 = 40.0;

/// Radar chart of the twelve houses. The radial axis runs 0..=10 from the
/// center; the first house sits at twelve o'clock and the rest follow
/// clockwise.
pub fn draw_birth_chart(ui: &mut egui::Ui, theme: &Theme, data: &BirthChartData) {
    let side = ui.available_width().min(380.0);
    let (response, painter) =
        ui.allocate_painter(Vec2::new(ui.available_width(), side), Sense::hover());
    let center = response.rect.center();
    let radius = (side * 0.5 - LABEL_GUTTER).max(10.0);

    let count = HOUSES.len();
    let angle_of = |i: usize| -> f32 {
        std::f32::consts::TAU * i as f32 / count as f32 - std::f32::consts::FRAC_PI_2
    };
    let point_at = |i: usize, r: f32| -> Pos2 {
        let a = angle_of(i);
        Pos2::new(center.x + r * a.cos(), center.y + r * a.sin())
    };

    for ring in 1..=GRID_RINGS {
        let r = radius * ring as f32 / GRID_RINGS as f32;
        painter.circle_stroke(center, r, Stroke::new(1.0, theme.grid));
        painter.text(
            Pos2::new(center.x + 4.0, center.y - r),
            Align2::LEFT_CENTER,
            format!("{}", ring * 2),
            FontId::proportional(9.0),
            theme.grid,
        );
    }

    for (i, house) in HOUSES.iter().enumerate() {
        painter.line_segment([center, point_at(i, radius)], Stroke::new(1.0, theme.grid));

        let a = angle_of(i);
        let align = if a.cos() > 0.3 {
            Align2::LEFT_CENTER
        } else if a.cos() < -0.3 {
            Align2::RIGHT_CENTER
        } else {
            Align2::CENTER_CENTER
        };
        painter.text(
            point_at(i, radius + 12.0),
            align,
            *house,
            FontId::proportional(11.0),
            theme.text_dim,
        );
    }

    let points: Vec<Pos2> = (0..count)
        .map(|i| point_at(i, radius * data.score(HOUSES[i]) / MAX_SCORE))
        .collect();

    // The score polygon is star-shaped around the center, not convex, so it
    // is filled as a fan of triangles.
    for i in 0..count {
        let next = (i + 1) % count;
        painter.add(Shape::convex_polygon(
            vec![center, points[i], points[next]],
            theme.chart_fill,
            Stroke::NONE,
        ));
    }
    painter.add(Shape::closed_line(
        points.clone(),
        Stroke::new(2.0, theme.chart_line),
    ));
    for point in &points {
        painter.circle_filled(*point, 4.0, theme.chart_line);
    }
}
