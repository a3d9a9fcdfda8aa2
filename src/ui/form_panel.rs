use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use eframe::egui;
use egui::RichText;

use crate::model::profile::{Gender, UserProfile, EARLIEST_BIRTH_YEAR};
use crate::ui::app::{DashboardApp, Notice};
use crate::ui::theme::Theme;

/* =========================
   Form state
   ========================= */

/// Editable buffers behind the details form. Collapsed into a
/// `UserProfile` only when every submit check passes.
pub struct ProfileForm {
    pub name: String,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    pub birth_hour: u32,
    pub birth_minute: u32,
    pub gender: Gender,
    pub state: String,
    pub city: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            birth_year: 1990,
            birth_month: 1,
            birth_day: 1,
            birth_hour: 12,
            birth_minute: 0,
            gender: Gender::default(),
            state: String::new(),
            city: String::new(),
        }
    }
}

impl ProfileForm {
    /// Submit gate: every text field filled, the birth date a real calendar
    /// day inside the accepted range, the time representable. Returns the
    /// profile or the warning to show.
    pub fn build_profile(&self, today: NaiveDate) -> Result<UserProfile, String> {
        if self.name.trim().is_empty()
            || self.state.trim().is_empty()
            || self.city.trim().is_empty()
        {
            return Err("Please fill out all fields.".to_string());
        }

        let Some(date_of_birth) =
            NaiveDate::from_ymd_opt(self.birth_year, self.birth_month, self.birth_day)
        else {
            return Err("Date of birth is not a valid calendar date.".to_string());
        };
        if date_of_birth.year() < EARLIEST_BIRTH_YEAR {
            return Err(format!(
                "Date of birth must be {EARLIEST_BIRTH_YEAR} or later."
            ));
        }
        if date_of_birth > today {
            return Err("Date of birth cannot be in the future.".to_string());
        }

        let Some(time_of_birth) = NaiveTime::from_hms_opt(self.birth_hour, self.birth_minute, 0)
        else {
            return Err("Time of birth is out of range.".to_string());
        };

        Ok(UserProfile {
            name: self.name.trim().to_string(),
            date_of_birth,
            time_of_birth,
            gender: self.gender,
            state: self.state.trim().to_string(),
            city: self.city.trim().to_string(),
        })
    }
}

/* =========================
   Panel
   ========================= */

pub fn draw_form_panel(ctx: &egui::Context, app: &mut DashboardApp) {
    let theme = app.theme.clone();
    let today = Local::now().date_naive();
    let mut submit_clicked = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(540.0);
                ui.add_space(24.0);
                ui.label(
                    RichText::new("Enter Your Details")
                        .size(26.0)
                        .color(theme.accent)
                        .strong(),
                );
                ui.add_space(12.0);

                if let Some(notice) = &app.ui.notice {
                    draw_notice(ui, &theme, notice);
                    ui.add_space(8.0);
                }

                theme.section_frame().show(ui, |ui| {
                    ui.scope(|ui| {
                        if app.ui.awaiting_reply {
                            ui.disable();
                        }
                        submit_clicked = draw_fields(ui, &theme, &mut app.ui.form, today);
                    });
                });

                if app.ui.awaiting_reply {
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(
                            RichText::new("Generating your spiritual insights...")
                                .color(theme.text_dim),
                        );
                    });
                }
                ui.add_space(24.0);
            });
        });
    });

    if submit_clicked && !app.ui.awaiting_reply {
        match app.ui.form.build_profile(today) {
            Ok(profile) => app.submit_profile(profile),
            Err(warning) => app.ui.notice = Some(Notice::Warning(warning)),
        }
    }
}

fn draw_fields(
    ui: &mut egui::Ui,
    theme: &Theme,
    form: &mut ProfileForm,
    today: NaiveDate,
) -> bool {
    ui.label("Name:");
    ui.text_edit_singleline(&mut form.name);
    ui.add_space(8.0);

    ui.label("Date of Birth:");
    ui.horizontal(|ui| {
        ui.add(
            egui::DragValue::new(&mut form.birth_year)
                .range(EARLIEST_BIRTH_YEAR..=today.year()),
        );
        ui.label("/");
        ui.add(
            egui::DragValue::new(&mut form.birth_month)
                .range(1..=12)
                .custom_formatter(pad2),
        );
        ui.label("/");
        ui.add(
            egui::DragValue::new(&mut form.birth_day)
                .range(1..=31)
                .custom_formatter(pad2),
        );
        ui.label(RichText::new("(year / month / day)").small().color(theme.text_dim));
    });
    ui.add_space(8.0);

    ui.label("Time of Birth:");
    ui.horizontal(|ui| {
        ui.add(
            egui::DragValue::new(&mut form.birth_hour)
                .range(0..=23)
                .custom_formatter(pad2),
        );
        ui.label(":");
        ui.add(
            egui::DragValue::new(&mut form.birth_minute)
                .range(0..=59)
                .custom_formatter(pad2),
        );
        ui.label(RichText::new("(24-hour clock)").small().color(theme.text_dim));
    });
    ui.add_space(8.0);

    ui.label("Gender:");
    egui::ComboBox::from_id_salt("gender_select")
        .selected_text(form.gender.as_str())
        .show_ui(ui, |ui| {
            for gender in Gender::ALL {
                ui.selectable_value(&mut form.gender, gender, gender.as_str());
            }
        });
    ui.add_space(8.0);

    ui.label("State:");
    ui.text_edit_singleline(&mut form.state);
    ui.add_space(8.0);

    ui.label("City:");
    ui.text_edit_singleline(&mut form.city);
    ui.add_space(16.0);

    ui.button("✨ Get Spiritual Insights").clicked()
}

fn draw_notice(ui: &mut egui::Ui, theme: &Theme, notice: &Notice) {
    match notice {
        Notice::Warning(text) => {
            theme.notice_frame(theme.warning).show(ui, |ui| {
                ui.label(RichText::new(format!("⚠ {text}")).color(theme.warning));
            });
        }
        Notice::Error(text) => {
            theme.notice_frame(theme.error).show(ui, |ui| {
                ui.label(RichText::new(format!("Error: {text}")).color(theme.error));
            });
        }
        Notice::Failure { detail } => {
            theme.notice_frame(theme.error).show(ui, |ui| {
                ui.label(
                    RichText::new("Something went wrong while contacting the insight service.")
                        .color(theme.error),
                );
                ui.label(RichText::new(detail).small().color(theme.text_dim));
            });
        }
    }
}

fn pad2(value: f64, _range: std::ops::RangeInclusive<usize>) -> String {
    format!("{:02}", value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 21).unwrap()
    }

    fn filled_form() -> ProfileForm {
        ProfileForm {
            name: "Asha Rao".to_string(),
            birth_year: 1993,
            birth_month: 7,
            birth_day: 4,
            birth_hour: 6,
            birth_minute: 5,
            gender: Gender::Female,
            state: "Kerala".to_string(),
            city: "Kochi".to_string(),
        }
    }

    #[test]
    fn filled_form_builds_a_profile() {
        let profile = filled_form().build_profile(today()).unwrap();
        assert_eq!(profile.name, "Asha Rao");
        assert_eq!(
            profile.date_of_birth,
            NaiveDate::from_ymd_opt(1993, 7, 4).unwrap()
        );
        assert_eq!(
            profile.time_of_birth,
            NaiveTime::from_hms_opt(6, 5, 0).unwrap()
        );
        assert_eq!(profile.gender, Gender::Female);
    }

    #[test]
    fn any_blank_text_field_blocks_submission() {
        let wipes: [fn(&mut ProfileForm); 3] = [
            |f| f.name.clear(),
            |f| f.state.clear(),
            |f| f.city.clear(),
        ];
        for wipe in wipes {
            let mut form = filled_form();
            wipe(&mut form);
            assert_eq!(
                form.build_profile(today()),
                Err("Please fill out all fields.".to_string())
            );
        }
    }

    #[test]
    fn whitespace_only_fields_count_as_blank() {
        let mut form = filled_form();
        form.city = "   ".to_string();
        assert_eq!(
            form.build_profile(today()),
            Err("Please fill out all fields.".to_string())
        );
    }

    #[test]
    fn imaginary_calendar_days_are_rejected() {
        let mut form = filled_form();
        form.birth_month = 2;
        form.birth_day = 30;
        assert!(form
            .build_profile(today())
            .unwrap_err()
            .contains("not a valid calendar date"));
    }

    #[test]
    fn future_birth_dates_are_rejected() {
        let mut form = filled_form();
        form.birth_year = today().year();
        form.birth_month = 12;
        form.birth_day = 31;
        assert!(form
            .build_profile(today())
            .unwrap_err()
            .contains("cannot be in the future"));
    }

    #[test]
    fn birth_dates_before_1900_are_rejected() {
        let mut form = filled_form();
        form.birth_year = 1899;
        assert!(form
            .build_profile(today())
            .unwrap_err()
            .contains("1900 or later"));
    }

    #[test]
    fn text_fields_are_trimmed_into_the_profile() {
        let mut form = filled_form();
        form.name = "  Asha Rao  ".to_string();
        form.state = " Kerala ".to_string();
        let profile = form.build_profile(today()).unwrap();
        assert_eq!(profile.name, "Asha Rao");
        assert_eq!(profile.state, "Kerala");
    }
}
