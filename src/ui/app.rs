use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;

use crate::engine::engine::Engine;
use crate::engine::flow_client::{FlowClient, FlowConfig};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::birth_chart::BirthChartData;
use crate::model::profile::UserProfile;
use crate::model::reading::Reading;
use crate::ui::form_panel::{self, ProfileForm};
use crate::ui::landing_panel;
use crate::ui::results_panel;
use crate::ui::theme::Theme;

/* =========================
   Pages
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Form,
    Reading,
}

impl Default for Page {
    fn default() -> Self {
        Page::Landing
    }
}

/* =========================
   Tabs
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingTab {
    Dashboard,
    Horoscope,
    Recommendations,
    Wellness,
    Advisor,
}

impl ReadingTab {
    pub const ALL: [ReadingTab; 5] = [
        ReadingTab::Dashboard,
        ReadingTab::Horoscope,
        ReadingTab::Recommendations,
        ReadingTab::Wellness,
        ReadingTab::Advisor,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReadingTab::Dashboard => "Astrology Dashboard: Birth Chart & Insights",
            ReadingTab::Horoscope => "Horoscope Forecasts",
            ReadingTab::Recommendations => "Personalized Spiritual Recommendations",
            ReadingTab::Wellness => "Spiritual Wellness Guide",
            ReadingTab::Advisor => "Spiritual Advisor Recommendations",
        }
    }
}

impl Default for ReadingTab {
    fn default() -> Self {
        ReadingTab::Dashboard
    }
}

/* =========================
   Notices
   ========================= */

/// One-line message shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Input problems and harmless gaps.
    Warning(String),
    /// An error message the service sent back.
    Error(String),
    /// The request itself never produced a reply; detail is shown dimmed.
    Failure { detail: String },
}

/* =========================
   UI State
   ========================= */

/// Everything the reading page shows.
pub struct ReadingView {
    pub reading: Reading,
    pub chart: BirthChartData,
}

#[derive(Default)]
pub struct UiState {
    pub page: Page,
    pub form: ProfileForm,
    pub awaiting_reply: bool,
    pub notice: Option<Notice>,
    pub view: Option<ReadingView>,
    pub reading_tab: ReadingTab,
}

/* =========================
   App
   ========================= */

pub struct DashboardApp {
    pub ui: UiState,
    pub theme: Theme,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl DashboardApp {
    pub fn new(config: FlowConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, FlowClient::new(config));
            engine.run();
        });

        Self {
            ui: UiState::default(),
            theme: Theme::default(),
            cmd_tx,
            resp_rx,
        }
    }

    /// One request in flight at a time; the form stays locked until the
    /// engine answers.
    pub fn submit_profile(&mut self, profile: UserProfile) {
        if self
            .cmd_tx
            .send(EngineCommand::SubmitProfile(profile))
            .is_ok()
        {
            self.ui.awaiting_reply = true;
            self.ui.notice = None;
        } else {
            self.ui.notice = Some(Notice::Failure {
                detail: "the background worker is gone".to_string(),
            });
        }
    }

    pub fn start_new_reading(&mut self) {
        self.ui.view = None;
        self.ui.notice = None;
        self.ui.page = Page::Form;
    }

    fn drain_engine_responses(&mut self) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            self.ui.awaiting_reply = false;
            match resp {
                EngineResponse::ReadingReady(reading) => {
                    self.ui.view = Some(ReadingView {
                        reading,
                        chart: BirthChartData::placeholder(),
                    });
                    self.ui.reading_tab = ReadingTab::default();
                    self.ui.page = Page::Reading;
                }
                EngineResponse::EmptyReply => {
                    self.ui.notice = Some(Notice::Warning(
                        "No insights available from the API.".to_string(),
                    ));
                }
                EngineResponse::FlowRejected { message } => {
                    self.ui.notice = Some(Notice::Error(message));
                }
                EngineResponse::RequestFailed { detail } => {
                    self.ui.notice = Some(Notice::Failure { detail });
                }
            }
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        self.theme.apply(ctx);
        self.drain_engine_responses();

        if self.ui.awaiting_reply {
            // The worker cannot wake the window; poll until it answers.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        match self.ui.page {
            Page::Landing => landing_panel::draw_landing_panel(ctx, self),
            Page::Form => form_panel::draw_form_panel(ctx, self),
            Page::Reading => results_panel::draw_results_panel(ctx, self),
        }
    }
}
