use roster_business::Route;
use roster_states::Time;

use crate::{pages, state::State, widgets};

/// The roster application shell: top bar plus the routed page.
pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Read access for integration tests.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Write access for integration tests.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fold in whatever the commands finished since the last frame, then
        // stamp the frame time the pages read.
        self.state.ctx.sync();
        self.state.ctx.update::<Time>(|t| t.set(chrono::Utc::now()));

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.heading("Roster");
                ui.separator();
                egui::widgets::global_theme_preference_buttons(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::version_label(ui);
                });
            });
        });

        let route = self.state.ctx.state::<Route>().clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            match route {
                Route::List => pages::list_page(&mut self.state, ui),
                Route::Create => pages::form_page(&mut self.state, None, ui),
                Route::Edit(id) => pages::form_page(&mut self.state, Some(id), ui),
                Route::Detail(id) => pages::detail_page(&mut self.state, id, ui),
            };
        });
    }
}
