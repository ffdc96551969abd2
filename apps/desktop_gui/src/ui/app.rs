use client_core::{Completion, LoadTicket, UserListController};
use crossbeam_channel::{Receiver, Sender};
use shared::error::FetchError;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::cards::{show_card_grid, show_status};

pub struct UserCardsApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    controller: UserListController,
    endpoint_label: String,
    worker_ready: bool,
    // Set once the first frame has triggered the automatic load.
    activated: bool,
}

impl UserCardsApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        endpoint_label: impl Into<String>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            controller: UserListController::new(),
            endpoint_label: endpoint_label.into(),
            worker_ready: false,
            activated: false,
        }
    }

    pub fn controller(&self) -> &UserListController {
        &self.controller
    }

    /// Triggers the initial load the first time the view is shown.
    fn activate(&mut self) {
        if !self.activated {
            self.activated = true;
            self.request_load();
        }
    }

    /// Starts a load, replacing any load still in flight.
    pub fn request_load(&mut self) {
        let ticket = self.controller.begin_load();
        self.dispatch_load(ticket);
    }

    /// Reload control; same cycle as the initial load.
    pub fn reload(&mut self) {
        let ticket = self.controller.retry();
        self.dispatch_load(ticket);
    }

    fn dispatch_load(&mut self, ticket: LoadTicket) {
        let cmd = BackendCommand::LoadUsers { ticket };
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.controller.complete(ticket, Err(err));
        }
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::WorkerReady => {
                    self.worker_ready = true;
                    tracing::debug!("backend worker ready");
                }
                UiEvent::WorkerFailed(reason) => {
                    self.worker_ready = false;
                    tracing::error!("backend worker unavailable: {reason}");
                    if let Some(ticket) = self.controller.in_flight() {
                        self.controller
                            .complete(ticket, Err(FetchError::transport(reason)));
                    }
                }
                UiEvent::UsersLoaded { ticket, result } => {
                    if self.controller.complete(ticket, result) == Completion::Stale {
                        tracing::debug!(ticket = ticket.0, "ignored superseded load result");
                    }
                }
            }
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("User Directory");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Reload Users").clicked() {
                    tracing::info!("reload requested from ui");
                    self.reload();
                }
                ui.label(
                    egui::RichText::new(&self.endpoint_label)
                        .small()
                        .weak(),
                );
            });
        });
    }
}

impl eframe::App for UserCardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.activate();
        self.process_ui_events();

        let view = self.controller.view();

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| self.show_header(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            show_status(ui, &view.status);
            ui.add_space(8.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| show_card_grid(ui, &view.cards));
        });

        if self.controller.is_loading() || !self.worker_ready {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
