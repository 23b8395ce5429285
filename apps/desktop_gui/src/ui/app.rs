use std::{path::PathBuf, time::Duration};

use client_core::{FormState, ResultSummary, ScrollTarget, Strings, View};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::FileSlot;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{action_for, Control, UiEvent},
    orchestration::perform_action,
    reducer::{reduce, status_line},
};

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);
const OK_COLOR: egui::Color32 = egui::Color32::from_rgb(67, 160, 71);

pub struct ScriptGenApp {
    form: FormState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    worker_status: String,
    backend_url: String,
}

impl ScriptGenApp {
    pub fn new(
        form: FormState,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        backend_url: String,
    ) -> Self {
        let worker_status = form.strings().worker_starting.to_string();
        Self {
            form,
            cmd_tx,
            ui_rx,
            worker_status,
            backend_url,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            reduce(&mut self.form, &mut self.worker_status, event);
        }
    }

    fn trigger(&mut self, control: Control) {
        let Some(action) = action_for(control) else {
            tracing::warn!(?control, "control has no binding");
            return;
        };
        let strings = self.form.strings();
        perform_action(action, &mut self.form, &self.cmd_tx, |slot| {
            pick_text_file(strings, slot)
        });
    }

    fn show_file_slot(&self, ui: &mut egui::Ui, slot: FileSlot, clicked: &mut Option<Control>) {
        let strings = self.form.strings();
        let has_file = self.form.file(slot).is_some();
        let stroke_color = if has_file {
            OK_COLOR
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke.color
        };
        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(1.0, stroke_color))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.strong(strings.slot_label(slot));
                ui.horizontal(|ui| {
                    let button = egui::Button::new(strings.choose_file);
                    if ui.add_enabled(!self.form.is_busy(), button).clicked() {
                        *clicked = Some(Control::picker(slot));
                    }
                    if let Some(info) = self.form.file_info(slot) {
                        ui.label(info);
                    }
                });
            });
    }

    fn show_result(
        &self,
        ui: &mut egui::Ui,
        summary: &ResultSummary,
        scroll: Option<ScrollTarget>,
        clicked: &mut Option<Control>,
    ) {
        let strings = self.form.strings();
        let response = egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.heading(strings.result_heading);
                egui::Grid::new("result_grid")
                    .num_columns(2)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(strings.session_id);
                        ui.monospace(summary.session_id.as_str());
                        ui.end_row();
                        ui.label(strings.script_length);
                        ui.label(summary.script_length.as_str());
                        ui.end_row();
                        ui.label(strings.input_tokens);
                        ui.label(summary.input_tokens.as_str());
                        ui.end_row();
                        if let Some(reasoning_length) = &summary.reasoning_length {
                            ui.label(strings.reasoning_length);
                            ui.label(reasoning_length.as_str());
                            ui.end_row();
                        }
                    });
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(strings.download_script).clicked() {
                        *clicked = Some(Control::DownloadScript);
                    }
                    if summary.shows_reasoning() && ui.button(strings.download_reasoning).clicked()
                    {
                        *clicked = Some(Control::DownloadReasoning);
                    }
                    if ui.button(strings.new_generation).clicked() {
                        *clicked = Some(Control::NewGeneration);
                    }
                });
            })
            .response;
        if scroll == Some(ScrollTarget::Result) {
            response.scroll_to_me(Some(egui::Align::Center));
        }
    }

    fn show_error(
        &self,
        ui: &mut egui::Ui,
        message: &str,
        scroll: Option<ScrollTarget>,
        clicked: &mut Option<Control>,
    ) {
        let strings = self.form.strings();
        let response = egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(1.0, ERROR_COLOR))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.colored_label(ERROR_COLOR, egui::RichText::new(strings.error_heading).strong());
                ui.label(message);
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button(strings.retry).clicked() {
                        *clicked = Some(Control::Retry);
                    }
                    if ui.button(strings.new_generation).clicked() {
                        *clicked = Some(Control::NewGeneration);
                    }
                });
            })
            .response;
        if scroll == Some(ScrollTarget::Error) {
            response.scroll_to_me(Some(egui::Align::Center));
        }
    }
}

fn pick_text_file(strings: &Strings, slot: FileSlot) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(strings.slot_label(slot))
        .add_filter(strings.text_filter, &["txt"])
        .pick_file()
}

impl eframe::App for ScriptGenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let scroll = self.form.take_scroll_request();
        let strings = self.form.strings();
        let mut clicked: Option<Control> = None;

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(status_line(&self.form, &self.worker_status));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.backend_url.as_str());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let heading = ui.heading(strings.title);
                    if scroll == Some(ScrollTarget::Top) {
                        heading.scroll_to_me(Some(egui::Align::Min));
                    }
                    ui.add_space(12.0);

                    for slot in FileSlot::ALL {
                        self.show_file_slot(ui, slot, &mut clicked);
                        ui.add_space(8.0);
                    }

                    let can_generate = self.form.can_generate() && !self.form.is_busy();
                    let generate = egui::Button::new(strings.generate).min_size(egui::vec2(160.0, 32.0));
                    if ui.add_enabled(can_generate, generate).clicked() {
                        clicked = Some(Control::Generate);
                    }
                    ui.add_space(12.0);

                    match self.form.view() {
                        View::Idle => {}
                        View::InProgress => {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(strings.progress);
                            });
                        }
                        View::Result(_) => {
                            if let Some(summary) = self.form.result_summary() {
                                self.show_result(ui, &summary, scroll, &mut clicked);
                            }
                        }
                        View::Error(message) => {
                            self.show_error(ui, message, scroll, &mut clicked);
                        }
                    }
                });
        });

        if let Some(control) = clicked {
            self.trigger(control);
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
