use std::time::Duration;

use eframe::egui::{self, Align, Button, Context, Layout, RichText, Ui};

use crate::mesh::CORE_VALUES;
use crate::util::pluralize;

use super::super::ViewModel;
use super::super::render_utils::{PRIMARY, TEXT_SECONDARY};

const AMBIENT_REPAINT: Duration = Duration::from_millis(33);

impl ViewModel {
    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        let dt = ctx.input(|input| input.stable_dt).clamp(0.0, 0.1);
        self.elapsed_secs += dt;
        self.session.tick(dt);
        self.handle_intents();

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| self.draw_top_bar(ui));

        egui::TopBottomPanel::top("value_tags")
            .resizable(false)
            .show(ctx, |ui| self.draw_tag_chips(ui));

        egui::TopBottomPanel::bottom("stats_bar")
            .resizable(false)
            .show(ctx, |ui| self.draw_stats_bar(ui));

        egui::SidePanel::left("peer_list")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_peer_list(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_radar(ui));

        self.draw_value_modal(ctx);
        self.draw_tutorial(ctx);

        if self.session.is_animating() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(AMBIENT_REPAINT);
        }
    }

    fn draw_top_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("mesh-radar");
            ui.separator();
            let field = self.session.field();
            ui.label(format!("{} online", field.online_count()));
            ui.label(format!("{} unread", field.unread_total()));
            ui.separator();

            let values = self.session.user_values();
            if values.is_empty() {
                ui.label(RichText::new("No values chosen").color(TEXT_SECONDARY));
            } else {
                ui.label(format!("Your values: {}", values.as_slice().join(", ")));
            }
            if ui.button("Edit values").clicked() {
                self.session.request_value_selection();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let seen = self.session.preferences().has_seen_radar_tutorial;
                if ui.add_enabled(seen, Button::new("Replay tutorial")).clicked() {
                    self.session.reset_tutorial();
                }
            });
        });
    }

    fn draw_tag_chips(&mut self, ui: &mut Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Discover by Values").strong().color(PRIMARY));
            let selected_count = self.session.tag_filters().len();
            if selected_count > 0 {
                ui.label(
                    RichText::new(format!("{} selected", pluralize(selected_count, "value")))
                        .color(TEXT_SECONDARY),
                );
                if ui.small_button("✕ Clear").clicked() {
                    self.session.clear_tags();
                }
            }
        });

        egui::ScrollArea::horizontal()
            .id_salt("value_tag_scroll")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for value in CORE_VALUES {
                        let active = self.session.tag_filters().iter().any(|tag| tag == value);
                        if ui.selectable_label(active, value).clicked() {
                            self.session.toggle_tag(value);
                        }
                    }
                });
            });
        ui.add_space(4.0);
    }

    fn draw_stats_bar(&mut self, ui: &mut Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} {}",
                        pluralize(self.session.visible().len(), "peer"),
                        self.session.view_mode().label()
                    ))
                    .strong(),
                );
                ui.label(
                    RichText::new("Drag to explore • Click peers to focus").color(TEXT_SECONDARY),
                );
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let exploring = self.session.is_exploring();
                let label = if exploring { "Exit" } else { "Explore" };
                let button = Button::new(RichText::new(label).strong()).selected(exploring);
                if ui.add(button).clicked() {
                    self.session.toggle_exploring();
                }
            });
        });
        ui.add_space(4.0);
    }
}
