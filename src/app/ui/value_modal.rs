use eframe::egui::{self, Context, Id, RichText, vec2};

use crate::mesh::{CORE_VALUES, MAX_USER_VALUES};

use super::super::ViewModel;
use super::super::render_utils::TEXT_SECONDARY;

impl ViewModel {
    pub(in crate::app) fn draw_value_modal(&mut self, ctx: &Context) {
        let Some(draft) = self.value_draft.as_mut() else {
            return;
        };

        let mut confirmed = None;
        let mut cancelled = false;

        let modal = egui::Modal::new(Id::new("value_selection")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Choose Your Values");
            ui.label(
                RichText::new(format!(
                    "Select exactly {MAX_USER_VALUES} values that matter most to you."
                ))
                .color(TEXT_SECONDARY),
            );
            ui.add_space(8.0);

            egui::Grid::new("value_grid")
                .num_columns(4)
                .spacing(vec2(6.0, 6.0))
                .show(ui, |ui| {
                    for (index, value) in CORE_VALUES.iter().enumerate() {
                        let chosen = draft.contains(value);
                        let blocked = !chosen && draft.is_complete();
                        let chip = ui.add_enabled(
                            !blocked,
                            egui::Button::new(*value)
                                .selected(chosen)
                                .min_size(vec2(96.0, 28.0)),
                        );
                        if chip.clicked() {
                            draft.toggle(value);
                        }
                        if index % 4 == 3 {
                            ui.end_row();
                        }
                    }
                });

            ui.add_space(8.0);
            let status = if draft.is_complete() {
                "All set.".to_owned()
            } else {
                format!("{} selected, {} to go", draft.len(), draft.remaining())
            };
            ui.label(RichText::new(status).color(TEXT_SECONDARY));

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let confirm = ui.add_enabled(draft.is_complete(), egui::Button::new("Confirm"));
                if confirm.clicked() {
                    confirmed = draft.confirm();
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

        if modal.should_close() {
            cancelled = true;
        }

        if let Some(values) = confirmed {
            self.session.confirm_values(values);
            self.value_draft = None;
        } else if cancelled {
            self.value_draft = None;
        }
    }
}
