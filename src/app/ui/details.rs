use std::time::SystemTime;

use eframe::egui::{self, RichText, Ui};

use crate::mesh::{ViewMode, match_count};
use crate::util::{format_distance, format_since, pluralize};

use super::super::ViewModel;
use super::super::render_utils::{PRIMARY, TEXT_SECONDARY};

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        if self.conversation_peer.is_some() {
            self.draw_conversation(ui);
            return;
        }

        ui.heading("Peer Details");
        ui.add_space(6.0);

        let Some(peer) = self.session.selected_peer() else {
            ui.label("Click a peer on the radar to focus it.");
            return;
        };

        let peer_id = peer.id.clone();
        let shared = match_count(&peer.values, self.session.user_values().as_slice());
        let matching = self.session.view_mode() == ViewMode::Matching;

        ui.label(RichText::new(peer.name.as_str()).strong().size(18.0));
        if !peer.title.is_empty() {
            ui.label(format!("{} at {}", peer.title, peer.company));
        }
        ui.small(peer.id.as_str());
        ui.add_space(6.0);

        ui.label(format!("Distance: {}", format_distance(peer.distance)));
        ui.label(format!("Signal: {:.0}%", peer.signal));
        ui.label(format!(
            "Last seen: {}",
            format_since(peer.last_seen, SystemTime::now())
        ));
        ui.label(format!("Connection: {}", peer.connection_status.label()));

        ui.separator();
        ui.label(RichText::new("Values").strong());
        ui.horizontal_wrapped(|ui| {
            for value in &peer.values {
                let shared_value = self.session.user_values().contains(value);
                let text = if shared_value {
                    RichText::new(value.as_str()).color(PRIMARY).strong()
                } else {
                    RichText::new(value.as_str())
                };
                ui.label(text);
            }
        });
        if matching || shared > 0 {
            ui.label(
                RichText::new(format!("{} shared", pluralize(shared, "value"))).color(TEXT_SECONDARY),
            );
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Open chat").clicked() {
                self.session.open_peer(&peer_id);
            }
            if ui.button("Deselect").clicked() {
                self.session.clear_selection();
            }
        });
    }

    fn draw_conversation(&mut self, ui: &mut Ui) {
        let Some(peer) = self
            .conversation_peer
            .as_deref()
            .and_then(|id| self.session.field().get(id))
        else {
            self.conversation_peer = None;
            return;
        };

        let mut close = false;
        ui.horizontal(|ui| {
            if ui.button("← Back").clicked() {
                close = true;
            }
            ui.heading(peer.name.as_str());
        });
        ui.label(RichText::new(peer.connection_status.label()).color(TEXT_SECONDARY));
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("conversation_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| match &peer.conversation {
                Some(conversation) => {
                    ui.label(
                        RichText::new(format_since(
                            conversation.last_message_at,
                            SystemTime::now(),
                        ))
                        .small()
                        .color(TEXT_SECONDARY),
                    );
                    ui.label(conversation.last_message.as_str());
                }
                None => {
                    ui.label(
                        RichText::new(format!("Say hello to {}.", peer.name)).color(TEXT_SECONDARY),
                    );
                }
            });

        if close {
            self.conversation_peer = None;
        }
    }
}
