use std::time::SystemTime;

use eframe::egui::{self, Align, Color32, Layout, RichText, Sense, Ui, vec2};

use crate::mesh::{ConnectionStatus, Peer, match_count, search_peers};
use crate::util::{format_since, pluralize};

use super::super::render_utils::{PRIMARY, TEXT_SECONDARY, peer_color};
use super::super::{PeerTab, ViewModel};

const ROW_HEIGHT: f32 = 46.0;

enum RowAction {
    Focus(String),
    Open(String),
}

impl ViewModel {
    fn tab_peers(&self) -> Vec<&Peer> {
        let field = self.session.field();
        let peers = match self.peer_tab {
            PeerTab::Messages => field.inbox(),
            PeerTab::Connections => field.by_status(ConnectionStatus::Connected),
            PeerTab::Discover => field
                .peers()
                .iter()
                .filter(|peer| peer.connection_status != ConnectionStatus::Connected)
                .collect(),
        };
        search_peers(peers, &self.search)
    }

    fn draw_avatar_initial(ui: &mut Ui, peer: &Peer) {
        let (rect, _) = ui.allocate_exact_size(vec2(32.0, 32.0), Sense::hover());
        let painter = ui.painter_at(rect);
        painter.circle_filled(rect.center(), 16.0, peer_color(peer.color));
        let initial = peer.name.chars().next().unwrap_or('?').to_string();
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initial,
            egui::FontId::proportional(15.0),
            Color32::from_rgb(0x01, 0x22, 0x3F),
        );
    }

    fn draw_peer_row(&self, ui: &mut Ui, peer: &Peer, now: SystemTime) -> Option<RowAction> {
        let mut action = None;
        let selected = self.session.selected() == Some(peer.id.as_str());

        ui.horizontal(|ui| {
            ui.set_min_height(ROW_HEIGHT - 6.0);
            Self::draw_avatar_initial(ui, peer);

            ui.vertical(|ui| {
                let name = RichText::new(peer.name.as_str()).strong();
                let name = if selected { name.color(PRIMARY) } else { name };
                if ui.add(egui::Label::new(name).sense(Sense::click())).clicked() {
                    action = Some(RowAction::Focus(peer.id.clone()));
                }

                match (self.peer_tab, &peer.conversation) {
                    (PeerTab::Messages, Some(conversation)) => {
                        let preview = RichText::new(conversation.last_message.as_str());
                        let preview = if conversation.unread_count > 0 {
                            preview.strong()
                        } else {
                            preview.color(TEXT_SECONDARY)
                        };
                        ui.label(preview);
                    }
                    (PeerTab::Discover, _) => {
                        let shared =
                            match_count(&peer.values, self.session.user_values().as_slice());
                        ui.label(
                            RichText::new(format!(
                                "{} · {}",
                                peer.title,
                                pluralize(shared, "shared value")
                            ))
                            .color(TEXT_SECONDARY),
                        );
                    }
                    _ => {
                        ui.label(
                            RichText::new(format!("{} at {}", peer.title, peer.company))
                                .color(TEXT_SECONDARY),
                        );
                    }
                }
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let open_label = match peer.connection_status {
                    ConnectionStatus::Connected => "Chat",
                    ConnectionStatus::Pending => "Pending",
                    ConnectionStatus::New => "Connect",
                };
                if ui.small_button(open_label).clicked() {
                    action = Some(RowAction::Open(peer.id.clone()));
                }

                if let Some(conversation) = &peer.conversation {
                    if conversation.unread_count > 0 {
                        ui.label(
                            RichText::new(conversation.unread_count.to_string())
                                .strong()
                                .color(PRIMARY),
                        );
                    }
                    ui.label(
                        RichText::new(format_since(conversation.last_message_at, now))
                            .small()
                            .color(TEXT_SECONDARY),
                    );
                }
            });
        });

        action
    }

    pub(in crate::app) fn draw_peer_list(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for tab in PeerTab::ALL {
                if ui.selectable_label(self.peer_tab == tab, tab.label()).clicked() {
                    self.peer_tab = tab;
                }
            }
        });
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(&mut self.search)
                .hint_text("Search name, title or company")
                .desired_width(f32::INFINITY),
        );
        ui.separator();

        let now = SystemTime::now();
        let mut pending = None;
        {
            let peers = self.tab_peers();
            if peers.is_empty() {
                ui.label(RichText::new("Nobody here yet.").color(TEXT_SECONDARY));
            }

            egui::ScrollArea::vertical()
                .id_salt("peer_list_scroll")
                .auto_shrink([false, false])
                .show_rows(ui, ROW_HEIGHT, peers.len(), |ui, row_range| {
                    for index in row_range {
                        let Some(peer) = peers.get(index) else {
                            continue;
                        };
                        if let Some(action) = self.draw_peer_row(ui, peer, now) {
                            pending = Some(action);
                        }
                        ui.separator();
                    }
                });
        }

        match pending {
            Some(RowAction::Focus(id)) => self.session.tap_peer(&id),
            Some(RowAction::Open(id)) => self.session.open_peer(&id),
            None => {}
        }
    }
}
