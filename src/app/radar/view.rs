use std::f32::consts::TAU;

use eframe::egui::{
    self, Align2, Color32, CornerRadius, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2, vec2,
};

use crate::mesh::ViewMode;
use crate::util::{format_distance, pluralize};

use super::super::render_utils::{
    PRIMARY, SURFACE, TEXT_SECONDARY, blend_color, circle_visible, draw_avatar, draw_background,
    draw_sonar, marker_diameter, marker_opacity, with_opacity, world_to_screen,
};
use super::super::{RadarMarker, ViewModel};

const BREATH_PERIOD_SECS: f32 = 9.0;

impl ViewModel {
    fn collect_markers(&self, rect: Rect, offset: Vec2) -> Vec<RadarMarker> {
        let matching = self.session.view_mode() == ViewMode::Matching;
        let selected = self.session.selected();

        let mut markers = self
            .session
            .visible()
            .into_iter()
            .filter_map(|matched| {
                let peer = matched.peer;
                let is_selected = selected == Some(peer.id.as_str());
                let match_count = if matching { matched.match_count } else { 0 };
                let radius = marker_diameter(is_selected, match_count) / 2.0;
                let screen_pos = world_to_screen(rect, offset, peer.position());
                if !circle_visible(rect, screen_pos, radius + 4.0) {
                    return None;
                }

                Some(RadarMarker {
                    id: peer.id.clone(),
                    name: peer.name.clone(),
                    distance: peer.distance,
                    screen_pos,
                    radius,
                    match_count,
                    full_match: matching && matched.is_full_match(),
                    selected: is_selected,
                    highlighted: match_count > 0,
                    opacity: marker_opacity(is_selected, match_count, peer.signal),
                })
            })
            .collect::<Vec<_>>();

        markers.sort_by_key(|marker| marker.selected);
        markers
    }

    fn draw_marker(painter: &egui::Painter, marker: &RadarMarker, hovered: bool) {
        let base = if marker.highlighted {
            PRIMARY
        } else {
            Color32::WHITE
        };
        let base = if hovered {
            blend_color(base, Color32::from_rgb(255, 164, 101), 0.45)
        } else {
            base
        };
        let glow_radius = marker.radius
            + if marker.selected {
                8.0
            } else if marker.highlighted {
                5.0
            } else {
                3.0
            };
        let glow_opacity = if marker.selected {
            0.35
        } else if marker.highlighted {
            0.25
        } else {
            0.12
        };

        painter.circle_filled(marker.screen_pos, glow_radius, with_opacity(base, glow_opacity));
        painter.circle_filled(marker.screen_pos, marker.radius, with_opacity(base, marker.opacity));
        if marker.full_match {
            painter.circle_stroke(
                marker.screen_pos,
                marker.radius + 4.0,
                Stroke::new(1.5, with_opacity(PRIMARY, 0.9)),
            );
        }
        if hovered && !marker.selected {
            painter.circle_stroke(
                marker.screen_pos,
                marker.radius + 2.0,
                Stroke::new(1.2, with_opacity(Color32::WHITE, 0.8)),
            );
        }
    }

    fn draw_selected_label(painter: &egui::Painter, marker: &RadarMarker) {
        let anchor = marker.screen_pos + vec2(0.0, marker.radius + 8.0);
        let name = painter.layout_no_wrap(
            marker.name.clone(),
            FontId::proportional(13.0),
            Color32::WHITE,
        );
        let distance = painter.layout_no_wrap(
            format_distance(marker.distance),
            FontId::proportional(11.0),
            TEXT_SECONDARY,
        );
        let badge_text = (marker.match_count > 0)
            .then(|| format!("{} match", pluralize(marker.match_count, "value")));

        let width = name.size().x.max(distance.size().x) + 16.0;
        let height = name.size().y + distance.size().y + 10.0;
        let card = Rect::from_center_size(anchor + vec2(0.0, height / 2.0), vec2(width, height));
        painter.rect(
            card,
            CornerRadius::same(6),
            with_opacity(SURFACE, 0.92),
            Stroke::new(1.0, with_opacity(PRIMARY, 0.6)),
            StrokeKind::Inside,
        );
        painter.galley(
            card.center_top() + vec2(-name.size().x / 2.0, 4.0),
            name.clone(),
            Color32::WHITE,
        );
        painter.galley(
            card.center_top() + vec2(-distance.size().x / 2.0, 6.0 + name.size().y),
            distance,
            TEXT_SECONDARY,
        );

        if let Some(badge_text) = badge_text {
            let badge_center = card.center_bottom() + vec2(0.0, 12.0);
            let badge = painter.layout_no_wrap(badge_text, FontId::proportional(11.0), Color32::WHITE);
            let badge_rect = Rect::from_center_size(badge_center, badge.size() + vec2(12.0, 4.0));
            painter.rect_filled(badge_rect, CornerRadius::same(8), PRIMARY);
            painter.galley(badge_rect.min + vec2(6.0, 2.0), badge, Color32::WHITE);
        }
    }

    pub(in crate::app) fn draw_radar(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        self.handle_radar_drag(ui, &response);

        let offset = self.session.viewport().offset();
        draw_background(&painter, rect, offset);

        let markers = self.collect_markers(rect, offset);
        let hovered = Self::hovered_marker(ui, &markers);
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        for (index, marker) in markers.iter().enumerate() {
            Self::draw_marker(&painter, marker, hovered == Some(index));
        }
        if let Some(selected) = markers.iter().find(|marker| marker.selected) {
            Self::draw_selected_label(&painter, selected);
        }

        let focal = self.session.viewport().focal_point().unwrap_or(Vec2::ZERO);
        let avatar_center = rect.center() + focal;
        let breath = (self.elapsed_secs * TAU / BREATH_PERIOD_SECS).sin() * 0.5 + 0.5;
        draw_sonar(&painter, avatar_center, self.elapsed_secs);
        draw_avatar(&painter, avatar_center, breath);

        if self.session.visible().is_empty() {
            painter.text(
                rect.center() + vec2(0.0, 70.0),
                Align2::CENTER_TOP,
                "No peers share the selected values.",
                FontId::proportional(14.0),
                TEXT_SECONDARY,
            );
        }

        if let Some(marker) = hovered.and_then(|index| markers.get(index))
            && let Some(peer) = self.session.field().get(&marker.id)
        {
            let panel_text = format!(
                "{}  |  {}  |  signal {:.0}  |  {}",
                peer.name,
                format_distance(peer.distance),
                peer.signal,
                peer.values.join(", ")
            );
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                panel_text,
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
        }

        if self.session.view_mode() == ViewMode::Matching
            && let Some(seek) = self.session.viewport().seek()
        {
            painter.text(
                rect.center_bottom() - vec2(0.0, 12.0),
                Align2::CENTER_BOTTOM,
                format!(
                    "Seeking best match · waypoint {}/{}",
                    (seek.path().reached_count() + 1).min(seek.path().waypoints().len()),
                    seek.path().waypoints().len()
                ),
                FontId::proportional(12.0),
                PRIMARY,
            );
        }

        let tapped = if response.clicked_by(egui::PointerButton::Primary) {
            hovered.and_then(|index| markers.get(index).map(|marker| marker.id.clone()))
        } else {
            None
        };
        if let Some(id) = tapped {
            self.session.tap_peer(&id);
        }
    }
}
