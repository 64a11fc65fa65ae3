use eframe::egui::{self, PointerButton, Ui};

use super::super::{RadarMarker, ViewModel};

const MIN_HIT_RADIUS: f32 = 12.0;

impl ViewModel {
    pub(in crate::app) fn handle_radar_drag(&mut self, ui: &Ui, response: &egui::Response) {
        if response.drag_started_by(PointerButton::Primary) {
            self.session.drag_start();
        }

        if response.dragged_by(PointerButton::Primary) {
            let total = ui.input(|input| {
                input
                    .pointer
                    .press_origin()
                    .zip(input.pointer.interact_pos())
                    .map(|(origin, current)| current - origin)
            });
            if let Some(total) = total {
                self.session.drag_move(total);
            }
        }

        if response.drag_stopped_by(PointerButton::Primary) {
            // egui reports points per second; the viewport wants points per ms.
            let velocity = ui.input(|input| input.pointer.velocity()) / 1000.0;
            self.session.drag_release(velocity);
        }
    }

    pub(in crate::app) fn hovered_marker(ui: &Ui, markers: &[RadarMarker]) -> Option<usize> {
        let pointer_pos = ui.input(|input| input.pointer.hover_pos());
        pointer_pos.and_then(|pointer| {
            markers
                .iter()
                .enumerate()
                .filter_map(|(index, marker)| {
                    let distance = marker.screen_pos.distance(pointer);
                    if distance <= marker.radius.max(MIN_HIT_RADIUS) {
                        Some((index, distance))
                    } else {
                        None
                    }
                })
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(index, _)| index)
        })
    }
}
