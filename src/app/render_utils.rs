use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::mesh::{MAX_RADIUS, MIN_RADIUS};

pub(super) const PRIMARY: Color32 = Color32::from_rgb(0x1F, 0xBF, 0xBF);
pub(super) const BACKGROUND: Color32 = Color32::from_rgb(0x01, 0x22, 0x3F);
pub(super) const SURFACE: Color32 = Color32::from_rgb(0x01, 0x2A, 0x4C);
pub(super) const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x92, 0xA8);

const GRID_STEP: f32 = 100.0;
const SONAR_RINGS: usize = 4;
const SONAR_PERIOD_SECS: f32 = 4.0;
const SONAR_STAGGER_SECS: f32 = 0.8;

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (color.a() as f32 * opacity.clamp(0.0, 1.0)) as u8,
    )
}

pub(super) fn peer_color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, offset: Vec2) {
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let origin = rect.center() + offset;
    let grid = Stroke::new(1.0, Color32::from_rgba_unmultiplied(31, 191, 191, 18));

    let mut x = rect.left() + (origin.x - rect.left()).rem_euclid(GRID_STEP);
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], grid);
        x += GRID_STEP;
    }

    let mut y = rect.top() + (origin.y - rect.top()).rem_euclid(GRID_STEP);
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], grid);
        y += GRID_STEP;
    }

    let band = Stroke::new(1.0, Color32::from_rgba_unmultiplied(31, 191, 191, 26));
    painter.circle_stroke(origin, MIN_RADIUS, band);
    painter.circle_stroke(origin, MAX_RADIUS, band);
}

pub(super) fn draw_sonar(painter: &Painter, center: Pos2, elapsed_secs: f32) {
    for ring in 0..SONAR_RINGS {
        let started = elapsed_secs - ring as f32 * SONAR_STAGGER_SECS;
        if started < 0.0 {
            continue;
        }

        let phase = (started / SONAR_PERIOD_SECS).fract();
        let radius = 50.0 + 50.0 * phase;
        let opacity = if phase < 0.3 {
            0.5 - (phase / 0.3) * 0.2
        } else {
            0.3 * (1.0 - (phase - 0.3) / 0.7)
        };
        painter.circle_stroke(center, radius, Stroke::new(2.0, with_opacity(PRIMARY, opacity)));
    }
}

pub(super) fn draw_avatar(painter: &Painter, center: Pos2, breath: f32) {
    let glow = 0.25 + 0.25 * breath;
    painter.circle_filled(center, 34.0, with_opacity(PRIMARY, glow));
    painter.circle_filled(center, 28.0, SURFACE);
    painter.circle_stroke(center, 28.0, Stroke::new(2.5, PRIMARY));
    painter.circle_filled(center, 6.0, PRIMARY);
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

pub(super) fn world_to_screen(rect: Rect, offset: Vec2, world: Vec2) -> Pos2 {
    rect.center() + offset + world
}

pub(super) fn marker_diameter(selected: bool, match_count: usize) -> f32 {
    if selected {
        18.0
    } else if match_count > 0 {
        12.0
    } else {
        10.0
    }
}

pub(super) fn marker_opacity(selected: bool, match_count: usize, signal: f32) -> f32 {
    if selected {
        0.95
    } else if match_count > 0 {
        0.5 + match_count as f32 * 0.15
    } else {
        0.3 + (signal / 100.0) * 0.6
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    #[test]
    fn marker_sizes_follow_selection_then_match() {
        assert_eq!(marker_diameter(true, 0), 18.0);
        assert_eq!(marker_diameter(false, 2), 12.0);
        assert_eq!(marker_diameter(false, 0), 10.0);
    }

    #[test]
    fn marker_opacity_scales_with_matches_and_signal() {
        assert!((marker_opacity(false, 3, 0.0) - 0.95).abs() < 1e-6);
        assert!((marker_opacity(false, 1, 0.0) - 0.65).abs() < 1e-6);
        assert!((marker_opacity(false, 0, 50.0) - 0.6).abs() < 1e-6);
        assert!((marker_opacity(true, 0, 0.0) - 0.95).abs() < 1e-6);
    }

    #[test]
    fn world_origin_follows_offset() {
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(400.0, 300.0));
        assert_eq!(
            world_to_screen(rect, vec2(-10.0, 5.0), vec2(30.0, 40.0)),
            Pos2::new(220.0, 195.0)
        );
    }

    #[test]
    fn blend_is_clamped() {
        assert_eq!(blend_color(Color32::BLACK, Color32::WHITE, 2.0), Color32::WHITE);
        assert_eq!(blend_color(Color32::BLACK, Color32::WHITE, -1.0), Color32::BLACK);
    }
}
