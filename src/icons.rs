use eframe::egui::{Painter, Pos2, Rect, Stroke, pos2};

use crate::{geometry::rotate_about, model::Icon};

/// Line segments of each glyph inside a unit square, (0,0) top-left.
fn segments(icon: Icon) -> &'static [[(f32, f32); 2]] {
    match icon {
        Icon::Download => &[
            // shaft
            [(0.5, 0.1), (0.5, 0.65)],
            // arrow head
            [(0.25, 0.42), (0.5, 0.67)],
            [(0.75, 0.42), (0.5, 0.67)],
            // tray
            [(0.15, 0.75), (0.15, 0.9)],
            [(0.15, 0.9), (0.85, 0.9)],
            [(0.85, 0.9), (0.85, 0.75)],
        ],
        Icon::Pause => &[[(0.33, 0.15), (0.33, 0.85)], [(0.67, 0.15), (0.67, 0.85)]],
    }
}

/// Maps the glyph into `rect` and rotates it around the rect center.
pub fn glyph_lines(icon: Icon, rect: Rect, rotation: f32) -> Vec<[Pos2; 2]> {
    let center = rect.center();
    let place = |(x, y): (f32, f32)| {
        let p = pos2(rect.min.x + x * rect.width(), rect.min.y + y * rect.height());
        rotate_about(p, center, rotation)
    };
    segments(icon)
        .iter()
        .map(|[a, b]| [place(*a), place(*b)])
        .collect()
}

pub fn paint_glyph(painter: &Painter, icon: Icon, rect: Rect, rotation: f32, stroke: Stroke) {
    for line in glyph_lines(icon, rect, rotation) {
        painter.line_segment(line, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Vec2;

    #[test]
    fn glyphs_stay_inside_their_rect() {
        let rect = Rect::from_min_size(pos2(12.0, 12.0), Vec2::splat(24.0));
        for icon in [Icon::Download, Icon::Pause] {
            for [a, b] in glyph_lines(icon, rect, 0.0) {
                assert!(rect.contains(a) && rect.contains(b));
            }
        }
    }

    #[test]
    fn full_turn_matches_resting_glyph() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), Vec2::splat(24.0));
        let rest = glyph_lines(Icon::Pause, rect, 0.0);
        let turned = glyph_lines(Icon::Pause, rect, 360.0);
        for (r, t) in rest.iter().zip(&turned) {
            assert!((r[0] - t[0]).length() < 1e-3);
            assert!((r[1] - t[1]).length() < 1e-3);
        }
    }

    #[test]
    fn half_turn_flips_pause_bars() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), Vec2::splat(1.0));
        let turned = glyph_lines(Icon::Pause, rect, 180.0);
        assert!((turned[0][0] - pos2(0.67, 0.85)).length() < 1e-3);
    }
}
