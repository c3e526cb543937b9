//! Arc math for the progress overlay. Angles are in degrees, screen
//! coordinates (y grows downward), so positive sweeps run clockwise.

use eframe::egui::{Pos2, Rect, Vec2, pos2};

/// Where every progress arc begins: 12 o'clock.
pub const START_ANGLE: f32 = -90.0;

/// Center and radius of the circle the progress arc follows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcFrame {
    pub center: Pos2,
    pub radius: f32,
}

impl ArcFrame {
    /// Circle centered in `rect` with a radius of half its width.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            center: rect.center(),
            radius: rect.width() / 2.0,
        }
    }

    /// Point on the circle `angle` degrees from the positive x axis.
    pub fn point_at(&self, angle: f32) -> Pos2 {
        let beta = angle.to_radians();
        self.center + self.radius * Vec2::new(beta.cos(), beta.sin())
    }

    /// Tip of an arc that started at the top and swept `sweep` degrees.
    pub fn tip(&self, sweep: f32) -> Pos2 {
        self.point_at(sweep + START_ANGLE)
    }

    /// Polyline approximating the arc from the top through `sweep` degrees.
    /// Empty when there is nothing to draw.
    pub fn arc_points(&self, sweep: f32) -> Vec<Pos2> {
        let sweep = sweep.clamp(0.0, 360.0);
        if sweep <= 0.0 {
            return Vec::new();
        }
        // Roughly one segment per 4 degrees keeps the curve smooth at button sizes.
        let segments = (sweep / 4.0).ceil().max(1.0) as usize;
        (0..=segments)
            .map(|i| self.point_at(START_ANGLE + sweep * i as f32 / segments as f32))
            .collect()
    }
}

/// Rotates `point` around `pivot` by `degrees` (clockwise on screen).
pub fn rotate_about(point: Pos2, pivot: Pos2, degrees: f32) -> Pos2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = point - pivot;
    pos2(
        pivot.x + d.x * cos - d.y * sin,
        pivot.y + d.x * sin + d.y * cos,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn frame() -> ArcFrame {
        ArcFrame::from_rect(Rect::from_min_size(pos2(10.0, 20.0), Vec2::splat(58.0)))
    }

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn frame_is_centered_with_half_width_radius() {
        let f = frame();
        assert_eq!(f.center, pos2(39.0, 49.0));
        assert_eq!(f.radius, 29.0);
    }

    #[test]
    fn tip_starts_at_twelve_o_clock() {
        let f = frame();
        assert!(close(f.tip(0.0), pos2(39.0, 20.0)));
    }

    #[test]
    fn tip_moves_clockwise() {
        let f = frame();
        assert!(close(f.tip(90.0), pos2(68.0, 49.0)));
        assert!(close(f.tip(180.0), pos2(39.0, 78.0)));
        assert!(close(f.tip(270.0), pos2(10.0, 49.0)));
        assert!(close(f.tip(360.0), f.tip(0.0)));
    }

    #[test]
    fn arc_points_span_start_to_tip() {
        let f = frame();
        assert!(f.arc_points(0.0).is_empty());

        let points = f.arc_points(135.0);
        assert!(points.len() > 2);
        assert!(close(points[0], f.tip(0.0)));
        assert!(close(*points.last().unwrap(), f.tip(135.0)));
        for p in &points {
            assert!(((*p - f.center).length() - f.radius).abs() < EPS);
        }
    }

    #[test]
    fn rotation_is_clockwise_on_screen() {
        let pivot = pos2(0.0, 0.0);
        assert!(close(rotate_about(pos2(1.0, 0.0), pivot, 90.0), pos2(0.0, 1.0)));
        assert!(close(rotate_about(pos2(3.0, 2.0), pos2(2.0, 2.0), 360.0), pos2(3.0, 2.0)));
    }
}
