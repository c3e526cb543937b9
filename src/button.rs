//! The animated download button widget.
//!
//! Layout, in logical points:
//! ```text
//! |pad| icon badge (48) |label pad| label |label pad|pad|   height 58
//! ```
//! The icon badge and the label fade in and out; their visibility factors
//! also scale the space they take, so the pill grows and shrinks with them.

use eframe::egui::{
    self, Color32, CursorIcon, FontFamily, FontId, Rect, Response, Rounding, Sense, Shape, Stroke,
    Ui, Vec2, Widget, pos2, vec2,
};
use tracing::debug;

use crate::{
    config::Palette,
    downloader::DownloadController,
    geometry::ArcFrame,
    icons::paint_glyph,
    model::DownloadState,
    tween::{ColorTween, Easing, Tween},
};

const HEIGHT: f32 = 58.0;
const PADDING: f32 = 5.0;
const ICON_SIZE: f32 = 48.0;
const ICON_INSET: f32 = 12.0;
const LABEL_PADDING: f32 = 28.0;
const LABEL_PADDING_COMPLETED: f32 = 38.0;
const LABEL_FONT_SIZE: f32 = 20.0;
const BORDER_WIDTH: f32 = 1.0;
const ARC_WIDTH: f32 = 3.0;
const MARKER_DIAMETER: f32 = 10.0;
const GLYPH_WIDTH: f32 = 2.5;

pub struct DownloadButton {
    controller: DownloadController,
    palette: Palette,
    sweep: Tween,
    rotation: Tween,
    border: ColorTween,
    icon_visibility: Tween,
    label_visibility: Tween,
    label_family: FontFamily,
}

impl DownloadButton {
    pub fn new(controller: DownloadController, palette: Palette, animation_secs: f64) -> Self {
        let state = controller.state();
        let smooth = |value| Tween::new(value, animation_secs, Easing::EaseInOutCubic);
        let visible = |shown: bool| if shown { 1.0 } else { 0.0 };
        Self {
            sweep: Tween::new(state.sweep_target(), animation_secs, Easing::Linear),
            rotation: smooth(state.rotation_target()),
            border: ColorTween::new(palette.in_progress, animation_secs, Easing::EaseInOutCubic),
            icon_visibility: smooth(visible(state.icon_visible())),
            label_visibility: smooth(visible(state.label_visible())),
            label_family: FontFamily::Proportional,
            controller,
            palette,
        }
    }

    /// Draws the label in `family` instead of the proportional default.
    pub fn with_label_family(mut self, family: FontFamily) -> Self {
        self.label_family = family;
        self
    }

    pub fn state(&self) -> DownloadState {
        self.controller.state()
    }

    /// Pulls in progress ticks and retargets every animation. Call once per
    /// frame before painting.
    pub fn update(&mut self, now: f64) {
        let changed = self.controller.poll();
        self.retarget(now);
        if changed {
            debug!(
                percentage = self.state().percentage,
                sweep_target = self.sweep.target(),
                "progress"
            );
        }
    }

    /// True while any animated value is still moving or a session is live.
    pub fn needs_repaint(&self, now: f64) -> bool {
        self.state().progress_visible()
            || self.sweep.is_animating(now)
            || self.rotation.is_animating(now)
            || self.border.is_animating(now)
            || self.icon_visibility.is_animating(now)
            || self.label_visibility.is_animating(now)
    }

    fn click(&mut self, now: f64) {
        self.controller.toggle();
        if self.state().active {
            // A fresh session always draws its arc from the top.
            self.sweep.snap_to(0.0);
        }
        self.retarget(now);
    }

    fn retarget(&mut self, now: f64) {
        let state = self.state();
        let visible = |shown: bool| if shown { 1.0 } else { 0.0 };
        let border = if state.completed() {
            self.palette.complete
        } else {
            self.palette.in_progress
        };
        self.sweep.animate_to(state.sweep_target(), now);
        self.rotation.animate_to(state.rotation_target(), now);
        self.border.animate_to(border, now);
        self.icon_visibility.animate_to(visible(state.icon_visible()), now);
        self.label_visibility.animate_to(visible(state.label_visible()), now);
    }

    fn label_padding(&self) -> f32 {
        if self.state().completed() {
            LABEL_PADDING_COMPLETED
        } else {
            LABEL_PADDING
        }
    }

    /// Content-driven size for this frame.
    pub fn desired_size(&self, label_width: f32, now: f64) -> Vec2 {
        let icon = self.icon_visibility.value(now) * ICON_SIZE;
        let label = self.label_visibility.value(now) * (label_width + 2.0 * self.label_padding());
        vec2(2.0 * PADDING + icon + label, HEIGHT)
    }

    /// Width of the current label text in the label font.
    pub fn label_width(&self, ui: &Ui) -> f32 {
        ui.painter()
            .layout_no_wrap(self.state().label().to_owned(), self.label_font(), Color32::WHITE)
            .size()
            .x
    }

    fn label_font(&self) -> FontId {
        FontId::new(LABEL_FONT_SIZE, self.label_family.clone())
    }

    /// Left edge of the label text, scaled with the same visibility factors
    /// as [`Self::desired_size`] so the text stays inside the pill.
    fn label_x(&self, left: f32, now: f64) -> f32 {
        left + PADDING
            + self.icon_visibility.value(now) * ICON_SIZE
            + self.label_visibility.value(now) * self.label_padding()
    }

    fn paint(&self, ui: &Ui, rect: Rect, now: f64) {
        let state = self.state();
        let painter = ui.painter_at(rect.expand(MARKER_DIAMETER));

        painter.rect_stroke(
            rect,
            Rounding::same(rect.height() / 2.0),
            Stroke::new(BORDER_WIDTH, self.border.value(now)),
        );

        // Leftmost square of the pill; the whole pill while a session runs.
        let square = Rect::from_min_size(rect.min, Vec2::splat(rect.height()));

        if state.progress_visible() {
            let frame = ArcFrame::from_rect(square);
            let sweep = self.sweep.value(now);
            let points = frame.arc_points(sweep);
            if points.len() >= 2 {
                painter.add(Shape::line(points, Stroke::new(ARC_WIDTH, Color32::WHITE)));
            }
            painter.circle_filled(frame.tip(sweep), MARKER_DIAMETER / 2.0, Color32::WHITE);
        }

        let icon_alpha = self.icon_visibility.value(now);
        if icon_alpha > 0.0 {
            let badge = square.shrink(PADDING);
            painter.circle_filled(
                badge.center(),
                ICON_SIZE / 2.0,
                self.palette.in_progress.gamma_multiply(icon_alpha),
            );
            paint_glyph(
                &painter,
                state.icon(),
                badge.shrink(ICON_INSET),
                self.rotation.value(now),
                Stroke::new(GLYPH_WIDTH, Color32::WHITE.gamma_multiply(icon_alpha)),
            );
        }

        let label_alpha = self.label_visibility.value(now);
        if label_alpha > 0.0 {
            painter.text(
                pos2(self.label_x(rect.min.x, now), rect.center().y),
                egui::Align2::LEFT_CENTER,
                state.label(),
                self.label_font(),
                Color32::WHITE.gamma_multiply(label_alpha),
            );
        }
    }
}

impl Widget for &mut DownloadButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let now = ui.input(|i| i.time);
        let size = self.desired_size(self.label_width(ui), now);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let response = response.on_hover_cursor(CursorIcon::PointingHand);

        if response.clicked() {
            self.click(now);
        }
        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, now);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Cadence;
    use std::time::Duration;
    use tokio::runtime::Handle;

    const ANIMATION: f64 = 0.3;

    fn palette() -> Palette {
        Palette {
            in_progress: Color32::from_rgb(0x00, 0x77, 0xBE),
            complete: Color32::from_rgb(0x90, 0xEE, 0x90),
            background: Color32::from_rgb(0x40, 0x40, 0x40),
        }
    }

    fn button() -> DownloadButton {
        let controller = DownloadController::new(Handle::current(), Cadence::default());
        DownloadButton::new(controller, palette(), ANIMATION)
    }

    #[tokio::test(start_paused = true)]
    async fn idle_button_is_at_rest() {
        let mut b = button();
        b.update(0.0);
        assert!(!b.needs_repaint(0.0));
        assert_eq!(b.desired_size(100.0, 0.0), vec2(10.0 + 48.0 + 156.0, HEIGHT));
    }

    #[tokio::test(start_paused = true)]
    async fn running_button_shrinks_to_a_square() {
        let mut b = button();
        b.click(0.0);
        assert!(b.needs_repaint(0.0));
        assert_eq!(b.desired_size(100.0, 1.0), vec2(HEIGHT, HEIGHT));
        assert_eq!(b.rotation.value(1.0), 360.0);
    }

    #[tokio::test(start_paused = true)]
    async fn completion_switches_visuals() {
        let mut b = button();
        b.click(0.0);
        tokio::time::sleep(Duration::from_millis(20 * 101 + 10)).await;
        b.update(3.0);

        let s = b.state();
        assert_eq!(s.label(), "Open");
        assert!(!s.progress_visible());
        assert_eq!(b.border.value(3.0 + ANIMATION), palette().complete);
        assert_eq!(b.sweep.target(), 360.0);
        assert_eq!(b.desired_size(50.0, 3.0 + ANIMATION), vec2(10.0 + 50.0 + 76.0, HEIGHT));
    }

    #[tokio::test(start_paused = true)]
    async fn label_offset_shrinks_with_its_fade() {
        let mut b = button();
        assert_eq!(b.label_x(0.0, 0.0), PADDING + ICON_SIZE + LABEL_PADDING);

        b.click(0.0);
        let mid = ANIMATION / 2.0;
        let alpha = b.label_visibility.value(mid);
        assert!(alpha > 0.0 && alpha < 1.0);
        let x = b.label_x(0.0, mid);
        assert_eq!(x, PADDING + ICON_SIZE + alpha * LABEL_PADDING);
        // The padded label fits inside the shrinking pill.
        let width = 40.0;
        let right = x + alpha * (width + LABEL_PADDING) + PADDING;
        assert!(right <= b.desired_size(width, mid).x + 1e-3);

        b.update(1.0);
        assert_eq!(b.label_x(0.0, 1.0), PADDING + ICON_SIZE);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_label_family_is_used() {
        let b = button().with_label_family(FontFamily::Name("label".into()));
        assert_eq!(b.label_font().family, FontFamily::Name("label".into()));
        assert_eq!(b.label_font().size, LABEL_FONT_SIZE);
        assert_eq!(button().label_font(), FontId::proportional(LABEL_FONT_SIZE));
    }

    #[tokio::test(start_paused = true)]
    async fn sweep_follows_percentage() {
        let mut b = button();
        b.click(0.0);
        assert_eq!(b.sweep.value(0.0), 0.0);

        tokio::time::sleep(Duration::from_millis(20 * 25 + 10)).await;
        b.update(1.0);
        assert_eq!(b.state().percentage, 25);
        assert_eq!(b.sweep.target(), 90.0);
        assert_eq!(b.sweep.value(1.0 + ANIMATION), 90.0);
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_resets_sweep_target_and_border() {
        let mut b = button();
        b.click(0.0);
        tokio::time::sleep(Duration::from_millis(20 * 40 + 10)).await;
        b.update(1.0);
        b.click(2.0);

        assert!(!b.state().active);
        assert_eq!(b.sweep.target(), 0.0);
        assert_eq!(b.rotation.value(2.0 + ANIMATION), 0.0);
        assert_eq!(b.border.value(2.0 + ANIMATION), palette().in_progress);
    }
}
