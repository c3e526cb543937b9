//! Time-based interpolation of animated values.
//!
//! Times are seconds on the frame clock (`egui::InputState::time`), so the
//! same tween can be driven by tests without a window.

use eframe::egui::Color32;

/// Mapping from linear progress in [0.0, 1.0] to eased progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out
    EaseInOutCubic,
}

impl Easing {
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A float that moves toward its target over a fixed duration.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    start: f64,
    duration: f64,
    easing: Easing,
}

impl Tween {
    pub fn new(value: f32, duration: f64, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration,
            easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Retargets the animation, continuing from wherever it currently is.
    pub fn animate_to(&mut self, target: f32, now: f64) {
        if target == self.to {
            return;
        }
        self.from = self.value(now);
        self.to = target;
        self.start = now;
    }

    /// Jumps straight to `value` with no animation.
    pub fn snap_to(&mut self, value: f32) {
        self.from = value;
        self.to = value;
    }

    pub fn value(&self, now: f64) -> f32 {
        let progress = self.progress(now);
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.from != self.to && self.progress(now) < 1.0
    }

    fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0) as f32
    }
}

/// A color that blends toward its target through a 0..1 [`Tween`].
#[derive(Clone, Debug)]
pub struct ColorTween {
    from: Color32,
    to: Color32,
    mix: Tween,
}

impl ColorTween {
    pub fn new(color: Color32, duration: f64, easing: Easing) -> Self {
        Self {
            from: color,
            to: color,
            mix: Tween::new(1.0, duration, easing),
        }
    }

    pub fn animate_to(&mut self, target: Color32, now: f64) {
        if target == self.to {
            return;
        }
        self.from = self.value(now);
        self.to = target;
        self.mix.snap_to(0.0);
        self.mix.animate_to(1.0, now);
    }

    pub fn value(&self, now: f64) -> Color32 {
        lerp_color(self.from, self.to, self.mix.value(now))
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.mix.is_animating(now)
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let channel = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        channel(a.r(), b.r()),
        channel(a.g(), b.g()),
        channel(a.b(), b.b()),
        channel(a.a(), b.a()),
    )
}
