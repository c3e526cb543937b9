/// Highest value the synthetic progress counter can reach
pub const MAX_PERCENTAGE: u8 = 100;

/// Phase of the synthetic download, derived from the button state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadStatus {
    /// Not started, or stopped by the user
    Idle,
    /// Progress ticks are arriving
    Running,
    /// Progress reached 100%
    Completed,
}

/// Glyph shown inside the circular badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Download,
    Pause,
}

/// The two base values the whole button is drawn from.
///
/// Everything else (status, icon, label, colors, visibility) is recomputed
/// from these on every read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DownloadState {
    /// True while a session is live
    pub active: bool,
    /// Progress counter in 0..=100
    pub percentage: u8,
}

impl DownloadState {
    pub fn completed(&self) -> bool {
        self.percentage >= MAX_PERCENTAGE
    }

    pub fn status(&self) -> DownloadStatus {
        match (self.active, self.completed()) {
            (true, true) => DownloadStatus::Completed,
            (true, false) => DownloadStatus::Running,
            (false, _) => DownloadStatus::Idle,
        }
    }

    pub fn icon(&self) -> Icon {
        if self.active { Icon::Pause } else { Icon::Download }
    }

    pub fn label(&self) -> &'static str {
        if self.completed() { "Open" } else { "Download" }
    }

    /// Target sweep of the progress arc, in degrees.
    pub fn sweep_target(&self) -> f32 {
        if self.active {
            f32::from(self.percentage) / f32::from(MAX_PERCENTAGE) * 360.0
        } else {
            0.0
        }
    }

    /// Target rotation of the icon, in degrees.
    pub fn rotation_target(&self) -> f32 {
        if self.active { 360.0 } else { 0.0 }
    }

    pub fn icon_visible(&self) -> bool {
        !self.completed()
    }

    pub fn label_visible(&self) -> bool {
        !self.active || self.completed()
    }

    /// Arc and tip marker are only painted mid-session.
    pub fn progress_visible(&self) -> bool {
        self.active && !self.completed()
    }

    /// Applies one increment step, saturating at 100.
    pub fn advance(&mut self) {
        self.percentage = (self.percentage + 1).min(MAX_PERCENTAGE);
    }

    /// Flips `active` and restarts the counter. Returns the new `active`.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.percentage = 0;
        self.active
    }
}
