use crate::config::ViewerConfig;
use crate::fetch::FrameSource;
use crate::frame::StillFrame;
use crate::schedule::{is_due, next_deadline, validate_delta};
use log::info;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("PNG encode failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// UI-originated events the controller reacts to.
#[derive(Debug)]
pub enum ControlEvent {
    /// Poll tick; fires an auto-reload when one is due.
    Tick,
    Reload,
    SetAspectCorrection(bool),
    SetAutoReload(bool),
    ApplyInterval(String),
}

/// What the shell has to do after an event was handled.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Update {
    /// The displayed frame changed; re-upload the texture.
    pub display_changed: bool,

    /// The interval text was invalid; reset the input widget.
    pub interval_rejected: bool,
}

impl Update {
    fn display_changed() -> Self {
        Update {
            display_changed: true,
            ..Default::default()
        }
    }
}

/// Owns the current frame and the refresh/resize/timer state machine.
///
/// Time is passed in explicitly so transitions stay deterministic under
/// test; the shell hands in `Instant::now()`.
pub struct Controller<S: FrameSource> {
    cfg: ViewerConfig,
    source: S,
    frame: StillFrame,
    aspect_corrected: bool,
    auto_reload: bool,
    interval_secs: u32,
    deadline: Instant,
}

impl<S: FrameSource> Controller<S> {
    /// Fetches the first frame right away and arms the reload deadline.
    pub fn new(cfg: ViewerConfig, mut source: S, now: Instant) -> Self {
        let frame = source.fetch();
        let interval_secs = cfg.reload.default;
        let deadline = next_deadline(now, interval_secs);
        Self {
            cfg,
            source,
            frame,
            aspect_corrected: false,
            auto_reload: true,
            interval_secs,
            deadline,
        }
    }

    pub fn frame(&self) -> &StillFrame {
        &self.frame
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.cfg
    }

    pub fn interval_secs(&self) -> u32 {
        self.interval_secs
    }

    pub fn auto_reload(&self) -> bool {
        self.auto_reload
    }

    pub fn aspect_corrected(&self) -> bool {
        self.aspect_corrected
    }

    pub(crate) fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn handle(&mut self, event: ControlEvent, now: Instant) -> Update {
        match event {
            ControlEvent::Tick => {
                if self.auto_reload && is_due(now, self.deadline) {
                    self.reload(now)
                } else {
                    Update::default()
                }
            }
            ControlEvent::Reload => self.reload(now),
            ControlEvent::SetAspectCorrection(enabled) => {
                self.aspect_corrected = enabled;
                let target = self
                    .frame
                    .toggled_size(self.cfg.native_size, self.cfg.corrected_size);
                self.frame.resize(target);
                Update::display_changed()
            }
            ControlEvent::SetAutoReload(enabled) => {
                self.auto_reload = enabled;
                Update::default()
            }
            ControlEvent::ApplyInterval(raw) => {
                // The in-flight cycle completes on the old schedule; the new
                // interval only matters at the next reschedule.
                let (secs, valid) = validate_delta(&raw, &self.cfg.reload);
                self.interval_secs = secs;
                Update {
                    interval_rejected: !valid,
                    ..Default::default()
                }
            }
        }
    }

    fn reload(&mut self, now: Instant) -> Update {
        self.frame = self.source.fetch();
        if self.aspect_corrected {
            self.frame.resize(self.cfg.corrected_size);
        }
        if self.auto_reload {
            self.deadline = next_deadline(now, self.interval_secs);
        }
        Update::display_changed()
    }

    /// Write the current frame to `path` as PNG.
    pub fn save_to(&self, path: &Path) -> Result<(), SaveError> {
        let bytes = self.frame.png_bytes()?;
        std::fs::write(path, bytes)?;
        info!("saved still to {}", path.display());
        Ok(())
    }
}
