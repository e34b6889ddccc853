use std::time::Duration;

/// NASA TV public feed, channel 2 large stills.
pub const DEFAULT_FEED_URL: &str =
    "https://science.ksc.nasa.gov/shuttle/countdown/video/chan2large.jpg";

/// Bounds for the auto-reload interval, in whole seconds.
#[derive(Copy, Clone, Debug)]
pub struct ReloadBounds {
    pub min: u32,
    pub default: u32,
    pub max: u32,
}

impl Default for ReloadBounds {
    fn default() -> Self {
        Self {
            min: 45,
            default: 45,
            max: 300,
        }
    }
}

/// Immutable viewer settings, handed to the controller at startup.
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub feed_url: String,

    /// Frame size as broadcast by the feed.
    pub native_size: (u32, u32),

    /// Frame size with 16:9 aspect-ratio correction applied.
    pub corrected_size: (u32, u32),

    pub connect_timeout: Duration,
    pub read_timeout: Duration,

    pub reload: ReloadBounds,

    /// UI poll cadence; also how often the reload deadline is checked.
    pub poll_tick: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            native_size: (704, 480),
            corrected_size: (704, 396),
            connect_timeout: Duration::from_millis(500),
            read_timeout: Duration::from_millis(500),
            reload: ReloadBounds::default(),
            poll_tick: Duration::from_millis(100),
        }
    }
}
