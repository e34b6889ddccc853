use crate::config::ViewerConfig;
use crate::frame::StillFrame;
use image::DynamicImage;
use log::{debug, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),

    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Where frames come from. The controller only sees this seam, so tests can
/// swap the network out for a mock.
pub trait FrameSource {
    fn fetch(&mut self) -> StillFrame;
}

/// Fetches stills over HTTP with short connect/read timeouts.
///
/// Every failure class (timeout, non-200, decode error) collapses into a
/// placeholder frame; nothing propagates past `fetch`. The next scheduled
/// reload is the implicit retry.
pub struct HttpFrameSource {
    agent: ureq::Agent,
    url: String,
    placeholder_size: (u32, u32),
}

impl HttpFrameSource {
    pub fn new(cfg: &ViewerConfig) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_connect(Some(cfg.connect_timeout))
            .timeout_recv_response(Some(cfg.read_timeout))
            .timeout_recv_body(Some(cfg.read_timeout))
            .http_status_as_error(false)
            .build();
        let agent: ureq::Agent = config.into();

        Self {
            agent,
            url: cfg.feed_url.clone(),
            placeholder_size: cfg.native_size,
        }
    }

    fn try_fetch(&self) -> Result<DynamicImage, FetchError> {
        let mut response = self.agent.get(&self.url).call()?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::Status(status));
        }

        let body = response.body_mut().read_to_vec()?;
        let image = image::load_from_memory(&body)?;
        Ok(image)
    }
}

impl FrameSource for HttpFrameSource {
    fn fetch(&mut self) -> StillFrame {
        match self.try_fetch() {
            Ok(image) => {
                debug!("fetched still from {}", self.url);
                StillFrame::new(image)
            }
            Err(e) => {
                warn!("still fetch failed ({}), showing placeholder", e);
                StillFrame::placeholder(self.placeholder_size)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::PLACEHOLDER_COLOR;

    #[test]
    fn unreachable_feed_yields_placeholder() {
        // Discard port on loopback: connection is refused immediately
        let cfg = ViewerConfig {
            feed_url: "http://127.0.0.1:9/still.jpg".to_string(),
            ..Default::default()
        };
        let mut source = HttpFrameSource::new(&cfg);

        let frame = source.fetch();
        assert_eq!(frame.size(), cfg.native_size);

        let pixels = frame.rgba_bytes();
        assert!(pixels.chunks_exact(4).all(|px| px == PLACEHOLDER_COLOR));
    }
}
