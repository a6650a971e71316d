//! Frame pacing for the terminal loop.

/// Skips redundant frames while the picture is not changing.
///
/// Moving frames always render. Static frames (start delay, reset pause)
/// render on any visible change and otherwise at most once per interval.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    /// `(time, fingerprint)` of the last rendered frame.
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Decide whether to render a frame with the given fingerprint now.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, prev)) if prev != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Forget the last frame so the next call always renders.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
