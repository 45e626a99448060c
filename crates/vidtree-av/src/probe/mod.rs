//! Media duration probing.
//!
//! A playlist run probes every track once. Probing must never stop the run,
//! so callers normally go through [`DurationProber::duration_or_unknown`],
//! which turns any failure into [`UNKNOWN_DURATION_MS`].

mod ffprobe;

pub use ffprobe::FfprobeDurationProber;

use crate::Result;
use std::path::Path;

/// Duration written for tracks whose probe failed.
pub const UNKNOWN_DURATION_MS: i64 = -1;

/// Something that can report the duration of a video file.
pub trait DurationProber {
    /// Human-readable name identifying this prober implementation.
    fn name(&self) -> &'static str;

    /// Duration of the file's first video stream in whole milliseconds.
    fn probe_duration_ms(&self, path: &Path) -> Result<i64>;

    /// Like [`DurationProber::probe_duration_ms`], but any failure yields
    /// [`UNKNOWN_DURATION_MS`]. Nothing is printed.
    fn duration_or_unknown(&self, path: &Path) -> i64 {
        match self.probe_duration_ms(path) {
            Ok(millis) => millis,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("{} could not probe {:?}: {}", self.name(), path, _e);
                UNKNOWN_DURATION_MS
            }
        }
    }
}

impl<P: DurationProber + ?Sized> DurationProber for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn probe_duration_ms(&self, path: &Path) -> Result<i64> {
        (**self).probe_duration_ms(path)
    }
}
