//! Shared game-loop utilities.

use std::time::{Duration, Instant};

/// Sleep away the remainder of the frame budget so every round runs at the
/// configured tick rate regardless of how fast the frame rendered.
pub fn limit_frame_rate(frame_start: Instant, frame_duration: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame_duration {
        std::thread::sleep(frame_duration - elapsed);
    }
}
