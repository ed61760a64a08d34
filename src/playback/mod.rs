//! Interaction state that sits under the playback surfaces: the scrub
//! gesture, volume clamping and the host-side play queue.

mod queue;
mod scrub;
mod volume;

pub use queue::*;
pub use scrub::*;
pub use volume::*;
