//! The components module contains the playback surfaces and the demo host
//! that owns their state.

mod containment;
mod host;
mod icons;
mod playback_view;
mod queue_list;
mod song_row;
mod trending_item;

#[cfg(test)]
mod test_support;

pub use containment::*;
pub use host::*;
pub use icons::*;
pub use playback_view::*;
pub use queue_list::*;
pub use song_row::*;
pub use trending_item::*;
