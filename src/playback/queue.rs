use crate::models::{QueueEntry, QueueEntryId, Track};

/// Ordered list of tracks waiting to play, owned by the playback host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayQueue {
    entries: Vec<QueueEntry>,
}

impl PlayQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the track and returns the identity of the new entry.
    pub fn push(&mut self, track: Track) -> QueueEntryId {
        let entry = QueueEntry::new(track);
        let id = entry.id.clone();
        self.entries.push(entry);
        id
    }

    /// Removes exactly the entry with `id`. No-op when it is not queued.
    pub fn remove(&mut self, id: &QueueEntryId) -> Option<QueueEntry> {
        let index = self.entries.iter().position(|entry| &entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Drops every entry at once and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn pop_front(&mut self) -> Option<QueueEntry> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    /// Replaces the queued snapshot of a track, e.g. after a like toggle.
    pub fn refresh_track(&mut self, track: &Track) {
        for entry in self.entries.iter_mut() {
            if entry.track.id == track.id {
                entry.track = track.clone();
            }
        }
    }
}
