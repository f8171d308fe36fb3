//! Check-in module - the entry model.
//!
//! An [`Entry`] records one momentary emotional state: a mood on a five-point
//! scale, how strongly it is felt, an optional journal note and emotion tags.

mod entry;
mod intensity;
mod mood;
mod note;
mod tag;

pub use entry::{Entry, EntryDraft};
pub use intensity::Intensity;
pub use mood::Mood;
pub use note::{Note, MAX_NOTE_CHARS};
pub use tag::{Tag, TagSet};
