use super::*;

/// Descriptive record of a music track, stamped into the token at mint.
/// Immutable afterwards; the shape is fixed and unknown fields are rejected
/// at the parameter boundary.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq, Clone)]
pub struct TrackMetadata {
    /// Track title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Music genre.
    pub genre: String,
    /// Track length in seconds, always above zero.
    pub duration_seconds: u64,
    /// Locator of the audio asset.
    pub audio_url: String,
    /// Locator of the cover art asset.
    pub cover_art: String,
    /// Creation time reported by the generation pipeline.
    pub created_at: Timestamp,
    /// Whether the track was produced by the AI generation pipeline.
    pub ai_generated: bool,
}

impl TrackMetadata {
    pub fn is_well_formed(&self) -> bool {
        self.duration_seconds > 0
    }
}
