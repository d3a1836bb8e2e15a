//! Transcript module for yt-summarizer
//!
//! Fetches timed caption segments for a video and assembles them into a
//! single transcript string.

mod provider;
mod youtube;

pub use provider::{
    fetch_transcript, join_segments, TranscriptError, TranscriptProvider, TranscriptSegment,
};
pub use youtube::YouTubeTranscriptClient;
