use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use yt_summarizer::transcript::{TranscriptError, TranscriptProvider, TranscriptSegment};

#[derive(Clone)]
pub struct MockTranscriptProvider {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl MockTranscriptProvider {
    pub fn new(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptSegment::new(*text, i as f64, 1.0))
            .collect();

        Self {
            segments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(&[])
        }
    }
}

#[async_trait]
impl TranscriptProvider for MockTranscriptProvider {
    async fn fetch_segments(
        &self,
        video_id: &str,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if self.fail {
            return Err(TranscriptError::TranscriptsDisabled(video_id.to_string()));
        }
        Ok(self.segments.clone())
    }
}
