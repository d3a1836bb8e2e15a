//! YouTube caption client
//!
//! Resolves caption tracks through the innertube player API and downloads the
//! selected track in `json3` format.

use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::header::{ACCEPT_LANGUAGE, COOKIE};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::Settings;
use crate::transcript::provider::{TranscriptError, TranscriptProvider, TranscriptSegment};

const DEFAULT_YOUTUBE_ENDPOINT: &str = "https://www.youtube.com";
const INNERTUBE_CLIENT_NAME: &str = "ANDROID";
const INNERTUBE_CLIENT_VERSION: &str = "20.10.38";
const CONSENT_FORM_MARKER: &str = "action=\"https://consent.youtube.com/s\"";
const RECAPTCHA_MARKER: &str = "class=\"g-recaptcha\"";

/// Only English captions are requested.
const DEFAULT_LANGUAGES: &[&str] = &["en"];

static API_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""INNERTUBE_API_KEY":\s*"([a-zA-Z0-9_-]+)""#).expect("valid api key regex")
});

static CONSENT_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name="v" value="(.*?)""#).expect("valid consent regex"));

pub struct YouTubeTranscriptClient {
    http: Client,
    endpoint: String,
    languages: Vec<String>,
}

impl YouTubeTranscriptClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(timeout)
                .build()
                .context("Failed to build YouTube HTTP client")?,
            endpoint: DEFAULT_YOUTUBE_ENDPOINT.to_string(),
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = Self::new(Duration::from_secs(settings.transcript.timeout_secs))?;

        let endpoint = settings.transcript.endpoint.trim();
        if endpoint.is_empty() {
            Ok(client)
        } else {
            Ok(client.with_endpoint(endpoint))
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    async fn fetch_watch_html(&self, video_id: &str) -> Result<String, TranscriptError> {
        let html = self.get_watch_page(video_id, None).await?;
        if !html.contains(CONSENT_FORM_MARKER) {
            return Ok(html);
        }

        let consent = CONSENT_VALUE_RE
            .captures(&html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| TranscriptError::Parse("consent form without value".into()))?;

        tracing::debug!(video_id, "Accepting YouTube consent form");
        let html = self
            .get_watch_page(video_id, Some(format!("CONSENT=YES+{consent}")))
            .await?;

        if html.contains(CONSENT_FORM_MARKER) {
            return Err(TranscriptError::Parse("consent cookie was not accepted".into()));
        }

        Ok(html)
    }

    async fn get_watch_page(
        &self,
        video_id: &str,
        cookie: Option<String>,
    ) -> Result<String, TranscriptError> {
        let mut request = self
            .http
            .get(format!("{}/watch", self.endpoint))
            .query(&[("v", video_id)])
            .header(ACCEPT_LANGUAGE, "en-US");

        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }

        let resp = request.send().await?;
        if resp.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptError::TooManyRequests);
        }

        Ok(resp.error_for_status()?.text().await?)
    }

    async fn fetch_player_response(
        &self,
        video_id: &str,
        api_key: &str,
    ) -> Result<PlayerResponse, TranscriptError> {
        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": INNERTUBE_CLIENT_NAME,
                    "clientVersion": INNERTUBE_CLIENT_VERSION
                }
            },
            "videoId": video_id
        });

        let resp = self
            .http
            .post(format!("{}/youtubei/v1/player", self.endpoint))
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        if resp.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptError::TooManyRequests);
        }

        Ok(resp.error_for_status()?.json::<PlayerResponse>().await?)
    }

    async fn fetch_track(
        &self,
        video_id: &str,
        track: &CaptionTrack,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let url = track_url(video_id, track)?;
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_json3(&body)
    }
}

#[async_trait]
impl TranscriptProvider for YouTubeTranscriptClient {
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let html = self.fetch_watch_html(video_id).await?;
        let api_key = extract_api_key(&html)?;

        let player = self.fetch_player_response(video_id, &api_key).await?;
        if let Some(status) = &player.playability_status {
            check_playability(video_id, status)?;
        }

        let tracks = player
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .map(|r| r.caption_tracks)
            .unwrap_or_default();

        if tracks.is_empty() {
            return Err(TranscriptError::TranscriptsDisabled(video_id.to_string()));
        }

        let track = select_track(&tracks, &self.languages).ok_or_else(|| {
            TranscriptError::NoTranscriptFound {
                video_id: video_id.to_string(),
                languages: self.languages.clone(),
            }
        })?;

        tracing::debug!(
            video_id,
            language = %track.language_code,
            generated = track.is_generated(),
            "Selected caption track"
        );

        self.fetch_track(video_id, track).await
    }
}

fn extract_api_key(html: &str) -> Result<String, TranscriptError> {
    if let Some(key) = API_KEY_RE.captures(html).and_then(|c| c.get(1)) {
        return Ok(key.as_str().to_string());
    }

    if html.contains(RECAPTCHA_MARKER) {
        return Err(TranscriptError::TooManyRequests);
    }

    Err(TranscriptError::Parse("INNERTUBE_API_KEY not found in watch page".into()))
}

fn check_playability(video_id: &str, status: &PlayabilityStatus) -> Result<(), TranscriptError> {
    let reason = status.reason.clone().unwrap_or_default();

    match status.status.as_str() {
        "OK" => Ok(()),
        "ERROR" => Err(TranscriptError::VideoUnavailable(video_id.to_string())),
        "LOGIN_REQUIRED" if reason.contains("not a bot") => Err(TranscriptError::RequestBlocked),
        other if reason.is_empty() => Err(TranscriptError::Unplayable(other.to_string())),
        _ => Err(TranscriptError::Unplayable(reason)),
    }
}

/// Pick the first requested language, preferring manually created captions.
fn select_track<'a>(tracks: &'a [CaptionTrack], languages: &[String]) -> Option<&'a CaptionTrack> {
    languages.iter().find_map(|lang| {
        let mut candidates = tracks.iter().filter(|t| &t.language_code == lang);
        let manual = candidates.clone().find(|t| !t.is_generated());
        manual.or_else(|| candidates.find(|t| t.is_generated()))
    })
}

fn track_url(video_id: &str, track: &CaptionTrack) -> Result<String, TranscriptError> {
    if track.base_url.contains("&exp=xpe") {
        return Err(TranscriptError::PoTokenRequired(video_id.to_string()));
    }

    Ok(format!("{}&fmt=json3", track.base_url.replace("&fmt=srv3", "")))
}

fn parse_json3(body: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
    let timed: TimedText =
        serde_json::from_str(body).map_err(|e| TranscriptError::Parse(e.to_string()))?;

    let segments = timed
        .events
        .into_iter()
        .filter(|e| e.a_append.is_none())
        .filter_map(|e| {
            let text: String = e.segs.iter().map(|s| s.utf8.as_str()).collect();
            if text.trim().is_empty() {
                return None;
            }
            Some(TranscriptSegment {
                text,
                start: e.t_start_ms as f64 / 1000.0,
                duration: e.d_duration_ms as f64 / 1000.0,
            })
        })
        .collect();

    Ok(segments)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    #[serde(default)]
    playability_status: Option<PlayabilityStatus>,
    #[serde(default)]
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
struct PlayabilityStatus {
    status: String,
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    #[serde(default)]
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    #[serde(default)]
    kind: Option<String>,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

#[derive(Debug, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedTextEvent {
    #[serde(default)]
    t_start_ms: u64,
    #[serde(default)]
    d_duration_ms: u64,
    #[serde(default)]
    segs: Vec<TimedTextSeg>,
    #[serde(default)]
    a_append: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}
