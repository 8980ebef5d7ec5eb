//! HTTP client for the remote speech service.
//!
//! Every endpoint answers with a JSON envelope carrying a `success` flag;
//! failure envelopes carry a human-readable `error` that is surfaced to the
//! user verbatim. No retries are attempted anywhere.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Clone)]
pub struct SpeechClient {
    http: reqwest::Client,
    api_base: String,
    audio_base: String,
}

/// Result of the text segmentation endpoint.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub sentences: Vec<String>,
    pub count: usize,
}

/// Result of full-text synthesis: one audio reference plus the segmentation
/// the service used for it.
#[derive(Debug, Clone)]
pub struct FullAudio {
    pub audio_url: String,
    pub sentences: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SplitResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    sentences: Vec<String>,
    #[serde(default)]
    count: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct AudioResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    sentences: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct OcrResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl SpeechClient {
    pub fn new(api_base: &str, audio_base: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Building HTTP client")?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            audio_base: audio_base.trim_end_matches('/').to_string(),
        })
    }

    /// Segment `text` into an ordered list of sentences.
    pub async fn split_text(&self, text: &str) -> Result<SplitOutcome> {
        debug!(chars = text.len(), "Requesting text segmentation");
        let response: SplitResponse = self
            .http
            .post(format!("{}/split-text", self.api_base))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .context("Sending split-text request")?
            .json()
            .await
            .context("Decoding split-text response")?;

        if !response.success {
            return Err(anyhow!(envelope_error(
                response.error,
                "Text segmentation failed"
            )));
        }
        let count = response.count.unwrap_or(response.sentences.len());
        info!(count, "Text segmented");
        Ok(SplitOutcome {
            sentences: response.sentences,
            count,
        })
    }

    /// Synthesize one sentence; returns the audio reference URL.
    pub async fn generate_single_audio(
        &self,
        sentence: &str,
        voice: &str,
        speed: i32,
    ) -> Result<String> {
        debug!(voice, speed, chars = sentence.len(), "Requesting sentence synthesis");
        let response: AudioResponse = self
            .http
            .post(format!("{}/generate-single-audio", self.api_base))
            .json(&serde_json::json!({
                "sentence": sentence,
                "voice": voice,
                "speed": speed,
            }))
            .send()
            .await
            .context("Sending generate-single-audio request")?
            .json()
            .await
            .context("Decoding generate-single-audio response")?;

        if !response.success {
            return Err(anyhow!(envelope_error(
                response.error,
                "Single sentence synthesis failed"
            )));
        }
        let filename = response
            .filename
            .ok_or_else(|| anyhow!("Synthesis response carried no filename"))?;
        Ok(self.audio_url(&filename))
    }

    /// Synthesize the whole text as one audio clip.
    pub async fn generate_full_audio(
        &self,
        text: &str,
        voice: &str,
        speed: i32,
    ) -> Result<FullAudio> {
        debug!(voice, speed, chars = text.len(), "Requesting full-text synthesis");
        let response: AudioResponse = self
            .http
            .post(format!("{}/generate-full-audio", self.api_base))
            .json(&serde_json::json!({
                "text": text,
                "voice": voice,
                "speed": speed,
            }))
            .send()
            .await
            .context("Sending generate-full-audio request")?
            .json()
            .await
            .context("Decoding generate-full-audio response")?;

        if !response.success {
            return Err(anyhow!(envelope_error(
                response.error,
                "Full text synthesis failed"
            )));
        }
        let filename = response
            .filename
            .ok_or_else(|| anyhow!("Synthesis response carried no filename"))?;
        Ok(FullAudio {
            audio_url: self.audio_url(&filename),
            sentences: response.sentences,
        })
    }

    /// Run OCR over an uploaded image; returns the extracted text.
    pub async fn ocr_image(&self, image: Vec<u8>, filename: String) -> Result<String> {
        info!(bytes = image.len(), %filename, "Uploading image for OCR");
        let part = reqwest::multipart::Part::bytes(image).file_name(filename);
        let form = reqwest::multipart::Form::new().part("image", part);
        let response: OcrResponse = self
            .http
            .post(format!("{}/ocr-image", self.api_base))
            .multipart(form)
            .send()
            .await
            .context("Sending ocr-image request")?
            .json()
            .await
            .context("Decoding ocr-image response")?;

        if !response.success {
            return Err(anyhow!(envelope_error(response.error, "OCR failed")));
        }
        response
            .text
            .ok_or_else(|| anyhow!("OCR response carried no text"))
    }

    /// Download the raw audio bytes behind a reference URL.
    pub async fn fetch_audio(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "Fetching audio data");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Requesting audio data")?
            .error_for_status()
            .context("Audio request failed")?;
        let bytes = response.bytes().await.context("Downloading audio data")?;
        Ok(bytes.to_vec())
    }

    fn audio_url(&self, filename: &str) -> String {
        format!("{}/{}", self.audio_base, filename)
    }
}

fn envelope_error(error: Option<String>, fallback: &str) -> String {
    error
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SpeechClient {
        SpeechClient::new(
            "http://localhost:5000/api/",
            "http://localhost:5000/audio/",
            Duration::from_secs(5),
        )
        .expect("client should build")
    }

    #[test]
    fn audio_url_joins_without_double_slash() {
        assert_eq!(
            client().audio_url("out_42.wav"),
            "http://localhost:5000/audio/out_42.wav"
        );
    }

    #[test]
    fn split_envelope_parses_success() {
        let parsed: SplitResponse = serde_json::from_str(
            r#"{"success": true, "sentences": ["One.", "Two."], "count": 2}"#,
        )
        .expect("valid envelope");
        assert!(parsed.success);
        assert_eq!(parsed.sentences, vec!["One.", "Two."]);
        assert_eq!(parsed.count, Some(2));
    }

    #[test]
    fn audio_envelope_parses_failure_message() {
        let parsed: AudioResponse =
            serde_json::from_str(r#"{"success": false, "error": "voice not installed"}"#)
                .expect("valid envelope");
        assert!(!parsed.success);
        assert_eq!(
            envelope_error(parsed.error, "Single sentence synthesis failed"),
            "voice not installed"
        );
    }

    #[test]
    fn envelope_error_falls_back_when_blank() {
        assert_eq!(envelope_error(None, "fallback"), "fallback");
        assert_eq!(envelope_error(Some("  ".into()), "fallback"), "fallback");
    }

    #[test]
    fn ocr_envelope_parses_text() {
        let parsed: OcrResponse =
            serde_json::from_str(r#"{"success": true, "text": "你好世界"}"#).expect("valid envelope");
        assert!(parsed.success);
        assert_eq!(parsed.text.as_deref(), Some("你好世界"));
    }
}
