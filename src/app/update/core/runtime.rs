use super::super::super::messages::Message;
use super::super::super::state::{App, LoadedImage};
use super::super::Effect;
use anyhow::Context;
use iced::futures::future::join_all;
use iced::Task;
use tracing::{info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SplitText { text } => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        let result = client
                            .split_text(&text)
                            .await
                            .map_err(|err| err.to_string());
                        Message::TextSplit { text, result }
                    },
                    |message| message,
                )
            }
            Effect::GenerateFullAudio { text, voice, speed } => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        let result = client
                            .generate_full_audio(&text, &voice, speed)
                            .await
                            .map_err(|err| err.to_string());
                        Message::FullAudioReady { result }
                    },
                    |message| message,
                )
            }
            Effect::GenerateSingle {
                request_id,
                key,
                sentence_idx,
            } => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        let result = client
                            .generate_single_audio(&key.text, &key.voice, key.speed_percent)
                            .await
                            .map_err(|err| err.to_string());
                        Message::SingleAudioReady {
                            request_id,
                            key,
                            sentence_idx,
                            result,
                        }
                    },
                    |message| message,
                )
            }
            Effect::BatchGenerate {
                pending,
                already_cached,
                total,
            } => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        // Every uncached sentence is requested at once; a
                        // failed sentence is logged and skipped, never fatal.
                        let requests = pending.into_iter().map(|key| {
                            let client = client.clone();
                            async move {
                                match client
                                    .generate_single_audio(
                                        &key.text,
                                        &key.voice,
                                        key.speed_percent,
                                    )
                                    .await
                                {
                                    Ok(url) => Some((key, url)),
                                    Err(err) => {
                                        warn!(
                                            sentence = %key.text,
                                            "Batch synthesis failed: {err:#}"
                                        );
                                        None
                                    }
                                }
                            }
                        });
                        let generated: Vec<_> =
                            join_all(requests).await.into_iter().flatten().collect();
                        let succeeded = already_cached + generated.len();
                        info!(succeeded, total, "Batch pre-generation finished");
                        Message::BatchFinished {
                            generated,
                            succeeded,
                            total,
                        }
                    },
                    |message| message,
                )
            }
            Effect::LoadAudio { request_id, url } => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        let result = client
                            .fetch_audio(&url)
                            .await
                            .map_err(|err| err.to_string());
                        Message::AudioLoaded {
                            request_id,
                            url,
                            result,
                        }
                    },
                    |message| message,
                )
            }
            Effect::LoadImage { path } => Task::perform(
                async move {
                    let result = (|| -> anyhow::Result<LoadedImage> {
                        let bytes = std::fs::read(&path)
                            .with_context(|| format!("Reading {path}"))?;
                        let decoded =
                            image::load_from_memory(&bytes).context("Decoding image")?;
                        Ok(LoadedImage {
                            width: decoded.width(),
                            height: decoded.height(),
                            bytes,
                        })
                    })();
                    Message::ImageLoaded {
                        path,
                        result: result.map_err(|err| format!("{err:#}")),
                    }
                },
                |message| message,
            ),
            Effect::RunOcr { bytes, filename } => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        let result = client
                            .ocr_image(bytes, filename)
                            .await
                            .map_err(|err| err.to_string());
                        Message::OcrFinished { result }
                    },
                    |message| message,
                )
            }
            Effect::QuitSafely => {
                info!("Safe quit requested; stopping playback");
                self.stop_playback();
                iced::exit()
            }
        }
    }
}
