//! AI enhancement
//!
//! Thin client for a locally hosted Ollama endpoint. The viewer checks the
//! service once at startup (`GET /api/tags`) and sends generation requests
//! (`POST /api/generate`, non-streaming) from background threads so the
//! event loop never blocks on the network. Results come back as
//! [`EnhanceEvent`]s on an mpsc channel. An unreachable endpoint is an
//! inline panel message, nothing more.

use crate::deck::Slide;
use crate::{Result, SlidecastError};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

/// The three enhancement requests the viewer offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhanceKind {
    /// Strengthen the current slide's content
    Content,
    /// Generate strategic insights across the deck
    Insights,
    /// Improve the slide's narrative flow
    Narrative,
}

impl EnhanceKind {
    /// Panel heading for this request kind
    pub fn label(&self) -> &'static str {
        match self {
            EnhanceKind::Content => "AI Enhancement Suggestions",
            EnhanceKind::Insights => "Strategic Insights",
            EnhanceKind::Narrative => "Improved Narrative",
        }
    }

    /// Build the generation prompt for a slide
    pub fn build_prompt(&self, slide: &Slide) -> String {
        let content = slide_content(slide);
        match self {
            EnhanceKind::Content => format!(
                "Enhance the following presentation slide content for a professional \
                 business presentation about Pulse Trading, a fintech platform for \
                 retail investors. Make it more compelling and data-driven:\n\n{}\n\n\
                 Provide specific improvements and additional insights that would \
                 strengthen this slide for a VC presentation.",
                content
            ),
            EnhanceKind::Insights => "Based on the Pulse Trading marketing plan presentation, \
                 generate 3-5 key strategic insights that would be valuable for investors \
                 and stakeholders. Focus on market opportunities, competitive advantages, \
                 and growth potential. Be specific and data-driven."
                .to_string(),
            EnhanceKind::Narrative => format!(
                "Improve the narrative flow and storytelling for this presentation slide \
                 about Pulse Trading. Make it more engaging and persuasive for a VC \
                 audience. Focus on creating a compelling story that connects with \
                 investors:\n\n{}\n\n\
                 Provide an improved narrative that maintains the key information while \
                 making it more compelling and memorable.",
                content
            ),
        }
    }
}

/// Flatten a slide to plain text for prompting
fn slide_content(slide: &Slide) -> String {
    let mut content = String::from(slide.title);
    for bullet in slide.bullets {
        content.push('\n');
        content.push_str(bullet);
    }
    content
}

/// Result of a background enhancement operation
#[derive(Debug)]
pub enum EnhanceEvent {
    /// Outcome of the startup availability check
    Availability(bool),
    /// A generation request finished
    Completed {
        kind: EnhanceKind,
        outcome: std::result::Result<String, String>,
    },
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Response from `GET /api/tags`
#[derive(Debug, Deserialize)]
struct TagsResponse {
    models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    name: String,
}

/// Client for the local model-serving endpoint
pub struct EnhanceClient {
    base_url: String,
    model: String,
    http: reqwest::blocking::Client,
    events: Sender<EnhanceEvent>,
}

impl EnhanceClient {
    pub fn new(
        base_url: &str,
        model: &str,
        timeout: Duration,
        events: Sender<EnhanceEvent>,
    ) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SlidecastError::Enhance(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            http,
            events,
        })
    }

    /// Probe the endpoint in the background
    pub fn check_availability(&self) {
        let http = self.http.clone();
        let url = format!("{}/api/tags", self.base_url);
        let events = self.events.clone();

        thread::spawn(move || {
            let available = match http.get(&url).send() {
                Ok(resp) if resp.status().is_success() => match resp.json::<TagsResponse>() {
                    Ok(tags) => {
                        info!(
                            "Enhancement endpoint reachable with {} models",
                            tags.models.len()
                        );
                        for model in &tags.models {
                            debug!("  model available: {}", model.name);
                        }
                        true
                    }
                    Err(e) => {
                        warn!("Enhancement endpoint returned malformed tags: {}", e);
                        false
                    }
                },
                Ok(resp) => {
                    warn!("Enhancement endpoint returned {}", resp.status());
                    false
                }
                Err(e) => {
                    info!("Enhancement endpoint not reachable: {}", e);
                    false
                }
            };
            let _ = events.send(EnhanceEvent::Availability(available));
        });
    }

    /// Send a generation request in the background
    pub fn request(&self, kind: EnhanceKind, slide: &Slide) {
        let http = self.http.clone();
        let url = format!("{}/api/generate", self.base_url);
        let model = self.model.clone();
        let prompt = kind.build_prompt(slide);
        let events = self.events.clone();

        debug!("Requesting {:?} enhancement for slide {}", kind, slide.index);
        thread::spawn(move || {
            let outcome = generate(&http, &url, &model, &prompt);
            let _ = events.send(EnhanceEvent::Completed { kind, outcome });
        });
    }
}

fn generate(
    http: &reqwest::blocking::Client,
    url: &str,
    model: &str,
    prompt: &str,
) -> std::result::Result<String, String> {
    let resp = http
        .post(url)
        .json(&GenerateRequest {
            model,
            prompt,
            stream: false,
        })
        .send()
        .map_err(|e| format!("Failed to reach enhancement endpoint: {}", e))?;

    if !resp.status().is_success() {
        return Err(format!("Enhancement endpoint error: {}", resp.status()));
    }

    let body: GenerateResponse = resp
        .json()
        .map_err(|e| format!("Failed to parse enhancement response: {}", e))?;

    Ok(body.response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn test_content_prompt_includes_slide_text() {
        let deck = Deck::builtin();
        let slide = deck.slide(2).unwrap();
        let prompt = EnhanceKind::Content.build_prompt(slide);
        assert!(prompt.contains(slide.title));
        assert!(prompt.contains(slide.bullets[0]));
        assert!(prompt.contains("VC presentation"));
    }

    #[test]
    fn test_insights_prompt_is_deck_level() {
        let deck = Deck::builtin();
        let slide = deck.slide(1).unwrap();
        let prompt = EnhanceKind::Insights.build_prompt(slide);
        assert!(prompt.contains("3-5 key strategic insights"));
        assert!(!prompt.contains(slide.bullets[0]));
    }

    #[test]
    fn test_generate_request_shape() {
        let req = GenerateRequest {
            model: "llama3.2",
            prompt: "hello",
            stream: false,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["model"], "llama3.2");
        assert_eq!(value["stream"], false);
    }

    #[test]
    fn test_labels() {
        assert_eq!(EnhanceKind::Content.label(), "AI Enhancement Suggestions");
        assert_eq!(EnhanceKind::Insights.label(), "Strategic Insights");
        assert_eq!(EnhanceKind::Narrative.label(), "Improved Narrative");
    }
}
