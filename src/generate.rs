//! Draft generation through a chat-completions service

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::AppConfig;

pub const OPENROUTER_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

const REFERER: &str = "https://github.com/gongwen-rs/gongwen";
const APP_TITLE: &str = "gongwen";

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("generation timed out after {0:?}")]
    Timeout(Duration),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("no content in API response")]
    MissingContent,
    #[error("invalid API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GenerationError {
    /// Message shown to the person waiting for the draft
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Timeout(_) => "请求超时，请稍后重试".to_string(),
            GenerationError::Network(_) => "无法连接到API服务器，请检查网络连接".to_string(),
            GenerationError::Api { status, .. } => format!("生成文档失败: API请求失败: {status}"),
            GenerationError::MissingContent | GenerationError::Decode(_) => {
                "生成文档失败: 无法从API响应中提取内容".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, config: &AppConfig) -> Self {
        Self {
            prompt: prompt.into(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Run a generator with a wall-clock limit
pub async fn generate_document(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
    timeout: Duration,
) -> Result<String, GenerationError> {
    info!(model = %request.model, prompt_chars = request.prompt.chars().count(), "generating document");
    let content = tokio::time::timeout(timeout, generator.generate(request))
        .await
        .map_err(|_| GenerationError::Timeout(timeout))??;
    info!(content_chars = content.chars().count(), "document generated");
    Ok(content)
}

/// Generator for the configured service, or the mock one without an API key
pub fn generator_from_config(config: &AppConfig) -> Box<dyn TextGenerator> {
    match &config.api_key {
        Some(key) => Box::new(OpenRouterGenerator::new(key.clone())),
        None => {
            info!("no API key configured, using mock generator");
            Box::new(MockGenerator)
        }
    }
}

pub struct OpenRouterGenerator {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl OpenRouterGenerator {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, OPENROUTER_ENDPOINT.to_string())
    }

    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Serialize)]
struct ContentPart<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

fn chat_body(request: &GenerationRequest) -> ChatRequest<'_> {
    ChatRequest {
        model: &request.model,
        messages: vec![ChatMessage {
            role: "user",
            content: vec![ContentPart {
                kind: "text",
                text: &request.prompt,
            }],
        }],
        temperature: request.temperature,
    }
}

fn extract_content(body: &str) -> Result<String, GenerationError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or(GenerationError::MissingContent)
}

#[async_trait]
impl TextGenerator for OpenRouterGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", REFERER)
            .header("X-Title", APP_TITLE)
            .json(&chat_body(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "API response received");

        if !status.is_success() {
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }
        extract_content(&body)
    }
}

/// Echoes the prompt; used when no API key is configured
pub struct MockGenerator;

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        Ok(format!(
            "这是一个模拟响应，因为没有提供API密钥。\n\n请在设置中添加您的OpenRouter API密钥以获取真实的AI生成内容。\n\n您的提示词是：\n{}",
            request.prompt
        ))
    }
}
