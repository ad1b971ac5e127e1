//! # Messaging
//!
//! The request/response contract every host (content script, background
//! handler, editor page, CLI) uses to reach the converter.
//!
//! Requests are JSON objects tagged by an `action` field; responses are
//! untagged objects whose shape depends on the request. A single
//! [`MessageHandler`] owns the pending-content slot and current settings,
//! so nothing here lives in global state.

pub mod detect;
pub mod pending;
pub mod settings;

use serde::{Deserialize, Serialize};

use crate::parsing::Converter;

pub use detect::is_markdown_source;
pub use pending::{DEFAULT_FILE_NAME, PendingContent, PendingSlot};
pub use settings::Settings;

/// Error message for requests whose `action` is not recognised.
pub const UNKNOWN_ACTION: &str = "Unknown action";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    ParseMarkdown {
        #[serde(default)]
        content: String,
    },
    #[serde(rename_all = "camelCase")]
    OpenEditor {
        #[serde(default)]
        content: String,
        #[serde(default)]
        source_url: String,
        #[serde(default)]
        file_name: Option<String>,
        #[serde(default)]
        start_in_preview: bool,
    },
    GetMarkdownContent,
    SaveSettings {
        settings: Settings,
    },
    GetSettings,
}

impl Request {
    /// The wire name of this request's action.
    pub fn action(&self) -> &'static str {
        match self {
            Request::ParseMarkdown { .. } => "parseMarkdown",
            Request::OpenEditor { .. } => "openEditor",
            Request::GetMarkdownContent => "getMarkdownContent",
            Request::SaveSettings { .. } => "saveSettings",
            Request::GetSettings => "getSettings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Parsed { success: bool, html: String },
    Failed { success: bool, error: String },
    Content(PendingContent),
    Settings { settings: Settings },
    Ack { success: bool },
}

impl Response {
    pub fn parsed(html: String) -> Self {
        Response::Parsed {
            success: true,
            html,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Response::Failed {
            success: false,
            error: error.into(),
        }
    }

    pub fn ack() -> Self {
        Response::Ack { success: true }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Serves requests against one converter, one pending slot and one
/// settings value.
#[derive(Debug, Default)]
pub struct MessageHandler {
    converter: Converter,
    pending: PendingSlot,
    settings: Settings,
}

impl MessageHandler {
    pub fn new(converter: Converter) -> Self {
        Self {
            converter,
            ..Self::default()
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn handle(&mut self, request: Request) -> Response {
        log::debug!("Handling {} request", request.action());

        match request {
            Request::ParseMarkdown { content } => match self.converter.convert(&content) {
                Ok(html) => Response::parsed(html),
                Err(e) => {
                    log::error!("Error parsing markdown: {e}");
                    Response::failure(e.to_string())
                }
            },
            Request::OpenEditor {
                content,
                source_url,
                file_name,
                start_in_preview,
            } => {
                let replaced = self.pending.put(PendingContent {
                    content,
                    source_url,
                    file_name: file_name
                        .filter(|name| !name.is_empty())
                        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
                    start_in_preview,
                });
                if replaced.is_some() {
                    log::warn!("Discarding pending content that was never picked up");
                }
                Response::ack()
            }
            Request::GetMarkdownContent => {
                Response::Content(self.pending.take().unwrap_or_default())
            }
            Request::SaveSettings { settings } => {
                self.settings = settings;
                Response::ack()
            }
            Request::GetSettings => Response::Settings {
                settings: self.settings.clone(),
            },
        }
    }

    /// Decodes a JSON request, handles it and encodes the response.
    ///
    /// Undecodable requests are answered with a failure response; only
    /// encoding the response can fail.
    pub fn handle_json(&mut self, raw: &str) -> Result<String, MessageError> {
        let response = match serde_json::from_str::<Request>(raw) {
            Ok(request) => self.handle(request),
            Err(e) => {
                log::warn!("Rejecting undecodable request: {e}");
                Self::undecodable(raw, &e)
            }
        };
        Ok(serde_json::to_string(&response)?)
    }

    fn undecodable(raw: &str, err: &serde_json::Error) -> Response {
        let action = serde_json::from_str::<serde_json::Value>(raw)
            .ok()
            .and_then(|v| v.get("action").and_then(|a| a.as_str()).map(str::to_owned));

        match action {
            Some(action) if !Self::is_known_action(&action) => Response::failure(UNKNOWN_ACTION),
            _ => Response::failure(err.to_string()),
        }
    }

    fn is_known_action(action: &str) -> bool {
        [
            "parseMarkdown",
            "openEditor",
            "getMarkdownContent",
            "saveSettings",
            "getSettings",
        ]
        .contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn roundtrip(handler: &mut MessageHandler, request: Value) -> Value {
        let raw = handler.handle_json(&request.to_string()).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn parse_markdown_success() {
        let mut handler = MessageHandler::default();
        let response = roundtrip(
            &mut handler,
            json!({ "action": "parseMarkdown", "content": "# Hi" }),
        );
        assert_eq!(response, json!({ "success": true, "html": "<h1>Hi</h1>" }));
    }

    #[test]
    fn parse_markdown_without_content_is_empty() {
        let mut handler = MessageHandler::default();
        let response = roundtrip(&mut handler, json!({ "action": "parseMarkdown" }));
        assert_eq!(response, json!({ "success": true, "html": "" }));
    }

    #[test]
    fn parse_markdown_over_limit_fails() {
        let mut handler = MessageHandler::new(Converter::with_max_input_bytes(3));
        let response = handler.handle(Request::ParseMarkdown {
            content: "abcd".to_string(),
        });
        assert_eq!(
            response,
            Response::failure("Input of 4 bytes exceeds the 3 byte limit")
        );
    }

    #[test]
    fn pending_content_is_taken_once() {
        let mut handler = MessageHandler::default();
        let ack = roundtrip(
            &mut handler,
            json!({
                "action": "openEditor",
                "content": "# Doc",
                "sourceUrl": "https://x.org/doc.md",
                "startInPreview": true
            }),
        );
        assert_eq!(ack, json!({ "success": true }));

        let first = roundtrip(&mut handler, json!({ "action": "getMarkdownContent" }));
        assert_eq!(
            first,
            json!({
                "content": "# Doc",
                "sourceUrl": "https://x.org/doc.md",
                "fileName": "Untitled.md",
                "startInPreview": true
            })
        );

        let second = roundtrip(&mut handler, json!({ "action": "getMarkdownContent" }));
        assert_eq!(second["content"], "");
        assert_eq!(second["fileName"], "Untitled.md");
    }

    #[test]
    fn empty_file_name_falls_back_to_default() {
        let mut handler = MessageHandler::default();
        roundtrip(
            &mut handler,
            json!({ "action": "openEditor", "content": "x", "fileName": "" }),
        );
        let pending = roundtrip(&mut handler, json!({ "action": "getMarkdownContent" }));
        assert_eq!(pending["fileName"], "Untitled.md");
        assert_eq!(pending["content"], "x");
    }

    #[test]
    fn settings_round_trip() {
        let mut handler = MessageHandler::default();
        let defaults = roundtrip(&mut handler, json!({ "action": "getSettings" }));
        assert_eq!(
            defaults,
            json!({ "settings": { "theme": "light", "fontSize": "16px", "autoSave": true } })
        );

        roundtrip(
            &mut handler,
            json!({ "action": "saveSettings", "settings": { "theme": "dark", "autoSave": false } }),
        );
        assert_eq!(handler.settings().theme, "dark");
        assert_eq!(handler.settings().font_size, "16px");
        assert!(!handler.settings().auto_save);
    }

    #[test]
    fn unknown_action() {
        let mut handler = MessageHandler::default();
        let response = roundtrip(&mut handler, json!({ "action": "resizeWindow" }));
        assert_eq!(response, json!({ "success": false, "error": "Unknown action" }));
    }

    #[test]
    fn malformed_json_is_a_failure_response() {
        let mut handler = MessageHandler::default();
        let raw = handler.handle_json("{not json").unwrap();
        let response: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(response["success"], false);
        assert!(response["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn action_names_match_wire_tags() {
        let requests = [
            Request::ParseMarkdown {
                content: String::new(),
            },
            Request::GetMarkdownContent,
            Request::GetSettings,
        ];
        for request in requests {
            let json = serde_json::to_value(&request).unwrap();
            assert_eq!(json["action"], request.action());
        }
    }
}
