//! Kakao i OpenBuilder skill payloads.
//!
//! Requests are decoded leniently: every field is optional and a field of
//! the wrong shape decodes to its default instead of failing the request.
//! Responses follow the skill response schema version 2.0.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const SKILL_VERSION: &str = "2.0";

pub const MAX_CAROUSEL_ITEMS: usize = 10;
pub const MAX_CARD_BUTTONS: usize = 3;
pub const MAX_QUICK_REPLIES: usize = 10;

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

// === Request ===

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillRequest {
    #[serde(deserialize_with = "or_default")]
    pub intent: Intent,
    #[serde(deserialize_with = "or_default")]
    pub user_request: UserRequest,
    #[serde(deserialize_with = "or_default")]
    pub action: Action,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Intent {
    #[serde(deserialize_with = "or_default")]
    pub id: String,
    /// Block name as configured in the bot builder.
    #[serde(deserialize_with = "or_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    #[serde(deserialize_with = "or_default")]
    pub utterance: String,
    #[serde(deserialize_with = "or_default")]
    pub user: User,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "or_default")]
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Action {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub params: Map<String, Value>,
    #[serde(deserialize_with = "or_default")]
    pub detail_params: Map<String, Value>,
}

impl SkillRequest {
    pub fn intent_name(&self) -> &str {
        self.intent.name.trim()
    }

    pub fn utterance(&self) -> &str {
        self.user_request.utterance.trim()
    }
}

// === Response ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResponse {
    pub version: String,
    pub template: Template,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub outputs: Vec<Output>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<QuickReply>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Output {
    SimpleText(SimpleText),
    BasicCard(BasicCard),
    Carousel(Carousel),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleText {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BasicCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carousel {
    #[serde(rename = "type")]
    pub kind: String,
    pub items: Vec<BasicCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    #[serde(flatten)]
    pub action: ButtonAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ButtonAction {
    #[serde(rename_all = "camelCase")]
    WebLink { web_link_url: String },
    #[serde(rename_all = "camelCase")]
    Phone { phone_number: String },
    #[serde(rename_all = "camelCase")]
    Message { message_text: String },
}

/// Quick replies always use the `message` action: the label is shown and
/// `messageText` is sent back as the user's utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReply {
    pub label: String,
    pub action: String,
    pub message_text: String,
}

impl SkillResponse {
    pub fn new(outputs: Vec<Output>, quick_replies: Vec<QuickReply>) -> Self {
        Self {
            version: SKILL_VERSION.to_string(),
            template: Template {
                outputs,
                quick_replies,
            },
        }
    }

    pub fn has_quick_reply(&self, label: &str) -> bool {
        self.template
            .quick_replies
            .iter()
            .any(|q| q.label == label)
    }
}

impl Output {
    pub fn text(text: impl Into<String>) -> Self {
        Self::SimpleText(SimpleText { text: text.into() })
    }

    /// Carousel of basic cards, truncated to the platform limit.
    pub fn card_carousel(mut items: Vec<BasicCard>) -> Self {
        items.truncate(MAX_CAROUSEL_ITEMS);
        Self::Carousel(Carousel {
            kind: "basicCard".to_string(),
            items,
        })
    }
}

impl BasicCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn thumbnail(mut self, image_url: impl Into<String>) -> Self {
        self.thumbnail = Some(Thumbnail {
            image_url: image_url.into(),
        });
        self
    }

    /// Sets the buttons, keeping at most [`MAX_CARD_BUTTONS`].
    pub fn buttons(mut self, mut buttons: Vec<Button>) -> Self {
        buttons.truncate(MAX_CARD_BUTTONS);
        self.buttons = buttons;
        self
    }
}

impl Button {
    pub fn web_link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::WebLink {
                web_link_url: url.into(),
            },
        }
    }

    pub fn phone(label: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Phone {
                phone_number: phone_number.into(),
            },
        }
    }

    pub fn message(label: impl Into<String>, message_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Message {
                message_text: message_text.into(),
            },
        }
    }
}

impl QuickReply {
    pub fn message(label: impl Into<String>, message_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: "message".to_string(),
            message_text: message_text.into(),
        }
    }
}
