//! LINE Messaging API message objects.
//!
//! Only the subset the quiz sends: a text message with optional quick reply
//! buttons that post a message back when tapped.

use quizline_quiz::domain::payload::ReplyPayload;
use serde::Serialize;

/// A LINE message object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LineMessage {
    /// A text message.
    Text {
        /// Message text.
        text: String,
        /// Buttons shown under the message.
        #[serde(rename = "quickReply", skip_serializing_if = "Option::is_none")]
        quick_reply: Option<QuickReply>,
    },
}

/// Quick reply buttons attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickReply {
    /// Buttons, in display order.
    pub items: Vec<QuickReplyItem>,
}

/// One quick reply button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuickReplyItem {
    /// A button that triggers an action.
    Action {
        /// The action to run when tapped.
        action: Action,
    },
}

/// Action run by a quick reply button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Sends `text` as the user's message.
    Message {
        /// Button label.
        label: String,
        /// Text sent when tapped.
        text: String,
    },
}

impl From<ReplyPayload> for LineMessage {
    fn from(payload: ReplyPayload) -> Self {
        let quick_reply = (!payload.quick_replies.is_empty()).then(|| QuickReply {
            items: payload
                .quick_replies
                .into_iter()
                .map(|reply| QuickReplyItem::Action {
                    action: Action::Message {
                        label: reply.label,
                        text: reply.value,
                    },
                })
                .collect(),
        });

        LineMessage::Text {
            text: payload.text,
            quick_reply,
        }
    }
}
