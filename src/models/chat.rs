use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Reply body from the chat endpoint.
///
/// The backend answers `{"query": ..., "answer": ...}`; a bare JSON string
/// is accepted as the answer too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChatReply {
    Structured {
        answer: String,
        #[serde(default)]
        query: Option<String>,
    },
    Plain(String),
}

impl From<ChatReply> for ChatAnswer {
    fn from(reply: ChatReply) -> Self {
        match reply {
            ChatReply::Structured { answer, .. } | ChatReply::Plain(answer) => Self {
                text: answer.trim().to_string(),
            },
        }
    }
}

/// The assistant's answer to one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAnswer {
    pub text: String,
}
