use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Question/answer pair shown on a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptInput {
    pub question: String,
    pub answer: String,
}
