use uuid::Uuid;

use crate::conversation::Conversation;
use crate::error::Result;
use crate::orchestrator::Orchestrator;

/// One interactive session: the conversation plus the orchestrator driving
/// it. The conversation is owned here and only here; `submit` taking
/// `&mut self` is what serializes turns (no second turn can start while one
/// is in flight). Nothing is persisted; the log dies with the process.
pub struct ChatSession {
    id: Uuid,
    conversation: Conversation,
    orchestrator: Orchestrator,
}

impl ChatSession {
    pub fn new(orchestrator: Orchestrator, system_prompt: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            conversation: Conversation::new(system_prompt),
            orchestrator,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// The presentation boundary: append the user message, drive the turn
    /// to its final answer, hand back the updated conversation for
    /// re-rendering. On an LLM transport failure the user message stays in
    /// the log so the next submit retries with full context.
    pub async fn submit(&mut self, text: &str) -> Result<&Conversation> {
        self.conversation.push_user(text);
        self.orchestrator.run_turn(&mut self.conversation).await?;
        Ok(&self.conversation)
    }
}
