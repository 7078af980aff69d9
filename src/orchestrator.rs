use colored::*;
use futures::future::join_all;

use crate::api::{AssistantReply, LlmClient};
use crate::conversation::Conversation;
use crate::error::{MapChatError, Result};
use crate::models::{ToolCall, ToolResult};
use crate::tools::ToolExecutor;
use crate::ui::{display_tool_error, display_tool_result};

/// Answer appended when a turn burns through the round cap without the model
/// ever producing one.
pub const DEGRADED_ANSWER: &str = "I'm sorry, I wasn't able to finish looking that up. \
Could you try asking again, perhaps with more specific details?";

pub struct Orchestrator {
    llm: Box<dyn LlmClient>,
    tools: Box<dyn ToolExecutor>,
    max_tool_rounds: usize,
    verbose: bool,
}

impl Orchestrator {
    pub fn new(
        llm: Box<dyn LlmClient>,
        tools: Box<dyn ToolExecutor>,
        max_tool_rounds: usize,
        verbose: bool,
    ) -> Self {
        Self {
            llm,
            tools,
            max_tool_rounds,
            verbose,
        }
    }

    /// Drive one user turn to completion: the conversation must end in the
    /// new user message on entry and ends in an assistant answer on success.
    ///
    /// Tool-level failures (bad arguments, unknown names, provider errors)
    /// never surface here; they travel back to the model as error payloads
    /// so it can retry or apologize. Only LLM transport failures return Err,
    /// leaving the conversation intact for a retry.
    pub async fn run_turn(&self, conversation: &mut Conversation) -> Result<String> {
        let declarations = self.tools.declarations();
        let mut rounds = 0usize;

        loop {
            let reply = self
                .llm
                .complete(conversation.messages(), &declarations)
                .await?;

            match reply {
                AssistantReply::Answer(content) => {
                    conversation.push_assistant_answer(content.as_str());
                    return Ok(content);
                }
                AssistantReply::ToolCalls(calls) => {
                    rounds += 1;
                    if rounds > self.max_tool_rounds {
                        // Degrade instead of looping forever. The dangling
                        // tool-call message is NOT appended: the log must
                        // never end a turn on an unanswered tool request.
                        eprintln!(
                            "{}",
                            format!(
                                "Warning: {}",
                                MapChatError::ToolRoundsExceeded(self.max_tool_rounds)
                            )
                            .yellow()
                        );
                        conversation.push_assistant_answer(DEGRADED_ANSWER);
                        return Ok(DEGRADED_ANSWER.to_string());
                    }

                    let results = self.execute_tool_calls(&calls).await;
                    conversation.push_tool_round(calls, results);
                }
            }
        }
    }

    /// Execute every call of one assistant message. The futures run
    /// concurrently; `join_all` returns results in input order, so the
    /// tool messages line up with the calls no matter which adapter
    /// finishes first.
    async fn execute_tool_calls(&self, calls: &[ToolCall]) -> Vec<ToolResult> {
        for call in calls {
            println!(
                "{}",
                format!("Calling tool: {}...", call.function.name).cyan()
            );
            if self.verbose {
                let arguments = &call.function.arguments;
                let preview = if arguments.chars().count() > 100 {
                    format!("{}...", arguments.chars().take(100).collect::<String>())
                } else {
                    arguments.clone()
                };
                eprintln!(
                    "{}",
                    format!(
                        "[tools] Selected tool: '{}' with args: {}",
                        call.function.name, preview
                    )
                    .dimmed()
                );
            }
        }

        let results = join_all(calls.iter().map(|call| async move {
            match self
                .tools
                .dispatch(&call.function.name, &call.function.arguments)
                .await
            {
                Ok(payload) => ToolResult::ok(call.id.as_str(), payload),
                Err(message) => ToolResult::error(call.id.as_str(), &message),
            }
        }))
        .await;

        for (call, result) in calls.iter().zip(&results) {
            if result.is_error {
                display_tool_error(&call.function.name, &result.payload);
            } else {
                display_tool_result(&call.function.name, &result.payload);
            }
        }

        results
    }
}
