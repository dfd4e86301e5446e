//! Retrieval-augmented answers to catalog questions.

use std::sync::Arc;

use tracing::info;

use crate::chat::prompts::{ADVISOR_PROMPT_TEMPLATE, ADVISOR_SYSTEM};
use crate::chat::retriever::Retriever;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::catalog::KnowledgeChunkRow;

#[derive(Clone)]
pub struct AdvisorChat {
    retriever: Arc<dyn Retriever>,
    llm: LlmClient,
    top_k: i64,
}

impl AdvisorChat {
    pub fn new(retriever: Arc<dyn Retriever>, llm: LlmClient, top_k: i64) -> Self {
        Self {
            retriever,
            llm,
            top_k,
        }
    }

    pub async fn answer(&self, question: &str) -> Result<String, AppError> {
        let chunks = self.retriever.retrieve(question, self.top_k).await?;
        info!("Retrieved {} catalog chunks for chat question", chunks.len());

        let prompt = build_prompt(&format_context(&chunks), question);
        self.llm
            .call_text(&prompt, ADVISOR_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Advisor answer failed: {e}")))
    }
}

fn format_context(chunks: &[KnowledgeChunkRow]) -> String {
    chunks
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn build_prompt(context: &str, question: &str) -> String {
    ADVISOR_PROMPT_TEMPLATE
        .replace("{context}", context)
        .replace("{question}", question)
}
