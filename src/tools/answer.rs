// file: src/tools/answer.rs
// description: Question-answer tool entry point
// reference: internal tool contracts

use crate::config::{Config, ProductConfig};
use crate::normalizer::normalize_answer;
use crate::upstream::{ChatMessage, UpstreamClient};
use crate::utils::OperationTimer;
use tracing::warn;

/// Conversational question answering grounded in the product documentation.
/// Same degradation contract as document search: failures become an absent
/// answer, never an error surfaced to the caller.
pub struct QuestionAnswer {
    client: UpstreamClient,
    model: String,
    product: ProductConfig,
}

impl QuestionAnswer {
    pub fn new(config: &Config) -> Self {
        Self {
            client: UpstreamClient::new(&config.upstream),
            model: config.upstream.answer_model.clone(),
            product: config.product.clone(),
        }
    }

    pub async fn run(&self, question: &str) -> Option<String> {
        let question = question.trim();
        if question.is_empty() {
            warn!("Question answering called without a usable question");
            return None;
        }

        let timer = OperationTimer::new("question_answer");

        let messages = [
            ChatMessage::system(format!(
                "You answer questions about {} concisely, grounded in its \
                 documentation. Reply in plain text.",
                self.product.name
            )),
            ChatMessage::user(question),
        ];

        let answer = match self
            .client
            .chat_completion(&self.model, &messages, None)
            .await
        {
            Ok(completion) => normalize_answer(&completion.first_content()),
            Err(e) => {
                warn!("Question answering failed at {} stage: {}", e.stage(), e);
                None
            }
        };

        timer.finish_with_count(usize::from(answer.is_some()));
        answer
    }
}
