//! Demo answers used when the backend cannot be reached.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::ModelAnswer;

const ESCALATION_PROBABILITY: f64 = 0.3;
const DEMO_TAGS: [&str; 3] = ["javascript", "react", "typescript"];

/// Seedable source of stand-in answers
pub struct FallbackAnswers {
    rng: StdRng,
}

impl FallbackAnswers {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn answer_for(&mut self, question: &str) -> ModelAnswer {
        let confidence: f64 = self.rng.gen();
        let escalate_to_human = self.rng.gen::<f64>() < ESCALATION_PROBABILITY;
        let tag_count = self.rng.gen_range(1..=DEMO_TAGS.len());

        ModelAnswer {
            confidence,
            answer: format!(
                "Here's an answer to your question: \"{}\". This is a detailed technical response that demonstrates how the LLM would generate an answer.",
                question
            ),
            escalate_to_human,
            tags: DEMO_TAGS[..tag_count].iter().map(|t| t.to_string()).collect(),
        }
    }
}
