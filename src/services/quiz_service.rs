use std::sync::{Arc, Mutex};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, QuizOutcome, QuizSelector},
    services::question_service::QuestionService,
};

/// Picks one question uniformly from `pool` after dropping everything the
/// selector rules out. The pool is filtered before sampling, so the draw
/// always terminates and an empty remainder is `Exhausted`.
pub fn select_question<R>(pool: Vec<Question>, selector: &QuizSelector, rng: &mut R) -> QuizOutcome
where
    R: Rng + ?Sized,
{
    let mut eligible: Vec<Question> = pool
        .into_iter()
        .filter(|q| selector.is_eligible(q))
        .collect();

    if eligible.is_empty() {
        return QuizOutcome::Exhausted;
    }

    let index = rng.gen_range(0..eligible.len());
    QuizOutcome::Question(eligible.swap_remove(index))
}

/// Stateless quiz turns. All progress lives in the client's
/// `previous_questions`; the only thing held here is the random source.
pub struct QuizService {
    questions: Arc<QuestionService>,
    rng: Mutex<StdRng>,
}

impl QuizService {
    pub fn new(questions: Arc<QuestionService>) -> Self {
        Self::with_rng(questions, StdRng::from_entropy())
    }

    pub fn with_rng(questions: Arc<QuestionService>, rng: StdRng) -> Self {
        Self {
            questions,
            rng: Mutex::new(rng),
        }
    }

    pub async fn next_question(&self, selector: QuizSelector) -> AppResult<QuizOutcome> {
        let pool = self.questions.resolve_pool(selector.category).await?;

        let outcome = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| AppError::InternalError("Quiz random source is poisoned".into()))?;
            select_question(pool, &selector, &mut *rng)
        };

        match &outcome {
            QuizOutcome::Question(q) => log::debug!(
                "Quiz selected question {} ({} previously seen)",
                q.id,
                selector.excluded.len()
            ),
            QuizOutcome::Exhausted => log::debug!(
                "Quiz pool exhausted for {:?} after {} questions",
                selector.category,
                selector.excluded.len()
            ),
        }

        Ok(outcome)
    }
}
