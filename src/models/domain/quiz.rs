use std::collections::HashSet;

use crate::models::domain::Question;

/// Category id the client sends to play across every category.
pub const ALL_CATEGORIES_ID: i64 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Category(i64),
}

impl CategorySelector {
    pub fn from_id(id: i64) -> Self {
        if id == ALL_CATEGORIES_ID {
            CategorySelector::All
        } else {
            CategorySelector::Category(id)
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Category(id) => question.category == *id,
        }
    }
}

/// Per-request quiz input. Built from the client payload and dropped once
/// the response is produced; nothing here is kept between calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSelector {
    pub category: CategorySelector,
    pub excluded: HashSet<i64>,
}

impl QuizSelector {
    pub fn new(category: CategorySelector, previous_questions: impl IntoIterator<Item = i64>) -> Self {
        QuizSelector {
            category,
            excluded: previous_questions.into_iter().collect(),
        }
    }

    pub fn is_eligible(&self, question: &Question) -> bool {
        self.category.matches(question) && !self.excluded.contains(&question.id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Question(Question),
    Exhausted,
}

impl QuizOutcome {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, QuizOutcome::Exhausted)
    }

    pub fn into_question(self) -> Option<Question> {
        match self {
            QuizOutcome::Question(question) => Some(question),
            QuizOutcome::Exhausted => None,
        }
    }
}
