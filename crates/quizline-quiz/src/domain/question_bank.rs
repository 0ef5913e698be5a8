//! The question bank: an immutable, ordered list of quiz questions.

use quizline_core::error::DomainError;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    text: String,
    options: Vec<String>,
    correct_answer: String,
}

impl QuizQuestion {
    /// Creates a question.
    ///
    /// `correct_answer` is the 1-based position of the correct option, as the
    /// string the user's quick reply sends back (e.g. `"2"`).
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Display text, including the option descriptions.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Short option labels, in display order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Positional value of the correct option.
    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }
}

/// Ordered, read-only collection of questions shared by every conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    /// Creates a bank from a list of questions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the list is empty, if a question
    /// has no options, or if a question's correct answer is not one of its
    /// positional values `"1"..="n"`.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::Validation(
                "question bank must contain at least one question".to_owned(),
            ));
        }

        for (index, question) in questions.iter().enumerate() {
            if question.options.is_empty() {
                return Err(DomainError::Validation(format!(
                    "question {index} has no options"
                )));
            }
            let in_range = question
                .correct_answer
                .parse::<usize>()
                .is_ok_and(|position| (1..=question.options.len()).contains(&position));
            if !in_range {
                return Err(DomainError::Validation(format!(
                    "question {index} has correct answer {:?} outside 1..={}",
                    question.correct_answer,
                    question.options.len()
                )));
            }
        }

        Ok(Self { questions })
    }

    /// The food-safety quiz served in production.
    #[must_use]
    pub fn food_safety() -> Self {
        let options = ["ข้อที่ 1)", "ข้อที่ 2)", "ข้อที่ 3)"];
        Self {
            questions: vec![
                QuizQuestion::new(
                    "คำถามข้อที่ 1: จากข้อมูลในบอร์ด อันตรายที่เกิดจากอาหารสามารถแบ่งได้เป็นกี่ประเภท?\n\
                     ข้อที่ 1) 2 ประเภท\n\
                     ข้อที่ 2) 3 ประเภท\n\
                     ข้อที่ 3) 5 ประเภท",
                    options,
                    "2",
                ),
                QuizQuestion::new(
                    "คำถามข้อที่ 2: หากพบ \"เศษแก้ว\" ปนเปื้อนในอาหาร จะจัดเป็นอันตรายประเภทใด?\n\
                     ข้อที่ 1) อันตรายทางเคมี\n\
                     ข้อที่ 2) อันตรายทางชีวภาพ\n\
                     ข้อที่ 3) อันตรายทางกายภาพ",
                    options,
                    "3",
                ),
                QuizQuestion::new(
                    "คำถามข้อที่ 3: หลักการสุขาภิบาลอาหารที่ดี เพื่อประกอบอาหารให้สะอาดและปลอดภัย ต้องควบคุมปัจจัยทั้งหมดกี่อย่าง?\n\
                     ข้อที่ 1) 3 ปัจจัย\n\
                     ข้อที่ 2) 4 ปัจจัย\n\
                     ข้อที่ 3) 5 ปัจจัย",
                    options,
                    "3",
                ),
            ],
        }
    }

    /// Returns the question at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&QuizQuestion, DomainError> {
        self.questions
            .get(index)
            .ok_or(DomainError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            })
    }

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false` for a bank built through `new` or `food_safety`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::food_safety()
    }
}
