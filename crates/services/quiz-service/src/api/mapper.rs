//! Entity ↔ DTO mappers and the explicit patch values they produce.

use common::{Mapper, Patch};
use domain::{Question, Quiz, QuestionType, QuizDifficulty};

use super::dto::{
    QuestionRequest, QuestionResponse, QuestionReviewResponse, QuestionUpdateRequest, QuizQuestionRequest,
    QuizRequest, QuizResponse, QuizUpdateRequest,
};

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// =============================================================================
// Quiz mapping
// =============================================================================

/// Partial quiz update as data. String fields are only applied when
/// non-blank, everything else when set.
#[derive(Debug, Default)]
pub struct QuizPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<QuizDifficulty>,
    pub description: Option<String>,
    pub time_limit: Option<i32>,
    pub passing_score: Option<i32>,
    pub status: Option<String>,
    pub created_by: Option<String>,
}

impl Patch<Quiz> for QuizPatch {
    fn apply(&self, quiz: &mut Quiz) {
        if let Some(title) = &self.title {
            quiz.title = title.clone();
        }
        if let Some(category) = &self.category {
            quiz.category = Some(category.clone());
        }
        if let Some(difficulty) = self.difficulty {
            quiz.difficulty = difficulty;
        }
        if let Some(description) = &self.description {
            quiz.description = Some(description.clone());
        }
        if let Some(time_limit) = self.time_limit {
            quiz.time_limit = time_limit;
        }
        if let Some(passing_score) = self.passing_score {
            quiz.passing_score = passing_score;
        }
        if let Some(status) = &self.status {
            quiz.status = status.clone();
        }
        if let Some(created_by) = &self.created_by {
            quiz.created_by = Some(created_by.clone());
        }
    }
}

pub struct QuizMapper {
    questions: QuestionMapper,
}

impl QuizMapper {
    pub fn new() -> Self {
        Self {
            questions: QuestionMapper,
        }
    }
}

impl Default for QuizMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Mapper for QuizMapper {
    type Entity = Quiz;
    type Request = QuizRequest;
    type Update = QuizUpdateRequest;
    type Response = QuizResponse;
    type Patch = QuizPatch;

    fn to_response(&self, quiz: &Quiz) -> QuizResponse {
        QuizResponse {
            public_id: quiz.public_id,
            title: quiz.title.clone(),
            category: quiz.category.clone(),
            difficulty: quiz.difficulty,
            description: quiz.description.clone(),
            time_limit: quiz.time_limit,
            passing_score: quiz.passing_score,
            status: quiz.status.clone(),
            questions: if quiz.questions.is_empty() {
                None
            } else {
                Some(
                    quiz.questions
                        .iter()
                        .map(|q| self.questions.to_response(q))
                        .collect(),
                )
            },
            created_at: quiz.created_at,
        }
    }

    fn to_entity(&self, request: QuizRequest) -> Quiz {
        let mut quiz = Quiz::new(
            request.title,
            non_blank(request.category),
            request.difficulty,
            non_blank(request.description),
            request.time_limit,
            request.passing_score,
            non_blank(request.status),
            non_blank(request.created_by),
        );
        if let Some(questions) = request.questions {
            for question in questions {
                quiz.add_question(nested_question_to_entity(question));
            }
        }
        quiz
    }

    fn to_patch(&self, request: QuizUpdateRequest) -> QuizPatch {
        QuizPatch {
            title: non_blank(request.title),
            category: non_blank(request.category),
            difficulty: request.difficulty,
            description: non_blank(request.description),
            time_limit: request.time_limit,
            passing_score: request.passing_score,
            status: non_blank(request.status),
            created_by: non_blank(request.created_by),
        }
    }
}

fn nested_question_to_entity(request: QuizQuestionRequest) -> Question {
    // quiz_id is fixed up by Quiz::add_question
    Question::new(
        0,
        request.text,
        request.question_type,
        request.options,
        request.correct_answers,
        request.points,
        non_blank(request.explanation),
    )
}

// =============================================================================
// Question mapping
// =============================================================================

/// Partial question update as data. Lists are only applied when non-empty.
#[derive(Debug, Default)]
pub struct QuestionPatch {
    pub text: Option<String>,
    pub question_type: Option<QuestionType>,
    pub options: Option<Vec<String>>,
    pub correct_answers: Option<Vec<String>>,
    pub points: Option<i32>,
    pub explanation: Option<String>,
}

impl Patch<Question> for QuestionPatch {
    fn apply(&self, question: &mut Question) {
        if let Some(text) = &self.text {
            question.text = text.clone();
        }
        if let Some(question_type) = self.question_type {
            question.question_type = question_type;
        }
        if let Some(options) = &self.options {
            question.options = options.clone();
        }
        if let Some(correct_answers) = &self.correct_answers {
            question.correct_answers = correct_answers.clone();
        }
        if let Some(points) = self.points {
            question.points = points;
        }
        if let Some(explanation) = &self.explanation {
            question.explanation = Some(explanation.clone());
        }
    }
}

pub struct QuestionMapper;

impl QuestionMapper {
    /// Review view including correct answers and explanation.
    pub fn to_review_response(&self, question: &Question) -> QuestionReviewResponse {
        QuestionReviewResponse {
            id: question.id,
            text: question.text.clone(),
            question_type: question.question_type,
            options: question.options.clone(),
            correct_answers: question.correct_answers.clone(),
            points: question.points,
            explanation: question.explanation.clone(),
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

impl Mapper for QuestionMapper {
    type Entity = Question;
    type Request = QuestionRequest;
    type Update = QuestionUpdateRequest;
    type Response = QuestionResponse;
    type Patch = QuestionPatch;

    fn to_response(&self, question: &Question) -> QuestionResponse {
        QuestionResponse {
            id: question.id,
            text: question.text.clone(),
            question_type: question.question_type,
            options: question.options.clone(),
            points: question.points,
        }
    }

    fn to_entity(&self, request: QuestionRequest) -> Question {
        Question::new(
            request.quiz_id,
            request.text,
            request.question_type,
            request.options,
            request.correct_answers,
            request.points,
            non_blank(request.explanation),
        )
    }

    fn to_patch(&self, request: QuestionUpdateRequest) -> QuestionPatch {
        QuestionPatch {
            text: non_blank(request.text),
            question_type: request.question_type,
            options: request.options.filter(|o| !o.is_empty()),
            correct_answers: request.correct_answers.filter(|c| !c.is_empty()),
            points: request.points,
            explanation: non_blank(request.explanation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Quiz {
        Quiz::new(
            "Rust Basics".to_string(),
            Some("programming".to_string()),
            QuizDifficulty::Medium,
            Some("Intro quiz".to_string()),
            30,
            60,
            None,
            Some("alice".to_string()),
        )
    }

    #[test]
    fn patch_with_single_field_changes_only_that_field() {
        let mut quiz = sample_quiz();
        let before = quiz.clone();

        let patch = QuizPatch {
            passing_score: Some(90),
            ..Default::default()
        };
        patch.apply(&mut quiz);

        assert_eq!(quiz.passing_score, 90);
        assert_eq!(quiz.title, before.title);
        assert_eq!(quiz.category, before.category);
        assert_eq!(quiz.difficulty, before.difficulty);
        assert_eq!(quiz.time_limit, before.time_limit);
        assert_eq!(quiz.status, before.status);
    }

    #[test]
    fn blank_strings_in_update_requests_are_ignored() {
        let mapper = QuizMapper::new();
        let patch = mapper.to_patch(QuizUpdateRequest {
            title: Some("   ".to_string()),
            status: Some("".to_string()),
            passing_score: Some(70),
            ..Default::default()
        });

        let mut quiz = sample_quiz();
        let original_title = quiz.title.clone();
        patch.apply(&mut quiz);

        assert_eq!(quiz.title, original_title);
        assert_eq!(quiz.status, domain::QUIZ_STATUS_DRAFT);
        assert_eq!(quiz.passing_score, 70);
    }

    #[test]
    fn empty_answer_lists_do_not_clear_existing_answers() {
        let mapper = QuestionMapper;
        let patch = mapper.to_patch(QuestionUpdateRequest {
            correct_answers: Some(Vec::new()),
            points: Some(5),
            ..Default::default()
        });

        let mut question = Question::new(
            1,
            "2 + 2?".to_string(),
            QuestionType::SingleChoice,
            vec!["3".to_string(), "4".to_string()],
            vec!["4".to_string()],
            2,
            None,
        );
        patch.apply(&mut question);

        assert_eq!(question.correct_answers, vec!["4".to_string()]);
        assert_eq!(question.points, 5);
    }

    #[test]
    fn quiz_response_hides_correct_answers() {
        let mapper = QuizMapper::new();
        let mut quiz = sample_quiz();
        quiz.add_question(Question::new(
            0,
            "2 + 2?".to_string(),
            QuestionType::SingleChoice,
            vec!["3".to_string(), "4".to_string()],
            vec!["4".to_string()],
            2,
            None,
        ));

        let response = mapper.to_response(&quiz);
        let questions = response.questions.expect("questions should be present");
        assert_eq!(questions.len(), 1);

        let json = serde_json::to_value(&questions[0]).unwrap();
        assert!(json.get("correctAnswers").is_none());
    }

    #[test]
    fn review_response_includes_correct_answers() {
        let mapper = QuestionMapper;
        let question = Question::new(
            1,
            "2 + 2?".to_string(),
            QuestionType::SingleChoice,
            vec!["3".to_string(), "4".to_string()],
            vec!["4".to_string()],
            2,
            Some("Basic arithmetic".to_string()),
        );

        let review = mapper.to_review_response(&question);
        assert_eq!(review.correct_answers, vec!["4".to_string()]);
        assert_eq!(review.explanation.as_deref(), Some("Basic arithmetic"));
    }
}
