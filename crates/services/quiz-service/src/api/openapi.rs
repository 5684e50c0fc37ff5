//! OpenAPI documentation definition.

use utoipa::OpenApi;

use super::dto::{
    QuestionFilter, QuestionRequest, QuestionResponse, QuestionReviewResponse,
    QuestionUpdateRequest, QuizFilter, QuizQuestionRequest, QuizRequest, QuizResponse,
    QuizUpdateRequest,
};
use super::{question_handler, quiz_handler};
use domain::{QuestionType, QuizDifficulty};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quiz Platform - Quiz Service",
        description = "CRUD APIs for quizzes and their questions"
    ),
    paths(
        quiz_handler::create_quiz,
        quiz_handler::create_quizzes,
        quiz_handler::list_quizzes,
        quiz_handler::list_all_quizzes,
        quiz_handler::get_quiz,
        quiz_handler::update_quiz,
        quiz_handler::archive_quiz,
        quiz_handler::delete_quiz,
        quiz_handler::delete_quizzes,
        quiz_handler::quiz_exists,
        quiz_handler::count_quizzes,
        question_handler::create_question,
        question_handler::create_questions,
        question_handler::list_questions,
        question_handler::get_question,
        question_handler::update_question,
        question_handler::delete_question,
        question_handler::delete_questions,
        question_handler::question_exists,
        question_handler::count_questions,
        question_handler::questions_by_quiz,
        question_handler::questions_by_quiz_for_review,
        question_handler::total_points_by_quiz,
        question_handler::questions_by_type,
    ),
    components(schemas(
        QuizRequest,
        QuizQuestionRequest,
        QuizUpdateRequest,
        QuizResponse,
        QuizFilter,
        QuizDifficulty,
        QuestionRequest,
        QuestionUpdateRequest,
        QuestionResponse,
        QuestionReviewResponse,
        QuestionFilter,
        QuestionType,
    )),
    tags(
        (name = "Quiz Management", description = "APIs for managing quizzes"),
        (name = "Question Management", description = "APIs for managing questions")
    )
)]
pub struct ApiDoc;
