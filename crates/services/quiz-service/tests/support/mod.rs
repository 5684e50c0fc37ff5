//! Shared test fixtures: in-memory repositories and sample data.
//!
//! Seed data lives here and only here; production wiring never embeds
//! fixtures.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use ::common::{AppError, AppResult, PageRequest, PublicRepository, Repository};
use domain::{Question, QuestionType, Quiz, QuizDifficulty};
use quiz_service_lib::repository::{QuestionRepository, QuizRepository};

// =============================================================================
// Fixtures
// =============================================================================

pub fn sample_quiz(title: &str) -> Quiz {
    Quiz::new(
        title.to_string(),
        Some("programming".to_string()),
        QuizDifficulty::Medium,
        Some(format!("{} description", title)),
        30,
        60,
        None,
        Some("alice".to_string()),
    )
}

pub fn sample_question(quiz_id: i64, text: &str) -> Question {
    Question::new(
        quiz_id,
        text.to_string(),
        QuestionType::SingleChoice,
        vec!["3".to_string(), "4".to_string()],
        vec!["4".to_string()],
        2,
        None,
    )
}

// =============================================================================
// In-memory quiz repository
// =============================================================================

pub struct InMemoryQuizRepository {
    quizzes: Mutex<Vec<Quiz>>,
    next_id: AtomicI64,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seeded(quizzes: Vec<Quiz>) -> Self {
        let repo = Self::new();
        for quiz in quizzes {
            repo.store(quiz);
        }
        repo
    }

    pub fn contents(&self) -> Vec<Quiz> {
        self.quizzes.lock().unwrap().clone()
    }

    fn store(&self, mut quiz: Quiz) -> Quiz {
        quiz.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        for question in &mut quiz.questions {
            question.id = self.next_id.fetch_add(1, Ordering::SeqCst);
            question.quiz_id = quiz.id;
        }
        self.quizzes.lock().unwrap().push(quiz.clone());
        quiz
    }
}

#[async_trait]
impl Repository<Quiz, i64> for InMemoryQuizRepository {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        Ok(self.store(quiz))
    }

    async fn insert_all(&self, quizzes: Vec<Quiz>) -> AppResult<Vec<Quiz>> {
        Ok(quizzes.into_iter().map(|q| self.store(q)).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        Ok(self
            .quizzes
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        Ok(self.contents())
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<(Vec<Quiz>, u64)> {
        let all = self.contents();
        let total = all.len() as u64;
        let start = (page.offset() as usize).min(all.len());
        let end = (start + page.limit() as usize).min(all.len());
        Ok((all[start..end].to_vec(), total))
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.lock().unwrap();
        let slot = quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or(AppError::NotFound)?;
        *slot = quiz.clone();
        Ok(quiz)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.quizzes.lock().unwrap().retain(|q| q.id != id);
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> AppResult<u64> {
        let mut quizzes = self.quizzes.lock().unwrap();
        let before = quizzes.len();
        quizzes.retain(|q| !ids.contains(&q.id));
        Ok((before - quizzes.len()) as u64)
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.quizzes.lock().unwrap().iter().any(|q| q.id == id))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.quizzes.lock().unwrap().len() as u64)
    }
}

#[async_trait]
impl PublicRepository<Quiz, i64> for InMemoryQuizRepository {
    async fn find_by_public_id(&self, public_id: Uuid) -> AppResult<Option<Quiz>> {
        Ok(self
            .quizzes
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.public_id == public_id)
            .cloned())
    }

    async fn find_by_public_ids(&self, public_ids: &[Uuid]) -> AppResult<Vec<Quiz>> {
        Ok(self
            .quizzes
            .lock()
            .unwrap()
            .iter()
            .filter(|q| public_ids.contains(&q.public_id))
            .cloned()
            .collect())
    }

    async fn exists_by_public_id(&self, public_id: Uuid) -> AppResult<bool> {
        Ok(self
            .quizzes
            .lock()
            .unwrap()
            .iter()
            .any(|q| q.public_id == public_id))
    }

    async fn delete_by_public_id(&self, public_id: Uuid) -> AppResult<()> {
        self.quizzes
            .lock()
            .unwrap()
            .retain(|q| q.public_id != public_id);
        Ok(())
    }

    async fn delete_by_public_ids(&self, public_ids: &[Uuid]) -> AppResult<u64> {
        let mut quizzes = self.quizzes.lock().unwrap();
        let before = quizzes.len();
        quizzes.retain(|q| !public_ids.contains(&q.public_id));
        Ok((before - quizzes.len()) as u64)
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_all_with_questions(&self) -> AppResult<Vec<Quiz>> {
        Ok(self.contents())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Quiz>> {
        Ok(self
            .quizzes
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.title == title)
            .cloned())
    }
}

// =============================================================================
// In-memory question repository
// =============================================================================

pub struct InMemoryQuestionRepository {
    questions: Mutex<Vec<Question>>,
    next_id: AtomicI64,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seeded(questions: Vec<Question>) -> Self {
        let repo = Self::new();
        for question in questions {
            repo.store(question);
        }
        repo
    }

    pub fn contents(&self) -> Vec<Question> {
        self.questions.lock().unwrap().clone()
    }

    fn store(&self, mut question: Question) -> Question {
        question.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.questions.lock().unwrap().push(question.clone());
        question
    }
}

#[async_trait]
impl Repository<Question, i64> for InMemoryQuestionRepository {
    async fn insert(&self, question: Question) -> AppResult<Question> {
        Ok(self.store(question))
    }

    async fn insert_all(&self, questions: Vec<Question>) -> AppResult<Vec<Question>> {
        Ok(questions.into_iter().map(|q| self.store(q)).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        Ok(self.contents())
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<(Vec<Question>, u64)> {
        let all = self.contents();
        let total = all.len() as u64;
        let start = (page.offset() as usize).min(all.len());
        let end = (start + page.limit() as usize).min(all.len());
        Ok((all[start..end].to_vec(), total))
    }

    async fn update(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.lock().unwrap();
        let slot = questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or(AppError::NotFound)?;
        *slot = question.clone();
        Ok(question)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.questions.lock().unwrap().retain(|q| q.id != id);
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> AppResult<u64> {
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| !ids.contains(&q.id));
        Ok((before - questions.len()) as u64)
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.questions.lock().unwrap().iter().any(|q| q.id == id))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.questions.lock().unwrap().len() as u64)
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_quiz_id(&self, quiz_id: i64) -> AppResult<Vec<Question>> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.quiz_id == quiz_id)
            .cloned()
            .collect())
    }

    async fn find_by_type(&self, question_type: QuestionType) -> AppResult<Vec<Question>> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.question_type == question_type)
            .cloned()
            .collect())
    }

    async fn find_by_quiz_id_and_type(
        &self,
        quiz_id: i64,
        question_type: QuestionType,
    ) -> AppResult<Vec<Question>> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.quiz_id == quiz_id && q.question_type == question_type)
            .cloned()
            .collect())
    }

    async fn find_by_minimum_points(&self, min_points: i32) -> AppResult<Vec<Question>> {
        let mut matching: Vec<Question> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.points >= min_points)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.points.cmp(&a.points));
        Ok(matching)
    }

    async fn count_by_quiz_id(&self, quiz_id: i64) -> AppResult<u64> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.quiz_id == quiz_id)
            .count() as u64)
    }

    async fn total_points_by_quiz_id(&self, quiz_id: i64) -> AppResult<i64> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.quiz_id == quiz_id)
            .map(|q| q.points as i64)
            .sum())
    }
}
