//! Quiz business service.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use common::{
    AppError, AppResult, CrudService, Page, PageRequest, Patch, PublicCrudService,
    PublicRepository, Repository,
};
use domain::{Quiz, QUIZ_STATUS_ARCHIVED};

use crate::api::dto::QuizFilter;
use crate::repository::QuizRepository;

/// One-line status patch used by the archive flow.
struct SetStatus(&'static str);

impl Patch<Quiz> for SetStatus {
    fn apply(&self, quiz: &mut Quiz) {
        quiz.status = self.0.to_string();
    }
}

pub struct QuizService {
    repo: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repo: Arc<dyn QuizRepository>) -> Self {
        Self { repo }
    }

    /// Archive a quiz: set its status to the terminal ARCHIVED tag.
    ///
    /// Composes the generic public-id update with a one-line patch; a
    /// missing quiz fails with NotFound before any write.
    pub async fn archive(&self, public_id: Uuid) -> AppResult<Quiz> {
        tracing::debug!("Archiving quiz with public ID: {}", public_id);
        self.update_by_public_id(public_id, &SetStatus(QUIZ_STATUS_ARCHIVED))
            .await
    }
}

#[async_trait]
impl CrudService for QuizService {
    type Entity = Quiz;
    type Id = i64;
    type Filter = QuizFilter;

    fn repository(&self) -> &dyn Repository<Quiz, i64> {
        self.repo.as_ref()
    }

    /// Titles are unique; reject duplicates with a conflict instead of
    /// surfacing the constraint violation as a database error.
    async fn save(&self, quiz: Quiz) -> AppResult<Quiz> {
        if self.repo.find_by_title(&quiz.title).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Quiz with title '{}'",
                quiz.title
            )));
        }
        self.repo.insert(quiz).await
    }

    async fn save_all(&self, quizzes: Vec<Quiz>) -> AppResult<Vec<Quiz>> {
        let mut stored = Vec::with_capacity(quizzes.len());
        for quiz in quizzes {
            stored.push(self.save(quiz).await?);
        }
        Ok(stored)
    }

    /// Quizzes are listed with their questions eagerly loaded; the page is
    /// sliced from the fully materialized list, not at the database level.
    async fn find_page(&self, page: &PageRequest) -> AppResult<Page<Quiz>> {
        let all = self.repo.find_all_with_questions().await?;
        Ok(slice_page(all, page))
    }

    async fn find_page_with_filter(
        &self,
        filter: &QuizFilter,
        page: &PageRequest,
    ) -> AppResult<Page<Quiz>> {
        let matching = self.find_all_with_filter(filter).await?;
        Ok(slice_page(matching, page))
    }

    async fn find_all_with_filter(&self, filter: &QuizFilter) -> AppResult<Vec<Quiz>> {
        let all = self.repo.find_all_with_questions().await?;
        Ok(all.into_iter().filter(|q| filter.matches(q)).collect())
    }

    async fn count_with_filter(&self, filter: &QuizFilter) -> AppResult<u64> {
        if filter.is_empty() {
            return self.count().await;
        }
        Ok(self.find_all_with_filter(filter).await?.len() as u64)
    }
}

#[async_trait]
impl PublicCrudService for QuizService {
    fn public_repository(&self) -> &dyn PublicRepository<Quiz, i64> {
        self.repo.as_ref()
    }

    async fn find_by_public_id(&self, public_id: Uuid) -> AppResult<Option<Quiz>> {
        tracing::debug!("Finding quiz by public ID: {}", public_id);
        self.repo.find_by_public_id(public_id).await
    }
}

fn slice_page(items: Vec<Quiz>, page: &PageRequest) -> Page<Quiz> {
    let total = items.len() as u64;
    let start = (page.offset() as usize).min(items.len());
    let end = (start + page.limit() as usize).min(items.len());
    Page::new(items[start..end].to_vec(), page, total)
}
