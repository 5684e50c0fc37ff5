//! Quiz repository implementation.
//!
//! Quizzes are public entities: all external lookups go through the public
//! UUID, the internal id never leaves the service. Question rows ride along
//! on every read because the API always renders a quiz with its questions.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use common::{AppError, AppResult, PageRequest, PublicRepository, Repository};
use domain::{Question, Quiz};

use super::entities::{question, quiz};

/// Quiz data access: the generic public-entity contract plus the
/// eager-loading queries the quiz service needs.
#[async_trait]
pub trait QuizRepository: PublicRepository<Quiz, i64> {
    /// All quizzes with their questions eagerly loaded, ordered by id.
    async fn find_all_with_questions(&self) -> AppResult<Vec<Quiz>>;

    /// Lookup by the unique title (duplicate detection on create).
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Quiz>>;
}

/// Concrete SeaORM-backed implementation of `QuizRepository`.
pub struct QuizStore {
    db: DatabaseConnection,
}

impl QuizStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_questions(&self, quiz_id: i64) -> AppResult<Vec<question::Model>> {
        question::Entity::find()
            .filter(question::Column::QuizId.eq(quiz_id))
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)
    }

    /// Convert quiz rows into domain entities, loading all their questions
    /// in a single query.
    async fn with_questions(&self, models: Vec<quiz::Model>) -> AppResult<Vec<Quiz>> {
        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let mut grouped: HashMap<i64, Vec<question::Model>> = HashMap::new();
        if !ids.is_empty() {
            let questions = question::Entity::find()
                .filter(question::Column::QuizId.is_in(ids))
                .order_by_asc(question::Column::Id)
                .all(&self.db)
                .await?;
            for q in questions {
                grouped.entry(q.quiz_id).or_default().push(q);
            }
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let questions = grouped.remove(&m.id).unwrap_or_default();
                quiz::to_domain(m, questions)
            })
            .collect())
    }
}

fn question_active_model(
    quiz_id: i64,
    question: &Question,
    now: DateTime<Utc>,
) -> question::ActiveModel {
    question::ActiveModel {
        id: NotSet,
        quiz_id: Set(quiz_id),
        text: Set(question.text.clone()),
        question_type: Set(question.question_type.as_str().to_string()),
        options: Set(string_list_json(&question.options)),
        correct_answers: Set(string_list_json(&question.correct_answers)),
        points: Set(question.points),
        explanation: Set(question.explanation.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

fn string_list_json(list: &[String]) -> serde_json::Value {
    serde_json::Value::Array(
        list.iter()
            .map(|s| serde_json::Value::String(s.clone()))
            .collect(),
    )
}

#[async_trait]
impl Repository<Quiz, i64> for QuizStore {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let model = quiz::ActiveModel {
            id: NotSet,
            public_id: Set(quiz.public_id),
            title: Set(quiz.title.clone()),
            category: Set(quiz.category.clone()),
            difficulty: Set(quiz.difficulty.as_str().to_string()),
            description: Set(quiz.description.clone()),
            time_limit: Set(quiz.time_limit),
            passing_score: Set(quiz.passing_score),
            status: Set(quiz.status.clone()),
            created_by: Set(quiz.created_by.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        // Owned questions are persisted with the quiz
        let mut questions = Vec::with_capacity(quiz.questions.len());
        for q in &quiz.questions {
            let stored = question_active_model(model.id, q, now).insert(&txn).await?;
            questions.push(stored);
        }

        txn.commit().await?;
        Ok(quiz::to_domain(model, questions))
    }

    async fn insert_all(&self, quizzes: Vec<Quiz>) -> AppResult<Vec<Quiz>> {
        let mut stored = Vec::with_capacity(quizzes.len());
        for quiz in quizzes {
            stored.push(self.insert(quiz).await?);
        }
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let Some(model) = quiz::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let questions = self.load_questions(model.id).await?;
        Ok(Some(quiz::to_domain(model, questions)))
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        let models = quiz::Entity::find()
            .order_by_asc(quiz::Column::Id)
            .all(&self.db)
            .await?;
        self.with_questions(models).await
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<(Vec<Quiz>, u64)> {
        let paginator = quiz::Entity::find()
            .order_by_asc(quiz::Column::Id)
            .paginate(&self.db, page.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page).await?;
        Ok((self.with_questions(models).await?, total))
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Quiz> {
        let existing = quiz::Entity::find_by_id(quiz.id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: quiz::ActiveModel = existing.into();
        active.title = Set(quiz.title.clone());
        active.category = Set(quiz.category.clone());
        active.difficulty = Set(quiz.difficulty.as_str().to_string());
        active.description = Set(quiz.description.clone());
        active.time_limit = Set(quiz.time_limit);
        active.passing_score = Set(quiz.passing_score);
        active.status = Set(quiz.status.clone());
        active.created_by = Set(quiz.created_by.clone());
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        let questions = self.load_questions(model.id).await?;
        Ok(quiz::to_domain(model, questions))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        quiz::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> AppResult<u64> {
        let result = quiz::Entity::delete_many()
            .filter(quiz::Column::Id.is_in(ids.to_vec()))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let count = quiz::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        quiz::Entity::find().count(&self.db).await.map_err(AppError::from)
    }
}

#[async_trait]
impl PublicRepository<Quiz, i64> for QuizStore {
    async fn find_by_public_id(&self, public_id: Uuid) -> AppResult<Option<Quiz>> {
        let Some(model) = quiz::Entity::find()
            .filter(quiz::Column::PublicId.eq(public_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        let questions = self.load_questions(model.id).await?;
        Ok(Some(quiz::to_domain(model, questions)))
    }

    async fn find_by_public_ids(&self, public_ids: &[Uuid]) -> AppResult<Vec<Quiz>> {
        let models = quiz::Entity::find()
            .filter(quiz::Column::PublicId.is_in(public_ids.to_vec()))
            .order_by_asc(quiz::Column::Id)
            .all(&self.db)
            .await?;
        self.with_questions(models).await
    }

    async fn exists_by_public_id(&self, public_id: Uuid) -> AppResult<bool> {
        let count = quiz::Entity::find()
            .filter(quiz::Column::PublicId.eq(public_id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn delete_by_public_id(&self, public_id: Uuid) -> AppResult<()> {
        quiz::Entity::delete_many()
            .filter(quiz::Column::PublicId.eq(public_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete_by_public_ids(&self, public_ids: &[Uuid]) -> AppResult<u64> {
        let result = quiz::Entity::delete_many()
            .filter(quiz::Column::PublicId.is_in(public_ids.to_vec()))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl QuizRepository for QuizStore {
    async fn find_all_with_questions(&self) -> AppResult<Vec<Quiz>> {
        let rows = quiz::Entity::find()
            .order_by_asc(quiz::Column::Id)
            .find_with_related(question::Entity)
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(model, questions)| quiz::to_domain(model, questions))
            .collect())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Quiz>> {
        let Some(model) = quiz::Entity::find()
            .filter(quiz::Column::Title.eq(title))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        let questions = self.load_questions(model.id).await?;
        Ok(Some(quiz::to_domain(model, questions)))
    }
}
