//! Question repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use common::{AppError, AppResult, PageRequest, Repository};
use domain::{Question, QuestionType};

use super::entities::question;

/// Question data access: the generic contract plus the quiz-scoped and
/// aggregate queries.
#[async_trait]
pub trait QuestionRepository: Repository<Question, i64> {
    /// Questions of one quiz, ordered by id.
    async fn find_by_quiz_id(&self, quiz_id: i64) -> AppResult<Vec<Question>>;

    /// Questions of a given type, newest first.
    async fn find_by_type(&self, question_type: QuestionType) -> AppResult<Vec<Question>>;

    /// Questions of one quiz restricted to a type, ordered by id.
    async fn find_by_quiz_id_and_type(
        &self,
        quiz_id: i64,
        question_type: QuestionType,
    ) -> AppResult<Vec<Question>>;

    /// Questions awarding at least `min_points`, highest first.
    async fn find_by_minimum_points(&self, min_points: i32) -> AppResult<Vec<Question>>;

    /// Number of questions in one quiz.
    async fn count_by_quiz_id(&self, quiz_id: i64) -> AppResult<u64>;

    /// Sum of points over one quiz; 0 when the quiz has no questions.
    async fn total_points_by_quiz_id(&self, quiz_id: i64) -> AppResult<i64>;
}

/// Concrete SeaORM-backed implementation of `QuestionRepository`.
pub struct QuestionStore {
    db: DatabaseConnection,
}

impl QuestionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(question: &Question) -> question::ActiveModel {
    let now = Utc::now();
    question::ActiveModel {
        id: NotSet,
        quiz_id: Set(question.quiz_id),
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

#[derive(FromQueryResult)]
struct TotalPoints {
    total: Option<i64>,
}

#[async_trait]
impl Repository<Question, i64> for QuestionStore {
    async fn insert(&self, question: Question) -> AppResult<Question> {
        let model = active_model(&question).insert(&self.db).await?;
        Ok(Question::from(model))
    }

    async fn insert_all(&self, questions: Vec<Question>) -> AppResult<Vec<Question>> {
        let mut stored = Vec::with_capacity(questions.len());
        for question in questions {
            stored.push(self.insert(question).await?);
        }
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let model = question::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Question::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let models = question::Entity::find()
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Question::from).collect())
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<(Vec<Question>, u64)> {
        let paginator = question::Entity::find()
            .order_by_asc(question::Column::Id)
            .paginate(&self.db, page.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page).await?;
        Ok((models.into_iter().map(Question::from).collect(), total))
    }

    async fn update(&self, question: Question) -> AppResult<Question> {
        let existing = question::Entity::find_by_id(question.id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: question::ActiveModel = existing.into();
        active.text = Set(question.text.clone());
        active.question_type = Set(question.question_type.as_str().to_string());
        active.options = Set(string_list_json(&question.options));
        active.correct_answers = Set(string_list_json(&question.correct_answers));
        active.points = Set(question.points);
        active.explanation = Set(question.explanation.clone());
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Question::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        question::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> AppResult<u64> {
        let result = question::Entity::delete_many()
            .filter(question::Column::Id.is_in(ids.to_vec()))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let count = question::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        question::Entity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl QuestionRepository for QuestionStore {
    async fn find_by_quiz_id(&self, quiz_id: i64) -> AppResult<Vec<Question>> {
        let models = question::Entity::find()
            .filter(question::Column::QuizId.eq(quiz_id))
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Question::from).collect())
    }

    async fn find_by_type(&self, question_type: QuestionType) -> AppResult<Vec<Question>> {
        let models = question::Entity::find()
            .filter(question::Column::QuestionType.eq(question_type.as_str()))
            .order_by_desc(question::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Question::from).collect())
    }

    async fn find_by_quiz_id_and_type(
        &self,
        quiz_id: i64,
        question_type: QuestionType,
    ) -> AppResult<Vec<Question>> {
        let models = question::Entity::find()
            .filter(question::Column::QuizId.eq(quiz_id))
            .filter(question::Column::QuestionType.eq(question_type.as_str()))
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Question::from).collect())
    }

    async fn find_by_minimum_points(&self, min_points: i32) -> AppResult<Vec<Question>> {
        let models = question::Entity::find()
            .filter(question::Column::Points.gte(min_points))
            .order_by_desc(question::Column::Points)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Question::from).collect())
    }

    async fn count_by_quiz_id(&self, quiz_id: i64) -> AppResult<u64> {
        question::Entity::find()
            .filter(question::Column::QuizId.eq(quiz_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn total_points_by_quiz_id(&self, quiz_id: i64) -> AppResult<i64> {
        let result = question::Entity::find()
            .select_only()
            .column_as(question::Column::Points.sum(), "total")
            .filter(question::Column::QuizId.eq(quiz_id))
            .into_model::<TotalPoints>()
            .one(&self.db)
            .await?;
        Ok(result.and_then(|r| r.total).unwrap_or(0))
    }
}
