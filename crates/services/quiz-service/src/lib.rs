//! Quiz Service Library
//!
//! HTTP microservice managing quizzes and their questions, built on the
//! shared generic CRUD layer. It can be run as a standalone binary via
//! `quiz-service serve`.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::QuizServiceConfig;
use crate::infra::Database;

/// Run the HTTP server with configuration from the environment.
pub async fn run_server(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = QuizServiceConfig {
        host: host.to_string(),
        port,
        ..QuizServiceConfig::from_env()
    };

    let db = Database::connect(&config.database_url).await?;
    let state = AppState::new(db.get_connection());

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Quiz service listening on {}", addr);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = QuizServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database_url).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
