#![allow(dead_code)]

use alias_shortener::api::middleware::auth::BasicCredentials;
use alias_shortener::infrastructure::persistence::SqliteUrlRepository;
use alias_shortener::routes::router;
use alias_shortener::state::AppState;
use alias_shortener::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};
use axum_test::TestServer;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;

pub const ALIAS_LENGTH: usize = 6;

/// Single-connection in-memory database; the connection is never recycled so
/// the data outlives individual queries.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub async fn create_test_repository() -> Arc<SqliteUrlRepository> {
    let pool = memory_pool().await;
    Arc::new(SqliteUrlRepository::new(Arc::new(pool)).await.unwrap())
}

pub async fn insert_mapping(repository: &SqliteUrlRepository, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url(url, alias) VALUES (?, ?)")
        .bind(url)
        .bind(alias)
        .execute(repository.pool())
        .await
        .unwrap();
}

pub async fn count_mappings(repository: &SqliteUrlRepository) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(repository.pool())
        .await
        .unwrap()
}

pub fn create_test_state(
    repository: Arc<SqliteUrlRepository>,
    generator: Arc<dyn AliasGenerator>,
) -> AppState {
    AppState::new(repository, generator, ALIAS_LENGTH)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state, Duration::from_secs(5))).unwrap()
}

/// Server over a fresh database with a random alias generator.
pub async fn setup() -> (TestServer, Arc<SqliteUrlRepository>) {
    let repository = create_test_repository().await;
    let state = create_test_state(repository.clone(), Arc::new(RandomAliasGenerator));
    (create_test_server(state), repository)
}

/// Same as [`setup`] but with basic auth required on `/url` routes.
pub async fn setup_with_auth(user: &str, password: &str) -> (TestServer, Arc<SqliteUrlRepository>) {
    let repository = create_test_repository().await;
    let state = create_test_state(repository.clone(), Arc::new(RandomAliasGenerator))
        .with_credentials(BasicCredentials::new(user, password));
    (create_test_server(state), repository)
}
