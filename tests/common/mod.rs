#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use quotes_service::db::{DbPool, establish_connection_pool};
use quotes_service::generator::errors::QuoteResult;
use quotes_service::generator::{HttpTransport, TransportResponse};
use quotes_service::schema::recipients;
use reqwest::{Request, StatusCode, Url};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// SQLite database living in a temporary directory for the duration of a test.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    /// Creates the database and applies every migration.
    pub fn new(name: &str) -> Self {
        let test_db = Self::without_schema(name);
        let mut conn = test_db.pool.get().expect("connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("migrations should apply");
        test_db
    }

    /// Creates an empty database with no tables.
    pub fn without_schema(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("connection pool");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn insert_recipient(&self, id: i64, name: Option<&str>, email: Option<&str>) {
        let mut conn = self.pool.get().expect("connection");
        diesel::insert_into(recipients::table)
            .values((
                recipients::id.eq(id),
                recipients::name.eq(name),
                recipients::email.eq(email),
            ))
            .execute(&mut conn)
            .expect("insert recipient");
    }

    /// Inserts `user1`..`user3` with matching `@testmail.com` addresses.
    pub fn seed_recipients(&self) {
        for id in 1..=3 {
            let name = format!("user{id}");
            let email = format!("user{id}@testmail.com");
            self.insert_recipient(id, Some(&name), Some(&email));
        }
    }
}

/// Upstream quote service answering every request with one canned response.
/// Clones share the log of requested urls.
#[derive(Clone)]
pub struct FakeUpstream {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl FakeUpstream {
    pub fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().expect("request log").clone()
    }
}

impl HttpTransport for FakeUpstream {
    async fn execute(&self, request: Request) -> QuoteResult<TransportResponse> {
        self.requests
            .lock()
            .expect("request log")
            .push(request.url().clone());
        Ok(TransportResponse::new(self.status, self.body.as_bytes()))
    }
}
