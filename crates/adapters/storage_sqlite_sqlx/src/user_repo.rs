//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use gearhub_app::ports::UserRepository;
use gearhub_domain::error::{ConflictError, GearHubError};
use gearhub_domain::user::User;

use crate::error::{StorageError, is_unique_violation};

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            email: row.try_get("email")?,
            name: row.try_get("name")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (email, name) VALUES (?, ?)";
const SELECT_BY_EMAIL: &str = "SELECT email, name FROM users WHERE email = ?";
const SELECT_ALL: &str = "SELECT email, name FROM users ORDER BY seq";
const UPDATE: &str = "UPDATE users SET name = ? WHERE email = ?";
const DELETE_BY_EMAIL: &str = "DELETE FROM users WHERE email = ?";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, GearHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&user.email)
                .bind(&user.name)
                .execute(&pool)
                .await;

            match result {
                Ok(_) => Ok(user),
                Err(err) if is_unique_violation(&err) => {
                    Err(ConflictError::DuplicateUser { email: user.email }.into())
                }
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, GearHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, GearHubError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
                .bind(email)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, GearHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&user.name)
                .bind(&user.email)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(user)
        }
    }

    fn delete(&self, email: &str) -> impl Future<Output = Result<(), GearHubError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_string();
        async move {
            sqlx::query(DELETE_BY_EMAIL)
                .bind(email)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteUserRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteUserRepository::new(db.pool().clone())
    }

    fn user(email: &str, name: &str) -> User {
        User {
            email: email.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_and_find_user_by_email() {
        let repo = setup().await;
        repo.create(user("max@mci.edu", "Max")).await.unwrap();

        let fetched = repo.find_by_email("max@mci.edu").await.unwrap().unwrap();
        assert_eq!(fetched.name, "Max");
    }

    #[tokio::test]
    async fn should_return_none_when_user_not_found() {
        let repo = setup().await;
        assert!(repo.find_by_email("ghost@mci.edu").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_report_conflict_when_email_already_stored() {
        let repo = setup().await;
        repo.create(user("max@mci.edu", "Max")).await.unwrap();

        let result = repo.create(user("max@mci.edu", "Other Max")).await;
        assert!(matches!(
            result,
            Err(GearHubError::Conflict(ConflictError::DuplicateUser { .. }))
        ));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_list_users_in_insertion_order() {
        let repo = setup().await;
        repo.create(user("zoe@mci.edu", "Zoe")).await.unwrap();
        repo.create(user("adam@mci.edu", "Adam")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].email, "zoe@mci.edu");
        assert_eq!(all[1].email, "adam@mci.edu");
    }

    #[tokio::test]
    async fn should_update_name_when_user_exists() {
        let repo = setup().await;
        repo.create(user("anna@mci.edu", "Anna")).await.unwrap();

        repo.update(user("anna@mci.edu", "Anna Schmidt"))
            .await
            .unwrap();

        let fetched = repo.find_by_email("anna@mci.edu").await.unwrap().unwrap();
        assert_eq!(fetched.name, "Anna Schmidt");
    }

    #[tokio::test]
    async fn should_delete_user_when_exists() {
        let repo = setup().await;
        repo.create(user("peter@mci.edu", "Peter")).await.unwrap();
        repo.create(user("lisa@mci.edu", "Lisa")).await.unwrap();

        repo.delete("peter@mci.edu").await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![user("lisa@mci.edu", "Lisa")]);
    }
}
