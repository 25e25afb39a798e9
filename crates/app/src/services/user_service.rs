//! User service — use-cases for managing users.

use gearhub_domain::error::{ConflictError, GearHubError, NotFoundError, ValidationError};
use gearhub_domain::outcome::Outcome;
use gearhub_domain::user::User;

use crate::ports::UserRepository;

/// Application service for user registration and maintenance.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new user.
    ///
    /// Required fields are checked first, then the email format, then
    /// uniqueness of the normalized email.
    ///
    /// # Errors
    ///
    /// Returns [`GearHubError::Validation`] for blank fields or an email
    /// without `@`, [`GearHubError::Conflict`] if the email is taken, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, name))]
    pub async fn register(&self, email: &str, name: &str) -> Result<Outcome, GearHubError> {
        let user = User::builder()
            .email(email)
            .name(name)
            .build()
            .inspect_err(|err| tracing::debug!(error = %err, "rejecting invalid user"))?;

        if self.repo.find_by_email(&user.email).await?.is_some() {
            tracing::debug!(email = %user.email, "rejecting duplicate user");
            return Err(ConflictError::DuplicateUser { email: user.email }.into());
        }

        let user = self.repo.create(user).await?;
        tracing::info!(email = %user.email, "user registered");
        Ok(Outcome::success(format!(
            "user '{}' with email '{}' registered",
            user.name, user.email
        )))
    }

    /// List all users in storage order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_all(&self) -> Result<Vec<User>, GearHubError> {
        self.repo.get_all().await
    }

    /// Delete the user whose stored email equals `email`.
    ///
    /// The lookup is exact: callers normalize the email beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`GearHubError::NotFound`] if no user matches, or a storage
    /// error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_by_email(&self, email: &str) -> Result<Outcome, GearHubError> {
        let user = self.require(email).await?;
        self.repo.delete(&user.email).await?;
        tracing::info!("user deleted");
        Ok(Outcome::success(format!(
            "user with email '{}' deleted",
            user.email
        )))
    }

    /// Replace the name of the user whose stored email equals `email`.
    ///
    /// # Errors
    ///
    /// Returns [`GearHubError::Validation`] if `new_name` is blank,
    /// [`GearHubError::NotFound`] if no user matches, or a storage error
    /// propagated from the repository.
    #[tracing::instrument(skip(self, new_name))]
    pub async fn rename_by_email(
        &self,
        email: &str,
        new_name: &str,
    ) -> Result<Outcome, GearHubError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            tracing::debug!("rejecting blank name");
            return Err(ValidationError::MissingFields.into());
        }

        let mut user = self.require(email).await?;
        user.name = new_name.to_string();
        let user = self.repo.update(user).await?;
        tracing::info!("user renamed");
        Ok(Outcome::success(format!("user '{}' updated", user.email)))
    }

    async fn require(&self, email: &str) -> Result<User, GearHubError> {
        self.repo.find_by_email(email).await?.ok_or_else(|| {
            tracing::debug!("no user with this email");
            NotFoundError {
                entity: "user",
                key: email.to_string(),
            }
            .into()
        })
    }
}
