//! Account lifecycle operations: registration, credential checks, token
//! issuance at login, and user → admin promotion.

use std::sync::Arc;

use tracing::{debug, info, warn};

use taskhub_auth::jwt::JwtEncoder;
use taskhub_auth::password::PasswordHasher;
use taskhub_core::error::AppError;
use taskhub_database::store::UserStore;
use taskhub_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Orchestrates the identity lifecycle on top of a [`UserStore`].
#[derive(Clone)]
pub struct AccountService {
    /// Identity store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer used by `login`.
    encoder: Arc<JwtEncoder>,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService")
            .field("encoder", &self.encoder)
            .finish_non_exhaustive()
    }
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Registers a new account.
    ///
    /// The first account ever created becomes the admin. Two concurrent
    /// first registrations can both observe an empty store and both become
    /// admin; that window is accepted. Username uniqueness is enforced by
    /// the store's own insert, the lookup here only gives a cheap early
    /// answer.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::validation("username cannot be empty"));
        }
        if password.is_empty() {
            return Err(AppError::validation("password cannot be empty"));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::duplicate_user(format!(
                "username '{username}' already exists"
            )));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let role = UserRole::for_new_account(self.users.count().await?);

        let user = self
            .users
            .insert(&CreateUser {
                username: username.to_string(),
                password_hash,
                role,
            })
            .await?;

        match user.role {
            UserRole::Admin => warn!(
                user_id = %user.id,
                username = %user.username,
                "First account registered, granted admin role"
            ),
            UserRole::User => info!(
                user_id = %user.id,
                username = %user.username,
                "User registered"
            ),
        }

        Ok(user)
    }

    /// Checks a username/password pair.
    ///
    /// An unknown username and a wrong password produce the same error so
    /// callers cannot tell which one happened.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            debug!(username = %username, "Login for unknown username");
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            debug!(user_id = %user.id, "Login with wrong password");
            return Err(AppError::invalid_credentials());
        }

        Ok(user)
    }

    /// Authenticates and issues a token carrying the user's current role.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self.authenticate(username, password).await?;
        let token = self.encoder.issue(user.id, &user.username, user.role)?;

        info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(token)
    }

    /// Promotes a user to admin.
    ///
    /// This is the only path that changes a role. Tokens issued before the
    /// promotion keep their old role claim until the user logs in again.
    pub async fn promote(&self, ctx: &RequestContext, username: &str) -> Result<User, AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::user_not_found(format!("user '{username}' not found")))?;

        match user.role {
            UserRole::Admin => {
                return Err(AppError::already_admin(format!(
                    "user '{username}' is already an admin"
                )));
            }
            UserRole::User => {}
        }

        // A concurrent promotion may have won between the lookup and here;
        // the store only updates a user that is not admin yet.
        let promoted = self
            .users
            .update_role(username, UserRole::Admin)
            .await?
            .ok_or_else(|| {
                AppError::already_admin(format!("user '{username}' is already an admin"))
            })?;

        info!(
            actor = %ctx.username,
            user_id = %promoted.id,
            username = %promoted.username,
            "User promoted to admin"
        );

        Ok(promoted)
    }
}
