//! Account registration and credential verification.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use courtyard_auth::{JwtCodec, PasswordHasher};
use courtyard_core::config::AuthConfig;
use courtyard_core::error::AppError;
use courtyard_database::repositories::UserRepository;
use courtyard_entity::user::{NewUser, User, UserRole};

/// Input for account registration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterInput {
    /// Login name, unique case-insensitively.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Email address, unique case-insensitively.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Optional department/branch.
    pub branch: Option<String>,
}

/// Input for credential login.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginInput {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// A successfully authenticated user plus their fresh access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The account record.
    pub user: User,
    /// Signed access token.
    pub access_token: String,
    /// Access-token expiration instant.
    pub expires_at: DateTime<Utc>,
}

/// Handles registration, login, and current-user lookup.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: PasswordHasher,
    jwt: Arc<JwtCodec>,
    password_min_length: usize,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(user_repo: Arc<UserRepository>, jwt: Arc<JwtCodec>, config: &AuthConfig) -> Self {
        Self {
            user_repo,
            hasher: PasswordHasher::new(),
            jwt,
            password_min_length: config.password_min_length,
        }
    }

    /// Registers a new student account and logs it in.
    pub async fn register(&self, input: RegisterInput) -> Result<AuthenticatedUser, AppError> {
        if input.username.trim().is_empty() {
            return Err(AppError::validation("Username must not be empty"));
        }
        if !input.email.contains('@') {
            return Err(AppError::validation("Email address is not valid"));
        }
        if input.password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        if self
            .user_repo
            .find_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username is already taken"));
        }
        if self.user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("Email is already registered"));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self
            .user_repo
            .create(&NewUser {
                username: input.username,
                name: input.name,
                email: input.email,
                password_hash,
                branch: input.branch,
                role: UserRole::Student,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "Registered new account");
        self.issue_token(user)
    }

    /// Verifies credentials and issues an access token.
    ///
    /// A missing user and a wrong password are indistinguishable to the
    /// caller.
    pub async fn login(&self, input: LoginInput) -> Result<AuthenticatedUser, AppError> {
        let user = self
            .user_repo
            .find_by_username(&input.username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        let valid = self
            .hasher
            .verify_password(&input.password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        info!(user_id = %user.id, username = %user.username, "User logged in");
        self.issue_token(user)
    }

    /// Loads the account behind an authenticated request.
    pub async fn current_user(&self, user_id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    fn issue_token(&self, user: User) -> Result<AuthenticatedUser, AppError> {
        let (access_token, expires_at) =
            self.jwt
                .generate_access_token(user.id, user.role, &user.username)?;
        Ok(AuthenticatedUser {
            user,
            access_token,
            expires_at,
        })
    }
}
