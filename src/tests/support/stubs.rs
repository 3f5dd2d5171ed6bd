use async_trait::async_trait;

use crate::account::application::{
    domain::entities::PublicUser,
    error::AccountError,
    ports::incoming::use_cases::{
        AuthenticateUserCommand, AuthenticateUserUseCase, ChangeEmailCommand, ChangeEmailUseCase,
        ChangedEmail, RegisterUserCommand, RegisterUserUseCase, ResetPasswordCommand,
        ResetPasswordUseCase, UpdateProfileCommand, UpdateProfileUseCase,
    },
};

use super::fixtures::sample_user;

// ── Register ────────────────────────────────────────────────────────────

pub struct StubRegisterUser(Result<(), AccountError>);

impl StubRegisterUser {
    pub fn ok() -> Self {
        Self(Ok(()))
    }

    pub fn failing(err: AccountError) -> Self {
        Self(Err(err))
    }
}

#[async_trait]
impl RegisterUserUseCase for StubRegisterUser {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<(), AccountError> {
        self.0.clone()
    }
}

// ── Authenticate ────────────────────────────────────────────────────────

pub struct StubAuthenticateUser(Result<PublicUser, AccountError>);

impl StubAuthenticateUser {
    pub fn ok(user: PublicUser) -> Self {
        Self(Ok(user))
    }

    pub fn failing(err: AccountError) -> Self {
        Self(Err(err))
    }
}

#[async_trait]
impl AuthenticateUserUseCase for StubAuthenticateUser {
    async fn execute(&self, _command: AuthenticateUserCommand) -> Result<PublicUser, AccountError> {
        self.0.clone()
    }
}

// ── Update profile ──────────────────────────────────────────────────────

pub struct StubUpdateProfile(Result<PublicUser, AccountError>);

impl StubUpdateProfile {
    pub fn ok(user: PublicUser) -> Self {
        Self(Ok(user))
    }

    pub fn failing(err: AccountError) -> Self {
        Self(Err(err))
    }
}

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfile {
    async fn execute(&self, _command: UpdateProfileCommand) -> Result<PublicUser, AccountError> {
        self.0.clone()
    }
}

// ── Reset password ──────────────────────────────────────────────────────

pub struct StubResetPassword(Result<(), AccountError>);

impl StubResetPassword {
    pub fn ok() -> Self {
        Self(Ok(()))
    }

    pub fn failing(err: AccountError) -> Self {
        Self(Err(err))
    }
}

#[async_trait]
impl ResetPasswordUseCase for StubResetPassword {
    async fn execute(&self, _command: ResetPasswordCommand) -> Result<(), AccountError> {
        self.0.clone()
    }
}

// ── Change email ────────────────────────────────────────────────────────

pub struct StubChangeEmail(Result<ChangedEmail, AccountError>);

impl StubChangeEmail {
    pub fn ok(email: &str) -> Self {
        Self(Ok(ChangedEmail {
            email: email.to_string(),
        }))
    }

    pub fn failing(err: AccountError) -> Self {
        Self(Err(err))
    }
}

#[async_trait]
impl ChangeEmailUseCase for StubChangeEmail {
    async fn execute(&self, _command: ChangeEmailCommand) -> Result<ChangedEmail, AccountError> {
        self.0.clone()
    }
}

/// Default for handlers a test does not exercise.
pub fn default_public_user() -> PublicUser {
    sample_user("stub@example.com", "stub-hash").to_public()
}
