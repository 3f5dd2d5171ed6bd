use std::sync::Arc;

use crate::account::application::{
    ports::{
        incoming::use_cases::{
            AuthenticateUserUseCase, ChangeEmailUseCase, RegisterUserUseCase,
            ResetPasswordUseCase, UpdateProfileUseCase,
        },
        outgoing::{PasswordHasher, UserStore},
    },
    services::{
        AuthenticateUserService, ChangeEmailService, RegisterUserService, ResetPasswordService,
        UpdateProfileService,
    },
};

#[derive(Clone)]
pub struct AccountUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub authenticate: Arc<dyn AuthenticateUserUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
    pub change_email: Arc<dyn ChangeEmailUseCase + Send + Sync>,
}

impl AccountUseCases {
    /// Builds every service over one store handle and one hasher.
    pub fn new<S>(store: S, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self
    where
        S: UserStore + Clone + Send + Sync + 'static,
    {
        Self {
            register: Arc::new(RegisterUserService::new(
                store.clone(),
                Arc::clone(&password_hasher),
            )),
            authenticate: Arc::new(AuthenticateUserService::new(
                store.clone(),
                Arc::clone(&password_hasher),
            )),
            update_profile: Arc::new(UpdateProfileService::new(store.clone())),
            reset_password: Arc::new(ResetPasswordService::new(
                store.clone(),
                Arc::clone(&password_hasher),
            )),
            change_email: Arc::new(ChangeEmailService::new(store, password_hasher)),
        }
    }
}
