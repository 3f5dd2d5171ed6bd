use crate::account::application::account_use_cases::AccountUseCases;
use crate::account::application::ports::incoming::use_cases::{
    AuthenticateUserUseCase, ChangeEmailUseCase, RegisterUserUseCase, ResetPasswordUseCase,
    UpdateProfileUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    authenticate: Arc<dyn AuthenticateUserUseCase + Send + Sync>,
    update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
    change_email: Arc<dyn ChangeEmailUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register: Arc::new(StubRegisterUser::ok()),
            authenticate: Arc::new(StubAuthenticateUser::ok(default_public_user())),
            update_profile: Arc::new(StubUpdateProfile::ok(default_public_user())),
            reset_password: Arc::new(StubResetPassword::ok()),
            change_email: Arc::new(StubChangeEmail::ok("stub@example.com")),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register(mut self, uc: impl RegisterUserUseCase + Send + Sync + 'static) -> Self {
        self.register = Arc::new(uc);
        self
    }

    pub fn with_authenticate(
        mut self,
        uc: impl AuthenticateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.authenticate = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl ResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reset_password = Arc::new(uc);
        self
    }

    pub fn with_change_email(
        mut self,
        uc: impl ChangeEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.change_email = Arc::new(uc);
        self
    }

    /// Wires every use case from one set of services.
    pub fn with_account(mut self, account: AccountUseCases) -> Self {
        self.register = account.register;
        self.authenticate = account.authenticate;
        self.update_profile = account.update_profile;
        self.reset_password = account.reset_password;
        self.change_email = account.change_email;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            account: AccountUseCases {
                register: self.register,
                authenticate: self.authenticate,
                update_profile: self.update_profile,
                reset_password: self.reset_password,
                change_email: self.change_email,
            },
        })
    }
}
