mod authenticate_user_use_case;
mod change_email_use_case;
mod register_user_use_case;
mod reset_password_use_case;
mod update_profile_use_case;

pub use authenticate_user_use_case::{AuthenticateUserCommand, AuthenticateUserUseCase};
pub use change_email_use_case::{ChangeEmailCommand, ChangeEmailUseCase, ChangedEmail};
pub use register_user_use_case::{RegisterUserCommand, RegisterUserUseCase};
pub use reset_password_use_case::{ResetPasswordCommand, ResetPasswordUseCase};
pub use update_profile_use_case::{UpdateProfileCommand, UpdateProfileUseCase};
