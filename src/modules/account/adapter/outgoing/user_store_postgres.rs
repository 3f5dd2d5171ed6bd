use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::error;

use crate::account::application::{
    domain::{
        entities::{User, UserId},
        validation::{validate_email, validate_full_name, validate_phone_number},
    },
    ports::outgoing::{NewUser, ProfileChanges, UserStore, UserStoreError},
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl UserStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_user(model: UserModel) -> User {
        User {
            id: UserId::from(model.id),
            full_name: model.full_name,
            email: model.email,
            password_hash: model.password_hash,
            phone_number: model.phone_number,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }

    /// Store-level field rules, applied to every record written.
    fn check_fields(full_name: &str, email: &str, phone_number: &str) -> Result<(), UserStoreError> {
        validate_full_name(full_name, "fullName")?;
        validate_email(email, "email")?;
        validate_phone_number(phone_number, "phoneNumber")?;
        Ok(())
    }

    fn map_write_error(err: DbErr) -> UserStoreError {
        if matches!(err, DbErr::RecordNotUpdated) {
            return UserStoreError::NotFound;
        }

        let err_str = err.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserStoreError::DuplicateEmail;
        }

        error!(error = %err, "User write failed");
        UserStoreError::Database(err.to_string())
    }

    fn map_read_error(err: DbErr) -> UserStoreError {
        error!(error = %err, "User read failed");
        UserStoreError::Database(err.to_string())
    }
}

#[async_trait]
impl UserStore for UserStorePostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(Self::map_read_error)?;

        Ok(user.map(Self::to_user))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let user = UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(Self::map_read_error)?;

        Ok(user.map(Self::to_user))
    }

    async fn create(&self, fields: NewUser) -> Result<User, UserStoreError> {
        Self::check_fields(&fields.full_name, &fields.email, &fields.phone_number)?;

        let active_user = UserActiveModel {
            id: Set(UserId::new().value()),
            full_name: Set(fields.full_name),
            email: Set(fields.email),
            password_hash: Set(fields.password_hash),
            phone_number: Set(fields.phone_number),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::to_user(inserted))
    }

    async fn update(&self, id: UserId, changes: ProfileChanges) -> Result<User, UserStoreError> {
        Self::check_fields(&changes.full_name, &changes.email, &changes.phone_number)?;

        let user = UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(Self::map_read_error)?
            .ok_or(UserStoreError::NotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.full_name = Set(changes.full_name);
        active_user.email = Set(changes.email);
        active_user.phone_number = Set(changes.phone_number);

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::to_user(updated))
    }

    async fn save(&self, user: User) -> Result<User, UserStoreError> {
        Self::check_fields(&user.full_name, &user.email, &user.phone_number)?;

        let active_user = UserActiveModel {
            id: Unchanged(user.id.value()),
            full_name: Set(user.full_name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            phone_number: Set(user.phone_number),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let saved = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::to_user(saved))
    }
}
