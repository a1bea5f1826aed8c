//! User model -> entity mapper
//!
//! The password hash stays in the model and never crosses into the entity.

use bookstack_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            uuid: model.uuid,
            name: model.name,
            username: model.username,
            email: model.email,
            profile_image_url: model.profile_image_url,
            tier_id: model.tier_id,
            is_superuser: model.is_superuser,
            created_at: model.created_at,
            updated_at: model.updated_at,
            is_deleted: model.is_deleted,
            deleted_at: model.deleted_at,
        }
    }
}
