//! Post model -> entity mapper

use bookstack_core::entities::Post;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            uuid: model.uuid,
            title: model.title,
            text: model.text,
            media_url: model.media_url,
            created_by_user_id: model.created_by_user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            is_deleted: model.is_deleted,
            deleted_at: model.deleted_at,
        }
    }
}
