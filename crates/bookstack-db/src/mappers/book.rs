//! Book model -> entity mapper

use bookstack_core::entities::Book;

use crate::models::BookModel;

impl From<BookModel> for Book {
    fn from(model: BookModel) -> Self {
        Book {
            id: model.id,
            uuid: model.uuid,
            title: model.title,
            author: model.author,
            description: model.description,
            isbn: model.isbn,
            publication_year: model.publication_year,
            genre: model.genre,
            pages: model.pages,
            cover_image_url: model.cover_image_url,
            folder_path: model.folder_path,
            file_size_bytes: model.file_size_bytes,
            content_hash: model.content_hash,
            created_by_user_id: model.created_by_user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            is_deleted: model.is_deleted,
            deleted_at: model.deleted_at,
        }
    }
}
