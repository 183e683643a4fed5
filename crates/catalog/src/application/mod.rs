//! Catalog Application Layer - Validation and Use Cases

pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod update_book;
pub mod validate;

pub use create_book::CreateBookUseCase;
pub use delete_book::DeleteBookUseCase;
pub use get_book::GetBookUseCase;
pub use list_books::ListBooksUseCase;
pub use update_book::UpdateBookUseCase;
pub use validate::BookInput;
