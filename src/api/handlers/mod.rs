//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod book;
pub mod books;
pub mod comments;
pub mod root;

pub use book::{get_book_handler, put_book_handler};
pub use books::{create_book_handler, list_books_handler};
pub use comments::{create_comment_handler, list_comments_handler};
pub use root::root_handler;
