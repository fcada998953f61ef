mod requests;
mod types;

pub use requests::{CreateBookArgs, GetBookByIdArgs};
pub use types::Book;
