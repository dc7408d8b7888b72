mod comment;
mod memory;
mod product;

pub use self::comment::CommentRepository;
pub use self::memory::InMemoryCatalogue;
pub use self::product::{ProductCommandRepository, ProductQueryRepository};
