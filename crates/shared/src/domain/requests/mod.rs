mod comment;
mod product;

pub use self::comment::CreateCommentRequest;
pub use self::product::{Category, CreateProductRequest, UnknownCategory, UpdateProductRequest};
