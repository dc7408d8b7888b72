mod comment;
mod product;

pub use self::comment::Comment;
pub use self::product::Product;
