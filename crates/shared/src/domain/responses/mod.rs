mod cart;
mod comment;
mod product;
mod seed;

pub use self::cart::CartResponse;
pub use self::comment::CommentResponse;
pub use self::product::{ProductDetailResponse, ProductResponse};
pub use self::seed::SeedReport;
