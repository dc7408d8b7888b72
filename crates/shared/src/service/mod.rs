mod cart;
mod comment;
mod product;
mod seeder;

pub use self::cart::{CART_SESSION_KEY, CartService};
pub use self::comment::CommentService;
pub use self::product::{ProductCommandService, ProductQueryService, ProductService};
pub use self::seeder::{SeedPlan, SeedProduct, SeederService};
