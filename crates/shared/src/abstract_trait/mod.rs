mod cart;
mod comment;
mod product;
mod seeder;
mod session;

pub use self::cart::{CartServiceTrait, DynCartService};
pub use self::comment::{
    CommentRepositoryTrait, CommentServiceTrait, DynCommentRepository, DynCommentService,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::seeder::{DynSeederService, SeederServiceTrait};
pub use self::session::{DynSessionStore, SessionStoreTrait};
