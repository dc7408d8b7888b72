mod product;

pub use self::product::{FormErrors, ProductForm};
