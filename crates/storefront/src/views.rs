//! Template contexts. URLs are resolved here so templates only print values.

use crate::{
    forms::{FormErrors, ProductForm},
    routes,
};
use askama::Template;
use shared::domain::{
    requests::Category,
    responses::{CartResponse, CommentResponse, ProductResponse},
};

#[derive(Debug, Clone)]
pub struct NavLinks {
    pub home: String,
    pub about: String,
    pub products: String,
    pub products_list: String,
    pub create: String,
    pub cart: String,
}

impl NavLinks {
    pub fn new() -> Self {
        Self {
            home: routes::path("pages:home"),
            about: routes::path("pages:about"),
            products: routes::path("products:index"),
            products_list: routes::path("products:list"),
            create: routes::path("products:create"),
            cart: routes::path("cart:index"),
        }
    }
}

impl Default for NavLinks {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: i32,
    pub name: String,
    pub price_display: String,
    pub category: String,
    pub description: String,
    pub created_at: String,
    pub show_url: String,
    pub add_to_cart_url: String,
}

impl From<ProductResponse> for ProductCard {
    fn from(product: ProductResponse) -> Self {
        Self {
            show_url: routes::path_with_id("products:show", product.id),
            add_to_cart_url: routes::path_with_id("cart:add", product.id),
            id: product.id,
            name: product.name,
            price_display: product.price_display,
            category: product.category,
            description: product.description.unwrap_or_default(),
            created_at: product.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub value: &'static str,
    pub selected: bool,
}

/// Values and inline errors for rendering the product form.
#[derive(Debug, Clone, Default)]
pub struct ProductFormView {
    pub name: String,
    pub price: String,
    pub category: String,
    pub description: String,
    pub name_errors: Vec<String>,
    pub price_errors: Vec<String>,
    pub category_errors: Vec<String>,
    pub description_errors: Vec<String>,
    pub categories: Vec<CategoryOption>,
}

impl ProductFormView {
    pub fn empty() -> Self {
        Self::bound(&ProductForm::default(), &FormErrors::default())
    }

    pub fn bound(form: &ProductForm, errors: &FormErrors) -> Self {
        let categories = Category::ALL
            .iter()
            .map(|c| CategoryOption {
                value: c.as_str(),
                selected: c.as_str() == form.category,
            })
            .collect();

        Self {
            name: form.name.clone(),
            price: form.price.clone(),
            category: form.category.clone(),
            description: form.description.clone(),
            name_errors: errors.get("name").to_vec(),
            price_errors: errors.get("price").to_vec(),
            category_errors: errors.get("category").to_vec(),
            description_errors: errors.get("description").to_vec(),
            categories,
        }
    }
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub nav: NavLinks,
    pub title: &'static str,
    pub header_title: &'static str,
    pub tagline: &'static str,
}

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub nav: NavLinks,
    pub title: &'static str,
    pub header_title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub author: &'static str,
}

#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductIndexTemplate {
    pub nav: NavLinks,
    pub title: &'static str,
    pub header_title: &'static str,
    pub products: Vec<ProductCard>,
}

#[derive(Template)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub nav: NavLinks,
    pub title: String,
    pub header_title: &'static str,
    pub product: ProductCard,
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Clone)]
pub struct SubmittedProduct {
    pub name: String,
    pub price_display: String,
}

#[derive(Template)]
#[template(path = "products/create.html")]
pub struct ProductCreateTemplate {
    pub nav: NavLinks,
    pub title: &'static str,
    pub header_title: &'static str,
    pub action_url: String,
    pub form: ProductFormView,
    pub success: bool,
    pub submitted: Option<SubmittedProduct>,
}

#[derive(Template)]
#[template(path = "cart/index.html")]
pub struct CartTemplate {
    pub nav: NavLinks,
    pub title: &'static str,
    pub header_title: &'static str,
    pub items: Vec<ProductCard>,
    pub total_display: String,
    pub remove_all_url: String,
}

impl CartTemplate {
    pub fn new(cart: CartResponse) -> Self {
        Self {
            nav: NavLinks::new(),
            title: "Cart",
            header_title: "Your Cart",
            total_display: cart.total_display,
            items: cart.items.into_iter().map(ProductCard::from).collect(),
            remove_all_url: routes::path("cart:remove_all"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminProductRow {
    pub id: i32,
    pub name: String,
    pub price_display: String,
    pub created_at: String,
    pub edit_url: String,
    pub delete_url: String,
}

impl From<ProductResponse> for AdminProductRow {
    fn from(product: ProductResponse) -> Self {
        Self {
            edit_url: routes::path_with_id("admin:product_edit", product.id),
            delete_url: routes::path_with_id("admin:product_delete", product.id),
            id: product.id,
            name: product.name,
            price_display: product.price_display,
            created_at: product.created_at,
        }
    }
}

#[derive(Template)]
#[template(path = "admin/products.html")]
pub struct AdminProductsTemplate {
    pub nav: NavLinks,
    pub title: &'static str,
    pub query: String,
    pub search_url: String,
    pub comments_url: String,
    pub products: Vec<AdminProductRow>,
}

#[derive(Template)]
#[template(path = "admin/edit.html")]
pub struct AdminEditTemplate {
    pub nav: NavLinks,
    pub title: String,
    pub product_id: i32,
    pub updated_at: String,
    pub action_url: String,
    pub delete_url: String,
    pub back_url: String,
    pub form: ProductFormView,
}

#[derive(Debug, Clone)]
pub struct AdminCommentRow {
    pub id: i32,
    pub product: String,
    pub product_url: String,
    pub body: String,
    pub created_at: String,
}

#[derive(Template)]
#[template(path = "admin/comments.html")]
pub struct AdminCommentsTemplate {
    pub nav: NavLinks,
    pub title: &'static str,
    pub products_url: String,
    pub comments: Vec<AdminCommentRow>,
}
