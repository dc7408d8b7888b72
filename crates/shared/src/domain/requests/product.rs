use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Books,
    Furniture,
    Accessories,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Books,
        Category::Furniture,
        Category::Accessories,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Books => "Books",
            Category::Furniture => "Furniture",
            Category::Accessories => "Accessories",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Select a valid choice. {0} is not one of the available choices.")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(max = 100, message = "Name must be 100 characters or fewer."))]
    pub name: String,

    #[validate(range(min = 1, message = "Price must be greater than $0.00."))]
    pub price: i64,

    pub category: Category,

    #[validate(length(
        max = 300,
        message = "Ensure this value has at most 300 characters."
    ))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    pub id: i32,

    #[validate(length(max = 100, message = "Name must be 100 characters or fewer."))]
    pub name: String,

    #[validate(range(min = 1, message = "Price must be greater than $0.00."))]
    pub price: i64,

    pub category: Category,

    #[validate(length(
        max = 300,
        message = "Ensure this value has at most 300 characters."
    ))]
    pub description: Option<String>,
}

impl UpdateProductRequest {
    pub fn from_create(id: i32, req: CreateProductRequest) -> Self {
        Self {
            id,
            name: req.name,
            price: req.price,
            category: req.category,
            description: req.description,
        }
    }
}
