use serde::Deserialize;
use shared::{
    domain::requests::{Category, CreateProductRequest},
    utils::parse_price,
};
use std::collections::BTreeMap;
use validator::Validate;

const NAME_REQUIRED: &str = "Please enter a product name.";
const PRICE_REQUIRED: &str = "Please enter a price.";
const CATEGORY_REQUIRED: &str = "Please select a category.";

/// Field name to the messages shown next to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Raw product form submission. Absent fields arrive as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub description: String,
}

impl ProductForm {
    /// Coerces every field, then runs the request's declarative rules.
    ///
    /// Each field reports at most its first failure: a field that fails
    /// coercion is not checked against the bounds.
    pub fn clean(&self) -> Result<CreateProductRequest, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", NAME_REQUIRED);
        }

        let price = match self.price.trim() {
            "" => {
                errors.add("price", PRICE_REQUIRED);
                None
            }
            raw => match parse_price(raw) {
                Ok(cents) => Some(cents),
                Err(e) => {
                    errors.add("price", e.to_string());
                    None
                }
            },
        };

        let category = match self.category.trim() {
            "" => {
                errors.add("category", CATEGORY_REQUIRED);
                None
            }
            raw => match raw.parse::<Category>() {
                Ok(category) => Some(category),
                Err(e) => {
                    errors.add("category", e.to_string());
                    None
                }
            },
        };

        let description = match self.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };

        let request = CreateProductRequest {
            name: name.to_string(),
            price: price.unwrap_or(1),
            category: category.unwrap_or(Category::Other),
            description,
        };

        if let Err(validation) = request.validate() {
            for (field, field_errors) in validation.field_errors() {
                let field = field.to_string();
                if errors.has(&field) {
                    continue;
                }
                if let Some(first) = field_errors.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| first.code.to_string());
                    errors.add(&field, message);
                }
            }
        }

        if errors.is_empty() {
            Ok(request)
        } else {
            Err(errors)
        }
    }

    /// Pre-filled form for editing an existing product.
    pub fn from_values(name: &str, price: &str, category: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            price: price.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, price: &str, category: &str, description: &str) -> ProductForm {
        ProductForm::from_values(name, price, category, description)
    }

    #[test]
    fn valid_submission_is_trimmed_and_converted() {
        let request = form("  Wireless Mouse ", "12.5", "Electronics", "  ")
            .clean()
            .unwrap();

        assert_eq!(request.name, "Wireless Mouse");
        assert_eq!(request.price, 1250);
        assert_eq!(request.category, Category::Electronics);
        assert_eq!(request.description, None);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ProductForm::default().clean().unwrap_err();

        assert_eq!(errors.get("name"), [NAME_REQUIRED]);
        assert_eq!(errors.get("price"), [PRICE_REQUIRED]);
        assert_eq!(errors.get("category"), [CATEGORY_REQUIRED]);
        assert!(!errors.has("description"));
    }

    #[test]
    fn negative_price_fails_the_positive_rule() {
        let errors = form("Mouse", "-5", "Electronics", "").clean().unwrap_err();
        assert_eq!(errors.get("price"), ["Price must be greater than $0.00."]);
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["price"]);
    }

    #[test]
    fn zero_price_fails_the_positive_rule() {
        let errors = form("Mouse", "0.00", "Books", "").clean().unwrap_err();
        assert_eq!(errors.get("price"), ["Price must be greater than $0.00."]);
    }

    #[test]
    fn non_numeric_price_stops_at_coercion() {
        let errors = form("Mouse", "abc", "Books", "").clean().unwrap_err();
        assert_eq!(errors.get("price"), ["Enter a valid number."]);
    }

    #[test]
    fn too_many_decimal_places_are_rejected() {
        let errors = form("Mouse", "1.234", "Books", "").clean().unwrap_err();
        assert_eq!(
            errors.get("price"),
            ["Ensure that there are no more than 2 decimal places."]
        );
    }

    #[test]
    fn unknown_category_names_the_choice() {
        let errors = form("Mouse", "5", "Toys", "").clean().unwrap_err();
        assert_eq!(
            errors.get("category"),
            ["Select a valid choice. Toys is not one of the available choices."]
        );
    }

    #[test]
    fn length_bounds_apply_after_trimming() {
        let long_name = "x".repeat(101);
        let errors = form(&long_name, "5", "Books", &"y".repeat(301))
            .clean()
            .unwrap_err();

        assert_eq!(errors.get("name"), ["Name must be 100 characters or fewer."]);
        assert_eq!(
            errors.get("description"),
            ["Ensure this value has at most 300 characters."]
        );

        let padded = format!("  {}  ", "x".repeat(100));
        assert!(form(&padded, "5", "Books", "").clean().is_ok());
    }
}
