//! Named route table.
//!
//! Every page the store serves has a `namespace:name` entry here. The router
//! is assembled from these paths and templates receive URLs produced by
//! [`reverse`], so a path only ever changes in one place.

use tracing::warn;

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about/";
pub const CART_INDEX: &str = "/cart/";
pub const CART_ADD: &str = "/cart/add/{id}";
pub const CART_REMOVE_ALL: &str = "/cart/removeAll";
pub const PRODUCTS_INDEX: &str = "/products/";
pub const PRODUCTS_CREATE: &str = "/products/create/";
pub const PRODUCTS_LIST: &str = "/products/list/";
pub const PRODUCTS_SHOW: &str = "/products/{id}/";
pub const ADMIN_PRODUCTS: &str = "/admin/products/";
pub const ADMIN_PRODUCT_EDIT: &str = "/admin/products/{id}/edit";
pub const ADMIN_PRODUCT_DELETE: &str = "/admin/products/{id}/delete";
pub const ADMIN_COMMENTS: &str = "/admin/comments/";
pub const METRICS: &str = "/metrics";
pub const STATIC: &str = "/static";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedRoute {
    pub name: &'static str,
    pub path: &'static str,
}

pub const ROUTES: &[NamedRoute] = &[
    NamedRoute { name: "pages:home", path: HOME },
    NamedRoute { name: "pages:about", path: ABOUT },
    NamedRoute { name: "cart:index", path: CART_INDEX },
    NamedRoute { name: "cart:add", path: CART_ADD },
    NamedRoute { name: "cart:remove_all", path: CART_REMOVE_ALL },
    NamedRoute { name: "products:index", path: PRODUCTS_INDEX },
    NamedRoute { name: "products:create", path: PRODUCTS_CREATE },
    NamedRoute { name: "products:list", path: PRODUCTS_LIST },
    NamedRoute { name: "products:show", path: PRODUCTS_SHOW },
    NamedRoute { name: "admin:products", path: ADMIN_PRODUCTS },
    NamedRoute { name: "admin:product_edit", path: ADMIN_PRODUCT_EDIT },
    NamedRoute { name: "admin:product_delete", path: ADMIN_PRODUCT_DELETE },
    NamedRoute { name: "admin:comments", path: ADMIN_COMMENTS },
];

/// Builds the URL for a named route, filling `{param}` segments from `args`
/// in order. `None` for an unknown name or a wrong number of arguments.
pub fn reverse(name: &str, args: &[&str]) -> Option<String> {
    let route = ROUTES.iter().find(|r| r.name == name)?;
    let mut args = args.iter();
    let mut url = String::with_capacity(route.path.len());

    for segment in route.path.split_inclusive('/') {
        match segment.strip_prefix('{') {
            Some(rest) => {
                let (_, tail) = rest.split_once('}')?;
                url.push_str(args.next()?);
                url.push_str(tail);
            }
            None => url.push_str(segment),
        }
    }

    if args.next().is_some() {
        return None;
    }
    Some(url)
}

/// URL of a parameterless route.
pub fn path(name: &str) -> String {
    reverse(name, &[]).unwrap_or_else(|| {
        warn!("⚠️ Unresolvable route {name}, falling back to home");
        HOME.to_string()
    })
}

/// URL of a route taking a single `{id}`.
pub fn path_with_id(name: &str, id: i32) -> String {
    reverse(name, &[&id.to_string()]).unwrap_or_else(|| {
        warn!("⚠️ Unresolvable route {name}({id}), falling back to home");
        HOME.to_string()
    })
}

/// Parses an `{id}` path segment. Only plain digits are accepted, so signs
/// and whitespace never reach a lookup.
pub fn parse_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_route_reverses_to_its_path() {
        let expected = [
            ("pages:home", vec![], "/"),
            ("pages:about", vec![], "/about/"),
            ("cart:index", vec![], "/cart/"),
            ("cart:add", vec!["42"], "/cart/add/42"),
            ("cart:remove_all", vec![], "/cart/removeAll"),
            ("products:index", vec![], "/products/"),
            ("products:create", vec![], "/products/create/"),
            ("products:list", vec![], "/products/list/"),
            ("products:show", vec!["3"], "/products/3/"),
            ("admin:products", vec![], "/admin/products/"),
            ("admin:product_edit", vec!["7"], "/admin/products/7/edit"),
            ("admin:product_delete", vec!["7"], "/admin/products/7/delete"),
            ("admin:comments", vec![], "/admin/comments/"),
        ];

        assert_eq!(expected.len(), ROUTES.len());
        for (name, args, path) in expected {
            assert_eq!(reverse(name, &args).as_deref(), Some(path), "{name}");
        }
    }

    #[test]
    fn wrong_argument_counts_do_not_reverse() {
        assert_eq!(reverse("products:show", &[]), None);
        assert_eq!(reverse("pages:home", &["1"]), None);
        assert_eq!(reverse("cart:add", &["1", "2"]), None);
    }

    #[test]
    fn unknown_names_do_not_reverse() {
        assert_eq!(reverse("products:edit", &["1"]), None);
        assert_eq!(path("nope:nothing"), "/");
    }

    #[test]
    fn id_helpers_fill_the_placeholder() {
        assert_eq!(path_with_id("products:show", 12), "/products/12/");
        assert_eq!(path("products:create"), "/products/create/");
    }

    #[test]
    fn ids_are_plain_digits_only() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id("-7"), None);
        assert_eq!(parse_id("+7"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("99999999999"), None);
    }
}
