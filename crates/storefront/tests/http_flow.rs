use shared::{
    domain::requests::{Category, CreateCommentRequest, CreateProductRequest},
    domain::responses::ProductResponse,
};
use std::net::SocketAddr;
use storefront::{handler::AppRouter, middleware::SESSION_COOKIE, state::AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn_app(state: AppState) -> SocketAddr {
    let app = AppRouter::build(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    cookie: Option<&str>,
    form: Option<&str>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");

    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if let Some(id) = cookie {
        req.push_str(&format!("Cookie: {SESSION_COOKIE}={id}\r\n"));
    }
    let body = form.unwrap_or_default();
    if form.is_some() {
        req.push_str("Content-Type: application/x-www-form-urlencoded\r\n");
    }
    req.push_str(&format!("Content-Length: {}\r\n\r\n{body}", body.len()));

    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().skip(1).find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim()
            .eq_ignore_ascii_case(name)
            .then(|| value.trim())
    })
}

fn session_from(head: &str) -> Option<String> {
    let cookie = header(head, "set-cookie")?;
    let pair = cookie.split(';').next()?;
    pair.strip_prefix(&format!("{SESSION_COOKIE}="))
        .map(str::to_string)
}

async fn open_session(addr: SocketAddr) -> String {
    let (_, head, _) = send_raw(addr, "GET", "/", None, None).await;
    session_from(&head).expect("session cookie issued")
}

async fn add_product(state: &AppState, name: &str, price: i64) -> ProductResponse {
    state
        .di_container
        .product_service
        .command
        .create_product(&CreateProductRequest {
            name: name.to_string(),
            price,
            category: Category::Electronics,
            description: Some(format!("{name} description")),
        })
        .await
        .expect("create product")
}

#[tokio::test]
async fn home_and_about_pages_render_their_copy() {
    let addr = spawn_app(AppState::in_memory(false).await).await;

    let (status, _, body) = send_raw(addr, "GET", "/", None, None).await;
    assert_eq!(status, 200);
    assert!(body.contains("Welcome to the Online Store"));
    assert!(body.contains("Your Favourite Online Store"));

    let (status, _, body) = send_raw(addr, "GET", "/about/", None, None).await;
    assert_eq!(status, 200);
    assert!(body.contains("About Our Store"));
    assert!(body.contains("Our Mission"));
}

#[tokio::test]
async fn valid_submission_is_stored_and_echoed_on_a_fresh_form() {
    let state = AppState::in_memory(false).await;
    let products = state.di_container.product_service.clone();
    let addr = spawn_app(state).await;

    let form = "name=Desk+Lamp&price=49.99&category=Furniture&description=Warm+light";
    let (status, _, body) = send_raw(addr, "POST", "/products/create/", None, Some(form)).await;
    assert_eq!(status, 200);
    assert!(body.contains("Product created successfully."));
    assert!(body.contains("Desk Lamp"));
    assert!(body.contains("$49.99"));
    assert!(body.contains(r#"name="name" maxlength="100" placeholder="e.g. Wireless Mouse" value="""#));

    let (status, _, body) = send_raw(addr, "GET", "/products/", None, None).await;
    assert_eq!(status, 200);
    assert!(body.contains("Our Products"));
    assert!(body.contains("Desk Lamp"));

    let stored = products.query.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Desk Lamp");
    assert_eq!(stored[0].price, 4999);
    assert_eq!(stored[0].category, "Furniture");
}

#[tokio::test]
async fn non_positive_price_is_reported_inline_and_nothing_is_stored() {
    let state = AppState::in_memory(false).await;
    let products = state.di_container.product_service.clone();
    let addr = spawn_app(state).await;

    let form = "name=Freebie&price=-5&category=Other&description=";
    let (status, _, body) = send_raw(addr, "POST", "/products/create/", None, Some(form)).await;
    assert_eq!(status, 200);
    assert!(body.contains("Price must be greater than $0.00."));
    assert!(!body.contains("Product created successfully."));
    assert!(body.contains(r#"value="Freebie""#));

    let (_, _, body) = send_raw(addr, "GET", "/products/", None, None).await;
    assert!(body.contains("No products yet."));
    assert!(products.query.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_submission_reports_each_required_field() {
    let addr = spawn_app(AppState::in_memory(false).await).await;

    let (status, _, body) = send_raw(addr, "POST", "/products/create/", None, Some("")).await;
    assert_eq!(status, 200);
    assert!(body.contains("Please enter a product name."));
    assert!(body.contains("Please enter a price."));
    assert!(body.contains("Please select a category."));
}

#[tokio::test]
async fn show_redirects_home_for_missing_or_malformed_ids() {
    let addr = spawn_app(AppState::in_memory(false).await).await;

    for path in ["/products/999/", "/products/abc/"] {
        let (status, head, _) = send_raw(addr, "GET", path, None, None).await;
        assert_eq!(status, 303, "{path}");
        assert_eq!(header(&head, "location"), Some("/"), "{path}");
    }
}

#[tokio::test]
async fn show_renders_product_with_its_comments() {
    let state = AppState::in_memory(false).await;
    let product = add_product(&state, "Headphones", 8999).await;
    state
        .di_container
        .comment_service
        .create_comment(&CreateCommentRequest {
            product_id: product.id,
            body: "Great sound".into(),
        })
        .await
        .expect("create comment");
    let addr = spawn_app(state).await;

    let (status, _, body) = send_raw(addr, "GET", &format!("/products/{}/", product.id), None, None).await;
    assert_eq!(status, 200);
    assert!(body.contains("Headphones"));
    assert!(body.contains("$89.99"));
    assert!(body.contains("Great sound"));
}

#[tokio::test]
async fn cart_keeps_unknown_ids_but_only_shows_live_products() {
    let state = AppState::in_memory(false).await;
    let cart = state.di_container.cart_service.clone();
    let addr = spawn_app(state).await;
    let session = open_session(addr).await;

    let (status, head, _) = send_raw(addr, "POST", "/cart/add/42", Some(&session), Some("")).await;
    assert_eq!(status, 303);
    assert_eq!(header(&head, "location"), Some("/cart/"));

    let (status, _, body) = send_raw(addr, "GET", "/cart/", Some(&session), None).await;
    assert_eq!(status, 200);
    assert!(body.contains("Your cart is empty."));
    assert_eq!(cart.product_ids(&session).await.unwrap(), vec![42]);
}

#[tokio::test]
async fn adding_twice_keeps_one_entry_and_totals_live_prices() {
    let state = AppState::in_memory(false).await;
    let lamp = add_product(&state, "Lamp", 1250).await;
    let chair = add_product(&state, "Chair", 4000).await;
    let cart = state.di_container.cart_service.clone();
    let addr = spawn_app(state).await;
    let session = open_session(addr).await;

    for id in [lamp.id, lamp.id, chair.id] {
        let (status, _, _) =
            send_raw(addr, "POST", &format!("/cart/add/{id}"), Some(&session), Some("")).await;
        assert_eq!(status, 303);
    }

    let mut ids = cart.product_ids(&session).await.unwrap();
    ids.sort();
    assert_eq!(ids, vec![lamp.id, chair.id]);

    let (_, _, body) = send_raw(addr, "GET", "/cart/", Some(&session), None).await;
    assert!(body.contains("Lamp"));
    assert!(body.contains("Chair"));
    assert!(body.contains(r#"<th class="cart-total">$52.50</th>"#));
}

#[tokio::test]
async fn remove_all_empties_the_cart_and_is_a_noop_when_empty() {
    let state = AppState::in_memory(false).await;
    let lamp = add_product(&state, "Lamp", 1250).await;
    let cart = state.di_container.cart_service.clone();
    let addr = spawn_app(state).await;
    let session = open_session(addr).await;

    send_raw(addr, "POST", &format!("/cart/add/{}", lamp.id), Some(&session), Some("")).await;

    for _ in 0..2 {
        let (status, head, _) =
            send_raw(addr, "POST", "/cart/removeAll", Some(&session), Some("")).await;
        assert_eq!(status, 303);
        assert_eq!(header(&head, "location"), Some("/cart/"));
    }

    assert!(cart.product_ids(&session).await.unwrap().is_empty());
    let (_, _, body) = send_raw(addr, "GET", "/cart/", Some(&session), None).await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn cart_add_with_non_numeric_id_is_not_found() {
    let addr = spawn_app(AppState::in_memory(false).await).await;
    let (status, _, _) = send_raw(addr, "POST", "/cart/add/abc", None, Some("")).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn cart_add_with_signed_id_is_not_found_and_stores_nothing() {
    let state = AppState::in_memory(false).await;
    let cart = state.di_container.cart_service.clone();
    let addr = spawn_app(state).await;
    let session = open_session(addr).await;

    for path in ["/cart/add/-7", "/cart/add/+7"] {
        let (status, _, _) = send_raw(addr, "POST", path, Some(&session), Some("")).await;
        assert_eq!(status, 404, "{path}");
    }
    assert!(cart.product_ids(&session).await.unwrap().is_empty());
}

#[tokio::test]
async fn carts_are_scoped_to_their_session() {
    let state = AppState::in_memory(false).await;
    let lamp = add_product(&state, "Lamp", 1250).await;
    let addr = spawn_app(state).await;
    let first = open_session(addr).await;
    let second = open_session(addr).await;
    assert_ne!(first, second);

    send_raw(addr, "POST", &format!("/cart/add/{}", lamp.id), Some(&first), Some("")).await;

    let (_, _, body) = send_raw(addr, "GET", "/cart/", Some(&second), None).await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn session_cookie_is_only_issued_when_missing_or_malformed() {
    let addr = spawn_app(AppState::in_memory(false).await).await;

    let (_, head, _) = send_raw(addr, "GET", "/", None, None).await;
    let issued = header(&head, "set-cookie").expect("cookie issued");
    assert!(issued.contains("HttpOnly"));
    assert!(issued.contains("SameSite=Lax"));
    assert!(issued.contains("Path=/"));
    let session = session_from(&head).expect("session id");

    let (_, head, _) = send_raw(addr, "GET", "/", Some(&session), None).await;
    assert!(header(&head, "set-cookie").is_none());

    let (_, head, _) = send_raw(addr, "GET", "/", Some("forged"), None).await;
    let replaced = session_from(&head).expect("replacement cookie");
    assert_ne!(replaced, "forged");
}

#[tokio::test]
async fn admin_routes_are_absent_unless_enabled() {
    let addr = spawn_app(AppState::in_memory(false).await).await;

    for path in ["/admin/products/", "/admin/comments/"] {
        let (status, _, _) = send_raw(addr, "GET", path, None, None).await;
        assert_eq!(status, 404, "{path}");
    }
}

#[tokio::test]
async fn admin_lists_searches_and_edits_products() {
    let state = AppState::in_memory(true).await;
    let lamp = add_product(&state, "Desk Lamp", 1250).await;
    add_product(&state, "Office Chair", 4000).await;
    let products = state.di_container.product_service.clone();
    let addr = spawn_app(state).await;

    let (status, _, body) = send_raw(addr, "GET", "/admin/products/", None, None).await;
    assert_eq!(status, 200);
    assert!(body.contains("Desk Lamp"));
    assert!(body.contains("Office Chair"));

    let (_, _, body) = send_raw(addr, "GET", "/admin/products/?q=lamp", None, None).await;
    assert!(body.contains("Desk Lamp"));
    assert!(!body.contains("Office Chair"));

    let (_, _, body) = send_raw(addr, "GET", "/admin/products/?q=%25", None, None).await;
    assert!(!body.contains("Desk Lamp"));
    assert!(body.contains("0 products"));

    let edit = format!("/admin/products/{}/edit", lamp.id);
    let (status, _, body) = send_raw(addr, "GET", &edit, None, None).await;
    assert_eq!(status, 200);
    assert!(body.contains(r#"value="12.50""#));

    let form = "name=Reading+Lamp&price=15&category=Furniture&description=";
    let (status, head, _) = send_raw(addr, "POST", &edit, None, Some(form)).await;
    assert_eq!(status, 303);
    assert_eq!(header(&head, "location"), Some("/admin/products/"));

    let updated = products.query.find_by_id(lamp.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "Reading Lamp");
    assert_eq!(updated.price, 1500);
    assert_eq!(updated.category, "Furniture");
    assert_eq!(updated.description, None);

    let (status, _, body) = send_raw(addr, "POST", &edit, None, Some("name=&price=0")).await;
    assert_eq!(status, 200);
    assert!(body.contains("Please enter a product name."));

    let (status, _, _) = send_raw(addr, "GET", "/admin/products/999/edit", None, None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn admin_delete_cascades_to_comments() {
    let state = AppState::in_memory(true).await;
    let lamp = add_product(&state, "Desk Lamp", 1250).await;
    let comments = state.di_container.comment_service.clone();
    comments
        .create_comment(&CreateCommentRequest {
            product_id: lamp.id,
            body: "Bright enough".into(),
        })
        .await
        .unwrap();
    let addr = spawn_app(state).await;

    let (status, _, body) = send_raw(addr, "GET", "/admin/comments/", None, None).await;
    assert_eq!(status, 200);
    assert!(body.contains("Bright enough"));
    assert!(body.contains("Desk Lamp"));

    let delete = format!("/admin/products/{}/delete", lamp.id);
    let (status, head, _) = send_raw(addr, "POST", &delete, None, Some("")).await;
    assert_eq!(status, 303);
    assert_eq!(header(&head, "location"), Some("/admin/products/"));

    assert!(comments.find_all().await.unwrap().is_empty());
    let (status, _, _) = send_raw(addr, "POST", &delete, None, Some("")).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn metrics_and_stylesheet_are_served() {
    let addr = spawn_app(AppState::in_memory(false).await).await;

    send_raw(addr, "GET", "/products/", None, None).await;

    let (status, head, body) = send_raw(addr, "GET", "/metrics", None, None).await;
    assert_eq!(status, 200);
    assert!(header(&head, "content-type").unwrap().starts_with("application/openmetrics-text"));
    assert!(body.contains("product_query_service_requests"));
    assert!(!body.contains("seeder_service"));

    let (status, _, body) = send_raw(addr, "GET", "/static/css/site.css", None, None).await;
    assert_eq!(status, 200);
    assert!(body.contains("--accent"));
}
