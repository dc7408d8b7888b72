use crate::{
    abstract_trait::{DynCommentRepository, DynProductCommandRepository, SeederServiceTrait},
    domain::{
        requests::{Category, CreateCommentRequest, CreateProductRequest},
        responses::SeedReport,
    },
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use rand::Rng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub const PRODUCT_COUNT: usize = 8;
pub const COMMENTS_PER_PRODUCT: usize = 2;
pub const MAX_COMMENT_CHARS: usize = 150;
const MIN_PRICE_DOLLARS: i64 = 100;
const MAX_PRICE_DOLLARS: i64 = 3000;

const ADJECTIVES: &[&str] = &[
    "Adaptive", "Balanced", "Compatible", "Customizable", "Decentralized", "Ergonomic",
    "Focused", "Innovative", "Intuitive", "Managed", "Multi-layered", "Optimized",
    "Persistent", "Proactive", "Reactive", "Robust", "Seamless", "Streamlined",
    "Synergized", "Universal", "Versatile", "Vision-oriented",
];

const DESCRIPTORS: &[&str] = &[
    "24/7", "asynchronous", "bottom-line", "client-driven", "context-sensitive",
    "cross-platform", "dynamic", "fault-tolerant", "global", "high-level", "interactive",
    "mission-critical", "modular", "next-generation", "real-time", "scalable", "secure",
    "static", "tangible", "user-facing", "value-added", "zero-defect",
];

const NOUNS: &[&str] = &[
    "ability", "algorithm", "archive", "capacity", "circuit", "core", "database", "firmware",
    "framework", "hardware", "hub", "interface", "matrix", "methodology", "middleware",
    "model", "paradigm", "portal", "processor", "solution", "toolset", "workforce",
];

const WORDS: &[&str] = &[
    "quality", "arrived", "quickly", "works", "perfectly", "would", "recommend", "friends",
    "price", "great", "value", "sturdy", "design", "looks", "better", "than", "expected",
    "packaging", "was", "neat", "daily", "use", "after", "week", "still", "happy", "with",
    "purchase", "easy", "setup", "colour", "matches", "photos", "size", "fits", "well",
    "delivery", "fast", "build", "solid", "feels", "premium", "battery", "lasts", "long",
];

/// One product to create, with the bodies of its comments.
#[derive(Debug, Clone)]
pub struct SeedProduct {
    pub request: CreateProductRequest,
    pub comments: Vec<String>,
}

/// Randomised content for a seeding run, drawn up front so the write phase
/// holds no RNG across awaits.
#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub products: Vec<SeedProduct>,
}

impl SeedPlan {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let products = (0..PRODUCT_COUNT)
            .map(|_| SeedProduct {
                request: CreateProductRequest {
                    name: catch_phrase(rng),
                    price: rng.random_range(MIN_PRICE_DOLLARS..=MAX_PRICE_DOLLARS) * 100,
                    category: Category::ALL[rng.random_range(0..Category::ALL.len())],
                    description: None,
                },
                comments: (0..COMMENTS_PER_PRODUCT)
                    .map(|_| comment_text(rng))
                    .collect(),
            })
            .collect();

        Self { products }
    }

    pub fn comment_count(&self) -> usize {
        self.products.iter().map(|p| p.comments.len()).sum()
    }
}

fn pick<'a, R: Rng>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words[rng.random_range(0..words.len())]
}

fn catch_phrase<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, ADJECTIVES),
        pick(rng, DESCRIPTORS),
        pick(rng, NOUNS)
    )
}

fn sentence<R: Rng>(rng: &mut R) -> String {
    let count = rng.random_range(3..=8);
    let mut words: Vec<String> = (0..count).map(|_| pick(rng, WORDS).to_string()).collect();
    if let Some(first) = words.first_mut() {
        let mut chars = first.chars();
        if let Some(c) = chars.next() {
            *first = c.to_uppercase().chain(chars).collect();
        }
    }
    format!("{}.", words.join(" "))
}

fn comment_text<R: Rng>(rng: &mut R) -> String {
    let mut text = sentence(rng);
    loop {
        if rng.random_bool(0.4) {
            break;
        }
        let next = sentence(rng);
        if text.len() + 1 + next.len() > MAX_COMMENT_CHARS {
            break;
        }
        text.push(' ');
        text.push_str(&next);
    }
    text
}

pub struct SeederService {
    pub command: DynProductCommandRepository,
    pub comments: DynCommentRepository,
    pub metrics: Metrics,
}

impl SeederService {
    pub async fn new(
        command: DynProductCommandRepository,
        comments: DynCommentRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("seeder_service", &mut *registry.lock().await);

        Self {
            command,
            comments,
            metrics,
        }
    }
}

#[async_trait]
impl SeederServiceTrait for SeederService {
    async fn run(&self, plan: SeedPlan) -> Result<SeedReport, ServiceError> {
        let ctx = TracingContext::start("seed_products");

        warn!("⚠️ Removing existing products and comments");
        let removed = match self.command.delete_all_products().await {
            Ok(count) => count,
            Err(err) => {
                error!("❌ Failed to clear catalogue: {err:?}");
                self.metrics
                    .complete_error(&ctx, Method::Post, "Failed to clear catalogue");
                return Err(ServiceError::Repo(err));
            }
        };

        info!("🌱 Generating {} products", plan.products.len());

        let mut report = SeedReport {
            removed,
            products: 0,
            comments: 0,
        };

        for seed in &plan.products {
            let product = match self.command.create_product(&seed.request).await {
                Ok(product) => product,
                Err(err) => {
                    self.metrics
                        .complete_error(&ctx, Method::Post, "Failed to create seed product");
                    return Err(ServiceError::Repo(err));
                }
            };
            report.products += 1;

            for body in &seed.comments {
                let req = CreateCommentRequest {
                    product_id: product.product_id,
                    body: body.clone(),
                };
                if let Err(err) = self.comments.create_comment(&req).await {
                    self.metrics
                        .complete_error(&ctx, Method::Post, "Failed to create seed comment");
                    return Err(ServiceError::Repo(err));
                }
                report.comments += 1;
            }
        }

        self.metrics.complete_success(
            &ctx,
            Method::Post,
            &format!(
                "Created {} products and {} comments",
                report.products, report.comments
            ),
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{CommentRepositoryTrait, ProductQueryRepositoryTrait},
        repository::InMemoryCatalogue,
    };
    use rand::{SeedableRng, rngs::StdRng};
    use validator::Validate;

    async fn seeder(catalogue: &InMemoryCatalogue) -> SeederService {
        let registry = Arc::new(Mutex::new(Registry::default()));
        SeederService::new(
            Arc::new(catalogue.clone()),
            Arc::new(catalogue.clone()),
            registry,
        )
        .await
    }

    #[test]
    fn plan_respects_the_generation_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let plan = SeedPlan::generate(&mut rng);

        assert_eq!(plan.products.len(), PRODUCT_COUNT);
        assert_eq!(plan.comment_count(), PRODUCT_COUNT * COMMENTS_PER_PRODUCT);

        for seed in &plan.products {
            let price = seed.request.price;
            assert!((10_000..=300_000).contains(&price), "price {price}");
            assert_eq!(price % 100, 0);
            assert!(!seed.request.name.is_empty());
            assert!(seed.request.validate().is_ok());
            for body in &seed.comments {
                assert!(!body.is_empty());
                assert!(body.chars().count() <= MAX_COMMENT_CHARS);
            }
        }
    }

    #[test]
    fn same_seed_gives_the_same_plan() {
        let a = SeedPlan::generate(&mut StdRng::seed_from_u64(1));
        let b = SeedPlan::generate(&mut StdRng::seed_from_u64(1));

        let names = |p: &SeedPlan| -> Vec<String> {
            p.products.iter().map(|s| s.request.name.clone()).collect()
        };
        assert_eq!(names(&a), names(&b));
    }

    #[tokio::test]
    async fn run_replaces_previous_data() {
        let catalogue = InMemoryCatalogue::new();
        let seeder = seeder(&catalogue).await;

        let first = seeder
            .run(SeedPlan::generate(&mut StdRng::seed_from_u64(1)))
            .await
            .unwrap();
        assert_eq!(first.removed, 0);
        let first_ids: Vec<i32> = ProductQueryRepositoryTrait::find_all(&catalogue)
            .await
            .unwrap()
            .iter()
            .map(|p| p.product_id)
            .collect();

        let second = seeder
            .run(SeedPlan::generate(&mut StdRng::seed_from_u64(2)))
            .await
            .unwrap();

        assert_eq!(second.removed, 8);
        assert_eq!(second.products, 8);
        assert_eq!(second.comments, 16);

        let products = ProductQueryRepositoryTrait::find_all(&catalogue).await.unwrap();
        assert_eq!(products.len(), 8);
        assert!(products.iter().all(|p| !first_ids.contains(&p.product_id)));

        let comments = CommentRepositoryTrait::find_all(&catalogue).await.unwrap();
        assert_eq!(comments.len(), 16);
        for product in &products {
            let count = comments
                .iter()
                .filter(|c| c.product_id == product.product_id)
                .count();
            assert_eq!(count, 2);
        }
    }
}
