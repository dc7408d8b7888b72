mod logs;
mod metrics;
mod money;
mod shutdown;
mod template;

pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status, TracingContext, metrics_handler_body};
pub use self::money::{PriceParseError, format_cents, parse_price};
pub use self::shutdown::shutdown_signal;
pub use self::template::{ErrorTemplate, render_error_page};
