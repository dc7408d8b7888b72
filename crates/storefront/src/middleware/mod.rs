mod session;

pub use self::session::{SESSION_COOKIE, VisitorSession, session_middleware};
