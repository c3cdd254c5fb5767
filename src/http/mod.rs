//! HTTP plumbing: URL building, sessions, and response handling.

mod response;
mod session;
mod url;

pub use response::{ApiResponse, ResponseBody, handle_response};
pub use session::{Session, create_session};
pub use url::build_url;
