pub mod client;
pub mod commands;
pub mod constants;
pub mod error;
pub mod http;

pub use client::{GetRequest, RequestOptions, SynapseApi, SynapseClient, request_url};
pub use error::{SynapseError, check_status_code};
pub use http::{ApiResponse, ResponseBody, Session, build_url, create_session, handle_response};
