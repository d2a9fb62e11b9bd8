pub mod client;
pub mod transport;

pub use client::{ApiClient, BrowserClient};
pub use transport::{ApiRequest, ApiResponse, GlooTransport, Method, Transport};
