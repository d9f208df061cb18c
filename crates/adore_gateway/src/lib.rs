pub mod page;
pub mod server;
pub mod sessions;
pub mod types;

pub use server::GatewayServer;
pub use sessions::SessionStore;
pub use types::{AnalyzeRequest, AnalyzeResponse, ErrorBody};
