mod client;
mod response;

pub use client::JishoClient;
pub use response::{SearchResponse, parse_response};
