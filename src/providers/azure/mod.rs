mod aggregate;
mod client;
mod collector;
mod normalize;
mod summary;
mod timestamps;
mod types;

pub use client::ReqwestClient;
pub use collector::BuildsCollector;
