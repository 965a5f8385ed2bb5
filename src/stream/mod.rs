pub mod client;

pub use client::run_stream_client;
