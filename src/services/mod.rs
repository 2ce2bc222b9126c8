//! Service layer module
//!
//! Contains the REST adapter and the Ollama API client built on top of it

pub mod adapter;
pub mod client;

pub use adapter::{AdapterOptions, RestAdapter};
pub use client::{OllamaClient, OllamaClientBuilder};
