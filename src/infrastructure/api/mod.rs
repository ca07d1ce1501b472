//! CryptoPro backend API client.

mod client;
mod dto;

pub use client::PortfolioClient;
