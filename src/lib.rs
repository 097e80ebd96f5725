//! Async client for the BotsArchive bot directory API.
//!
//! ```no_run
//! # async fn run() -> botsarchive_rs::util::Result<()> {
//! use botsarchive_rs::{model::Category, service::client::Client};
//!
//! let client = Client::new()?;
//! let bot = client.get_bot_by_id("vote").await?;
//! let music = client.search_by_category(Category::Music).await?;
//! client.close();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod util;
