//! devconnector - Developer Profile API
//!
//! A REST backend for a developer social network: registration, login with
//! signed session tokens, and one profile per user.
//!
//! # Module Structure
//!
//! - **`shared`** - JSON bodies shared by the API and its clients
//! - **`backend`** - Axum server, handlers and storage
//!
//! # Usage
//!
//! ```rust,no_run
//! use devconnector::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod shared;
