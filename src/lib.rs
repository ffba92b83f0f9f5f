//! Sleeper Fantasy API Client Library
//!
//! A typed, rate-limited Rust client for the read-only
//! [Sleeper](https://sleeper.com) fantasy sports API.
//!
//! ## Features
//!
//! - **Typed Resources**: Users, leagues, rosters, matchups, transactions,
//!   brackets, drafts, players, trending players, sport state, and avatars
//! - **Client-side Rate Limiting**: One token bucket per client, shared by every
//!   clone and task, so bursts never exceed what Sleeper tolerates
//! - **Cancellation**: A caller-supplied token aborts a call whether it is still
//!   waiting for a token or already on the wire
//! - **Inspectable Errors**: Non-2xx responses surface as [`ApiError`] with the
//!   status code and its reason phrase
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_api::{SleeperClient, Week};
//!
//! # async fn example() -> sleeper_api::Result<()> {
//! let client = SleeperClient::new()?;
//!
//! let league = client.get_league("289646328504385536").await?;
//! println!("{} ({} teams)", league.name, league.total_rosters);
//!
//! for matchup in client.get_league_matchups(&league.league_id, Week::new(1)).await? {
//!     println!("roster {} scored {}", matchup.roster_id, matchup.effective_points());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The `sleeper` binary reads a default league ID so it need not be passed to
//! every league command:
//! ```bash
//! export SLEEPER_LEAGUE_ID=289646328504385536
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod commands;
pub mod core;
pub mod error;
pub mod models;
pub mod types;

// Re-export commonly used types
pub use api::TrendingPlayerOptions;
pub use client::{ClientConfig, SleeperClient};
pub use error::{ApiError, Result, SleeperError};
pub use types::{Season, Sport, TrendingType, Week};

pub use tokio_util::sync::CancellationToken;

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
