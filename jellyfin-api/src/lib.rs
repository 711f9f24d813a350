//! Type-safe client for the Jellyfin HTTP API
//!
//! This crate provides one facade per upstream resource group of the
//! Jellyfin REST API. Every facade shares the same blocking transport
//! from the private `rest-client` crate: construct one [`RestClient`]
//! and hand it to whichever facades you need.
//!
//! ```no_run
//! use jellyfin_api::{ClientConfig, RestClient, UserApi};
//! use jellyfin_api::model::AuthenticateUserByName;
//!
//! # fn main() -> jellyfin_api::Result<()> {
//! let client = RestClient::new(ClientConfig::new("http://media.local:8096"));
//! let users = UserApi::new(&client);
//! let auth = users.authenticate_user_by_name(&AuthenticateUserByName::new("alice", "hunter2"))?;
//! println!("token: {:?}", auth.access_token);
//! # Ok(())
//! # }
//! ```

pub mod apis;
pub mod error;
pub mod model;

pub use apis::devices::DevicesApi;
pub use apis::dlna_server::DlnaServerApi;
pub use apis::instant_mix::{InstantMixApi, InstantMixQuery};
pub use apis::notifications::NotificationsApi;
pub use apis::quick_connect::QuickConnectApi;
pub use apis::sync_play::SyncPlayApi;
pub use apis::user::UserApi;
pub use error::{ApiError, Result};

// Re-export the transport types callers need to construct facades.
pub use rest_client::{ClientConfig, RestClient};
