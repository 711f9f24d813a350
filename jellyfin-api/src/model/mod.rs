//! Data transfer objects for the Jellyfin HTTP API
//!
//! Plain serde records matching the upstream JSON schema: PascalCase on
//! the wire, optional wherever the schema allows null. Unknown fields
//! are ignored on deserialize so newer servers stay compatible.

mod devices;
mod items;
mod notifications;
mod quick_connect;
mod sync_play;
mod user;

pub use devices::*;
pub use items::*;
pub use notifications::*;
pub use quick_connect::*;
pub use sync_play::*;
pub use user::*;
