//! Blocking client for the Clockify time tracking API.
//!
//! See <https://clockify.me/developers-api> for the REST API itself.
//!
//! ```no_run
//! let session = clockify::Session::open("API_TOKEN");
//! let account = session.get_account()?;
//! println!("{}", account.email);
//! # Ok::<(), clockify::ClockifyError>(())
//! ```

mod api;
pub mod error;
pub mod logger;
pub mod models;
pub mod session;

pub use error::{ClockifyError, ConfigError, Result};
pub use logger::Logger;
pub use models::{
    Account, AccountSettings, Client, Project, Tag, Task, TimeEntry, TimeEntryRequest,
    TimeInterval, Workspace,
};
pub use session::{Session, SessionBuilder, CLOCKIFY_API, DEFAULT_APP_NAME};
