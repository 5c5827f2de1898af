pub mod error;
pub mod config;

// Team API entities
pub mod member;
pub mod requests;
pub mod user;

// Client state that is independent of the UI framework
pub mod add_member;
pub mod filter;
pub mod section;
pub mod session;
pub mod team;

pub use config::*;
pub use error::*;
pub use member::*;
pub use requests::*;
pub use user::*;

pub use add_member::*;
pub use filter::*;
pub use section::*;
pub use session::*;
pub use team::*;
