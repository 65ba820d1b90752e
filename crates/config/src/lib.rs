mod env;
mod mode;
mod plugin;
mod purge;
mod site;
mod theme;
mod token;

pub use self::env::*;
pub use self::mode::*;
pub use self::plugin::*;
pub use self::purge::*;
pub use self::site::*;
pub use self::theme::*;
pub use self::token::*;

pub type Status = status::Status;
pub type Result<T, E = Status> = std::result::Result<T, E>;
