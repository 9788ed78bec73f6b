//! Command handlers. Each subcommand gets one file; handlers talk to the
//! store only through its public operations and report through the ui layer.

mod add;
mod list;
mod remove;

pub use add::{AddArgs, add_user};
pub use list::list_users;
pub use remove::remove_users;
