//! Application state module

mod forms;
mod init;
mod messages;
mod notifications;
mod page;
mod submission;

pub use forms::*;
pub use init::*;
pub use messages::*;
pub use notifications::*;
pub use page::*;
pub use submission::*;
