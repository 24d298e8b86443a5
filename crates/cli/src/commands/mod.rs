pub mod analyze;
pub mod command;
pub mod init;
pub mod paths;
pub mod run;

pub use analyze::analyze_command;
pub use command::resolve_command;
pub use init::init_command;
pub use paths::{path_command, PathQuery};
pub use run::run_command;
