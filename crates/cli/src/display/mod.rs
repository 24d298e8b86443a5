pub mod command_breakdown;
pub mod formatter;

pub use command_breakdown::print_command_breakdown;
pub use formatter::{
    describe_command_type, describe_kind, describe_lockfile, describe_script_override,
};
