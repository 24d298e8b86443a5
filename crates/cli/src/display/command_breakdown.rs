use runspec_core::{CommandType, SpecCommand};

use super::describe_command_type;

pub fn print_command_breakdown(command: &SpecCommand) {
    println!("   🔧 Command breakdown:");
    println!("      • type: {}", describe_command_type(command.command_type));
    println!("      • command: {}", command.program);

    match command.command_type {
        CommandType::Ruby => {
            let load_paths: Vec<&str> = command
                .args
                .iter()
                .filter_map(|arg| arg.strip_prefix("-I"))
                .collect();
            let requires: Vec<&str> = command
                .args
                .iter()
                .filter_map(|arg| arg.strip_prefix("-r"))
                .collect();
            let others: Vec<&String> = command
                .args
                .iter()
                .filter(|arg| !arg.starts_with("-I") && !arg.starts_with("-r"))
                .collect();

            if !load_paths.is_empty() {
                println!("      • loadPath: {:?}", load_paths);
            }
            if !requires.is_empty() {
                println!("      • require: {:?}", requires);
            }
            if !others.is_empty() {
                println!("      • extraArgs: {:?}", others);
            }
        }
        CommandType::BundleExec => {
            if let Some(runner) = command.args.get(1) {
                println!("      • runner: {}", runner);
            }
            if command.args.len() > 2 {
                println!("      • extraArgs: {:?}", &command.args[2..]);
            }
        }
        CommandType::Script | CommandType::Binstub | CommandType::Runner => {
            if !command.args.is_empty() {
                println!("      • extraArgs: {:?}", command.args);
            }
        }
    }

    if let Some(ref spec_path) = command.spec_path {
        println!("      • spec: {}", spec_path);
    }

    if let Some(ref dir) = command.working_dir {
        println!("      • workingDir: {}", dir);
    }

    if !command.env.is_empty() {
        println!("      • env:");
        for (key, value) in &command.env {
            println!("          {}={}", key, value);
        }
    }
}
