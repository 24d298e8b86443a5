use runspec_core::{CommandType, FileKind, LockfileKind, ScriptOverride};

pub fn describe_kind(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Spec => "🧪 RSpec spec",
        FileKind::Test => "🧪 test",
        FileKind::Feature => "🥒 Cucumber feature",
        FileKind::StepDefinition => "🥒 step definitions",
        FileKind::Source => "📄 source file",
    }
}

pub fn describe_lockfile(kind: LockfileKind) -> &'static str {
    match kind {
        LockfileKind::NoLockfile => "none",
        LockfileKind::CucumberLocked => "cucumber",
        LockfileKind::RSpecLocked => "rspec",
        LockfileKind::PlainLocked => "no test framework",
    }
}

pub fn describe_script_override(policy: ScriptOverride) -> &'static str {
    match policy {
        ScriptOverride::Always => "always",
        ScriptOverride::UnlessLocked => "unless a framework is locked",
        ScriptOverride::Never => "never",
    }
}

pub fn describe_command_type(command_type: CommandType) -> &'static str {
    match command_type {
        CommandType::Script => "project script",
        CommandType::Ruby => "ruby interpreter",
        CommandType::Binstub => "binstub",
        CommandType::BundleExec => "bundler",
        CommandType::Runner => "runner on PATH",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_kind() {
        assert_eq!(describe_kind(FileKind::Spec), "🧪 RSpec spec");
        assert_eq!(describe_kind(FileKind::Source), "📄 source file");
    }

    #[test]
    fn test_describe_lockfile() {
        assert_eq!(describe_lockfile(LockfileKind::PlainLocked), "no test framework");
        assert_eq!(describe_lockfile(LockfileKind::RSpecLocked), "rspec");
    }

    #[test]
    fn test_describe_script_override() {
        assert_eq!(describe_script_override(ScriptOverride::default()), "always");
        assert_eq!(describe_script_override(ScriptOverride::Never), "never");
    }
}
