//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the mygrep binary against stdin.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::Command;
pub use predicates;

/// Returns a Command configured to run the mygrep binary
pub fn mygrep_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mygrep"))
}

/// Create a search builder for `pattern` in extended mode
pub fn grep(pattern: &str) -> GrepBuilder {
    GrepBuilder::new(pattern)
}

/// High-level search builder for fluent test assertions
pub struct GrepBuilder {
    args: Vec<String>,
    stdin: String,
    envs: Vec<(String, String)>,
}

impl GrepBuilder {
    fn new(pattern: &str) -> Self {
        Self {
            args: vec!["-E".to_string(), pattern.to_string()],
            stdin: String::new(),
            envs: Vec::new(),
        }
    }

    /// Set the text written to stdin
    pub fn input(mut self, text: &str) -> Self {
        self.stdin = text.to_string();
        self
    }

    /// Add an extra CLI argument
    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// Set an environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = mygrep_cmd();
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.env_remove("MYGREP_LOG");
        cmd.write_stdin(self.stdin).assert()
    }

    /// Assert exit code 0 with nothing on stderr
    pub fn matches(self) -> assert_cmd::assert::Assert {
        self.assert().code(0).stderr("")
    }

    /// Assert exit code 1 with nothing on stderr
    pub fn no_match(self) -> assert_cmd::assert::Assert {
        self.assert().code(1).stderr("")
    }

    /// Assert exit code 2 with a diagnostic containing `message`
    pub fn fails_with(self, message: &str) -> assert_cmd::assert::Assert {
        self.assert()
            .code(2)
            .stderr(predicates::str::contains(message))
    }
}
