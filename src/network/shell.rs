// file: src/network/shell.rs
// version: 1.0.0
// guid: b4e0d8a2-5c19-4f7e-a6b3-1d8c2e9f0a64

//! Helpers for building remote shell command lines

/// Quote a string for a POSIX shell using single quotes
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Wrap a command line so it runs as root through `sudo`.
///
/// The command goes through `sh -c` so that globs, pipes and command
/// substitution are expanded with root's permissions rather than the session
/// user's. `-n` makes sudo fail instead of waiting for a password nobody can
/// type.
pub fn privileged(command: &str) -> String {
    format!("sudo -n sh -c {}", quote(command))
}
