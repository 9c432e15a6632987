// file: src/bundle/naming.rs
// version: 1.1.0
// guid: 6e2b8d41-0c7f-4a93-b5d8-3a1f9c6e4b02

//! Storage-safe names derived from the AMI name

/// Strip everything outside `[A-Za-z0-9-_. ]`, then turn spaces into
/// underscores.
///
/// Used for the bundle prefix and the S3 key, so it must be deterministic
/// and idempotent.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' '))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}
