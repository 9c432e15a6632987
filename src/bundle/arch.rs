// file: src/bundle/arch.rs
// version: 1.1.0
// guid: 0d4c7a28-9b1e-4f65-8e3a-5c2d6b9f1e47

//! Instance architecture as the EC2 tools name it

use std::fmt;

/// Architecture tag passed to the bundling and registration tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Architecture {
    X86_64,
    I386,
}

impl Architecture {
    /// Classify `uname -m` output.
    ///
    /// Only `x86_64` maps to the 64-bit tag; everything else, including
    /// `aarch64` and empty output, is treated as `i386`.
    pub fn from_uname(output: &str) -> Self {
        if output.trim() == "x86_64" {
            Architecture::X86_64
        } else {
            Architecture::I386
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::X86_64 => "x86_64",
            Architecture::I386 => "i386",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
