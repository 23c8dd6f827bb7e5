//! Compile-time build metadata for the CLI version surface.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("ZELLIJ_TOOLS_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("ZELLIJ_TOOLS_BUILD_TIMESTAMP");

/// `--version` body: version line plus commit and build time.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("ZELLIJ_TOOLS_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("ZELLIJ_TOOLS_BUILD_TIMESTAMP")
);
