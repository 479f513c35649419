//! Build metadata captured by the build script.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Package version string from Cargo.toml
pub fn package_version() -> &'static str {
    PACKAGE_VERSION
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// One-line banner used in the startup log
pub fn banner() -> String {
    format!(
        "scorepipe {} ({}, built {})",
        package_version(),
        git_hash(),
        build_time()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_contains_version_and_hash() {
        let banner = banner();
        assert!(banner.starts_with("scorepipe "));
        assert!(banner.contains(package_version()));
        assert!(banner.contains(git_hash()));
    }
}
