//! Test fixtures for common test scenarios.
//!
//! Captured `-print-target-info` output for a few typical targets.

/// macOS host query, no variant.
pub const MACOS_TARGET_INFO: &str = r#"{"target":{"triple":"x86_64-apple-macosx10.15","unversionedTriple":"x86_64-apple-macosx","moduleTriple":"x86_64-apple-macos","librariesRequireRPath":false}}"#;

/// macOS target with a Mac Catalyst variant.
pub const CATALYST_TARGET_INFO: &str = r#"{
  "compilerVersion": "Swift version 5.3 (swiftlang-1200.0.29.2 clang-1200.0.30.1)",
  "target": {
    "triple": "x86_64-apple-macosx10.15",
    "unversionedTriple": "x86_64-apple-macosx",
    "moduleTriple": "x86_64-apple-macos",
    "swiftRuntimeCompatibilityVersion": "5.0",
    "librariesRequireRPath": false
  },
  "targetVariant": {
    "triple": "x86_64-apple-ios13.1-macabi",
    "unversionedTriple": "x86_64-apple-ios-macabi",
    "moduleTriple": "x86_64-apple-ios-macabi",
    "swiftRuntimeCompatibilityVersion": "5.1",
    "librariesRequireRPath": false
  },
  "paths": {
    "runtimeLibraryPaths": ["/usr/lib/swift"],
    "runtimeLibraryImportPaths": ["/usr/lib/swift", "/usr/lib/swift/macosx"],
    "runtimeResourcePath": "/usr/lib/swift"
  }
}"#;

/// Linux host query with runtime paths.
pub const LINUX_TARGET_INFO: &str = r#"{
  "target": {
    "triple": "x86_64-unknown-linux-gnu",
    "unversionedTriple": "x86_64-unknown-linux-gnu",
    "moduleTriple": "x86_64-unknown-linux-gnu",
    "librariesRequireRPath": false
  },
  "paths": {
    "runtimeLibraryPaths": ["/usr/lib/swift/linux"],
    "runtimeLibraryImportPaths": ["/usr/lib/swift/linux", "/usr/lib/swift/linux/x86_64"],
    "runtimeResourcePath": "/usr/lib/swift"
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::decode_target_info;

    #[test]
    fn test_fixtures_decode() {
        for fixture in [MACOS_TARGET_INFO, CATALYST_TARGET_INFO, LINUX_TARGET_INFO] {
            decode_target_info(fixture.as_bytes()).unwrap();
        }
    }

    #[test]
    fn test_linux_fixture_paths() {
        let info = decode_target_info(LINUX_TARGET_INFO.as_bytes()).unwrap();
        let paths = info.paths.unwrap();
        assert_eq!(paths.runtime_library_paths, vec!["/usr/lib/swift/linux"]);
        assert_eq!(paths.runtime_library_import_paths.len(), 2);
    }
}
