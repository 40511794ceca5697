pub mod pyproject;
pub mod readme;

use std::path::{Path, PathBuf};

/// Distribution name published to the package index
pub const PACKAGE_NAME: &str = "tandoor-client";
/// Python import name of the generated package
pub const IMPORT_NAME: &str = "tandoor_client";
/// Project page of the service the client talks to
pub const UPSTREAM_HOMEPAGE: &str = "https://tandoor.dev";

pub const PYPROJECT_FILENAME: &str = "pyproject.toml";
pub const README_FILENAME: &str = "README.md";

pub use pyproject::render_pyproject;
pub use readme::render_readme;

/// Inputs for a single patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRequest {
    pub package_dir: PathBuf,
    pub version: String,
    pub repo_url: String,
    pub upstream_url: String,
}

impl PatchRequest {
    pub fn new(
        package_dir: impl Into<PathBuf>,
        version: impl Into<String>,
        repo_url: impl Into<String>,
        upstream_url: impl Into<String>,
    ) -> Self {
        PatchRequest {
            package_dir: package_dir.into(),
            version: version.into(),
            repo_url: repo_url.into(),
            upstream_url: upstream_url.into(),
        }
    }

    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    pub fn pyproject_path(&self) -> PathBuf {
        self.package_dir.join(PYPROJECT_FILENAME)
    }

    pub fn readme_path(&self) -> PathBuf {
        self.package_dir.join(README_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_live_in_package_dir() {
        let request = PatchRequest::new(
            "/tmp/pkg",
            "1.2.3",
            "https://example.com/repo",
            UPSTREAM_HOMEPAGE,
        );

        assert_eq!(request.pyproject_path(), Path::new("/tmp/pkg/pyproject.toml"));
        assert_eq!(request.readme_path(), Path::new("/tmp/pkg/README.md"));
    }
}
