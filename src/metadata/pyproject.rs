use super::{IMPORT_NAME, PACKAGE_NAME, README_FILENAME};

/// Render the full pyproject.toml for the generated client.
///
/// Values are substituted verbatim. The version and URLs are not checked
/// for well-formedness.
pub fn render_pyproject(version: &str, repo_url: &str, upstream_url: &str) -> String {
    format!(
        r#"[build-system]
requires = ["setuptools>=68.0", "wheel"]
build-backend = "setuptools.build_meta"

[project]
name = "{PACKAGE_NAME}"
version = "{version}"
description = "Auto-generated Python client for the Tandoor Recipes API"
readme = "{README_FILENAME}"
license = "MIT"
requires-python = ">=3.12"
authors = [
    {{name = "Tandoor Client Auto-Publisher"}},
]
classifiers = [
    "Development Status :: 4 - Beta",
    "Intended Audience :: Developers",
    "Programming Language :: Python :: 3",
    "Programming Language :: Python :: 3.12",
    "Programming Language :: Python :: 3.13",
    "Programming Language :: Python :: 3.14",
    "Typing :: Typed",
]
keywords = ["tandoor", "recipes", "api", "client", "openapi"]
dependencies = [
    "httpx>=0.20.0",
    "attrs>=21.3.0",
    "python-dateutil>=2.8.0",
]

[project.urls]
Homepage = "{repo_url}"
"Tandoor Recipes" = "{upstream_url}"
"Bug Tracker" = "{repo_url}/issues"

[tool.setuptools.packages.find]
include = ["{IMPORT_NAME}*"]
"#
    )
}
