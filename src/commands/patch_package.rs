use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::PatcherError;
use crate::metadata::{render_pyproject, render_readme, PatchRequest};

/// Check that the package directory exists and is a directory.
pub fn validate_target(package_dir: &Path) -> Result<(), PatcherError> {
    if package_dir.is_dir() {
        Ok(())
    } else {
        Err(PatcherError::DirectoryNotFound(package_dir.to_path_buf()))
    }
}

/// Replace the generated pyproject.toml with our metadata.
/// Any existing content is overwritten, not merged.
pub fn patch_pyproject(request: &PatchRequest) -> Result<PathBuf, PatcherError> {
    let path = request.pyproject_path();
    let content = render_pyproject(&request.version, &request.repo_url, &request.upstream_url);
    write_file(&path, &content)?;
    Ok(path)
}

/// Write the package README.
pub fn create_readme(request: &PatchRequest) -> Result<PathBuf, PatcherError> {
    let path = request.readme_path();
    let content = render_readme(&request.version, &request.repo_url);
    write_file(&path, &content)?;
    Ok(path)
}

/// Patch both metadata files, reporting each write to `out`.
///
/// The manifest is written first. There is no rollback: if the README
/// write fails, the manifest has already been replaced.
pub fn run(request: &PatchRequest, out: &mut impl Write) -> Result<(), PatcherError> {
    validate_target(request.package_dir())?;

    let pyproject_path = patch_pyproject(request)?;
    // Output errors are ignored; the file is already written.
    let _ = writeln!(
        out,
        "Patched {} with version {}",
        pyproject_path.display(),
        request.version
    );

    let readme_path = create_readme(request)?;
    let _ = writeln!(out, "Created {}", readme_path.display());

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), PatcherError> {
    fs::write(path, content).map_err(|source| PatcherError::Write {
        path: path.to_path_buf(),
        source,
    })
}
