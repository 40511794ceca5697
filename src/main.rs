use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tandoor_client_patcher::commands::patch_package;
use tandoor_client_patcher::metadata::PatchRequest;

#[derive(Parser)]
#[command(name = "tandoor-client-patcher")]
#[command(about = "Patch generated client package metadata")]
#[command(version)]
struct Cli {
    /// Path to the generated package directory
    package_dir: PathBuf,
    /// Package version string
    #[arg(value_name = "VERSION")]
    package_version: String,
    /// Publisher repository URL
    #[arg(long)]
    repo_url: String,
    /// Upstream project URL
    #[arg(long)]
    upstream_url: String,
}

fn main() {
    let cli = Cli::parse();

    let request = PatchRequest::new(
        cli.package_dir,
        cli.package_version,
        cli.repo_url,
        cli.upstream_url,
    );

    if let Err(e) = patch_package::run(&request, &mut io::stdout()) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positionals_and_flags() {
        let cli = Cli::try_parse_from([
            "tandoor-client-patcher",
            "/tmp/pkg",
            "1.2.3",
            "--repo-url",
            "https://example.com/repo",
            "--upstream-url",
            "https://tandoor.dev",
        ])
        .unwrap();

        assert_eq!(cli.package_dir, PathBuf::from("/tmp/pkg"));
        assert_eq!(cli.package_version, "1.2.3");
        assert_eq!(cli.repo_url, "https://example.com/repo");
        assert_eq!(cli.upstream_url, "https://tandoor.dev");
    }

    #[test]
    fn url_flags_are_required() {
        let result = Cli::try_parse_from([
            "tandoor-client-patcher",
            "/tmp/pkg",
            "1.2.3",
            "--repo-url",
            "https://example.com/repo",
        ]);

        assert!(result.is_err());
    }
}
