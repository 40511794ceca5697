use super::{IMPORT_NAME, PACKAGE_NAME, UPSTREAM_HOMEPAGE};

/// Render a minimal README for the generated package.
pub fn render_readme(version: &str, repo_url: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {PACKAGE_NAME} v{version}\n\n"));
    out.push_str(&format!(
        "Auto-generated Python client for the [Tandoor Recipes]({UPSTREAM_HOMEPAGE}) API.\n\n"
    ));

    out.push_str("## Installation\n\n");
    out.push_str("```bash\n");
    out.push_str(&format!("pip install {PACKAGE_NAME}\n"));
    out.push_str("```\n\n");

    out.push_str("## Usage\n\n");
    out.push_str("```python\n");
    out.push_str(&format!("from {IMPORT_NAME} import Client\n\n"));
    out.push_str("client = Client(base_url=\"https://your-tandoor-instance.com\")\n");
    out.push_str("```\n\n");

    out.push_str(&format!("See the [main repository]({repo_url}) for more details.\n"));
    out
}
