//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# gostyle configuration
# Every rule always runs; this file only tunes discovery and conventions.

[analyzer]
# Glob patterns to exclude, matched against full and root-relative paths
exclude = [
    "**/vendor/**",
    "**/.git/**",
]

# Respect .gitignore files
respect_gitignore = true

# Maximum number of files analyzed at once (default: one per core)
# parallelism = 4

[conventions]
# Path segment marking configuration-plugin packages (GS103)
cfgplugin_segment = "cfgplugins"

# Issue tracker prefix suggested for bare bug references (GS106)
issue_url_base = "https://example.corp.example.com/issues/"
"#;

/// Runs the init command in the current directory.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("gostyle.toml"), force)?;

    println!("Created gostyle.toml");
    println!("\nNext steps:");
    println!("  1. Adjust [analyzer] exclude patterns");
    println!("  2. Run: gostyle .");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }
    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
