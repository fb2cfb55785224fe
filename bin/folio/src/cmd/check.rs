//! Check command - validate configuration and content

use std::{collections::HashMap, path::Path};

use color_eyre::eyre::{Result, bail};
use folio_core::{Config, content::slug_from_relative_path};
use folio_generator::collector::{ABOUT_FILE, POSTS_DIR, find_markdown_files};
use folio_parser::MarkdownParser;

use crate::{CONTENT_DIR, load_typography, site_root};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Problems that fail the check.
    pub errors: Vec<String>,
    /// Problems that only fail the check in strict mode.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and all content files.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let result = validate(config_path);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Validate the site described by `config_path` without building it.
pub fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();
    let root = site_root(config_path);

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    if let Some(ref cfg) = config {
        println!("\nChecking configuration values...");
        check_config_values(cfg, &root, &mut result);
    }

    let content_dir = root.join(CONTENT_DIR);
    if content_dir.is_dir() {
        println!("\nChecking content files...");
        let syntax_theme = config
            .as_ref()
            .map_or(folio_parser::syntax::DEFAULT_THEME, |c| c.build.syntax_theme.as_str());
        validate_content_files(&content_dir, syntax_theme, &mut result);
    } else {
        result.add_error(format!(
            "Required directory missing: {}",
            content_dir.display()
        ));
    }

    result
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, root: &Path, result: &mut ValidationResult) {
    if config.site.base_url.is_empty() {
        result.add_warning("site.base_url is empty");
    } else if !config.site.base_url.starts_with("http") {
        result.add_warning("site.base_url should start with http:// or https://");
    }

    if config.site.menu_links.is_empty() {
        result.add_warning("site.menu_links is empty, the header navigation will be blank");
    }
    for link in &config.site.menu_links {
        if link.name.trim().is_empty() {
            result.add_warning(format!("Menu link to {} has an empty name", link.link));
        }
    }

    if let Err(e) = load_typography(config) {
        result.add_error(format!("Theme error: {e}"));
    }

    let output = root.join(&config.build.output_dir);
    if output.exists() && !output.is_dir() {
        result.add_error(format!(
            "Output path exists but is not a directory: {}",
            output.display()
        ));
    }

    println!("  ✓ Configuration values checked");
}

/// Parse every post and the about page, reporting parse failures, undated
/// posts and duplicate slugs.
fn validate_content_files(content_dir: &Path, syntax_theme: &str, result: &mut ValidationResult) {
    let parser = MarkdownParser::with_theme(syntax_theme);
    let posts_dir = content_dir.join(POSTS_DIR);

    let files = match find_markdown_files(&posts_dir) {
        Ok(files) => files,
        Err(e) => {
            result.add_error(format!("{}: {e}", posts_dir.display()));
            return;
        }
    };

    let mut checked = 0;
    let mut failed = 0;
    let mut slugs: HashMap<String, Vec<String>> = HashMap::new();

    for path in &files {
        checked += 1;

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                result.add_error(format!("{}: Failed to read file: {e}", path.display()));
                failed += 1;
                continue;
            }
        };

        match parser.parse(&content, path) {
            Ok(parsed) => {
                if parsed.frontmatter.title.trim().is_empty() {
                    result.add_warning(format!("{}: Post has no title", path.display()));
                }
                if parsed.frontmatter.date.is_none() {
                    result.add_warning(format!(
                        "{}: Post has no date and will be listed last",
                        path.display()
                    ));
                }
            }
            Err(e) => {
                result.add_error(format!("{}: Parse error: {e}", path.display()));
                failed += 1;
            }
        }

        let relative = path.strip_prefix(&posts_dir).unwrap_or(path);
        slugs
            .entry(slug_from_relative_path(relative))
            .or_default()
            .push(path.display().to_string());
    }

    let mut duplicates: Vec<_> = slugs.into_iter().filter(|(_, paths)| paths.len() > 1).collect();
    duplicates.sort();
    for (slug, paths) in duplicates {
        result.add_warning(format!("Duplicate slug {slug}: {}", paths.join(", ")));
    }

    let about = content_dir.join(ABOUT_FILE);
    if about.is_file() {
        match std::fs::read_to_string(&about) {
            Ok(content) => {
                if let Err(e) = parser.parse(&content, &about) {
                    result.add_error(format!("{}: Parse error: {e}", about.display()));
                }
            }
            Err(e) => result.add_error(format!("{}: Failed to read file: {e}", about.display())),
        }
    } else {
        result.add_warning(format!(
            "{} is missing, the about page will be empty",
            about.display()
        ));
    }

    if failed == 0 {
        println!("  ✓ All {checked} posts valid");
    } else {
        println!("  ✗ {failed}/{checked} posts have errors");
    }
}
