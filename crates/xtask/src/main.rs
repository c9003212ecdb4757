use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::Context;
use regex_lite::Regex;
use serde::Deserialize;

/// Crates the calculator must never pull in as normal dependencies.
const DOMAIN_FORBIDDEN_DEPS: &[&str] = &[
    "tracing",
    "tracing-subscriber",
    "anyhow",
    "chrono",
    "dotenvy",
    "serde_json",
    "tempfile",
    "faerun-shared",
    "faerun-engine",
];

/// Internal crates each crate may not depend on (layering).
const LAYERS: &[(&str, &[&str])] = &[
    ("faerun-domain", &["faerun-shared", "faerun-engine"]),
    ("faerun-shared", &["faerun-engine"]),
];

static DOMAIN_IO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(std::fs|std::net|std::process|std::env|tracing::|println!|eprintln!)")
        .expect("valid regex")
});

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal dependencies, `"dev"` or `"build"` otherwise.
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = dependency_violations(&metadata.packages);
    violations.extend(domain_source_violations(
        &metadata.workspace_root.join("crates/domain/src"),
    )?);

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn dependency_violations(packages: &[Package]) -> Vec<String> {
    let mut violations = Vec::new();

    for package in packages {
        let normal_deps = package
            .dependencies
            .iter()
            .filter(|dep| dep.kind.is_none())
            .map(|dep| dep.name.as_str());

        for dep in normal_deps {
            if package.name == "faerun-domain" && DOMAIN_FORBIDDEN_DEPS.contains(&dep) {
                violations.push(format!("faerun-domain depends on {dep}"));
                continue;
            }
            let layered = LAYERS
                .iter()
                .find(|(name, _)| *name == package.name)
                .is_some_and(|(_, forbidden)| forbidden.contains(&dep));
            if layered {
                violations.push(format!("{} depends on {dep}", package.name));
            }
        }
    }

    violations
}

fn domain_source_violations(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut violations = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries =
            std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let source = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                violations.extend(
                    io_uses(&source)
                        .into_iter()
                        .map(|(line, usage)| format!("{}:{line} uses {usage}", path.display())),
                );
            }
        }
    }

    Ok(violations)
}

/// I/O or logging usages outside `#[cfg(test)]` modules, with 1-based line numbers.
fn io_uses(source: &str) -> Vec<(usize, String)> {
    let mut uses = Vec::new();
    for (index, line) in source.lines().enumerate() {
        // Test modules sit at the end of each file.
        if line.trim_start().starts_with("#[cfg(test)]") {
            break;
        }
        if line.trim_start().starts_with("//") {
            continue;
        }
        if let Some(found) = DOMAIN_IO_RE.find(line) {
            uses.push((index + 1, found.as_str().to_string()));
        }
    }
    uses
}
