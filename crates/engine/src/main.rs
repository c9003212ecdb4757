//! Faerun sheet tool - Main entry point.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faerun_engine::infrastructure::{Config, SaveMode};
use faerun_engine::App;
use faerun_shared::{CharacterBuildForm, HpCalculatorForm, SheetUpdateForm};

const USAGE: &str = "\
Usage:
  faerun-sheet render [FORM.json]   compute and print the sheet update
  faerun-sheet hp [BUILDS.json]     maximum hit points per character
  faerun-sheet restore              print the stored sheet snapshot
  faerun-sheet clear                delete stored snapshots

Without a file, render and hp reuse the last snapshot.";

/// A builds file is either the calculator form or a bare list of cards.
#[derive(Deserialize)]
#[serde(untagged)]
enum BuildsFile {
    Cards(Vec<CharacterBuildForm>),
    Form(HpCalculatorForm),
}

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (commands usually run from `crates/engine`).
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faerun_engine=info,faerun_shared=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::debug!(data_dir = %config.data_dir.display(), "Configuration loaded");
    let app = App::new(config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["render"] => render(&app, None),
        ["render", path] => render(&app, Some(PathBuf::from(path))),
        ["hp"] => hp(&app, None),
        ["hp", path] => hp(&app, Some(PathBuf::from(path))),
        ["restore"] => restore(&app),
        ["clear"] => {
            if !app.clear_snapshots() {
                bail!("could not delete every snapshot in {}", app.config.data_dir.display());
            }
            println!("Sauvegardes supprimées.");
            Ok(())
        }
        ["help"] | ["--help"] | ["-h"] => {
            println!("{USAGE}");
            Ok(())
        }
        _ => bail!("unknown command\n\n{USAGE}"),
    }
}

fn render(app: &App, path: Option<PathBuf>) -> anyhow::Result<()> {
    let use_case = &app.use_cases.render_sheet_update;
    // A form given on the command line is saved on exit; a restored one only when due.
    let (form, save): (SheetUpdateForm, _) = match path {
        Some(path) => (read_json(&path)?, SaveMode::Now),
        None => (use_case.restore(), SaveMode::IfDue),
    };

    let rendered = use_case.execute(&form, save);

    let parts = rendered.message.parts();
    for (index, part) in parts.iter().enumerate() {
        if parts.len() > 1 {
            println!("----- Partie {}/{} -----", index + 1, parts.len());
        }
        println!("{part}");
    }

    eprintln!("{}", rendered.length_status);
    if let Some(warning) = rendered.message.warning() {
        eprintln!("{warning}");
    }
    for warning in &rendered.warnings {
        eprintln!("⚠️ {warning}");
    }
    if !rendered.placeholders.is_empty() {
        eprintln!("À compléter : {}", rendered.placeholders.join(", "));
    }
    Ok(())
}

fn hp(app: &App, path: Option<PathBuf>) -> anyhow::Result<()> {
    let use_case = &app.use_cases.calculate_max_hp;
    let (form, save) = match path {
        Some(path) => {
            let form = match read_json::<BuildsFile>(&path)? {
                BuildsFile::Form(form) => form,
                BuildsFile::Cards(cards) => HpCalculatorForm::new(cards),
            };
            (form, SaveMode::Now)
        }
        None => (use_case.restore(), SaveMode::IfDue),
    };

    let report = use_case.execute(&form, save);
    let blocks: Vec<&str> = report.characters.iter().map(|c| c.text.as_str()).collect();
    println!("{}", blocks.join("\n\n"));
    Ok(())
}

fn restore(app: &App) -> anyhow::Result<()> {
    match app.stored_sheet() {
        Some(snapshot) => {
            let text = serde_json::to_string_pretty(&snapshot)
                .context("failed to format stored snapshot")?;
            println!("{text}");
        }
        None => println!("Aucune sauvegarde."),
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Load `.env.local` first so it can override `.env`.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
