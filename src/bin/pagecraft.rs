use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pagecraft", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a PageSpec document and print its normalized form.
    Validate(ValidateArgs),
    /// Resolve a page by slug and print the payload a page endpoint would serve.
    Page(PageArgs),
    /// Print component metadata, for all components or one.
    Components(ComponentsArgs),
    /// Print a theme's tokens (unknown names fall back to the default theme).
    Theme(ThemeArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input PageSpec JSON (reads stdin when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Check only the document envelope, skipping component prop schemas.
    #[arg(long)]
    permissive: bool,
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Page slug to resolve.
    #[arg(long)]
    slug: String,
}

#[derive(Parser, Debug)]
struct ComponentsArgs {
    /// Limit output to one component id.
    #[arg(long)]
    id: Option<String>,
}

#[derive(Parser, Debug)]
struct ThemeArgs {
    /// Theme name.
    #[arg(long)]
    name: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Page(args) => cmd_page(args),
        Command::Components(args) => cmd_components(args),
        Command::Theme(args) => cmd_theme(args),
    }
}

fn read_document(path: Option<&Path>) -> anyhow::Result<pagecraft::PageDocument> {
    match path {
        Some(path) => Ok(pagecraft::PageDocument::from_path(path)?),
        None => Ok(pagecraft::PageDocument::from_reader(std::io::stdin().lock())?),
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let doc = read_document(args.in_path.as_deref())?;
    let mode = if args.permissive {
        pagecraft::ValidationMode::Permissive
    } else {
        pagecraft::ValidationMode::Strict
    };
    let catalog = Arc::new(pagecraft::SchemaCatalog::builtin());
    let validator = pagecraft::PageSpecValidator::with_mode(catalog, mode);

    match validator.validate(&doc) {
        Ok(spec) => {
            println!("{}", serde_json::to_string_pretty(&spec.to_value()?)?);
            Ok(())
        }
        Err(report) => {
            let body = serde_json::json!({
                "error": "Invalid PageSpec",
                "details": report.details(),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
            anyhow::bail!("invalid PageSpec ({} issue(s))", report.len());
        }
    }
}

fn cmd_page(args: PageArgs) -> anyhow::Result<()> {
    let resolver = pagecraft::PageResolver::builtin();
    let outcome = resolver.resolve(&args.slug)?;
    let status = outcome.status();
    println!("{}", serde_json::to_string_pretty(&outcome.body()?)?);
    if status != 200 {
        anyhow::bail!("page '{}' resolved with status {status}", args.slug);
    }
    Ok(())
}

fn cmd_components(args: ComponentsArgs) -> anyhow::Result<()> {
    let registry = pagecraft::MetaRegistry::builtin();
    match &args.id {
        Some(id) => {
            let meta = registry
                .get(id)
                .with_context(|| format!("unknown component '{id}'"))?;
            println!("{}", serde_json::to_string_pretty(meta)?);
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&registry.to_value()?)?);
        }
    }
    Ok(())
}

fn cmd_theme(args: ThemeArgs) -> anyhow::Result<()> {
    let store = pagecraft::ThemeStore::builtin();
    if store.get(&args.name).is_none() {
        eprintln!(
            "unknown theme '{}', using '{}'",
            args.name,
            store.fallback_name()
        );
    }
    let theme = store.resolve(&args.name);
    println!("{}", serde_json::to_string_pretty(&theme.to_value()?)?);
    Ok(())
}
