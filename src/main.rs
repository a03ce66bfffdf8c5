use anyhow::{Context, Result};
use cli::{Cli, Commands, RenderArgs};
use sketch_book::book::{left_margin_for, page_plan};
use sketch_book::{generate_book_pdf, BookState, FileResolver, In};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    match &cli.command {
        Commands::Render(args) => render(args),
        Commands::Plan { book } => plan(book),
    }
}

fn load_book(path: &Path) -> Result<BookState> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read book description {}", path.display()))?;
    BookState::from_json(&contents)
        .with_context(|| format!("Failed to parse book description {}", path.display()))
}

fn render(args: &RenderArgs) -> Result<()> {
    let state = load_book(&args.book)?;

    let image_root = match &args.images {
        Some(images) => images.clone(),
        None => args
            .book
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.book.with_extension("pdf"));

    let pdf = generate_book_pdf(&state, FileResolver::new(image_root))
        .with_context(|| "Failed to generate PDF")?;
    std::fs::write(&output, &pdf)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Wrote {} pages to {}",
        page_plan(&state).len(),
        output.display()
    );
    Ok(())
}

fn plan(book: &Path) -> Result<()> {
    let state = load_book(book)?;
    for (i, kind) in page_plan(&state).into_iter().enumerate() {
        let page_number = i + 1;
        let side = if sketch_book::book::is_recto(page_number) {
            "recto"
        } else {
            "verso"
        };
        println!(
            "{page_number:>4}  {:<12} {side}  left margin {}in",
            kind.to_string(),
            In::from(left_margin_for(page_number))
        );
    }
    Ok(())
}
