use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// The book description, as JSON exported by the book wizard
    pub book: PathBuf,

    /// Where to write the PDF [default: the book path with a .pdf extension]
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Directory that relative image paths are resolved against
    /// [default: the directory containing the book]
    #[clap(long, env = "SKETCH_BOOK_IMAGES")]
    pub images: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renders a book description into a print-ready PDF
    Render(RenderArgs),
    /// Lists the pages a book description would render to, without rendering
    Plan {
        /// The book description, as JSON exported by the book wizard
        book: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
