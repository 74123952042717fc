use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pairbatch",
    version,
    about = "Organise paired text and image files into batches with concatenated text files",
    after_help = "Examples:\n  \
        pairbatch ./scans --batch-size 250 --prefix Batch\n  \
        pairbatch ./images --batch-size 100 --prefix Project --move\n  \
        pairbatch ./data --text-ext .txt --image-ext .png"
)]
pub struct CliArgs {
    /// Directory containing the files to organise
    pub source_dir: PathBuf,

    /// Number of file pairs per batch
    #[arg(long, default_value_t = 250, allow_negative_numbers = true)]
    pub batch_size: i64,

    /// Prefix for batch folder names (Batch gives Batch_01, Batch_02, ...)
    #[arg(long, default_value = "Batch")]
    pub prefix: String,

    /// Extension of the text files
    #[arg(long, default_value = ".txt", allow_hyphen_values = true)]
    pub text_ext: String,

    /// Extension of the image files
    #[arg(long, default_value = ".jpg", allow_hyphen_values = true)]
    pub image_ext: String,

    /// Name of the concatenated text file written into each batch folder
    #[arg(long, default_value = "combined.txt")]
    pub combined_name: String,

    /// Move files instead of copying them
    #[arg(long = "move", default_value_t = false)]
    pub move_files: bool,

    /// Where batch folders are created (defaults to SOURCE_DIR)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
