use clap::Subcommand;
use std::path::PathBuf;

pub mod pck;

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a PCK file and list its vertex groups
    Inspect {
        /// PCK file to inspect
        path: PathBuf,

        /// Include hex dumps of every section
        #[arg(long)]
        hex: bool,
    },

    /// Write a mesh report as JSON
    Info {
        /// Source PCK file
        path: PathBuf,

        /// Output JSON file (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export meshes to OBJ
    Export {
        /// Source PCK file
        path: PathBuf,

        /// Output OBJ file (defaults to the source path with .obj extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also export faces flagged inactive
        #[arg(long)]
        include_inactive: bool,

        /// Divide vertex coordinates by 256
        #[arg(long)]
        scale: bool,

        /// Config file (defaults to the platform config directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Inspect { path, hex } => pck::inspect(path, *hex),
            Commands::Info { path, output } => pck::info(path, output.as_deref()),
            Commands::Export {
                path,
                output,
                include_inactive,
                scale,
                config,
                quiet,
            } => pck::export(
                path,
                output.as_deref(),
                &pck::ExportFlags {
                    include_inactive: *include_inactive,
                    scale: *scale,
                    config: config.as_deref(),
                    quiet: *quiet,
                },
            ),
        }
    }
}
