use clap::{Parser, Subcommand};
use projgen::logging::{LogConfig, init_logging};
use projgen::{
    EditorProjectGenerator, GenerationManifest, GeneratorConfig, HostPlatform,
    ProjectFileGenerator,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// CLI arguments for the project file generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (overrides RUST_LOG env var)
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    /// Log file path (overrides PROJGEN_LOG_FILE env var)
    #[arg(long, value_name = "FILE", global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the project descriptor and compile_commands.json
    Generate {
        /// Generation manifest written by the host build system
        #[arg(long, value_name = "FILE")]
        manifest: PathBuf,

        /// Host platform (overrides PROJGEN_HOST_PLATFORM and detection)
        #[arg(long, value_name = "PLATFORM")]
        host_platform: Option<HostPlatform>,

        /// Write project.json without indentation
        #[arg(long)]
        compact: bool,
    },
    /// Remove generated project files
    Clean {
        /// Directory containing the game project file
        #[arg(long, value_name = "DIR")]
        project_dir: PathBuf,
    },
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Generate {
            manifest,
            host_platform,
            compact,
        } => {
            let config = GeneratorConfig::from_env().with_overrides(host_platform, compact);
            let manifest = GenerationManifest::load(&manifest)?;
            let generator = EditorProjectGenerator::new(config);

            let report = generator.generate(&manifest)?;
            info!(
                targets = report.targets_written,
                entries = report.database_entries,
                "Project files generated"
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Clean { project_dir } => {
            let generator = EditorProjectGenerator::new(GeneratorConfig::from_env());
            generator.clean(&project_dir)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging with configuration from env vars and CLI args
    let log_config = LogConfig::from_env().with_overrides(args.log_level, args.log_file);
    if let Err(e) = init_logging(log_config) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Project file generation failed: {}", e);
            eprintln!("Project file generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
