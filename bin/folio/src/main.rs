//! folio CLI
//!
//! Builds, checks and previews the blog.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use folio::cmd::build::BuildOptions;

/// Command-line interface for folio.
#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Builds a personal blog with vertical-rhythm typography"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the static site
    Build {
        /// Output directory [default: build.output_dir from the config]
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Include draft posts
        #[arg(long)]
        drafts: bool,
        /// Build for production: write typography.css instead of inlining it
        #[arg(long)]
        production: bool,
    },
    /// Validate configuration and content
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Build in development mode and serve the output
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Output directory [default: build.output_dir from the config]
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            output,
            drafts,
            production,
        } => {
            folio::cmd::build::run(
                &cli.config,
                &BuildOptions {
                    output,
                    drafts,
                    production,
                },
            )?;
        }
        Commands::Check { strict } => {
            folio::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Serve { port, output } => {
            folio::cmd::serve::run(&cli.config, port, output).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_build_command_parsing() {
        let args = ["folio", "build", "--output", "dist"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("config.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Build {
                output,
                drafts,
                production,
            } => {
                assert_eq!(output, Some(std::path::PathBuf::from("dist")));
                assert!(!drafts);
                assert!(!production);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_flags() {
        let args = ["folio", "build", "--drafts", "--production"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Build {
                output,
                drafts,
                production,
            } => {
                assert!(output.is_none());
                assert!(drafts);
                assert!(production);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_serve_command_parsing() {
        let cli = Cli::parse_from(["folio", "serve"]);
        match cli.command {
            Commands::Serve { port, output } => {
                assert_eq!(port, 3000);
                assert!(output.is_none());
            }
            _ => panic!("Expected Serve command"),
        }

        let cli = Cli::parse_from(["folio", "serve", "-p", "8080"]);
        match cli.command {
            Commands::Serve { port, .. } => assert_eq!(port, 8080),
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["folio", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["folio", "-vvv", "build"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["folio", "--config", "demos/blog/config.toml", "build"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("demos/blog/config.toml"));
    }
}
