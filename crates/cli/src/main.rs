use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use movie_types::{RecommendationRequest, RecommendationResult};
use server::{AppConfig, RecommendationOrchestrator};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpListener;
use tracing::info;

/// Longest plot shown in the pretty listing
const PLOT_PREVIEW_CHARS: usize = 100;

/// movie-recs - Prompt-driven movie recommendations
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Movie recommendations from free-text preferences, enriched with OMDb metadata", long_about = None)]
struct Cli {
    /// YAML config file; flags and environment override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// API key for the Gemini generation service
    #[arg(long, env = "GEMINI_API_KEY", global = true, hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// API key for the OMDb metadata service
    #[arg(long, env = "OMDB_API_KEY", global = true, hide_env_values = true)]
    omdb_api_key: Option<String>,

    /// Pause between metadata lookups in milliseconds (0 disables)
    #[arg(long, env = "MOVIE_RECS_DELAY_MS", global = true)]
    delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to listen on, e.g. 0.0.0.0:8000
        #[arg(long)]
        bind: Option<String>,
    },

    /// Get recommendations for one preference
    Recommend {
        /// Free-text movie preference, e.g. "time travel stories"
        #[arg(long)]
        text: String,

        /// Print the raw JSON result instead of the formatted listing
        #[arg(long)]
        json: bool,
    },

    /// Prompt for preferences until 'quit'
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            handle_serve(config).await?
        }
        Commands::Recommend { text, json } => handle_recommend(config, text, json).await?,
        Commands::Interactive => handle_interactive(config).await?,
    }

    Ok(())
}

/// Defaults, then the config file, then flags/env
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    if let Some(key) = &cli.gemini_api_key {
        config.gemini.api_key = key.clone();
    }
    if let Some(key) = &cli.omdb_api_key {
        config.omdb.api_key = key.clone();
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.pacing.delay_ms = delay_ms;
    }

    Ok(config)
}

fn build_orchestrator(config: &AppConfig) -> Result<RecommendationOrchestrator> {
    config.validate().context("Incomplete configuration")?;
    RecommendationOrchestrator::from_config(config)
}

/// Handle the 'serve' command
async fn handle_serve(config: AppConfig) -> Result<()> {
    let orchestrator = Arc::new(build_orchestrator(&config)?);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    server::serve(listener, orchestrator).await
}

/// Handle the 'recommend' command
async fn handle_recommend(config: AppConfig, text: String, json: bool) -> Result<()> {
    let orchestrator = build_orchestrator(&config)?;
    let request = RecommendationRequest::new(&text)?;

    let start = Instant::now();
    let result = orchestrator.get_complete_movie_data(&request).await;
    info!("Request completed in {:.2?}", start.elapsed());

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_recommendations(&result);
    }
    Ok(())
}

/// Handle the 'interactive' command
async fn handle_interactive(config: AppConfig) -> Result<()> {
    let orchestrator = build_orchestrator(&config)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", "Movie Recommender".bold().blue());
    println!("Describe what you'd like to watch, or type 'quit' to exit.");

    loop {
        print!("\n{} ", "What kind of movies are you looking for?".bold());
        std::io::stdout().flush()?;

        // End of input ends the session like 'quit'
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        if is_quit_command(input) {
            break;
        }
        let Ok(request) = RecommendationRequest::new(input) else {
            println!("{}", "Please enter a movie preference.".yellow());
            continue;
        };

        println!("Searching for movies...");
        let result = orchestrator.get_complete_movie_data(&request).await;
        print_recommendations(&result);
    }

    println!("Goodbye!");
    Ok(())
}

fn is_quit_command(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "exit" | "q")
}

/// First `PLOT_PREVIEW_CHARS` characters of the plot, with `...` if cut
fn plot_preview(plot: &str) -> String {
    if plot.chars().count() > PLOT_PREVIEW_CHARS {
        let head: String = plot.chars().take(PLOT_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        plot.to_string()
    }
}

/// Helper function to format and print a recommendation result
fn print_recommendations(result: &RecommendationResult) {
    if let Some(error) = &result.error {
        println!("{} {}", "Error:".red().bold(), error);
        return;
    }

    println!(
        "\n{}",
        format!("Recommendations for '{}':", result.user_input).bold().blue()
    );

    for (rank, movie) in result.movie_details.iter().enumerate() {
        println!(
            "\n{}. {}",
            (rank + 1).to_string().green(),
            movie.title.bold()
        );
        println!("   Year: {}", movie.year);
        println!("   Genre: {}", movie.genre);
        println!("   Director: {}", movie.director);
        println!("   IMDb Rating: {}", movie.imdb_rating);
        println!("   Runtime: {}", movie.runtime);
        println!("   Language: {}", movie.language);
        println!("   Plot: {}", plot_preview(&movie.plot));
        match &movie.poster_url {
            Some(url) => println!("   Poster: {}", url.cyan()),
            None => println!("   Poster: {}", "Not available".dimmed()),
        }
    }

    println!("\n{}", "Data variables:".bold());
    println!("   movie_names: {:?}", result.movie_names);
    println!("   poster_urls: {:?}", result.poster_urls);
    println!("   Total movies: {}", result.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_preview_short_plot_unchanged() {
        assert_eq!(plot_preview("A short plot."), "A short plot.");
    }

    #[test]
    fn test_plot_preview_truncates_long_plot() {
        let plot = "x".repeat(150);
        let preview = plot_preview(&plot);

        assert_eq!(preview.len(), PLOT_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_plot_preview_counts_characters_not_bytes() {
        let plot = "é".repeat(101);
        let preview = plot_preview(&plot);

        assert_eq!(preview.chars().count(), PLOT_PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_quit_commands() {
        for input in ["quit", "exit", "q", "QUIT", "Exit"] {
            assert!(is_quit_command(input), "{input} should quit");
        }
        assert!(!is_quit_command("quiet films"));
        assert!(!is_quit_command(""));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "movie-recs",
            "--gemini-api-key",
            "g-key",
            "--omdb-api-key",
            "o-key",
            "--delay-ms",
            "0",
            "recommend",
            "--text",
            "heist films",
        ]);

        let config = load_config(&cli).unwrap();

        assert_eq!(config.gemini.api_key, "g-key");
        assert_eq!(config.omdb.api_key, "o-key");
        assert_eq!(config.pacing.delay_ms, 0);
        assert!(config.validate().is_ok());
        assert!(matches!(cli.command, Commands::Recommend { json: false, .. }));
    }
}
