use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use screener_cli::{load_screener, print_pair, print_ranking, ranking_json, read_document, spinner};
use screener_core::config::Config;
use screener_core::corpus::ResumeLoader;
use screener_core::logging::init_tracing;
use screener_core::types::DocumentKind;

/// screener - match résumés against job descriptions by embedding similarity
#[derive(Parser, Debug)]
#[command(name = "screener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one résumé against one job description
    Pair {
        /// Résumé text file
        #[arg(short, long)]
        resume: PathBuf,

        /// Job description text file
        #[arg(short, long)]
        job: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank a directory of .txt résumés against one job description
    Rank {
        /// Job description text file
        #[arg(short, long)]
        job: PathBuf,

        /// Résumé directory (default: data.resume_dir)
        #[arg(short, long)]
        resumes: Option<PathBuf>,

        /// Number of candidates to return (default: ranking.top_k)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing("info");
    let cli = Cli::parse();
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {e}");
        e
    })?;
    let settings = config.settings()?;

    match cli.command {
        Commands::Pair { resume, job, json } => {
            let resume = read_document(&resume, DocumentKind::Resume)?;
            let job = read_document(&job, DocumentKind::JobDescription)?;
            let screener = load_screener(&settings)?;

            let result = screener.match_pair(&resume.text, &job.text)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_pair(&result);
            }
        }
        Commands::Rank { job, resumes, top_k, json } => {
            let job = read_document(&job, DocumentKind::JobDescription)?;
            let resume_dir = match resumes {
                Some(dir) => dir,
                None => settings.resume_dir(&std::env::current_dir()?),
            };
            let top_k = top_k.unwrap_or(settings.ranking.top_k);
            let threshold = settings.ranking.score_threshold;

            let pool = ResumeLoader::new().load_dir(&resume_dir)?;
            let screener = load_screener(&settings)?;

            let pb = spinner(format!("Ranking {} resumes", pool.len()))?;
            let ranked = screener.match_pool(&pool, &job.text, top_k);
            pb.finish_and_clear();
            let ranked = ranked?;

            if json {
                println!("{}", ranking_json(&ranked, threshold)?);
            } else {
                println!("Resumes: {} ({} loaded)", resume_dir.display(), pool.len());
                print_ranking(&ranked, threshold);
            }
        }
    }
    Ok(())
}
