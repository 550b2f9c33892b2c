use anyhow::Result;
use clap::Parser;

use screener_cli::{ensure_not_blank, load_screener, print_pair};
use screener_core::config::Config;
use screener_core::logging::init_tracing;
use screener_core::types::Document;

const SAMPLE_RESUME: &str = "
John Doe
Software Engineer

SKILLS:
- Python
- JavaScript
- React
- AWS
- Docker
- Machine Learning

EXPERIENCE:
Senior Software Engineer at TechCorp (2020-2024)
- Led development of microservices architecture
- Improved system performance by 40%
- Managed team of 5 engineers

Software Engineer at StartupXYZ (2018-2020)
- Built full-stack web applications
- Implemented CI/CD pipelines
- Mentored junior developers
";

const SAMPLE_JOB: &str = "
Senior Software Engineer - Backend

We are looking for a Senior Backend Engineer to join our team.

REQUIREMENTS:
- 5+ years of software engineering experience
- Strong proficiency in Python
- Experience with cloud platforms (AWS, GCP, Azure)
- Knowledge of containerization (Docker, Kubernetes)
- Experience building scalable systems
- Team leadership experience

RESPONSIBILITIES:
- Design and implement microservices
- Optimize system performance
- Lead technical initiatives
- Mentor junior developers
";

/// screener-demo - score a built-in sample résumé against a sample job
#[derive(Parser, Debug)]
#[command(name = "screener-demo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing("warn");
    let args = Args::parse();
    let settings = Config::load()?.settings()?;

    let resume = Document::resume(SAMPLE_RESUME);
    let job = Document::job(SAMPLE_JOB);
    ensure_not_blank(&resume)?;
    ensure_not_blank(&job)?;

    let screener = load_screener(&settings)?;
    let result = screener.match_pair(&resume.text, &job.text)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_pair(&result);
    }
    Ok(())
}
