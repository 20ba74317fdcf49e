use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use resume_analyzer::types::{AnalysisRecord, MatchRecord};
use resume_analyzer::{analyze_resume, match_technologies, taxonomy, utils};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cvscope")]
#[command(about = "Analyze résumé text and match it against job descriptions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a résumé text file, optionally against a job description
    Analyze {
        resume: PathBuf,
        /// Job description text file for keyword suggestions
        #[arg(long)]
        job_description: Option<PathBuf>,
        /// Write the JSON record here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Match résumé technologies against a job description's requirements
    Match {
        resume: PathBuf,
        job_description: PathBuf,
        /// Write the JSON record here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Bucket a comma-separated skill list by taxonomy category
    Categorize { skills: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            resume,
            job_description,
            output,
        } => {
            let resume_text = utils::read_document(&resume).await?;
            let job_text = match &job_description {
                Some(path) => Some(utils::read_document(path).await?),
                None => None,
            };
            info!(
                resume = %resume.display(),
                with_job_description = job_text.is_some(),
                "analyzing resume"
            );

            let result = analyze_resume(&resume_text, job_text.as_deref());
            let record = AnalysisRecord::new(result);
            info!(id = %record.id, score = record.analysis.final_score, "analysis stored");
            emit(&serde_json::to_string_pretty(&record)?, output).await?;
        }

        Command::Match {
            resume,
            job_description,
            output,
        } => {
            let resume_text = utils::read_document(&resume).await?;
            let job_text = utils::read_document(&job_description).await?;
            info!(
                resume = %resume.display(),
                job_description = %job_description.display(),
                "matching technologies"
            );

            let result = match_technologies(&resume_text, &job_text);
            let record = MatchRecord::new(job_text, result);
            info!(id = %record.id, score = record.result.score, "match stored");
            emit(&serde_json::to_string_pretty(&record)?, output).await?;
        }

        Command::Categorize { skills } => {
            let categorized = taxonomy::categorize_skills(&skills);
            emit(&serde_json::to_string_pretty(&categorized)?, None).await?;
        }
    }

    Ok(())
}

async fn emit(json: &str, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            utils::write_output(&path, json).await?;
            info!(output = %path.display(), "result written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
