use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use mc_form::{Config, FormJob};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Render a multiple-choice human evaluation form from JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with "Ground Truth" and "Answer 1/2/3" per question
    #[arg(long)]
    json: PathBuf,

    /// Where to write the rendered HTML
    #[arg(long)]
    out: PathBuf,

    /// Form submission action (Google Apps Script web app URL)
    #[arg(long = "google_script_url")]
    google_script_url: String,

    /// Page title
    #[arg(long = "page_title")]
    page_title: Option<String>,

    /// Directory to load templates from
    #[arg(long = "template_dir")]
    template_dir: Option<PathBuf>,

    /// Template file name inside the template directory
    #[arg(long)]
    template: Option<String>,

    /// Also write the display order of every question to this JSON file
    #[arg(long = "answer_key")]
    answer_key: Option<PathBuf>,

    /// Seed for the answer shuffle, for reproducible forms
    #[arg(long)]
    seed: Option<u64>,

    /// Log every assembled question
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_job(self, config: Config) -> FormJob {
        FormJob {
            input: self.json,
            output: self.out,
            google_script_url: self.google_script_url,
            page_title: self.page_title.unwrap_or(config.page_title),
            template_dir: self.template_dir.unwrap_or(config.template_dir),
            template_name: self.template.unwrap_or(config.template_name),
            answer_key: self.answer_key,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    mc_form::logging::init(args.verbose);

    let seed = args.seed;
    let job = args.into_job(Config::from_env());

    let count = match seed {
        Some(seed) => job.run(&mut StdRng::seed_from_u64(seed)),
        None => job.run(&mut rand::thread_rng()),
    }
    .with_context(|| format!("failed to render {}", job.input.display()))?;

    println!("{}", confirmation(count, &job.output));
    Ok(())
}

/// Line printed to stdout after a successful run.
fn confirmation(count: usize, out: &Path) -> String {
    format!("Rendered {} question(s) to {}", count, out.display())
}
