use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use client::{HttpSource, ReminderController, affirmation};
use indicatif::{ProgressBar, ProgressStyle};
use shared::Mood;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// How you're feeling: sad, tired, overwhelmed, numb or okay
    #[arg(short, long, default_value = "okay")]
    mood: Mood,

    /// Number of reminders to show
    #[arg(short, long, default_value_t = 1)]
    count: u32,

    #[arg(long, env = "REMINDER_API_URL", default_value = "http://localhost:3000/api")]
    base_url: String,

    #[arg(long, env = "REMINDER_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Also print today's affirmation
    #[arg(short, long)]
    affirmation: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    if args.affirmation {
        println!("today's gentle reminder: {}\n", affirmation::today());
    }

    let source = HttpSource::new(&args.base_url, Duration::from_secs(args.timeout_secs))?;
    let mut controller = ReminderController::new(source);
    controller.set_mood(args.mood);

    println!("feeling {} {}\n", args.mood.icon(), args.mood.label());

    let style = ProgressStyle::with_template("{spinner:.green} {msg}")?;

    for _ in 0..args.count {
        let pb = ProgressBar::new_spinner();
        pb.set_style(style.clone());
        pb.set_message("finding...");
        pb.enable_steady_tick(Duration::from_millis(100));

        let result = controller.fetch_reminder().await;
        pb.finish_and_clear();

        let reminder = result.context("something went wrong, try again")?;
        println!("{} {}", reminder.icon, reminder.message);
    }

    Ok(())
}
