use std::path::PathBuf;
use std::time::Duration;

use board::{
    ChallengeId, LeaderboardView, Tab,
    dto::{chart::ProgressChart, leaderboard::ChallengeLeaderboardResponse, rankings::RankingRow},
    services::{chart::build_progress_chart, rankings::render_rankings},
};
use clap::{Parser, Subcommand};
use client::{ApiClient, ClientConfig, config::DEFAULT_TIMEOUT_SECS};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ctf-board")]
#[command(about = "Challenge leaderboard progress viewer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "CTF_API_URL", default_value = client::config::DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "CTF_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "CTF_API_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-user points progression on the submission-step axis
    Progress {
        challenge: String,

        /// Only show the tooltip for this step
        #[arg(long)]
        step: Option<u32>,

        #[arg(long)]
        json: bool,
    },
    /// Ranked performers as reported by the API
    Rankings {
        challenge: String,

        #[arg(long)]
        json: bool,
    },
    /// Render a saved leaderboard payload without contacting the API
    Render {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "CTF_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Restore the session from --token and show the signed-in user
    Whoami,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "ctf_board={},client={},board={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config =
        ClientConfig::new(&cli.api_url).with_timeout(Duration::from_secs(cli.timeout_secs));
    let api = ApiClient::new(config)?;

    if let Some(token) = &cli.token
        && !matches!(cli.command, Commands::Render { .. } | Commands::Login { .. })
    {
        if let Err(e) = api.restore(token).await {
            tracing::warn!("Stored token rejected, continuing signed out: {}", e);
        }
    }

    match cli.command {
        Commands::Progress {
            challenge,
            step,
            json,
        } => {
            let response = fetch(&api, &challenge).await?;
            print_progress(&build_progress_chart(&response), step, json)?;
        }
        Commands::Rankings { challenge, json } => {
            let response = fetch(&api, &challenge).await?;
            print_rankings(&render_rankings(&response.leaderboard), json)?;
        }
        Commands::Render { file, json } => {
            handle_render(file, json).await?;
        }
        Commands::Login { email, password } => {
            let user = api.login(&email, &password).await?;
            tracing::info!("✓ Signed in as {}", user.username);
            if let Some(token) = api.session().token().await {
                println!("{}", token);
            }
        }
        Commands::Whoami => {
            if !api.session().is_authenticated().await {
                return Err("Not signed in; pass --token or set CTF_API_TOKEN".into());
            }
            let user = api.refresh_user().await?;
            println!(
                "{} (id {}){}",
                user.username,
                user.id,
                if user.is_admin { ", admin" } else { "" }
            );
        }
    }

    Ok(())
}

async fn fetch(
    api: &ApiClient,
    challenge: &str,
) -> Result<ChallengeLeaderboardResponse, Box<dyn std::error::Error>> {
    let challenge: ChallengeId = challenge.parse()?;
    tracing::info!("Fetching leaderboard for challenge '{}'", challenge);

    api.challenge_leaderboard(&challenge).await.map_err(|e| {
        tracing::error!("✗ {}: {}", board::view::LOAD_FAILED_MESSAGE, e);
        e.into()
    })
}

async fn handle_render(file: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loading leaderboard payload from: {}", file.display());

    let content = tokio::fs::read_to_string(&file).await?;
    let response = ChallengeLeaderboardResponse::from_json(&content)?;

    let view = LeaderboardView::from_response(&response);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    match view {
        LeaderboardView::Ready { panel } => {
            println!("{}", panel.attempted_label);
            println!("{}", panel.chart_description);
            print_progress(&panel.chart, None, false)?;
            println!("{}", panel.footer(Tab::Progress));
            println!();
            print_rankings(&panel.rankings, false)?;
            println!("{}", panel.footer(Tab::Rankings));
        }
        LeaderboardView::Empty { message, hint } => {
            println!("{}", message);
            println!("{}", hint);
        }
        LeaderboardView::Failed { message } => println!("{}", message),
    }

    Ok(())
}

fn print_progress(
    chart: &ProgressChart,
    step: Option<u32>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(step) = step {
        let tooltip = chart
            .tooltip(step)
            .ok_or_else(|| format!("Step {} is outside the chart", step))?;

        if json {
            println!("{}", serde_json::to_string_pretty(&tooltip)?);
            return Ok(());
        }

        println!("Step {}", tooltip.step);
        for entry in &tooltip.entries {
            let outcome = match entry.submitted_at {
                Some(at) => format!(
                    "{} at {}",
                    if entry.is_correct { "correct" } else { "incorrect" },
                    at.format("%H:%M:%S")
                ),
                None => "no submission".to_string(),
            };
            println!("  {:<20} {:>10}  {}", entry.username, entry.label, outcome);
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(chart)?);
        return Ok(());
    }

    let mut header = format!("{:>6}", "step");
    for series in &chart.series {
        header.push_str(&format!(" {:>12}", series.username));
    }
    println!("{}", header);

    for row in &chart.rows {
        let mut line = format!("{:>6}", row.step);
        for value in &row.values {
            let marker = match &value.submission {
                Some(mark) if mark.is_correct => "+",
                Some(_) => "x",
                None => " ",
            };
            line.push_str(&format!(" {:>11}{}", value.points, marker));
        }
        println!("{}", line);
    }

    for entry in chart.legend() {
        println!("  {} {}", entry.color, entry.username);
    }
    println!("{} (max {} points)", chart.caption(), chart.max_points);

    Ok(())
}

fn print_rankings(rows: &[RankingRow], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }

    for row in rows {
        println!(
            "{:>4}  {:<20} {:>6} pts  {:>8}  {}",
            row.badge.label(),
            row.entry.username,
            row.entry.points_awarded,
            row.entry.time_display,
            row.hints_label.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
