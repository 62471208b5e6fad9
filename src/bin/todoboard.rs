use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::json;

use todoboard::renderer::Rendered;
use todoboard::terminal::{self, Painted};
use todoboard::{logging, Board, BoardConfig, Settled};

#[derive(Parser, Debug)]
#[command(name = "todoboard")]
#[command(about = "Fetch todos from a JSON API and show them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (TOML); falls back to $TODOBOARD_CONFIG
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Plain output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every todo
    #[command(alias = "ls")]
    List,

    /// Show one todo
    Show {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Fetch several todos together and report each outcome
    Settle {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        ids: Vec<i64>,
    },

    /// Create a post
    Create {
        #[arg(long)]
        title: String,

        #[arg(long, default_value_t = 1)]
        user_id: i64,
    },

    /// Replace a post
    Update {
        id: i64,

        #[arg(long)]
        title: String,

        #[arg(long, default_value_t = 1)]
        user_id: i64,
    },

    /// Delete a post
    Delete { id: i64 },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = BoardConfig::load(cli.config.as_deref()).context("loading config")?;
    logging::init(&config.log_filter);
    terminal::set_color(config.color && !cli.no_color);

    let mut board = Board::from_config(&config)?;
    let posts = config.posts_path.as_str();

    let ok = match cli.command {
        Commands::List => {
            let rendered = board.load_list().await;
            show(&board, rendered)
        }
        Commands::Show { id } => {
            let rendered = board.open(id).await;
            show(&board, rendered)
        }
        Commands::Settle { ids } => settle(&board, &ids).await,
        Commands::Create { title, user_id } => {
            let body = json!({ "title": title, "userId": user_id });
            let echo = board.fetcher().create(posts, &body).await?;
            println!("{}", serde_json::to_string_pretty(&echo)?);
            true
        }
        Commands::Update { id, title, user_id } => {
            let body = json!({ "id": id, "title": title, "userId": user_id });
            let echo = board.fetcher().update(&format!("{posts}/{id}"), &body).await?;
            println!("{}", serde_json::to_string_pretty(&echo)?);
            true
        }
        Commands::Delete { id } => {
            board.fetcher().delete(&format!("{posts}/{id}")).await?;
            println!("{} {posts}/{id}", "deleted".green());
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn show(board: &Board, rendered: Rendered) -> bool {
    print!("{}", Painted(board.target()));
    !rendered.is_failure()
}

async fn settle(board: &Board, ids: &[i64]) -> bool {
    let outcomes = board.fetch_settled(ids).await;
    for (id, outcome) in ids.iter().zip(&outcomes) {
        match outcome {
            Settled::Fulfilled(payload) => {
                println!("{} {id}: {payload:?}", outcome.status().green())
            }
            Settled::Rejected(err) => println!("{} {id}: {err}", outcome.status().red()),
        }
    }
    outcomes.iter().all(Settled::is_fulfilled)
}
