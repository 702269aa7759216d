use anyhow::Context;
use busana::{AssistantBuilder, BusanaConfig, FAREWELL, GREETING, Reply, Session};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

const EXIT_WORDS: [&str; 5] = ["keluar", "selesai", "quit", "exit", "stop"];

#[derive(Parser, Debug)]
#[command(name = "busana")]
#[command(about = "Chat with the Busana fashion assistant", version)]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Intent classifier endpoint; overrides `classifier.endpoint`
    #[arg(long)]
    classifier_url: Option<String>,

    /// Fixed RNG seed for reproducible replies
    #[arg(long)]
    seed: Option<u64>,

    /// Print the structured payload after each recommendation
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn is_exit_word(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    EXIT_WORDS.contains(&input.as_str())
}

fn print_reply(reply: &Reply, json: bool) -> anyhow::Result<()> {
    println!("Bot > {}", reply.text());
    if json {
        if let Some(response) = reply.response() {
            println!("{}", response.payload_json()?);
        }
    }
    println!();
    Ok(())
}

async fn run(mut session: Session, json: bool) -> anyhow::Result<()> {
    println!("Bot > {}", GREETING);
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Anda > ");
        stdout.flush().ok();

        let Some(line) = lines.next() else {
            break;
        };
        let input = line.context("failed to read from stdin")?;

        if is_exit_word(&input) {
            debug!(session_id = %session.id(), turns = session.turns(), "Session ended");
            break;
        }

        let reply = session.respond(&input).await;
        print_reply(&reply, json)?;
    }

    println!("Bot > {}", FAREWELL);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BusanaConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BusanaConfig::default(),
    };
    if let Some(url) = args.classifier_url {
        config.classifier.endpoint = Some(url);
    }
    if let Some(seed) = args.seed {
        config.response.seed = Some(seed);
    }

    let assistant = AssistantBuilder::from_config(config)
        .build()
        .context("failed to build assistant")?;
    run(assistant.session(), args.json).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_words() {
        assert!(is_exit_word("keluar"));
        assert!(is_exit_word("  Selesai \n"));
        assert!(is_exit_word("EXIT"));
        assert!(!is_exit_word("stop dulu, saya mau baju pesta"));
        assert!(!is_exit_word("baju formal"));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "busana",
            "--config",
            "busana.yaml",
            "--classifier-url",
            "http://localhost:8000/classify",
            "--seed",
            "7",
            "--json",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("busana.yaml")));
        assert_eq!(
            args.classifier_url.as_deref(),
            Some("http://localhost:8000/classify")
        );
        assert_eq!(args.seed, Some(7));
        assert!(args.json);
    }
}
