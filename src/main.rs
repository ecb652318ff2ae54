use actix_web::{web, App, HttpServer};
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io;
use chrono::{SecondsFormat, Utc};
use clap::{Arg, Command};
use log::{info, warn};

use hangd::handlers::guess::{guess_default, guess_topic};
use hangd::handlers::topics::{get_stats, get_topics};
use hangd::models::{AppState, Topic};
use hangd::services::engine::GuessEngine;
use hangd::services::word_loader::load_filtered_words;

fn init_logging(log_file: Option<&String>) -> io::Result<()> {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)?;

        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
    Ok(())
}

fn load_topics(share_dir: &str, topics_str: &str) -> HashMap<String, Topic> {
    let mut topics = HashMap::new();
    for topic in topics_str.split(',') {
        let topic = topic.trim().to_lowercase();
        if topic.is_empty() {
            continue;
        }
        info!("Loading vocabulary for topic: {}", topic);
        let words = load_filtered_words(share_dir, &topic);
        match GuessEngine::new(words) {
            Ok(engine) => {
                let loaded_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                topics.insert(topic, Topic { engine, loaded_at });
            }
            Err(e) => warn!("Skipping topic {}: {}", topic, e),
        }
    }
    topics
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let matches = Command::new("hangd")
        .version("1.0")
        .author("Ron Straight <straightre@gmail.com>")
        .about("Hangman letter guessing service")
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value("0.0.0.0:2346")
                .help("Specify the listen address (e.g., 0.0.0.0:2346)"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .arg(
            Arg::new("share-dir")
                .long("share-dir")
                .num_args(1)
                .default_value("./share")
                .help("Directory containing the word files"),
        )
        .arg(
            Arg::new("topics")
                .long("topics")
                .num_args(1)
                .default_value("airline")
                .help("Comma-separated list of vocabularies to load"),
        )
        .arg(
            Arg::new("default-topic")
                .long("default-topic")
                .num_args(1)
                .default_value("airline")
                .help("Vocabulary used by POST /guess"),
        )
        .get_matches();

    let listen_host = matches
        .get_one::<String>("listen-host")
        .cloned()
        .unwrap_or_else(|| "0.0.0.0:2346".to_string());
    let log_file = matches.get_one::<String>("log-file");
    let share_dir = matches
        .get_one::<String>("share-dir")
        .cloned()
        .unwrap_or_else(|| "./share".to_string());
    let topics_str = matches
        .get_one::<String>("topics")
        .cloned()
        .unwrap_or_else(|| "airline".to_string());
    let default_topic = matches
        .get_one::<String>("default-topic")
        .map(|t| t.to_lowercase())
        .unwrap_or_else(|| "airline".to_string());

    init_logging(log_file)?;

    let topics = load_topics(&share_dir, &topics_str);
    if topics.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "no vocabulary could be loaded"));
    }
    if !topics.contains_key(&default_topic) {
        warn!("Default topic {} is not loaded; POST /guess will return 404", default_topic);
    }

    info!("Serving {} topics on {}", topics.len(), listen_host);

    let state = AppState {
        topics,
        default_topic,
    };
    let shared_state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .service(guess_default)
            .service(guess_topic)
            .service(get_topics)
            .service(get_stats)
    })
    .bind(&listen_host)?
    .run()
    .await
}
