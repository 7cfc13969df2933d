// src/bin/equity_cli.rs

use std::path::PathBuf;

use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use poker_equity::api::EquityResponse;
use poker_equity::domain::{parse_cards, Card, EquitySource};
use poker_equity::engine::{compute_equity_with, CancelToken, EngineError, SimulationConfig};

#[derive(Parser)]
#[command(author, version, about = "Префлоп-эквити двух рук (Монте-Карло)", long_about = None)]
struct Args {
    /// Первая рука, например "AsKs".
    #[arg(required = true)]
    hand1: String,
    /// Вторая рука, например "6d6c".
    #[arg(required = true)]
    hand2: String,
    /// JSON-конфиг симуляции; флаги ниже перекрывают его поля.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Число розыгрышей (по умолчанию 50000).
    #[arg(short, long)]
    trials: Option<u64>,
    #[arg(short, long)]
    seed: Option<u64>,
    /// Считать в одном потоке.
    #[arg(long)]
    sequential: bool,
    /// Не смотреть в таблицу известных матчапов.
    #[arg(long)]
    no_shortcuts: bool,
    #[arg(long)]
    time_limit_ms: Option<u64>,
    /// Вывести результат как JSON.
    #[arg(long)]
    json: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    // Логгер уже мог быть инициализирован – это не ошибка для CLI.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

/// Конфиг из файла (или по умолчанию) + флаги командной строки.
fn load_config(args: &Args) -> Result<SimulationConfig, EngineError> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.sequential {
        config.parallel = false;
    }
    if args.no_shortcuts {
        config.use_shortcuts = false;
    }
    if args.time_limit_ms.is_some() {
        config.time_limit_ms = args.time_limit_ms;
    }
    Ok(config)
}

fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("{}{}", c.rank, c.suit.symbol()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let parsed = parse_cards(&args.hand1).and_then(|h1| parse_cards(&args.hand2).map(|h2| (h1, h2)));
    let (hand1, hand2) = match parsed {
        Ok(hands) => hands,
        Err(err) => {
            eprintln!("Ошибка разбора карт: {err}");
            std::process::exit(2);
        }
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Ошибка конфига: {err}");
            std::process::exit(2);
        }
    };

    let outcome = match compute_equity_with(&hand1, &hand2, &config, &CancelToken::new()) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Ошибка расчёта: {err}");
            std::process::exit(1);
        }
    };

    let response = EquityResponse::from_outcome(&hand1, &hand2, &outcome);

    if args.json {
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Ошибка сериализации: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    let source = match response.source {
        EquitySource::Precomputed => "таблица известных матчапов",
        EquitySource::Simulated => "Монте-Карло",
        EquitySource::Fallback => "заглушка 50/50",
    };

    println!("=== EQUITY ===");
    println!("Источник: {source}, розыгрышей: {}", response.trials);
    if response.aborted {
        println!("(прервано досрочно)");
    }
    for (label, cards, dto) in [
        ("Игрок 1", &hand1, &response.hand1),
        ("Игрок 2", &hand2, &response.hand2),
    ] {
        println!(
            "{label}: {:<8} {:>6.2}%  побед: {:>6}  ничьих: {:>6}",
            format_hand(cards),
            dto.equity,
            dto.wins,
            dto.ties
        );
    }
}
