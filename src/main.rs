//! Perft command-line runner.
//!
//! Usage:
//! `cargo run --release -- --depth 5`
//! `cargo run --release -- --fen "<FEN>" --depth 4 --divide`
//! `cargo run --release -- --moves "e2e4 e7e5" --depth 3 --stats`
//! `cargo run --release -- --depth 6 --threads`

use std::time::Instant;

use plum_perft::game_state::game_state::GameState;
use plum_perft::move_generation::legal_move_apply::make_move;
use plum_perft::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_perft::move_generation::perft::{
    perft, perft_divide, perft_multi_threaded, perft_with_counts, PerftCounts,
};
use plum_perft::moves::magic_tables::init_slider_tables;
use plum_perft::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

struct Options {
    fen: String,
    depth: u32,
    moves: Vec<String>,
    divide: bool,
    stats: bool,
    threads: bool,
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|idx| args.get(idx + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn parse_options() -> Result<Options, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let depth = match arg_value(&args, "--depth") {
        Some(text) => text
            .parse::<u32>()
            .map_err(|_| format!("--depth expects a non-negative integer, got {text}"))?,
        None => 5,
    };

    Ok(Options {
        fen: arg_value(&args, "--fen").unwrap_or_default().to_owned(),
        depth,
        moves: arg_value(&args, "--moves")
            .map(|text| text.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default(),
        divide: has_flag(&args, "--divide"),
        stats: has_flag(&args, "--stats"),
        threads: has_flag(&args, "--threads"),
    })
}

fn print_counts(counts: &PerftCounts) {
    println!("captures         {}", counts.captures);
    println!("en passant       {}", counts.en_passant);
    println!("castles          {}", counts.castles);
    println!("promotions       {}", counts.promotions);
    println!("checks           {}", counts.checks);
    println!("discovery checks {}", counts.discovery_checks);
    println!("double checks    {}", counts.double_checks);
    println!("checkmates       {}", counts.checkmates);
}

fn main() -> Result<(), String> {
    let options = parse_options()?;
    let generator = LegalMoveGenerator;

    let mut game = GameState::from_fen(&options.fen).map_err(|err| err.to_string())?;
    for text in &options.moves {
        let mv = long_algebraic_to_move(&mut game, text)?;
        make_move(&mut game, mv);
    }

    println!("{game}");
    println!(
        "[{}] perft depth {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        options.depth
    );

    init_slider_tables();
    let start = Instant::now();
    let nodes = if options.divide {
        let entries =
            perft_divide(&generator, &mut game, options.depth).map_err(|err| err.to_string())?;
        for entry in &entries {
            println!("{}: {}", move_to_long_algebraic(entry.mv), entry.nodes);
        }
        println!("moves: {}", entries.len());
        entries.iter().map(|entry| entry.nodes).sum()
    } else if options.stats {
        let counts = perft_with_counts(&generator, &mut game, options.depth)
            .map_err(|err| err.to_string())?;
        print_counts(&counts);
        counts.nodes
    } else if options.threads {
        perft_multi_threaded(&generator, &game, options.depth).map_err(|err| err.to_string())?
    } else {
        perft(&generator, &mut game, options.depth).map_err(|err| err.to_string())?
    };
    let elapsed = start.elapsed();

    let secs = elapsed.as_secs_f64();
    let nps = if secs > 0.0 { (nodes as f64 / secs) as u64 } else { 0 };
    println!("nodes: {nodes}");
    println!("elapsed_ms: {} nps: {nps}", elapsed.as_millis());

    Ok(())
}
