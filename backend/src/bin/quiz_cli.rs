//! Terminal client for the Globetrotter Challenge.
//!
//! Drives the client state machine against a running backend: registration,
//! question rounds, answer submission, score display, and the challenge
//! link. Question selection runs locally against the fetched dataset, so
//! the terminal flow matches the web client's behaviour.

use std::io::{BufRead, Write};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use backend::client::{ApiClient, GameState, Phase};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "quiz-cli", about = "Play the Globetrotter Challenge from a terminal")]
struct Args {
    /// Base URL of the backend.
    #[arg(long, default_value = "http://localhost:5000")]
    server: String,

    /// Username to register as; prompted for when omitted.
    #[arg(long)]
    username: Option<String>,

    /// Referral code from a challenge link (`?invitedBy=...`).
    #[arg(long)]
    invited_by: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let api = ApiClient::new(args.server.clone());
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    println!("🌍 Globetrotter Challenge");

    // Referral landing: show the referrer's record while still unregistered.
    if let Some(code) = &args.invited_by {
        match api.user_by_referral_code(code).await {
            Ok(referrer) => println!(
                "Challenged by {}: ✅ {} correct, ❌ {} incorrect. Beat that!",
                referrer.username(),
                referrer.correct(),
                referrer.incorrect()
            ),
            Err(err) => println!("Could not resolve the invite: {err}"),
        }
    }

    let username = match args.username {
        Some(name) => name,
        None => prompt(&mut input, "Enter your username: ")?,
    };

    let reply = api
        .register(&username, args.invited_by.as_deref())
        .await
        .map_err(std::io::Error::other)?;
    println!("{}", reply.message);

    let dataset = api.questions().await.map_err(std::io::Error::other)?;
    if dataset.is_empty() {
        println!("No questions available; try again later.");
        return Ok(());
    }

    let mut game = GameState::new(dataset);
    game.registered();
    if let Ok(user) = api.score(&username).await {
        game.update_score(user);
    }
    if let Some(link) = game.challenge_link(&args.server) {
        println!("Challenge a friend: {link}");
    }

    let mut rng = SmallRng::from_entropy();
    while game.next_round(&mut rng) {
        let round = game
            .current_round()
            .cloned()
            .ok_or_else(|| std::io::Error::other("round missing after pick"))?;

        println!();
        if let Some(clue) = round.clues.first() {
            println!("❓ {clue}");
        }
        for trivia in &round.trivia {
            println!("🔹 {trivia}");
        }
        for (i, option) in round.options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }

        let selected = loop {
            let raw = prompt(&mut input, "Your answer (number, q to quit): ")?;
            if raw.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            match raw.parse::<usize>() {
                Ok(n) if (1..=round.options.len()).contains(&n) => {
                    break round.options[n - 1].clone();
                }
                _ => println!("Pick a number between 1 and {}.", round.options.len()),
            }
        };
        game.select(selected.clone());

        let outcome = api
            .submit_answer(&username, &selected, &round.correct_answer)
            .await
            .map_err(std::io::Error::other)?;
        game.answered(outcome.is_correct);
        println!("{}", outcome.message);
        if !outcome.is_correct {
            println!("The answer was {}.", round.correct_answer);
        }

        match api.score(&username).await {
            Ok(user) => {
                println!("Score: ✅ {} correct, ❌ {} incorrect", user.correct(), user.incorrect());
                game.update_score(user);
            }
            Err(err) => println!("Could not refresh the score: {err}"),
        }

        let next = prompt(&mut input, "Next question? (Enter to continue, q to quit): ")?;
        if next.eq_ignore_ascii_case("q") {
            break;
        }
        debug_assert!(matches!(game.phase(), Phase::Answered { .. }));
    }

    Ok(())
}

fn prompt(input: &mut impl BufRead, text: &str) -> std::io::Result<String> {
    print!("{text}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}
