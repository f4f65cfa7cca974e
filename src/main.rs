use anyhow::{anyhow, Result};
use clap::Parser;
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use std::convert::TryFrom;
use std::io::{stdin, stdout, BufRead, Write};
use std::thread;
use std::time::Duration;

use connectx::board::{Board, Outcome};
use connectx::game::{Controller, Game, Player};
use connectx::mark::Mark;
use connectx::search::*;
use connectx::{Error, DEFAULT_CELLS_TO_WIN, DEFAULT_HEIGHT, DEFAULT_WIDTH};

mod display;

/// Play ConnectX in the terminal against a friend or the computer
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Width of the board in tiles
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Height of the board in tiles
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Number of tiles in a row needed to win
    #[arg(long, default_value_t = DEFAULT_CELLS_TO_WIN)]
    cells_to_win: usize,

    /// How many moves ahead the computer looks
    #[arg(
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(MIN_DIFFICULTY as u64..=MAX_DIFFICULTY as u64)
    )]
    difficulty: u64,

    /// Let the computer play for player 1
    #[arg(long)]
    ai_one: bool,

    /// Let the computer play for player 2
    #[arg(long)]
    ai_two: bool,
}

fn main() -> Result<()> {
    // logs go to stderr so they never land in the middle of the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let board = Board::new(args.width, args.height, args.cells_to_win)?;

    let search_limit = usize::try_from(args.difficulty)?;

    println!("Welcome to Connect {}\n", args.cells_to_win);

    let stdin = stdin();
    let mut input = stdin.lock();

    // choose AI control, asking only if nothing was given on the command line
    let ai_players = if args.ai_one || args.ai_two {
        (args.ai_one, args.ai_two)
    } else {
        (
            ask_yes_no(&mut input, "Is player 1 AI controlled? y/n: ")?,
            ask_yes_no(&mut input, "Is player 2 AI controlled? y/n: ")?,
        )
    };

    let player = |mark: Mark, ai: bool| -> Result<Player> {
        Ok(if ai {
            Player::computer(SearchEngine::new(mark)?.with_search_limit(search_limit))
        } else {
            Player::human(mark)
        })
    };
    let mut game = Game::new(
        board,
        player(Mark::PlayerOne, ai_players.0)?,
        player(Mark::PlayerTwo, ai_players.1)?,
    )?;

    // game loop
    loop {
        display::display(game.board())?;

        match game.outcome() {
            Outcome::InProgress => {
                let mark = game.to_move();
                let column = match game.current_player().controller() {
                    // AI player
                    Controller::Computer(engine) => {
                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            thread::sleep(Duration::from_secs(1));
                        }

                        let decision = think(engine, *game.board())?;
                        match decision.score {
                            WIN_SCORE => println!(
                                "Player {} can force a win.",
                                player_number(mark)
                            ),
                            LOSS_SCORE => println!(
                                "Player {} can force a win.",
                                player_number(mark.opponent())
                            ),
                            score => println!("Position score: {}", score),
                        }
                        println!("Best move: {}", decision.column + 1);
                        decision.column
                    }

                    // human player
                    Controller::Human => {
                        print!("Player {} move input > ", player_number(mark));
                        stdout().flush().expect("Failed to flush to stdout!");
                        let input_str = read_answer(&mut input)?;

                        match input_str.trim().parse::<usize>().ok().and_then(|c| c.checked_sub(1)) {
                            None => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Some(column) => column,
                        }
                    }
                };

                match game.play(column) {
                    Ok(_) => {}
                    // try the move again
                    Err(Error::IllegalMove { reason, .. }) => {
                        println!("Invalid move, {}", reason);
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            // end states
            outcome => {
                match outcome {
                    Outcome::Won(mark) => println!("Player {} wins!", player_number(mark)),
                    _ => println!("Draw!"),
                }
                if !ask_yes_no(&mut input, "Play again? y/n: ")? {
                    break;
                }
                game.new_round()?;
            }
        }
    }
    Ok(())
}

// runs the search on a worker thread while a spinner keeps the terminal alive
fn think(engine: SearchEngine, board: Board) -> Result<Decision> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("AI is thinking...");
    spinner.enable_steady_tick(100);

    let worker = thread::spawn(move || engine.best_move(&board));
    let decision = worker
        .join()
        .map_err(|_| anyhow!("search thread panicked"))?;

    spinner.finish_and_clear();
    Ok(decision?)
}

// reads one line, failing once the input is closed
fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer)
}

fn ask_yes_no<R: BufRead>(input: &mut R, question: &str) -> Result<bool> {
    loop {
        print!("{}", question);
        stdout().flush().expect("failed to flush to stdout!");
        let buffer = read_answer(input)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn player_number(mark: Mark) -> usize {
    match mark {
        Mark::PlayerTwo => 2,
        _ => 1,
    }
}
