mod config;
mod render;

use clap::Parser;
use std::time::Duration;
use tictactoe_engine::{
    Agent, AlphaBetaAgent, Board, Mark, MinimaxAgent, SessionRng, log, logger,
};

use config::{AgentKind, FirstMark, MatchConfig, load_config};
use render::render_board;

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    /// Path to the YAML match configuration.
    #[arg(long, default_value = "tictactoe_match_config.yaml")]
    config: String,

    /// Overrides the config seed, for replaying a specific match.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn make_agent(kind: AgentKind, mark: Mark) -> Box<dyn Agent> {
    match kind {
        AgentKind::Minimax => Box::new(MinimaxAgent::new(mark)),
        AgentKind::AlphaBeta => Box::new(AlphaBetaAgent::new(mark)),
    }
}

fn run_match(config: &MatchConfig, mut rng: SessionRng) {
    let mut board = Board::new(config.board_size);
    let mut agent_x = make_agent(config.x_agent, Mark::X);
    let mut agent_o = make_agent(config.o_agent, Mark::O);

    let mut current = match config.first_mark {
        FirstMark::X => Mark::X,
        FirstMark::O => Mark::O,
        FirstMark::Random => {
            if rng.random_bool() {
                Mark::X
            } else {
                Mark::O
            }
        }
    };

    log!("Match seed: {}", rng.seed());
    log!("Board:\n{}", render_board(&board));

    while board.has_empty_cell() && board.winner().is_none() {
        if config.move_delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(config.move_delay_ms));
        }

        let agent: &mut Box<dyn Agent> = if current == Mark::X {
            &mut agent_x
        } else {
            &mut agent_o
        };

        let Some(index) = agent.choose_move(&mut board, &mut rng) else {
            break;
        };
        board.apply_move(index, current);

        logger::log_move(current, index, agent.nodes_searched());
        log!("Board:\n{}", render_board(&board));

        current = current.opponent().unwrap();
    }

    match board.winner() {
        Some(winner) => log!("{} wins!", winner.label()),
        None => log!("It's a draw!"),
    }
    log!("X agent nodes searched: {}", agent_x.nodes_searched());
    log!("O agent nodes searched: {}", agent_o.nodes_searched());
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Match".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args.config)?;

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    run_match(&config, rng);
    Ok(())
}
