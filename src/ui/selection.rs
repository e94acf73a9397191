use crate::core::{Difficulty, Mark};
use crate::player::{MinimaxAI, PlayerController, RandomAI, TuiController};

pub fn create_player_controllers(
    choice: &str,
) -> anyhow::Result<(Box<dyn PlayerController>, Box<dyn PlayerController>)> {
    match choice {
        "1" => Ok((
            Box::new(TuiController::new(Mark::X, "Player1")),
            Box::new(TuiController::new(Mark::O, "Player2")),
        )),
        "2" => Ok((
            Box::new(TuiController::new(Mark::X, "You")),
            Box::new(MinimaxAI::new(Mark::O, "Minimax AI (Easy)", Difficulty::Easy)),
        )),
        "3" => Ok((
            Box::new(TuiController::new(Mark::X, "You")),
            Box::new(MinimaxAI::new(Mark::O, "Minimax AI (Hard)", Difficulty::Hard)),
        )),
        "4" => Ok((
            Box::new(MinimaxAI::new(
                Mark::X,
                "Minimax AI-1 (Hard)",
                Difficulty::Hard,
            )),
            Box::new(MinimaxAI::new(
                Mark::O,
                "Minimax AI-2 (Hard)",
                Difficulty::Hard,
            )),
        )),
        "5" => Ok((
            Box::new(RandomAI::new(Mark::X, "Random AI")),
            Box::new(MinimaxAI::new(Mark::O, "Minimax AI (Hard)", Difficulty::Hard)),
        )),
        _ => Err(anyhow::anyhow!("Invalid selection")),
    }
}
