use std::io::{BufRead, Write};
use sweeper_core::{Field, GameState};

use crate::board::BoardView;
use crate::command::Command;

const HELP: &str = "X - quit, MA1 - mark tile in row A column 1, OB4 - open tile in row B column 4";

/// How an interactive session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    Solved,
    Failed,
    Quit,
}

/// Drives `field` from line-based `input` until the game ends or the player quits.
///
/// End of input counts as quitting. Fails before any output if the field cannot be shown.
pub fn play<R: BufRead, W: Write>(
    field: &mut Field,
    mut input: R,
    mut output: W,
) -> anyhow::Result<Ending> {
    BoardView::new(field)?;


    let mut line = String::new();
    loop {
        writeln!(output, "{}", BoardView::new(field)?)?;
        match field.state() {
            GameState::Solved => {
                writeln!(output, "You won!")?;
                return Ok(Ending::Solved);
            }
            GameState::Failed => {
                writeln!(output, "Boom! You lost.")?;
                return Ok(Ending::Failed);
            }
            GameState::Playing => {}
        }

        writeln!(output, "{HELP}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("Input closed, leaving game");
            return Ok(Ending::Quit);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };
        log::debug!("Command: {:?}", command);

        let result = match command {
            Command::Open(coords) => field.open_tile(coords).map(|outcome| {
                log::debug!("Open {:?}: {:?}", coords, outcome);
            }),
            Command::Mark(coords) => field.mark_tile(coords).map(|outcome| {
                log::debug!("Mark {:?}: {:?}", coords, outcome);
            }),
            Command::Exit => {
                writeln!(output, "Game over.")?;
                return Ok(Ending::Quit);
            }
        };
        if let Err(err) = result {
            writeln!(output, "error: {err}")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use sweeper_core::{MineLayout, TileState};

    fn field(size: (u8, u8), mines: &[(u8, u8)]) -> Field {
        Field::from_layout(&MineLayout::from_mine_coords(size, mines).unwrap())
    }

    fn run(field: &mut Field, input: &str) -> (Ending, String) {
        let mut output = Vec::new();
        let ending = play(field, Cursor::new(input), &mut output).unwrap();
        (ending, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_game_stops_the_loop() {
        let mut field = field((3, 3), &[(0, 0)]);

        let (ending, output) = run(&mut field, "oc2\nOA1\n");

        assert_eq!(ending, Ending::Solved);
        assert!(output.ends_with("You won!\n"));
        assert_eq!(field.state(), GameState::Solved);
    }

    #[test]
    fn losing_game_stops_the_loop() {
        let mut field = field((2, 2), &[(0, 0)]);

        let (ending, output) = run(&mut field, "MB0\nOA0\nOB1\n");

        assert_eq!(ending, Ending::Failed);
        assert!(output.contains("A X -\nB M -"));
        assert!(output.ends_with("Boom! You lost.\n"));
    }

    #[test]
    fn bad_input_reprompts_without_changes() {
        let mut field = field((2, 2), &[(0, 0)]);

        let (ending, output) = run(&mut field, "hello\nOZ1\nOA7\nX\n");

        assert_eq!(ending, Ending::Quit);
        assert!(output.contains("error: Unknown action 'H'"));
        assert_eq!(output.matches("error: Coordinates are outside the field").count(), 2);
        assert!(output.ends_with("Game over.\n"));
        assert_eq!(field.count_in_state(TileState::Closed), 4);
    }

    #[test]
    fn oversized_field_fails_before_playing() {
        let mut field = field((27, 2), &[]);
        let mut output = Vec::new();

        let result = play(&mut field, Cursor::new("OA0\n"), &mut output);

        assert!(result.is_err());
        assert!(output.is_empty());
        assert_eq!(field.count_in_state(TileState::Open), 0);
    }

    #[test]
    fn end_of_input_quits() {
        let mut field = field((2, 2), &[(0, 0)]);

        let (ending, _) = run(&mut field, "MA0\n");

        assert_eq!(ending, Ending::Quit);
        assert_eq!(field.count_in_state(TileState::Marked), 1);
        assert_eq!(field.state(), GameState::Playing);
    }
}
