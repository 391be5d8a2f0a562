//! Text frames for each search event.
//!
//! Squares are drawn as single characters separated by spaces:
//!
//! | Mark | Meaning |
//! |---|---|
//! | `Q` | confirmed queen |
//! | `.` | empty square |
//! | `?` | candidate being attempted |
//! | `x` | rejected candidate |
//! | `!` | queen attacking the rejected candidate |
//! | `*` | squares on the line of attack |
//! | `o` | queen just taken back |

use nqueens_core::{Board, Position};
use nqueens_stepper::{Event, StepperStats};

struct Canvas {
    cells: Vec<Vec<char>>,
}

impl Canvas {
    fn new(board: &Board) -> Self {
        let cells = board
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&occupied| if occupied { 'Q' } else { '.' })
                    .collect()
            })
            .collect();
        Self { cells }
    }

    fn mark(&mut self, pos: Position, ch: char) {
        self.cells[pos.row()][pos.col()] = ch;
    }

    fn draw(&self, out: &mut String) {
        for row in &self.cells {
            let line = row
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
    }
}

/// Renders the board with the squares touched by `event` highlighted.
///
/// The first line describes the event; the board follows, one row per line.
///
/// # Examples
///
/// ```
/// use nqueens_core::{Board, Position};
/// use nqueens_cli::render::render_frame;
/// use nqueens_stepper::Event;
///
/// let board = Board::new(4);
/// let frame = render_frame(&board, &Event::Attempt { position: Position::new(2, 0) });
/// assert_eq!(
///     frame,
///     "attempt (2, 0)\n. . . .\n. . . .\n? . . .\n. . . .\n"
/// );
/// ```
#[must_use]
pub fn render_frame(board: &Board, event: &Event) -> String {
    let mut canvas = Canvas::new(board);
    match *event {
        Event::Attempt { position } => canvas.mark(position, '?'),
        Event::Reject { position, conflict } => {
            for square in conflict.path(position) {
                canvas.mark(square, '*');
            }
            canvas.mark(conflict.attacker(), '!');
            canvas.mark(position, 'x');
        }
        Event::Backtrack { position } => canvas.mark(position, 'o'),
        Event::Accept { .. } | Event::Solved | Event::Exhausted | Event::NoOp => {}
    }

    let mut out = format!("{event}\n");
    canvas.draw(&mut out);
    out
}

/// Renders the closing summary: outcome, board, and counters.
#[must_use]
pub fn render_summary(board: &Board, outcome: &str, stats: &StepperStats) -> String {
    let mut out = format!("{outcome} ({n}x{n})\n", n = board.size());
    Canvas::new(board).draw(&mut out);
    out.push_str(&format!(
        "Stats:\n  attempts: {}\n  rejects: {}\n  accepts: {}\n  backtracks: {}\n  total steps: {}\n",
        stats.attempts(),
        stats.rejects(),
        stats.accepts(),
        stats.backtracks(),
        stats.total_steps(),
    ));
    out
}
