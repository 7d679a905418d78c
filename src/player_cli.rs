#![cfg(feature = "std")]

//! Terminal front end: board rendering and command parsing.

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{Cell, Move},
    config::BOARD_SIZE,
    line::Line,
};

/// A line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Move),
    NewGame,
    Quit,
}

/// Parse a coordinate such as `B2` (column letter, 1-based row), or one of
/// the words `new` / `quit`.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Some(Command::Quit),
        "n" | "new" => return Some(Command::NewGame),
        _ => {}
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().trim().parse().ok()?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some(Command::Place(Move::new(row - 1, col)))
}

/// Render the board with column letters and row numbers. Cells on
/// `highlight` are bracketed.
pub fn render_board(board: &Board, highlight: Option<Line>) -> String {
    let mut out = String::from("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        out.push_str(&std::format!(" {}  ", ch));
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        out.push_str(&std::format!("{:2} ", r + 1));
        for c in 0..BOARD_SIZE {
            let sym = match board.cell(r, c) {
                Ok(Cell::Marked(m)) => m.symbol(),
                _ => ' ',
            };
            let lit = highlight.is_some_and(|line| line.contains(r, c));
            if lit {
                out.push_str(&std::format!("[{}]", sym));
            } else {
                out.push_str(&std::format!(" {} ", sym));
            }
            if c + 1 < BOARD_SIZE {
                out.push('|');
            }
        }
        out.push('\n');
        if r + 1 < BOARD_SIZE {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

/// Print the board, highlighting a winning line if there is one.
pub fn print_board(board: &Board, highlight: Option<Line>) {
    std::print!("{}", render_board(board, highlight));
}

/// Prompt until the reader yields a valid command. End of input quits.
pub fn prompt_command<R: BufRead>(reader: &mut R) -> io::Result<Command> {
    loop {
        std::print!("Your move (e.g. B2, 'new', 'quit'): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(Command::Quit);
        }
        match parse_command(&line) {
            Some(cmd) => return Ok(cmd),
            None => {
                log::debug!("ignoring unparsable input {:?}", line.trim());
                std::println!("Invalid input");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Mark;

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse_command("B2"), Some(Command::Place(Move::new(1, 1))));
        assert_eq!(parse_command(" a1\n"), Some(Command::Place(Move::new(0, 0))));
        assert_eq!(parse_command("c3"), Some(Command::Place(Move::new(2, 2))));
    }

    #[test]
    fn rejects_off_board() {
        assert_eq!(parse_command("D1"), None);
        assert_eq!(parse_command("A0"), None);
        assert_eq!(parse_command("A4"), None);
        assert_eq!(parse_command("11"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn parses_words() {
        assert_eq!(parse_command("new"), Some(Command::NewGame));
        assert_eq!(parse_command("QUIT"), Some(Command::Quit));
    }

    #[test]
    fn prompt_reads_until_valid() {
        let mut input = io::Cursor::new("zz\nA3\n");
        assert_eq!(
            prompt_command(&mut input).unwrap(),
            Command::Place(Move::new(2, 0))
        );
        let mut empty = io::Cursor::new("");
        assert_eq!(prompt_command(&mut empty).unwrap(), Command::Quit);
    }

    #[test]
    fn render_highlights_line() {
        let mut board = Board::new();
        for c in 0..3 {
            board.place(0, c, Mark::Computer).unwrap();
        }
        board.place(1, 1, Mark::Player).unwrap();
        let line = board.check_win(Mark::Computer);
        let out = render_board(&board, line);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[1], " 1 [X]|[X]|[X]");
        assert_eq!(rows[3], " 2    | O |   ");
    }
}
