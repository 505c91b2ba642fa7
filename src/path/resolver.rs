//! Path resolver: turns path tokens into absolute fixed-point nodes
//!
//! Walks the token stream once, tracking the pen, the start of the current
//! subpath and the position inside a cubic curve. Commands repeat over
//! subsequent coordinate groups until a new command letter appears.

use super::error::PathError;
use super::lexer::{tokenize, Span, Token};
use crate::outline::{Action, Node, Point};

/// The supported path commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    Horizontal,
    Vertical,
    CurveTo,
    ClosePath,
}

/// A command letter decoded into its kind and coordinate mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// Lowercase letters take coordinates relative to the pen
    pub relative: bool,
}

impl Command {
    /// Decode a command letter, `None` if it is not supported
    pub fn from_letter(letter: char) -> Option<Self> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::Horizontal,
            'V' => CommandKind::Vertical,
            'C' => CommandKind::CurveTo,
            'Z' => CommandKind::ClosePath,
            _ => return None,
        };
        Some(Self {
            kind,
            relative: letter.is_ascii_lowercase(),
        })
    }

    pub fn letter(self) -> char {
        let upper = match self.kind {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::Horizontal => 'H',
            CommandKind::Vertical => 'V',
            CommandKind::CurveTo => 'C',
            CommandKind::ClosePath => 'Z',
        };
        if self.relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }
}

/// Resolve path data into nodes terminated by a single `X` node
pub fn resolve(data: &str) -> Result<Vec<Node>, PathError> {
    let tokens = tokenize(data)?;
    Resolver::new(&tokens, data.len()).run()
}

struct Resolver<'a> {
    tokens: &'a [(Token, Span)],
    pos: usize,
    /// Length of the path data, used to point at the end of input
    end: usize,
    command: Option<Command>,
    pen: Point,
    subpath_start: Point,
    /// Index of the next control point within the current curve segment
    control_index: usize,
    nodes: Vec<Node>,
}

impl<'a> Resolver<'a> {
    fn new(tokens: &'a [(Token, Span)], end: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
            command: None,
            pen: Point::default(),
            subpath_start: Point::default(),
            control_index: 0,
            nodes: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Node>, PathError> {
        let tokens = self.tokens;
        while let Some((token, span)) = tokens.get(self.pos) {
            if let Token::Command(letter) = *token {
                self.finish_curve(span.clone())?;
                let command = Command::from_letter(letter).ok_or_else(|| {
                    PathError::UnknownCommand {
                        command: letter,
                        span: span.clone(),
                    }
                })?;
                self.command = Some(command);
                self.pos += 1;
            }

            let command = self
                .command
                .ok_or_else(|| PathError::MissingCommand { span: span.clone() })?;
            self.step(command)?;
        }

        self.finish_curve(self.end..self.end)?;
        self.nodes.push(Node::exit());
        Ok(self.nodes)
    }

    fn step(&mut self, command: Command) -> Result<(), PathError> {
        match command.kind {
            CommandKind::MoveTo => {
                let point = self.point(command)?;
                self.pen = point;
                self.subpath_start = point;
                self.nodes.push(Node::at(point, Action::Move));
                // Coordinate pairs after a move are implicit lines
                self.command = Some(Command {
                    kind: CommandKind::LineTo,
                    relative: command.relative,
                });
            }
            CommandKind::LineTo => {
                self.pen = self.point(command)?;
                self.nodes.push(Node::at(self.pen, Action::Line));
            }
            CommandKind::Horizontal => {
                self.pen.x = self.coordinate(command, self.pen.x)?;
                self.nodes.push(Node::at(self.pen, Action::Line));
            }
            CommandKind::Vertical => {
                self.pen.y = self.coordinate(command, self.pen.y)?;
                self.nodes.push(Node::at(self.pen, Action::Line));
            }
            CommandKind::CurveTo => {
                // Relative control points all refer to the segment start
                let point = self.point(command)?;
                self.nodes
                    .push(Node::at(point, Action::control(self.control_index)));
                self.control_index = (self.control_index + 1) % 3;
                if self.control_index == 0 {
                    self.pen = point;
                }
            }
            CommandKind::ClosePath => {
                if self.pen != self.subpath_start {
                    self.pen = self.subpath_start;
                    self.nodes.push(Node::at(self.pen, Action::Line));
                }
                if let Some((Token::Number(_), span)) = self.tokens.get(self.pos) {
                    return Err(PathError::UnexpectedCoordinate { span: span.clone() });
                }
            }
        }
        Ok(())
    }

    fn point(&mut self, command: Command) -> Result<Point, PathError> {
        let x = self.coordinate(command, self.pen.x)?;
        let y = self.coordinate(command, self.pen.y)?;
        Ok(Point::new(x, y))
    }

    /// Consume one coordinate, offset from `base` for relative commands
    fn coordinate(&mut self, command: Command, base: i32) -> Result<i32, PathError> {
        let (value, span) = match self.tokens.get(self.pos) {
            Some((Token::Number(value), span)) => (*value, span.clone()),
            Some((Token::Command(found), span)) => {
                return Err(PathError::UnexpectedCommand {
                    command: command.letter(),
                    found: *found,
                    span: span.clone(),
                })
            }
            None => {
                return Err(PathError::MissingArgument {
                    command: command.letter(),
                    span: self.end..self.end,
                })
            }
        };
        self.pos += 1;

        if command.relative {
            base.checked_add(value)
                .ok_or_else(|| PathError::CoordinateOverflow {
                    command: command.letter(),
                    span,
                })
        } else {
            Ok(value)
        }
    }

    fn finish_curve(&self, span: Span) -> Result<(), PathError> {
        if self.control_index == 0 {
            Ok(())
        } else {
            Err(PathError::IncompleteCurve {
                points: self.control_index,
                span,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const U: i32 = 10_000;

    fn n(x: i32, y: i32, action: char) -> Node {
        let action = match action {
            'M' => Action::Move,
            'L' => Action::Line,
            'A' => Action::Control1,
            'B' => Action::Control2,
            'C' => Action::Control3,
            _ => Action::Exit,
        };
        Node::new(x * U, y * U, action)
    }

    #[test]
    fn test_closed_box() {
        let nodes = resolve("M0,0 L10000,0 L10000,10000 Z").unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::new(0, 0, Action::Move),
                Node::new(100_000_000, 0, Action::Line),
                Node::new(100_000_000, 100_000_000, Action::Line),
                Node::new(0, 0, Action::Line),
                Node::exit(),
            ]
        );
    }

    #[test]
    fn test_empty_path_is_just_exit() {
        assert_eq!(resolve("").unwrap(), vec![Node::exit()]);
        assert_eq!(resolve("  ,").unwrap(), vec![Node::exit()]);
    }

    #[test]
    fn test_relative_lines() {
        let nodes = resolve("m 1 1 l 1 0 0 1 z").unwrap();
        assert_eq!(
            nodes,
            vec![
                n(1, 1, 'M'),
                n(2, 1, 'L'),
                n(2, 2, 'L'),
                n(1, 1, 'L'),
                Node::exit(),
            ]
        );
    }

    #[test]
    fn test_move_implies_line() {
        assert_eq!(
            resolve("M 0 0 1 1 2 2").unwrap(),
            vec![n(0, 0, 'M'), n(1, 1, 'L'), n(2, 2, 'L'), Node::exit()]
        );
        assert_eq!(
            resolve("m 1 1 1 1").unwrap(),
            vec![n(1, 1, 'M'), n(2, 2, 'L'), Node::exit()]
        );
    }

    #[test]
    fn test_implicit_repetition() {
        assert_eq!(
            resolve("M 0 0 L 1 2 3 4").unwrap(),
            vec![n(0, 0, 'M'), n(1, 2, 'L'), n(3, 4, 'L'), Node::exit()]
        );
    }

    #[test]
    fn test_horizontal_and_vertical() {
        assert_eq!(
            resolve("M 1 2 H 5 V 7 h -1 v -2").unwrap(),
            vec![
                n(1, 2, 'M'),
                n(5, 2, 'L'),
                n(5, 7, 'L'),
                n(4, 7, 'L'),
                n(4, 5, 'L'),
                Node::exit(),
            ]
        );
    }

    #[test]
    fn test_curve_triads_cycle() {
        let nodes = resolve("M0 0 C 1 0 2 1 2 2 3 3 4 4 5 5").unwrap();
        let actions: String = nodes.iter().map(|n| n.action.as_char()).collect();
        assert_eq!(actions, "MABCABCX");
        assert_eq!(nodes[3], n(2, 2, 'C'));
        assert_eq!(nodes[6], n(5, 5, 'C'));
    }

    #[test]
    fn test_relative_curve_uses_segment_start() {
        let nodes = resolve("m 1 1 c 1 0 1 1 0 1 c 1 1 2 2 3 3").unwrap();
        assert_eq!(
            nodes,
            vec![
                n(1, 1, 'M'),
                n(2, 1, 'A'),
                n(2, 2, 'B'),
                n(1, 2, 'C'),
                n(2, 3, 'A'),
                n(3, 4, 'B'),
                n(4, 5, 'C'),
                Node::exit(),
            ]
        );
    }

    #[test]
    fn test_close_at_start_emits_nothing() {
        assert_eq!(
            resolve("M0 0 L1 0 L0 0 Z").unwrap(),
            vec![n(0, 0, 'M'), n(1, 0, 'L'), n(0, 0, 'L'), Node::exit()]
        );
    }

    #[test]
    fn test_close_resets_pen_for_next_subpath() {
        assert_eq!(
            resolve("M0 0 L1 0 Z M5 5 l1 0 z l 0 1").unwrap(),
            vec![
                n(0, 0, 'M'),
                n(1, 0, 'L'),
                n(0, 0, 'L'),
                n(5, 5, 'M'),
                n(6, 5, 'L'),
                n(5, 5, 'L'),
                n(5, 6, 'L'),
                Node::exit(),
            ]
        );
    }

    #[test]
    fn test_exactly_one_exit_last() {
        let nodes = resolve("M0 0 C1 1 2 2 3 3 Z M 4 4 Z").unwrap();
        let exits = nodes.iter().filter(|n| n.action == Action::Exit).count();
        assert_eq!(exits, 1);
        assert_eq!(nodes.last(), Some(&Node::exit()));
    }

    #[test]
    fn test_unknown_command() {
        let err = resolve("Q10,10 20,20").unwrap_err();
        assert_eq!(
            err,
            PathError::UnknownCommand {
                command: 'Q',
                span: 0..1
            }
        );
    }

    #[test]
    fn test_numbers_before_command() {
        let err = resolve("1 2").unwrap_err();
        assert_eq!(err, PathError::MissingCommand { span: 0..1 });
    }

    #[test]
    fn test_missing_argument() {
        let err = resolve("M 1").unwrap_err();
        assert_eq!(
            err,
            PathError::MissingArgument {
                command: 'M',
                span: 3..3
            }
        );
    }

    #[test]
    fn test_command_where_number_expected() {
        let err = resolve("M 1 L 2 3").unwrap_err();
        assert_eq!(
            err,
            PathError::UnexpectedCommand {
                command: 'M',
                found: 'L',
                span: 4..5
            }
        );
    }

    #[test]
    fn test_incomplete_curve_before_command() {
        let err = resolve("M0 0 C 1 1 2 2 L 3 3").unwrap_err();
        assert_eq!(
            err,
            PathError::IncompleteCurve {
                points: 2,
                span: 15..16
            }
        );
    }

    #[test]
    fn test_incomplete_curve_at_end() {
        let err = resolve("M0 0 C1 1").unwrap_err();
        assert_eq!(
            err,
            PathError::IncompleteCurve {
                points: 1,
                span: 9..9
            }
        );
    }

    #[test]
    fn test_coordinates_after_close() {
        let err = resolve("M0 0 L1 1 Z 2 2").unwrap_err();
        assert_eq!(err, PathError::UnexpectedCoordinate { span: 12..13 });
    }

    #[test]
    fn test_relative_overflow() {
        let err = resolve("m 214748 0 l 1 0").unwrap_err();
        assert!(matches!(
            err,
            PathError::CoordinateOverflow { command: 'l', .. }
        ));
    }

    #[test]
    fn test_command_letters() {
        for letter in "MmLlHhVvCcZz".chars() {
            let command = Command::from_letter(letter).unwrap();
            assert_eq!(command.letter(), letter);
            assert_eq!(command.relative, letter.is_ascii_lowercase());
        }
        assert!(Command::from_letter('Q').is_none());
        assert!(Command::from_letter('a').is_none());
    }
}
