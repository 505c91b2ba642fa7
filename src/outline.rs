//! Outline data model
//!
//! An outline is the resolved form of one labeled SVG path: absolute
//! fixed-point nodes, each tagged with the drawing action to perform.

use std::collections::BTreeMap;
use std::fmt;

/// Drawing action attached to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the pen, starting a new subpath
    Move,
    /// Straight line from the previous point
    Line,
    /// First control point of a cubic Bezier segment
    Control1,
    /// Second control point of a cubic Bezier segment
    Control2,
    /// End point of a cubic Bezier segment
    Control3,
    /// End of the outline
    Exit,
}

impl Action {
    /// Character written into the generated node tables
    pub fn as_char(self) -> char {
        match self {
            Action::Move => 'M',
            Action::Line => 'L',
            Action::Control1 => 'A',
            Action::Control2 => 'B',
            Action::Control3 => 'C',
            Action::Exit => 'X',
        }
    }

    /// Control point action for position `index` (0..3) within a curve segment
    pub(crate) fn control(index: usize) -> Self {
        match index {
            0 => Action::Control1,
            1 => Action::Control2,
            _ => Action::Control3,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A fixed-point point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One drawing instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub x: i32,
    pub y: i32,
    pub action: Action,
}

impl Node {
    pub fn new(x: i32, y: i32, action: Action) -> Self {
        Self { x, y, action }
    }

    pub fn at(point: Point, action: Action) -> Self {
        Self::new(point.x, point.y, action)
    }

    /// The terminator that closes every node sequence
    pub fn exit() -> Self {
        Self::new(0, 0, Action::Exit)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.action, self.x, self.y)
    }
}

/// Resolved outlines keyed by label
///
/// Iteration is in case-sensitive ordinal label order, which also fixes the
/// index each outline gets in the generated code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlineSet {
    outlines: BTreeMap<String, Vec<Node>>,
}

impl OutlineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an outline, returning the nodes it replaced
    pub fn insert(&mut self, label: impl Into<String>, nodes: Vec<Node>) -> Option<Vec<Node>> {
        self.outlines.insert(label.into(), nodes)
    }

    pub fn get(&self, label: &str) -> Option<&[Node]> {
        self.outlines.get(label).map(|n| n.as_slice())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.outlines.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.outlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }

    /// Labels in emission order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.outlines.keys().map(|k| k.as_str())
    }

    /// Outlines in emission order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Node])> {
        self.outlines
            .iter()
            .map(|(label, nodes)| (label.as_str(), nodes.as_slice()))
    }

    /// Index of `label` in the generated code
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels().position(|l| l == label)
    }
}

/// Names the generated code defines for itself
pub const RESERVED_IDENTIFIERS: &[&str] = &["COUNT", "ALL_OUTLINES"];

/// Name of the node table generated for an identifier stem
pub fn table_name(identifier: &str) -> String {
    format!("OUTLINE_{}", identifier)
}

/// Every name an outline with this identifier stem puts into the namespace
pub fn generated_names(identifier: &str) -> [String; 2] {
    [identifier.to_string(), table_name(identifier)]
}

/// C identifier stem for a label (`box` → `BOX`)
///
/// Returns `None` when the uppercased label is not a valid identifier.
pub fn identifier_for(label: &str) -> Option<String> {
    let mut chars = label.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(label.to_ascii_uppercase())
}
