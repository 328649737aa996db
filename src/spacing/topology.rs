//! Letter topology classification
//!
//! A static table classifying the left and right edge of each Latin letter
//! as Stem (straight), Arch, Round, or Visual (open or diagonal, spaced by
//! eye). The Sousa engine reads this table to pick which master metric a
//! side inherits. The table is domain knowledge reproduced as data; letters
//! outside it are Visual on both sides.

use serde::{Deserialize, Serialize};

/// Structural class of one edge of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopologyClass {
    /// Straight vertical edge (H, n left)
    Stem,
    /// Arched junction (n right, h right)
    Arch,
    /// Round edge (O, o)
    Round,
    /// Open or diagonal edge, spaced visually (v, T, s)
    Visual,
}

/// Left/right classification of one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub left: TopologyClass,
    pub right: TopologyClass,
}

const fn t(left: TopologyClass, right: TopologyClass) -> Topology {
    Topology { left, right }
}

/// Classify a character's edges. Characters not in the table are visual on
/// both sides, so lookup never fails.
pub fn topology_of(ch: char) -> Topology {
    use TopologyClass::{Arch, Round, Stem, Visual};
    match ch {
        // Lowercase
        'a' => t(Round, Stem),
        'b' => t(Stem, Round),
        'c' => t(Round, Visual),
        'd' => t(Round, Stem),
        'e' => t(Round, Visual),
        'f' => t(Stem, Visual),
        'g' => t(Round, Visual),
        'h' => t(Stem, Arch),
        'i' => t(Stem, Stem),
        'j' => t(Visual, Stem),
        'k' => t(Stem, Visual),
        'l' => t(Stem, Stem),
        'm' => t(Stem, Arch),
        'n' => t(Stem, Arch),
        'o' => t(Round, Round),
        'p' => t(Stem, Round),
        'q' => t(Round, Stem),
        'r' => t(Stem, Visual),
        's' => t(Visual, Visual),
        't' => t(Stem, Visual),
        // u reads as stems at the top, arch only at the bottom
        'u' => t(Stem, Stem),
        'v' => t(Visual, Visual),
        'w' => t(Visual, Visual),
        'x' => t(Visual, Visual),
        'y' => t(Visual, Visual),
        'z' => t(Visual, Visual),

        // Uppercase
        'A' => t(Visual, Visual),
        'B' => t(Stem, Round),
        'C' => t(Round, Visual),
        'D' => t(Stem, Round),
        'E' => t(Stem, Visual),
        'F' => t(Stem, Visual),
        'G' => t(Round, Visual),
        'H' => t(Stem, Stem),
        'I' => t(Stem, Stem),
        'J' => t(Visual, Stem),
        'K' => t(Stem, Visual),
        'L' => t(Stem, Visual),
        'M' => t(Stem, Stem),
        'N' => t(Stem, Stem),
        'O' => t(Round, Round),
        'P' => t(Stem, Round),
        'Q' => t(Round, Round),
        'R' => t(Stem, Visual),
        'S' => t(Visual, Visual),
        'T' => t(Visual, Visual),
        'U' => t(Stem, Stem),
        'V' => t(Visual, Visual),
        'W' => t(Visual, Visual),
        'X' => t(Visual, Visual),
        'Y' => t(Visual, Visual),
        'Z' => t(Visual, Visual),

        _ => t(Visual, Visual),
    }
}
