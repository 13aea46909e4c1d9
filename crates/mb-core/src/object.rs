//! Object instances and grid positions

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

/// Unique identifier for object instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    pub const NONE: ObjectId = ObjectId(0);

    pub fn next(self) -> Self {
        ObjectId(self.0 + 1)
    }
}

/// A cell coordinate in a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

/// Offsets of the eight surrounding cells, clockwise from north
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Position shifted by (dx, dy), or `None` on coordinate overflow
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The eight surrounding positions. Bounds are the caller's concern.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Chebyshev distance
    pub fn distance(self, other: Position) -> i32 {
        let dx = (self.x as i32 - other.x as i32).abs();
        let dy = (self.y as i32 - other.y as i32).abs();
        dx.max(dy)
    }
}

/// A concrete object in the world: the mystery box itself, its holder, or a
/// freshly instantiated prize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameObject {
    /// Unique identifier, assigned by the world on insertion
    pub id: ObjectId,

    /// Name of the template this object was built from
    pub blueprint: String,

    /// Display name, possibly carrying colour markup
    pub display_name: String,

    /// Has an autonomous brain and must be scheduled for turns
    pub brain: bool,
}

impl GameObject {
    pub fn new(blueprint: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: ObjectId::NONE,
            blueprint: blueprint.into(),
            display_name: display_name.into(),
            brain: false,
        }
    }

    pub fn with_brain(mut self, brain: bool) -> Self {
        self.brain = brain;
        self
    }

    /// Display name with colour markup removed
    pub fn plain_name(&self) -> String {
        strip_markup(&self.display_name)
    }
}

/// Add "a" or "an" prefix to a word.
pub fn an(word: &str) -> String {
    let first_char = match word.chars().next() {
        Some(c) => c.to_ascii_lowercase(),
        None => return "a".to_string(),
    };

    if "aeiou".contains(first_char) {
        // "a unicorn", "a useful thing"
        if first_char == 'u' {
            let word_lower = word.to_lowercase();
            if word_lower.starts_with("uni") || word_lower.starts_with("use") {
                return format!("a {}", word);
            }
        }
        format!("an {}", word)
    } else {
        format!("a {}", word)
    }
}

/// Remove `&X` foreground and `^X` background colour codes.
///
/// A doubled marker (`&&`, `^^`) stands for the literal character.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '&' || c == '^' {
            match chars.next() {
                Some(next) if next == c => out.push(c),
                Some(_) => {}
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_next() {
        assert_eq!(ObjectId::NONE.next(), ObjectId(1));
        assert_eq!(ObjectId(41).next(), ObjectId(42));
    }

    #[test]
    fn test_neighbors_count() {
        let p = Position::new(5, 5);
        let n: Vec<_> = p.neighbors().collect();
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|q| p.distance(*q) == 1));
        assert!(!n.contains(&p));
    }

    #[test]
    fn test_neighbors_skip_overflow() {
        let p = Position::new(i8::MAX, 0);
        let n: Vec<_> = p.neighbors().collect();
        assert_eq!(n.len(), 5);
    }

    #[test]
    fn test_an() {
        assert_eq!(an("apple"), "an apple");
        assert_eq!(an("sword"), "a sword");
        assert_eq!(an("unicorn horn"), "a unicorn horn");
        assert_eq!(an("urn"), "an urn");
        assert_eq!(an(""), "a");
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("&Rred &ydagger"), "red dagger");
        assert_eq!(strip_markup("^kdark&W bright"), "dark bright");
        assert_eq!(strip_markup("salt && pepper"), "salt & pepper");
        assert_eq!(strip_markup("trailing&"), "trailing&");
        assert_eq!(strip_markup("plain"), "plain");
    }

    #[test]
    fn test_plain_name() {
        let obj = GameObject::new("Dagger", "&cbronze dagger");
        assert_eq!(obj.plain_name(), "bronze dagger");
        assert!(!obj.brain);
        assert!(obj.clone().with_brain(true).brain);
    }
}
