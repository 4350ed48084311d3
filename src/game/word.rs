use crate::game::tile::Tile;

/// One maximal run of tiles read off the board in a single direction while
/// a move is validated. Lives only for the duration of that validation
/// call; runs of a single letter never become words.
#[derive(Debug, Clone)]
pub struct Word {
    tiles: Vec<Tile>,
}

impl Word {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Word { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The word as text. Every tile in a constructed word carries a letter;
    /// unresolved blanks are rejected before any word is built.
    pub fn text(&self) -> String {
        self.tiles.iter().filter_map(|tile| tile.letter()).collect()
    }

    /// Whether both words consist of the same tiles in the same order. The
    /// same run is rediscovered once per placed tile it contains, and this
    /// check keeps the collected words free of those duplicates.
    pub fn same_tiles(&self, other: &Word) -> bool {
        self.tiles.len() == other.tiles.len()
            && self
                .tiles
                .iter()
                .zip(other.tiles.iter())
                .all(|(a, b)| a.id() == b.id())
    }

    /// Whether every one of the placed tiles appears in this word.
    pub fn contains_all(&self, placed: &[Tile]) -> bool {
        placed
            .iter()
            .all(|placed_tile| self.tiles.iter().any(|tile| tile.id() == placed_tile.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_from(letters: &[(i32, char)]) -> Word {
        Word::new(
            letters
                .iter()
                .map(|&(id, letter)| Tile::new(id, letter, 1))
                .collect(),
        )
    }

    #[test]
    fn test_text_concatenates_letters() {
        let word = word_from(&[(1, 'c'), (2, 'a'), (3, 't')]);
        assert_eq!(word.text(), "CAT");
    }

    #[test]
    fn test_same_tiles_ignores_letters() {
        let word = word_from(&[(1, 'A'), (2, 'B')]);
        let rediscovered = word_from(&[(1, 'A'), (2, 'B')]);
        let other = word_from(&[(1, 'A'), (3, 'B')]);

        assert!(word.same_tiles(&rediscovered));
        assert!(!word.same_tiles(&other));
    }

    #[test]
    fn test_same_tiles_is_order_sensitive() {
        let forward = word_from(&[(1, 'A'), (2, 'B')]);
        let backward = word_from(&[(2, 'B'), (1, 'A')]);
        assert!(!forward.same_tiles(&backward));
    }

    #[test]
    fn test_contains_all() {
        let word = word_from(&[(1, 'C'), (2, 'A'), (3, 'T')]);
        let placed = vec![Tile::new(1, 'C', 3), Tile::new(3, 'T', 1)];
        let stranger = vec![Tile::new(4, 'S', 1)];

        assert!(word.contains_all(&placed));
        assert!(!word.contains_all(&stranger));
    }
}
