/// One of the three unordered pairs drawn from circles A, B, C (indices 0, 1, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CirclePair {
    /// Circles 0 and 1.
    AB,
    /// Circles 1 and 2.
    BC,
    /// Circles 0 and 2.
    AC,
}

impl CirclePair {
    /// All pairs, in triangle-vertex order.
    pub const ALL: [Self; 3] = [Self::AB, Self::BC, Self::AC];

    /// For each circle index, the two pairs whose vertices bound its chord.
    pub const CHORDS: [[Self; 2]; 3] = [
        [Self::AB, Self::AC],
        [Self::AB, Self::BC],
        [Self::BC, Self::AC],
    ];

    /// Circle indices of the pair, lower index first.
    #[must_use]
    pub fn indices(self) -> (usize, usize) {
        match self {
            Self::AB => (0, 1),
            Self::BC => (1, 2),
            Self::AC => (0, 2),
        }
    }

    /// Index of the circle not in the pair.
    #[must_use]
    pub fn third(self) -> usize {
        match self {
            Self::AB => 2,
            Self::BC => 0,
            Self::AC => 1,
        }
    }

    /// Position of the pair in [`CirclePair::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::AB => 0,
            Self::BC => 1,
            Self::AC => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_and_third_partition_circles() {
        for pair in CirclePair::ALL {
            let (i, j) = pair.indices();
            let mut all = [i, j, pair.third()];
            all.sort_unstable();
            assert_eq!(all, [0, 1, 2], "{pair:?}");
        }
    }

    #[test]
    fn index_matches_position() {
        for (pos, pair) in CirclePair::ALL.into_iter().enumerate() {
            assert_eq!(pair.index(), pos);
        }
    }

    #[test]
    fn chord_pairs_involve_their_circle() {
        for (circle, pairs) in CirclePair::CHORDS.into_iter().enumerate() {
            for pair in pairs {
                let (i, j) = pair.indices();
                assert!(i == circle || j == circle, "{pair:?} misses circle {circle}");
                assert_ne!(pair.third(), circle);
            }
        }
    }
}
