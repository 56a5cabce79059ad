use gridwalk_core::Pos;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_signed() {
        let (a, b) = (Pos::new(-2, 3), Pos::new(4, -1));
        assert_eq!(manhattan(a, b), 10);
        assert_eq!(manhattan(b, a), 10);
        assert_eq!(manhattan(a, a), 0);
    }
}
