//! Semi-naive SUS computation used to cross-check the index.
//!
//! Recomputes MUIs on the fly from the rank and LCP arrays instead of using
//! the MUI stack and pointers, at O(n) per query.

use crate::error::Result;
use crate::index::mui::mui_at;
use crate::index::sus::SusIndex;
use crate::index::types::Interval;

pub struct NaiveVerifier<'a> {
    index: &'a SusIndex,
}

impl<'a> NaiveVerifier<'a> {
    pub fn new(index: &'a SusIndex) -> Self {
        Self { index }
    }

    /// All shortest unique substrings containing `p`, by increasing start
    pub fn query(&self, p: usize) -> Result<Vec<Interval>> {
        self.index.check_position(p)?;

        let rank = self.index.rank();
        let lcp = self.index.lcp();
        let mut ties = Ties::default();

        // Leftward, including p. An MUI ending before p is the last one
        // worth looking at: anything further left covers p with a longer span.
        for i in (0..=p).rev() {
            if let Some(mui) = mui_at(i, rank, lcp) {
                ties.offer(mui, p);
                if mui.end < p {
                    break;
                }
            }
        }
        ties.sus.reverse();

        // Rightward: only the nearest MUI can be a candidate
        if let Some(mui) = (p + 1..self.index.len()).find_map(|i| mui_at(i, rank, lcp)) {
            ties.offer(mui, p);
        }

        Ok(ties.sus)
    }
}

/// Intervals tied at the smallest cover seen so far
#[derive(Default)]
struct Ties {
    best: Option<usize>,
    sus: Vec<Interval>,
}

impl Ties {
    fn offer(&mut self, mui: Interval, p: usize) {
        let cover = mui.cover(p);
        match self.best {
            Some(best) if cover > best => {}
            Some(best) if cover == best => self.sus.push(mui.extend_to(p)),
            _ => {
                self.best = Some(cover);
                self.sus.clear();
                self.sus.push(mui.extend_to(p));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banana() {
        let index = SusIndex::build(b"banana").unwrap();
        let naive = NaiveVerifier::new(&index);
        assert_eq!(naive.query(0).unwrap(), vec![Interval::new(0, 0)]);
        assert_eq!(
            naive.query(2).unwrap(),
            vec![Interval::new(0, 2), Interval::new(2, 4)]
        );
        assert_eq!(naive.query(5).unwrap(), vec![Interval::new(2, 5)]);
    }

    #[test]
    fn test_matches_index() {
        let text = b"GATTACAGATTACCAGATTTACA";
        let index = SusIndex::build(text).unwrap();
        let naive = NaiveVerifier::new(&index);
        for p in 0..text.len() {
            assert_eq!(naive.query(p).unwrap(), index.query(p).unwrap(), "position {}", p);
        }
    }

    #[test]
    fn test_out_of_range() {
        let index = SusIndex::build(b"").unwrap();
        assert!(NaiveVerifier::new(&index).query(0).is_err());
    }
}
