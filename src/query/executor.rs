use crate::error::Result;
use crate::index::sus::SusIndex;
use crate::index::types::Interval;

/// Query executor over a built index.
///
/// Holds only a shared borrow: any number of executors may run against the
/// same index from different threads.
pub struct QueryExecutor<'a> {
    index: &'a SusIndex,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(index: &'a SusIndex) -> Self {
        Self { index }
    }

    /// All shortest unique substrings containing `p`.
    ///
    /// Starts at the position's pointer and walks forward while the cover
    /// does not grow, so the cost is proportional to the number of results.
    pub fn all(&self, p: usize) -> Result<Vec<Interval>> {
        self.index.check_position(p)?;

        let muis = self.index.muis();
        let first = self.index.pointers()[p] as usize;
        let best = muis[first].cover(p);

        let sus = muis[first..]
            .iter()
            .take_while(|mui| mui.cover(p) <= best)
            .map(|mui| mui.extend_to(p))
            .collect();

        Ok(sus)
    }

    /// The shortest unique substring containing `p` with the smallest start
    pub fn leftmost(&self, p: usize) -> Result<Interval> {
        self.index.check_position(p)?;
        Ok(self.leftmost_unchecked(p))
    }

    /// [`leftmost`](Self::leftmost) for every position of the text
    pub fn leftmost_all(&self) -> Vec<Interval> {
        (0..self.index.len())
            .map(|p| self.leftmost_unchecked(p))
            .collect()
    }

    #[inline]
    fn leftmost_unchecked(&self, p: usize) -> Interval {
        let s = self.index.pointers()[p] as usize;
        self.index.muis()[s].extend_to(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char() {
        let index = SusIndex::build(b"a").unwrap();
        let executor = QueryExecutor::new(&index);
        assert_eq!(executor.all(0).unwrap(), vec![Interval::new(0, 0)]);
        assert_eq!(executor.leftmost(0).unwrap(), Interval::new(0, 0));
    }

    #[test]
    fn test_run_has_one_answer() {
        let index = SusIndex::build(b"aaaaa").unwrap();
        let executor = QueryExecutor::new(&index);
        for p in 0..5 {
            assert_eq!(executor.all(p).unwrap(), vec![Interval::new(0, 4)]);
        }
    }

    #[test]
    fn test_ties_in_start_order() {
        let index = SusIndex::build(b"banana").unwrap();
        let sus = QueryExecutor::new(&index).all(2).unwrap();
        assert_eq!(sus, vec![Interval::new(0, 2), Interval::new(2, 4)]);
        assert!(sus.windows(2).all(|w| w[0].start < w[1].start));
    }

    #[test]
    fn test_leftmost_is_first_of_all() {
        let text = b"to be or not to be, that is the question";
        let index = SusIndex::build(text).unwrap();
        let executor = QueryExecutor::new(&index);
        let leftmost = executor.leftmost_all();

        assert_eq!(leftmost.len(), text.len());
        for p in 0..text.len() {
            let all = executor.all(p).unwrap();
            assert_eq!(leftmost[p], all[0]);
            assert_eq!(executor.leftmost(p).unwrap(), all[0]);
            assert!(all.iter().all(|iv| iv.contains(p)));
        }
    }

    #[test]
    fn test_out_of_range() {
        let index = SusIndex::build(b"ab").unwrap();
        let executor = QueryExecutor::new(&index);
        assert!(executor.all(2).is_err());
        assert!(executor.leftmost(2).is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let text = b"concurrent readers share one immutable index";
        let index = SusIndex::build(text).unwrap();
        let expected: Vec<_> = (0..text.len()).map(|p| index.query(p).unwrap()).collect();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let executor = QueryExecutor::new(&index);
                    for (p, want) in expected.iter().enumerate() {
                        assert_eq!(&executor.all(p).unwrap(), want);
                    }
                });
            }
        });
    }
}
