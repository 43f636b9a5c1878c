/// Brute-force broad phase: yields every unordered pair `(i, j)` with `i < j` once.
#[derive(Copy, Clone, Debug)]
pub struct AllPairs {
    n: usize,
    i: usize,
    j: usize,
}

impl AllPairs {
    pub fn new(n: usize) -> Self {
        Self { n, i: 0, j: 1 }
    }
}

impl Iterator for AllPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.i + 1 < self.n {
            if self.j < self.n {
                let pair = (self.i, self.j);
                self.j += 1;
                return Some(pair);
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.i + 1 >= self.n {
            0
        } else {
            // rest of row i, then full rows below
            let row = self.n - self.j.min(self.n);
            let below = self.n - self.i - 1;
            row + below * (below - 1) / 2
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AllPairs {}

/// Every unordered pair among `n` bodies.
pub fn all_pairs(n: usize) -> AllPairs {
    AllPairs::new(n)
}

/// `n * (n - 1) / 2`
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
