//! The O(NP) search: furthest-point table, snake extension, and edit-script
//! recovery.
//!
//! The search works on normalized sequences where the first (length `M`) is
//! never longer than the second (length `N`). Each diagonal `k = y - x` of the
//! edit graph has one entry in a furthest-point table recording the deepest
//! `y` reached so far and the head of the match-run chain ending there. Round
//! `p` widens the band of visited diagonals by one on each side until the
//! target diagonal `Δ = N - M` reaches `y = N`.
//!
//! Match runs are kept in an arena and linked by index. Several diagonals may
//! point into the same chain suffix; runs are never mutated until the single
//! terminal chain is reversed at the end.
//!
//! # Invariants
//!
//! - Diagonals outside `[-(M+1), N+1]` are never addressed.
//! - Each call to `snake` writes exactly one table entry.
//! - When the horizontal and vertical candidates tie, the horizontal one wins.

use tracing::{debug, trace};

use crate::change::Change;

/// Element-equality capability over two sequences.
///
/// `equal(i, j)` reports whether element `i` of the first sequence equals
/// element `j` of the second. It is only called with `i < len(first)` and
/// `j < len(second)`. A panic inside `equal` propagates out of [`diff`].
pub trait Equal {
    fn equal(&self, i: usize, j: usize) -> bool;
}

impl<F> Equal for F
where
    F: Fn(usize, usize) -> bool,
{
    fn equal(&self, i: usize, j: usize) -> bool {
        self(i, j)
    }
}

/// Counters collected during one comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompareStats {
    /// Index of the round in which the target diagonal converged.
    pub p: usize,
    /// Number of snake extensions performed across all rounds.
    pub snakes: usize,
    /// Number of calls made to [`Equal::equal`].
    pub equal_calls: usize,
    /// Number of match runs created during the search.
    pub runs_created: usize,
    /// Number of match runs in the final chain.
    pub chain_len: usize,
}

/// Compute the changes that turn a sequence of length `m` into one of
/// length `n`, using `data` to compare elements.
///
/// The result is ordered by position and is empty when the two sequences are
/// element-wise identical. Makes O(NP) calls to `data.equal` in the worst
/// case, where `P` is the number of deletions from the longer sequence.
pub fn diff<E: Equal + ?Sized>(m: usize, n: usize, data: &E) -> Vec<Change> {
    diff_with_stats(m, n, data).0
}

/// Like [`diff`], also returning the search counters.
pub fn diff_with_stats<E: Equal + ?Sized>(
    m: usize,
    n: usize,
    data: &E,
) -> (Vec<Change>, CompareStats) {
    if m == 0 && n == 0 {
        return (Vec::new(), CompareStats::default());
    }
    let mut ctx = Context::new(m, n, data);
    let changes = ctx.compare();
    (changes, ctx.stats)
}

/// One entry of the furthest-point table.
#[derive(Clone, Copy, Debug)]
struct Point {
    /// Furthest `y` reached on this diagonal, `-1` if unreached.
    y: isize,
    /// Head of the match-run chain ending at this point.
    lcs: Option<usize>,
}

impl Point {
    const UNREACHED: Self = Self { y: -1, lcs: None };
}

/// A maximal run of `n` equal pairs starting at `(x, y)`.
#[derive(Clone, Copy, Debug)]
struct Run {
    x: usize,
    y: usize,
    n: usize,
    next: Option<usize>,
}

struct Context<'a, E: ?Sized> {
    data: &'a E,
    m: usize,
    n: usize,
    delta: isize,
    /// Offset added to a diagonal to index `fp`.
    offset: isize,
    /// Set when the inputs were swapped so that `m <= n`.
    xchg: bool,
    fp: Vec<Point>,
    runs: Vec<Run>,
    stats: CompareStats,
}

impl<'a, E: Equal + ?Sized> Context<'a, E> {
    fn new(len1: usize, len2: usize, data: &'a E) -> Self {
        let (m, n, xchg) = if len2 >= len1 {
            (len1, len2, false)
        } else {
            (len2, len1, true)
        };
        Self {
            data,
            m,
            n,
            delta: n as isize - m as isize,
            offset: m as isize + 1,
            xchg,
            fp: vec![Point::UNREACHED; (m + 1) + (n + 1) + 1],
            runs: Vec::new(),
            stats: CompareStats::default(),
        }
    }

    fn compare(&mut self) -> Vec<Change> {
        let target = self.index(self.delta);
        let n = self.n as isize;
        let mut p: isize = 0;
        loop {
            for k in -p..self.delta {
                self.snake(k);
            }
            for k in ((self.delta + 1)..=(self.delta + p)).rev() {
                self.snake(k);
            }
            self.snake(self.delta);
            trace!(p, y = self.fp[target].y, "round complete");
            if self.fp[target].y == n {
                break;
            }
            p += 1;
        }
        self.stats.p = p as usize;

        let (head, len) = self.reverse(self.fp[target].lcs);
        self.stats.chain_len = len;
        let changes = self.emit(head, len);

        debug!(
            m = self.m,
            n = self.n,
            p = self.stats.p,
            runs = self.stats.runs_created,
            equal_calls = self.stats.equal_calls,
            changes = changes.len(),
            "comparison converged"
        );
        changes
    }

    fn index(&self, k: isize) -> usize {
        (k + self.offset) as usize
    }

    fn equal(&mut self, x: usize, y: usize) -> bool {
        self.stats.equal_calls += 1;
        if self.xchg {
            self.data.equal(y, x)
        } else {
            self.data.equal(x, y)
        }
    }

    /// Extend diagonal `k` from the better of its two neighbours and record
    /// any new run of matches.
    fn snake(&mut self, k: isize) {
        self.stats.snakes += 1;
        let kk = self.index(k);
        let h = self.fp[kk - 1];
        let v = self.fp[kk + 1];
        let (mut y, prev) = if h.y + 1 >= v.y {
            (h.y + 1, h.lcs)
        } else {
            (v.y, v.lcs)
        };

        let mut x = y - k;
        let (m, n) = (self.m as isize, self.n as isize);
        let mut run = 0;
        while x < m && y < n && self.equal(x as usize, y as usize) {
            x += 1;
            y += 1;
            run += 1;
        }

        let lcs = if run == 0 {
            prev
        } else {
            self.runs.push(Run {
                x: (x - run) as usize,
                y: (y - run) as usize,
                n: run as usize,
                next: prev,
            });
            self.stats.runs_created += 1;
            Some(self.runs.len() - 1)
        };
        self.fp[kk] = Point { y, lcs };
    }

    /// Reverse the chain starting at `curr` in place, returning the new head
    /// and the chain length.
    fn reverse(&mut self, mut curr: Option<usize>) -> (Option<usize>, usize) {
        let mut len = 0;
        let mut next = None;
        while let Some(i) = curr {
            curr = self.runs[i].next;
            self.runs[i].next = next;
            next = Some(i);
            len += 1;
        }
        (next, len)
    }

    /// Walk the ordered runs and emit one change per gap between them.
    fn emit(&self, mut head: Option<usize>, len: usize) -> Vec<Change> {
        let mut changes = Vec::with_capacity(len + 1);
        let (mut x, mut y) = (0, 0);
        while let Some(i) = head {
            let run = self.runs[i];
            if x < run.x || y < run.y {
                changes.push(self.change(x, y, run.x - x, run.y - y));
            }
            x = run.x + run.n;
            y = run.y + run.n;
            head = run.next;
        }
        if x < self.m || y < self.n {
            changes.push(self.change(x, y, self.m - x, self.n - y));
        }
        changes
    }

    /// Build a change in the caller's original orientation.
    fn change(&self, x: usize, y: usize, del: usize, ins: usize) -> Change {
        if self.xchg {
            Change::new(y, x, ins, del)
        } else {
            Change::new(x, y, del, ins)
        }
    }
}
