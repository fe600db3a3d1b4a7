use std::hint::black_box;

use tracing::debug;

use crate::buffer::{allocate_filled, allocate_vec};
use crate::cli::RandomListArgs;
use crate::error::{BenchError, Result};
use crate::reporting::{Report, format_bytes, format_number};
use crate::rng::Lcg;

/// Link value marking the end of the chain.
pub const END: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Node {
    pub value: u32,
    pub next:  u32,
}

/// Flat array of nodes linked by index.
///
/// The chain order comes from a shuffled permutation rather than from
/// memory layout, so a walk touches memory in an order the prefetcher
/// cannot predict and its run time is dominated by load latency.
#[derive(Debug)]
pub struct NodePool {
    nodes: Box<[Node]>,
    head:  u32,
}

/// Fisher-Yates shuffle of `[0, n)` driven by `rng`.
///
/// Walks `i` from `n - 1` down to 1 and swaps slot `i` with slot
/// `rng.below(i + 1)`.
pub fn shuffled_permutation(n: usize, rng: &mut Lcg) -> Result<Vec<u32>> {
    let count = pool_len(n)?;
    let mut perm = allocate_vec("permutation", n)?;
    perm.extend(0..count);

    for i in (1..n).rev() {
        let r = rng.below(i as u32 + 1) as usize;
        perm.swap(i, r);
    }
    Ok(perm)
}

fn pool_len(n: usize) -> Result<u32> {
    // `END` is reserved, so the largest usable index is `u32::MAX - 1`.
    u32::try_from(n).map_err(|_| BenchError::Alloc {
        buffer:   "nodes",
        elements: n,
    })
}

impl NodePool {
    /// Builds a pool where node `i` holds value `i` and the chain follows
    /// `perm`: `perm[0]` is the head and the node at `perm[k]` links to
    /// `perm[k + 1]`.
    ///
    /// # Panics
    ///
    /// Panics if `perm` holds an index outside `[0, perm.len())`. A
    /// permutation from [`shuffled_permutation`] always satisfies this.
    pub fn linked(perm: &[u32]) -> Result<Self> {
        let n = perm.len();
        pool_len(n)?;
        let mut nodes = allocate_filled("nodes", n, |i| Node {
            value: i as u32,
            next:  END,
        })?;

        for pair in perm.windows(2) {
            nodes[pair[0] as usize].next = pair[1];
        }

        let head = perm.first().copied().unwrap_or(END);
        Ok(Self { nodes, head })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the first node, or [`END`] for an empty pool.
    pub fn head(&self) -> u32 {
        self.head
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node indices in chain order, head first.
    pub fn chain_order(&self) -> Vec<u32> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.head;
        while cursor != END && order.len() < self.nodes.len() {
            order.push(cursor);
            cursor = self.nodes[cursor as usize].next;
        }
        order
    }

    /// Follows the chain for `steps` nodes, restarting at the head whenever
    /// the end is reached, and returns the sum of the visited values.
    #[inline(always)]
    pub fn traverse(&self, steps: u64) -> u64 {
        if self.nodes.is_empty() {
            return 0;
        }

        let mut sum = 0u64;
        let mut cursor = self.head;
        for _ in 0..steps {
            if cursor == END {
                cursor = self.head;
            }
            let node = &self.nodes[cursor as usize];
            sum = sum.wrapping_add(node.value as u64);
            // Next index comes from the loaded node - no prefetch hint
            cursor = black_box(node.next);
        }
        sum
    }
}

pub fn run(args: &RandomListArgs) -> Result<Report> {
    let steps = args.steps_or_default();
    debug!(
        nodes = %format_number(args.nodes as u64),
        steps = %format_number(steps),
        working_set = %format_bytes(args.nodes.saturating_mul(std::mem::size_of::<Node>())),
        "building pointer chain"
    );

    let mut rng = Lcg::default();
    let perm = shuffled_permutation(args.nodes, &mut rng)?;
    let pool = NodePool::linked(&perm)?;
    drop(perm);

    let sum = pool.traverse(black_box(steps));
    Ok(Report::Sum(black_box(sum)))
}
