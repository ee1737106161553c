use crate::{order_by_scarcity, Infeasible, MiningArea, Point, ResourceKind, Town};

/// Find the area of the smallest axis-aligned rectangle that covers at
/// least one deposit of every resource kind.
///
/// This is a depth-first branch-and-bound search: one deposit is committed
/// per kind, the area grows monotonically along a branch, and any branch
/// whose area already exceeds the best complete area is discarded. Returns
/// [`Infeasible`] when some kind has no deposits at all.
pub fn smallest_mining_area(town: Town, kinds: &[ResourceKind]) -> Result<i64, Infeasible> {
    if let Some(kind_idx) = kinds.iter().position(|kind| kind.deposits.is_empty()) {
        return Err(Infeasible { kind_idx });
    }

    let start = MiningArea::unclaimed(town);
    if kinds.is_empty() {
        // Nothing to cover. Degenerate, but keeps the search in bounds.
        return Ok(start.area());
    }

    let mut ordered = kinds.to_vec();
    order_by_scarcity(&mut ordered);

    Ok(search(&ordered, 0, start, start).area())
}

/// One level of the search: satisfy `kinds[idx]`.
///
/// `current` is the area grown by the kinds before `idx`; `best` is the
/// smallest complete area found anywhere in the tree so far, threaded back
/// up through the return value. Both are plain values, so sibling branches
/// never observe each other's growth. Invariant: `current` never exceeds
/// `best` on entry.
fn search(
    kinds: &[ResourceKind],
    idx: usize,
    current: MiningArea,
    mut best: MiningArea,
) -> MiningArea {
    let last = idx == kinds.len() - 1;

    // A kind with a deposit already inside the area needs no commitment,
    // and committing one of its other deposits could only grow the area.
    if kinds[idx].deposits.iter().any(|&p| current.contains(p)) {
        return if last {
            current
        } else {
            search(kinds, idx + 1, current, best)
        };
    }

    // Cheapest-looking expansions first, so that small complete areas are
    // found early and tighten the pruning bound.
    let mut candidates: Vec<(i32, Point)> = kinds[idx]
        .deposits
        .iter()
        .map(|&p| (current.expansion_distance(p), p))
        .collect();
    candidates.sort_by_key(|&(distance, _)| distance);

    for &(_, p) in &candidates {
        let grown = current.enlarge(p);
        // The expansion distance is not a lower bound on the resulting
        // area, so a pruned candidate must not end the loop: a later,
        // "farther" deposit can still produce a smaller rectangle.
        if grown.area() > best.area() {
            continue;
        }
        if last {
            if grown.area() < best.area() {
                best = grown;
            }
        } else {
            best = search(kinds, idx + 1, grown, best);
        }
    }
    best
}
