use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Point, Town};

/// One kind of resource, with every town cell where it can be mined.
///
/// A mining area satisfies the kind as soon as it covers at least one of the
/// deposits. A kind with no deposits at all can never be satisfied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceKind {
    pub deposits: Vec<Point>,
}

/// One judgeable record: a town and the deposits of every resource kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub town: Town,
    pub kinds: Vec<ResourceKind>,
}

impl Dataset {
    /// A random well-formed dataset, for the generator and for tests.
    ///
    /// Every kind gets between one and `max_deposits` deposits, so the
    /// result is always feasible.
    pub fn random(
        rng: &mut impl Rng,
        height: i32,
        width: i32,
        kind_count: usize,
        max_deposits: usize,
    ) -> Self {
        let town = Town { height, width };
        let mut kinds = Vec::with_capacity(kind_count);
        for _ in 0..kind_count {
            let deposit_count = rng.gen_range(1..=max_deposits);
            let mut deposits = Vec::with_capacity(deposit_count);
            for _ in 0..deposit_count {
                deposits.push(Point {
                    x: rng.gen_range(0..width),
                    y: rng.gen_range(0..height),
                });
            }
            kinds.push(ResourceKind { deposits });
        }
        Dataset { town, kinds }
    }
}

/// Reorder kinds so that the scarcest ones come first.
///
/// A scarce kind has few candidate deposits and therefore a small branching
/// factor, so the search commits to it early. The ordering never changes the
/// minimal area, only how fast it is found.
pub fn order_by_scarcity(kinds: &mut [ResourceKind]) {
    kinds.sort_by_key(|kind| kind.deposits.len());
}
