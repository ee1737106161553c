use quickcheck::Arbitrary;

use crate::{Dataset, Point, ResourceKind, Town};

/// A dataset small enough for exhaustive cross-checking in tests.
///
/// Towns are at most 8x8 with up to 3 kinds of up to 4 deposits each, all
/// within the town, so every one-deposit-per-kind combination can be
/// enumerated cheaply.
#[derive(Clone, Debug)]
pub struct SmallDataset(pub Dataset);

impl Arbitrary for SmallDataset {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let height = (u8::arbitrary(g) % 8) as i32 + 1;
        let width = (u8::arbitrary(g) % 8) as i32 + 1;
        let kind_count = usize::arbitrary(g) % 3 + 1;
        let mut kinds = Vec::with_capacity(kind_count);
        for _ in 0..kind_count {
            let deposit_count = usize::arbitrary(g) % 4 + 1;
            let mut deposits = Vec::with_capacity(deposit_count);
            for _ in 0..deposit_count {
                deposits.push(Point {
                    x: (u8::arbitrary(g) as i32) % width,
                    y: (u8::arbitrary(g) as i32) % height,
                });
            }
            kinds.push(ResourceKind { deposits });
        }
        SmallDataset(Dataset {
            town: Town { height, width },
            kinds,
        })
    }
}

impl Arbitrary for Point {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Point {
            x: (u8::arbitrary(g) % 16) as i32,
            y: (u8::arbitrary(g) % 16) as i32,
        }
    }
}
