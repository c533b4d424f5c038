use std::env;

use ordset::{dot, generate::RNG, BTree};

/// Builds a small tree from seeded random keys and prints its Graphviz
/// rendering to stdout. Pipe into `dot -Tpng` to see the shape.
fn main() {
    let count: usize = env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("key count must be a number"))
        .unwrap_or(24);

    let mut rng = RNG::from_seed(42);
    let mut tree = BTree::new(2);
    let mut inserted = 0;
    while inserted < count {
        if tree.insert(rng.next_value() % 1000) {
            inserted += 1;
        }
    }

    print!("{}", dot::to_dot(&tree));
}
