use std::time::Instant;

use crossbeam::thread;
use locked_avl::{AvlTree, TreeError};
use rand::seq::SliceRandom;

/// Number of keys inserted.
const N: usize = 32;
/// Number of threads inserting into the same tree.
const NUM_THREADS: usize = 4;

fn parallel_insert(tree: &AvlTree<usize>, keys: &[usize]) -> Result<usize, TreeError> {
    let chunk = (keys.len() + NUM_THREADS - 1) / NUM_THREADS;
    let results: Vec<Result<usize, TreeError>> = thread::scope(|s| {
        let handles: Vec<_> = keys
            .chunks(chunk.max(1))
            .map(|part| {
                s.spawn(move |_| {
                    let mut created = 0;
                    for &key in part {
                        if tree.insert(key)? {
                            created += 1;
                        }
                    }
                    Ok::<usize, TreeError>(created)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(Err(TreeError::Poisoned)))
            .collect()
    })
    .map_err(|_| TreeError::Poisoned)?;

    results.into_iter().sum()
}

fn main() -> Result<(), TreeError> {
    let mut keys: Vec<usize> = (0..N).collect();
    keys.shuffle(&mut rand::thread_rng());
    println!("inserting\t{:?}", keys);

    let tree = AvlTree::new();
    let instant = Instant::now();
    let created = parallel_insert(&tree, &keys)?;
    let elapsed = instant.elapsed();

    {
        let guard = tree.lock()?;
        let preorder: Vec<String> = guard.preorder().map(|key| key.to_string()).collect();
        println!("preorder\t{}", preorder.join(" "));
        println!(
            "created\t{}\tsize\t{}\theight\t{}\tbalance\t{}\t{:?}",
            created,
            guard.len(),
            guard.height(),
            guard.balance(),
            elapsed
        );
        if let Err(violation) = guard.validate() {
            eprintln!("invalid tree: {}", violation);
        }
    }

    println!("released\t{}", tree.destroy());
    Ok(())
}
