use rand::{Rng, SeedableRng, XorShiftRng};
use search_trees::{RedBlackTree, UnbalancedTree};

const NUM_OF_OPERATIONS: usize = 10_000;
const SAMPLE_KEYS: [u32; 7] = [50, 30, 70, 20, 40, 60, 80];

macro_rules! ordered_tree_tests {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use search_trees::$type_name;
                use rand::{Rng, SeedableRng, XorShiftRng};
                use super::{NUM_OF_OPERATIONS, SAMPLE_KEYS};

                #[test]
                fn int_test_inorder_is_sorted() {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new();
                    let mut expected = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, 1000u32);
                        tree.insert(key);
                        expected.push(key);
                    }

                    expected.sort();
                    assert_eq!(tree.len(), expected.len());
                    assert_eq!(tree.inorder(), expected.iter().collect::<Vec<&u32>>());
                    assert_eq!(tree.iter().collect::<Vec<&u32>>(), tree.inorder());
                    assert_eq!(tree.min(), expected.first());
                    assert_eq!(tree.max(), expected.last());
                }

                #[test]
                fn int_test_search() {
                    let mut tree = $type_name::new();
                    for key in (0..2000u32).filter(|key| key % 2 == 0) {
                        tree.insert(key);
                    }

                    for key in 0..2000u32 {
                        assert_eq!(tree.search(&key), key % 2 == 0);
                    }
                }

                #[test]
                fn int_test_sample_keys() {
                    let mut tree = $type_name::new();
                    for key in SAMPLE_KEYS.iter() {
                        tree.insert(*key);
                    }

                    assert_eq!(tree.inorder(), vec![&20, &30, &40, &50, &60, &70, &80]);
                    assert!(tree.height() <= 3);
                    assert_eq!(tree.preorder().len(), SAMPLE_KEYS.len());
                    assert_eq!(tree.postorder().last(), Some(&&50));
                }

                #[test]
                fn int_test_empty() {
                    let tree: $type_name<u32> = $type_name::new();
                    assert_eq!(tree.height(), 0);
                    assert!(!tree.search(&0));
                    assert!(tree.inorder().is_empty());
                    assert!(tree.preorder().is_empty());
                    assert!(tree.postorder().is_empty());
                }
            }
        )*
    }
}

ordered_tree_tests!(
    unbalanced_tree: UnbalancedTree,
    red_black_tree: RedBlackTree,
);

#[test]
fn int_test_unbalanced_degenerates() {
    let mut tree = UnbalancedTree::new();
    for key in 1..=100u32 {
        tree.insert(key);
    }
    assert_eq!(tree.height(), 100);

    let mut tree = UnbalancedTree::new();
    for key in (1..=100u32).rev() {
        tree.insert(key);
    }
    assert_eq!(tree.height(), 100);
}

#[test]
fn int_test_red_black_stays_balanced() {
    let mut tree = RedBlackTree::new();
    for key in 1..=100u32 {
        tree.insert(key);
    }
    assert!(tree.height() <= 14);
    assert!(tree.height() < 100);

    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = RedBlackTree::new();
    for _ in 0..NUM_OF_OPERATIONS {
        tree.insert(rng.next_u32());
    }
    let bound = 2.0 * ((NUM_OF_OPERATIONS + 1) as f64).log2();
    assert!(tree.height() as f64 <= bound);
    assert!(tree.height() <= 2 * tree.black_height());
}

#[test]
fn int_test_unbalanced_delete_sample() {
    let mut tree = UnbalancedTree::new();
    for key in SAMPLE_KEYS.iter() {
        tree.insert(*key);
    }

    assert!(tree.delete(&40));
    assert!(!tree.search(&40));
    assert_eq!(tree.inorder(), vec![&20, &30, &50, &60, &70, &80]);

    let before = tree.preorder().into_iter().cloned().collect::<Vec<u32>>();
    assert!(!tree.delete(&999));
    assert_eq!(tree.preorder(), before.iter().collect::<Vec<&u32>>());
}

#[test]
fn int_test_unbalanced_insert_delete() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = UnbalancedTree::new();
    let mut expected: Vec<u32> = Vec::new();

    for i in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 200u32);
        if rng.gen::<bool>() {
            tree.insert(key);
            let index = expected.iter().position(|other| *other > key).unwrap_or(expected.len());
            expected.insert(index, key);
        } else {
            let index = expected.iter().position(|other| *other == key);
            assert_eq!(tree.delete(&key), index.is_some());
            if let Some(index) = index {
                expected.remove(index);
            }
            assert_eq!(tree.search(&key), expected.contains(&key));
        }

        assert_eq!(tree.len(), expected.len());
        if i % 100 == 0 {
            assert_eq!(tree.inorder(), expected.iter().collect::<Vec<&u32>>());
        }
    }

    assert_eq!(tree.inorder(), expected.iter().collect::<Vec<&u32>>());
}
