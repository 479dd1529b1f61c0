use super::*;

/// A nested list, shaped like the trees the rule engine builds.
enum Tree {
    Leaf(u32),
    Branch(Vec<Tree>),
}

// Drop glue would recurse once per level; flatten instead.
impl Drop for Tree {
    fn drop(&mut self) {
        if let Tree::Branch(children) = self {
            let mut pending = std::mem::take(children);
            while let Some(mut tree) = pending.pop() {
                if let Tree::Branch(grandchildren) = &mut tree {
                    pending.append(grandchildren);
                }
            }
        }
    }
}

fn nest(depth: usize) -> Tree {
    let mut tree = Tree::Leaf(1);
    for _ in 0..depth {
        tree = Tree::Branch(vec![tree]);
    }
    tree
}

fn sum(tree: &Tree) -> u64 {
    ensure_sufficient_stack(|| match tree {
        Tree::Leaf(value) => u64::from(*value),
        Tree::Branch(children) => children.iter().map(sum).sum(),
    })
}

fn depth(tree: &Tree) -> usize {
    ensure_sufficient_stack(|| match tree {
        Tree::Leaf(_) => 0,
        Tree::Branch(children) => 1 + children.iter().map(depth).max().unwrap_or(0),
    })
}

#[test]
fn shallow_tree_walk() {
    let tree = Tree::Branch(vec![Tree::Leaf(2), nest(3), Tree::Leaf(4)]);
    assert_eq!(sum(&tree), 7);
    assert_eq!(depth(&tree), 4);
}

#[test]
fn deep_tree_walk() {
    // Deep enough to overflow a default 8MB stack without growth.
    let tree = nest(200_000);
    assert_eq!(depth(&tree), 200_000);
    assert_eq!(sum(&tree), 1);
}

#[test]
fn passes_result_through() {
    let result: Result<usize, &str> = ensure_sufficient_stack(|| Ok(42));
    assert_eq!(result, Ok(42));
}
