use rand::Rng;

#[derive(Debug, Clone)]
struct Node {
    value: u32,
    left: Option<usize>,
    right: Option<usize>,
}

/// Binary tree whose shape comes from a coin flip at every level of every
/// insertion.
#[derive(Debug, Default)]
pub struct RandomTree {
    nodes: Vec<Node>,
}

/// One step of a pre-order walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Child { parent: u32, child: u32 },
    /// `node` has no children.
    Leaf { node: u32 },
}

impl RandomTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn insert<R: Rng>(&mut self, rng: &mut R, value: u32) {
        let new = self.nodes.len();
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
        });
        if new == 0 {
            return;
        }

        let mut at = 0;
        loop {
            let go_left = rng.gen_range(0..10_000) < 5_000;
            let slot = if go_left {
                &mut self.nodes[at].left
            } else {
                &mut self.nodes[at].right
            };
            match *slot {
                Some(next) => at = next,
                None => {
                    *slot = Some(new);
                    return;
                }
            }
        }
    }

    /// Pre-order walk, left subtree first. `visit` is called with each
    /// parent/child link just before descending into the child.
    pub fn walk<F: FnMut(Link)>(&self, mut visit: F) {
        enum Step {
            Enter(usize),
            Link(usize, usize),
        }

        if self.nodes.is_empty() {
            return;
        }
        let mut stack = vec![Step::Enter(0)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Link(parent, child) => visit(Link::Child {
                    parent: self.nodes[parent].value,
                    child: self.nodes[child].value,
                }),
                Step::Enter(idx) => {
                    let node = &self.nodes[idx];
                    if node.left.is_none() && node.right.is_none() {
                        visit(Link::Leaf { node: node.value });
                        continue;
                    }
                    if let Some(right) = node.right {
                        stack.push(Step::Enter(right));
                        stack.push(Step::Link(idx, right));
                    }
                    if let Some(left) = node.left {
                        stack.push(Step::Enter(left));
                        stack.push(Step::Link(idx, left));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn tree(n: u32, seed: u64) -> RandomTree {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut t = RandomTree::new();
        for v in 0..n {
            t.insert(&mut rng, v);
        }
        t
    }

    #[test]
    fn single_node_is_a_leaf() {
        let mut links = Vec::new();
        tree(1, 0).walk(|l| links.push(l));
        assert_eq!(links, vec![Link::Leaf { node: 0 }]);
    }

    #[test]
    fn every_node_but_the_root_is_linked_once() {
        let t = tree(200, 3);
        let mut children = Vec::new();
        let mut leaves = 0;
        t.walk(|l| match l {
            Link::Child { child, .. } => children.push(child),
            Link::Leaf { .. } => leaves += 1,
        });
        children.sort_unstable();
        assert_eq!(children, (1..200).collect::<Vec<u32>>());
        assert!(leaves >= 1);
    }

    #[test]
    fn links_come_before_their_subtree() {
        let t = tree(50, 11);
        let mut seen = vec![0u32];
        t.walk(|l| {
            if let Link::Child { parent, child } = l {
                assert!(seen.contains(&parent), "parent {parent} not visited yet");
                seen.push(child);
            }
        });
    }
}
