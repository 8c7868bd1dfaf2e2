//! Blocker reporting.
//!
//! Renders resolved chains as the final human-readable messages. Chains are
//! reversed so the blocking project comes first, merged into a forest so a
//! dependency that blocks several seeds is reported once, and sorted so the
//! most impactful blockers lead the list. Printing is the caller's job; this
//! module only produces the ordered message strings.

use std::collections::{BTreeMap, BTreeSet};

use crate::project::ProjectName;
use crate::resolver::Chain;

/// Blocker chains merged into a forest rooted at each blocking project.
///
/// Chains that share a blocking suffix share structure here: the suffix is
/// stored once, and every seed that reaches it hangs off the same nodes.
#[derive(Debug, Default)]
pub struct BlockerForest {
    roots: BTreeMap<ProjectName, Node>,
}

#[derive(Debug, Default)]
struct Node {
    /// A chain ends exactly here; the path from the root spells it out.
    terminal: bool,
    children: BTreeMap<ProjectName, Node>,
}

impl BlockerForest {
    /// Merge chains, sharing common blocking suffixes.
    pub fn from_chains(chains: &[Chain]) -> Self {
        let mut forest = Self::default();
        for chain in chains {
            let mut hops = chain.projects().iter().rev();
            let root = hops.next().expect("chains are never empty");
            let mut node = forest.roots.entry(root.clone()).or_default();
            for hop in hops {
                node = node.children.entry(hop.clone()).or_default();
            }
            node.terminal = true;
        }
        forest
    }

    /// Number of distinct blocking roots.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Rendered chain lines, most impactful root first.
    ///
    /// Roots are ordered by how many seeds they block, descending, with ties
    /// broken by name; the lines under one root are sorted among themselves.
    pub fn lines(&self) -> Vec<String> {
        let mut groups: Vec<(&ProjectName, &Node)> = self.roots.iter().collect();
        groups.sort_by(|a, b| {
            seeds_under(b.1)
                .cmp(&seeds_under(a.1))
                .then_with(|| a.0.cmp(b.0))
        });

        let mut lines = Vec::new();
        for (name, node) in groups {
            let mut group = Vec::new();
            node_lines(&mut vec![name], node, &mut group);
            group.sort();
            lines.extend(group);
        }
        lines
    }
}

/// Number of chains (and therefore seeds) terminating inside this subtree.
fn seeds_under(node: &Node) -> usize {
    usize::from(node.terminal) + node.children.values().map(seeds_under).sum::<usize>()
}

/// Emit the rendered lines for one node, depth-first.
///
/// Sibling seeds that end at the same spot fold into a single line listing
/// them all; branches that diverge earlier keep their own lines.
fn node_lines<'a>(path: &mut Vec<&'a ProjectName>, node: &'a Node, lines: &mut Vec<String>) {
    if node.terminal {
        lines.push(render_chain(path));
    }

    let is_leaf_end = |child: &Node| child.terminal && child.children.is_empty();

    let mut folded: Vec<&ProjectName> = Vec::new();
    for (name, child) in &node.children {
        if is_leaf_end(child) {
            folded.push(name);
        }
    }
    if !folded.is_empty() {
        let mut merged = path.clone();
        merged.extend(folded);
        lines.push(render_chain(&merged));
    }

    for (name, child) in &node.children {
        if !is_leaf_end(child) {
            path.push(name);
            node_lines(path, child, lines);
            path.pop();
        }
    }
}

/// Render one merged chain, root-most blocking project first.
fn render_chain(path: &[&ProjectName]) -> String {
    let mut rendered = path[0].to_string();
    for (i, hop) in path[1..].iter().enumerate() {
        rendered.push_str(if i == 0 {
            " (which is blocking "
        } else {
            ", which is blocking "
        });
        rendered.push_str(hop.as_str());
    }
    if path.len() > 1 {
        rendered.push(')');
    }
    rendered
}

/// Render the complete message sequence for a set of blocker chains.
///
/// Zero blockers is one celebratory line. Otherwise: a headline with the
/// blocked-seed count, a second line with the blocking-root count, then one
/// line per merged chain from [`BlockerForest::lines`].
pub fn render(blockers: &[Chain]) -> Vec<String> {
    if blockers.is_empty() {
        return vec!["You have 0 projects blocking you from using Python 3!".to_string()];
    }

    let forest = BlockerForest::from_chains(blockers);
    let seeds = blockers
        .iter()
        .map(Chain::seed)
        .collect::<BTreeSet<_>>()
        .len();
    let roots = forest.root_count();

    let mut messages = vec![
        format!(
            "You need {} project{} to transition to Python 3.",
            seeds,
            if seeds == 1 { "" } else { "s" }
        ),
        format!(
            "Of {} {} project{}, {} {} no direct dependencies blocking {} transition:",
            if seeds == 1 { "that" } else { "those" },
            seeds,
            if seeds == 1 { "" } else { "s" },
            roots,
            if roots == 1 { "has" } else { "have" },
            if roots == 1 { "its" } else { "their" },
        ),
    ];
    messages.extend(forest.lines());
    messages
}
