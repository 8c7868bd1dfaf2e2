//! Blocker chain resolution.
//!
//! One breadth-first search per seed over the dependency graph the oracle
//! describes. Compatible projects are expanded into their dependencies; the
//! first incompatible project encountered terminates the search and names
//! the seed's shortest blocker chain. A seed whose frontier drains without
//! hitting an incompatible project is transitively ready and contributes
//! nothing.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::error::Result;
use crate::oracle::Oracle;
use crate::project::ProjectName;

/// Shortest dependency path from a requested project to the first
/// incompatible project reachable from it.
///
/// The first element is the seed, the last is the blocking project, and
/// every adjacent pair is a direct-dependency edge. A seed that is itself
/// incompatible yields a single-element chain. Chains never repeat a
/// project.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Chain(Vec<ProjectName>);

impl Chain {
    /// Build a chain from a seed-first path.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty; a chain always contains its seed.
    pub fn new(path: Vec<ProjectName>) -> Self {
        assert!(!path.is_empty(), "a chain must contain at least its seed");
        Self(path)
    }

    /// The requested project this chain starts from.
    pub fn seed(&self) -> &ProjectName {
        &self.0[0]
    }

    /// The incompatible project the chain terminates in.
    pub fn blocker(&self) -> &ProjectName {
        self.0.last().expect("chains are never empty")
    }

    /// All hops, seed first.
    pub fn projects(&self) -> &[ProjectName] {
        &self.0
    }
}

/// Resolves seeds to blocker chains through an oracle.
pub struct Resolver<'a> {
    oracle: &'a dyn Oracle,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over the given oracle.
    pub fn new(oracle: &'a dyn Oracle) -> Self {
        Self { oracle }
    }

    /// Find the shortest blocker chain for every seed.
    ///
    /// Seeds whose entire dependency tree already runs on Python 3 are
    /// omitted. The result holds at most one chain per seed, ordered by
    /// seed name. Any oracle failure aborts the whole resolution.
    pub fn resolve(&self, seeds: &BTreeSet<ProjectName>) -> Result<Vec<Chain>> {
        let mut chains = Vec::new();
        for seed in seeds {
            if let Some(chain) = self.resolve_seed(seed)? {
                chains.push(chain);
            }
        }
        Ok(chains)
    }

    /// Breadth-first search from one seed to its nearest incompatible
    /// project, if any.
    ///
    /// Dependencies are expanded in oracle-reported order, so ties at equal
    /// depth resolve to the first-listed dependency. The visited set guards
    /// against dependency cycles.
    fn resolve_seed(&self, seed: &ProjectName) -> Result<Option<Chain>> {
        let mut frontier = VecDeque::from([seed.clone()]);
        let mut visited = HashSet::from([seed.clone()]);
        let mut parents: HashMap<ProjectName, ProjectName> = HashMap::new();

        while let Some(current) = frontier.pop_front() {
            let report = self.oracle.query(&current)?;
            if !report.compatible {
                debug!("{seed} is blocked by {current}");
                return Ok(Some(backtrack(current, &parents)));
            }
            for dep in report.dependencies {
                if visited.insert(dep.clone()) {
                    parents.insert(dep.clone(), current.clone());
                    frontier.push_back(dep);
                }
            }
        }

        debug!("{seed} and its dependencies all run on Python 3");
        Ok(None)
    }
}

/// Rebuild the seed-to-blocker path from BFS parent links.
fn backtrack(blocker: ProjectName, parents: &HashMap<ProjectName, ProjectName>) -> Chain {
    let mut path = vec![blocker];
    while let Some(parent) = parents.get(path.last().expect("path starts non-empty")) {
        path.push(parent.clone());
    }
    path.reverse();
    Chain::new(path)
}
