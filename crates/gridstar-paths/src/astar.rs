use std::cmp::Ordering;
use std::collections::HashMap;

use gridstar_core::graph::{edge_count, node_count};
use gridstar_core::{Graph, Point};

use crate::SearchError;
use crate::distance::{Heuristic, decode};
use crate::heap::MinHeap;
use crate::options::SearchOptions;

/// Cost of moving between two adjacent nodes.
const STEP_COST: f64 = 1.0;

/// Marks the first link of a trail.
const NO_LINK: usize = usize::MAX;

/// How costs are accumulated while relaxing edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CostModel {
    /// Textbook A*: the ledger holds the true path cost `g` and the open set
    /// is ordered by `g + h`. The search stops once the target is popped,
    /// and the returned cost is the number of moves.
    #[default]
    Separated,
    /// The heuristic is folded into the stored cost at every relaxation:
    /// a neighbor's candidate cost is the popped priority plus one plus
    /// `h(neighbor, target)`. The search stops as soon as the target has a
    /// finite cost. Finds a low-cost path, not necessarily the shortest.
    Accumulated,
}

/// Outcome of a search.
///
/// When the target is unreachable `cost` is infinite and `path` holds only
/// the target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub cost: f64,
    /// Node keys from start to target, both inclusive.
    pub path: Vec<String>,
}

impl PathResult {
    /// Whether a path to the target was found.
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }

    /// Number of moves along the path.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A* search over a [`Graph`] with a configurable heuristic and
/// [`CostModel`].
///
/// `PathFinder` holds configuration only. Every call to
/// [`search`](Self::search) builds and drops its own ledger and open set, so
/// one finder can be reused against any number of graphs.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    heuristic: Heuristic,
    cost_model: CostModel,
}

impl PathFinder {
    /// Create a finder using `heuristic` and the default cost model.
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            cost_model: CostModel::default(),
        }
    }

    /// Create a finder from configuration, validating the heuristic name.
    pub fn from_options(options: &SearchOptions) -> Result<Self, SearchError> {
        Ok(Self {
            heuristic: Heuristic::from_name(&options.heuristic)?,
            cost_model: options.cost_model,
        })
    }

    /// Use `cost_model` for subsequent searches.
    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    pub fn heuristic(&self) -> &Heuristic {
        &self.heuristic
    }

    pub fn cost_model(&self) -> CostModel {
        self.cost_model
    }

    /// Find a path from `start` to `target`.
    ///
    /// Fails with [`SearchError::UnknownNode`] if either endpoint is not in
    /// `graph`, before any search work is done. An unreachable target is
    /// reported through [`PathResult::is_reachable`], not as an error.
    pub fn search(&self, graph: &Graph, start: &str, target: &str) -> Result<PathResult, SearchError> {
        check_endpoints(graph, start, target)?;
        log::debug!(
            "astar: {start} -> {target} over {} nodes, {} edges ({}, {:?})",
            node_count(graph),
            edge_count(graph),
            self.heuristic.name(),
            self.cost_model
        );

        let mut ledger = Ledger::new(graph)?;
        let start_idx = ledger.index_of(start)?;
        let target_idx = ledger.index_of(target)?;
        ledger.entries[start_idx].cost = 0.0;

        let expanded = match self.cost_model {
            CostModel::Separated => self.run_separated(&mut ledger, start_idx, target_idx)?,
            CostModel::Accumulated => self.run_accumulated(&mut ledger, start_idx, target_idx)?,
        };

        let result = ledger.result(target_idx);
        if result.is_reachable() {
            log::debug!(
                "astar: reached {target} in {} moves, cost {}, {expanded} expansions",
                result.moves(),
                result.cost
            );
        } else {
            log::debug!("astar: {target} unreachable from {start} after {expanded} expansions");
        }
        Ok(result)
    }

    fn run_separated(
        &self,
        ledger: &mut Ledger<'_>,
        start: usize,
        target: usize,
    ) -> Result<usize, SearchError> {
        let goal = ledger.points[target];
        let mut open = MinHeap::new(by_priority);
        open.insert(Open {
            priority: self.heuristic.estimate(ledger.points[start], goal),
            cost: 0.0,
            node: start,
        });

        let mut expanded = 0;
        while let Ok(current) = open.extract() {
            // Skip entries superseded by a cheaper relaxation.
            if current.cost > ledger.entries[current.node].cost {
                continue;
            }
            if current.node == target {
                break;
            }
            expanded += 1;
            log::trace!("astar: expand {} (g = {})", ledger.keys[current.node], current.cost);

            for neighbor in ledger.neighbors(current.node) {
                let ni = ledger.index_of(neighbor)?;
                let candidate = current.cost + STEP_COST;
                if candidate < ledger.entries[ni].cost {
                    ledger.relax(current.node, ni, candidate);
                    open.insert(Open {
                        priority: candidate + self.heuristic.estimate(ledger.points[ni], goal),
                        cost: candidate,
                        node: ni,
                    });
                }
            }
        }
        Ok(expanded)
    }

    fn run_accumulated(
        &self,
        ledger: &mut Ledger<'_>,
        start: usize,
        target: usize,
    ) -> Result<usize, SearchError> {
        let goal = ledger.points[target];
        let mut open = MinHeap::new(by_priority);
        open.insert(Open {
            priority: 0.0,
            cost: 0.0,
            node: start,
        });

        let mut expanded = 0;
        while ledger.entries[target].cost.is_infinite() {
            let Ok(current) = open.extract() else {
                break;
            };
            expanded += 1;
            log::trace!("astar: expand {} (d = {})", ledger.keys[current.node], current.cost);

            for neighbor in ledger.neighbors(current.node) {
                let ni = ledger.index_of(neighbor)?;
                let candidate =
                    current.cost + STEP_COST + self.heuristic.estimate(ledger.points[ni], goal);
                if candidate < ledger.entries[ni].cost {
                    ledger.relax(current.node, ni, candidate);
                    open.insert(Open {
                        priority: candidate,
                        cost: candidate,
                        node: ni,
                    });
                }
            }
        }
        Ok(expanded)
    }
}

/// Find a path from `start` to `target` with the default cost model.
///
/// `heuristic` names a built-in heuristic and defaults to `"manhattan"`.
/// Endpoints are checked before the heuristic name.
pub fn search(
    graph: &Graph,
    start: &str,
    target: &str,
    heuristic: Option<&str>,
) -> Result<PathResult, SearchError> {
    check_endpoints(graph, start, target)?;
    let heuristic = match heuristic {
        Some(name) => Heuristic::from_name(name)?,
        None => Heuristic::default(),
    };
    PathFinder::new(heuristic).search(graph, start, target)
}

fn check_endpoints(graph: &Graph, start: &str, target: &str) -> Result<(), SearchError> {
    for key in [start, target] {
        if !graph.contains_key(key) {
            return Err(SearchError::UnknownNode(key.to_string()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Open set entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Open {
    priority: f64,
    cost: f64,
    node: usize,
}

fn by_priority(a: &Open, b: &Open) -> Ordering {
    a.priority.total_cmp(&b.priority)
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// Best known cost and trail for one node.
#[derive(Debug, Clone, Copy)]
struct Entry {
    cost: f64,
    trail: usize,
}

/// One link of a path: `node`, reached from the trail ending at `prev`.
///
/// Links are never modified once pushed, so a trail index stays a valid
/// snapshot of the path it was recorded with.
#[derive(Debug, Clone, Copy)]
struct Link {
    node: usize,
    prev: usize,
}

/// Per-search table from node to best known `(cost, path)`.
struct Ledger<'g> {
    index: HashMap<&'g str, usize>,
    keys: Vec<&'g str>,
    points: Vec<Point>,
    adjacency: Vec<&'g [String]>,
    entries: Vec<Entry>,
    links: Vec<Link>,
}

impl<'g> Ledger<'g> {
    /// Every node starts at `(infinity, [node])`.
    fn new(graph: &'g Graph) -> Result<Self, SearchError> {
        let n = graph.len();
        let mut ledger = Self {
            index: HashMap::with_capacity(n),
            keys: Vec::with_capacity(n),
            points: Vec::with_capacity(n),
            adjacency: Vec::with_capacity(n),
            entries: Vec::with_capacity(n),
            links: Vec::with_capacity(n),
        };
        for (i, (key, neighbors)) in graph.iter().enumerate() {
            ledger.index.insert(key.as_str(), i);
            ledger.keys.push(key.as_str());
            ledger.points.push(decode(key)?);
            ledger.adjacency.push(neighbors.as_slice());
            ledger.entries.push(Entry {
                cost: f64::INFINITY,
                trail: i,
            });
            ledger.links.push(Link {
                node: i,
                prev: NO_LINK,
            });
        }
        Ok(ledger)
    }

    fn index_of(&self, key: &str) -> Result<usize, SearchError> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| SearchError::UnknownNode(key.to_string()))
    }

    fn neighbors(&self, node: usize) -> &'g [String] {
        self.adjacency[node]
    }

    /// Record `cost` and the path "`from`'s path + `to`" for `to`.
    fn relax(&mut self, from: usize, to: usize, cost: f64) {
        self.links.push(Link {
            node: to,
            prev: self.entries[from].trail,
        });
        self.entries[to] = Entry {
            cost,
            trail: self.links.len() - 1,
        };
    }

    fn result(&self, node: usize) -> PathResult {
        let mut path = Vec::new();
        let mut at = self.entries[node].trail;
        while at != NO_LINK {
            let link = self.links[at];
            path.push(self.keys[link.node].to_string());
            at = link.prev;
        }
        path.reverse();
        PathResult {
            cost: self.entries[node].cost,
            path,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cost_model_uses_snake_case() {
        let json = serde_json::to_string(&CostModel::Accumulated).unwrap();
        assert_eq!(json, "\"accumulated\"");
        let back: CostModel = serde_json::from_str("\"separated\"").unwrap();
        assert_eq!(back, CostModel::Separated);
    }

    #[test]
    fn path_result_round_trip() {
        let result = PathResult {
            cost: 2.0,
            path: vec!["0,0".to_string(), "1,0".to_string(), "1,1".to_string()],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
