use std::collections::{BTreeSet, HashSet};

pub type Pair = (String, String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dependency cycle detected: {}", format_cycle(.pairs))]
pub struct CycleError {
    pub pairs: Vec<Pair>,
}

pub fn sort(pairs: &[Pair]) -> Result<Vec<String>, CycleError> {
    sort_with_universe(pairs, &[])
}

pub fn sort_with_universe(pairs: &[Pair], universe: &[String]) -> Result<Vec<String>, CycleError> {
    let mut all: BTreeSet<String> = universe.iter().cloned().collect();
    for (dependency, dependent) in pairs {
        all.insert(dependency.clone());
        all.insert(dependent.clone());
    }

    let mut remaining: Vec<Pair> = pairs.to_vec();
    let mut ordered: Vec<String> = Vec::new();

    while !remaining.is_empty() {
        let blocked: HashSet<&str> = remaining
            .iter()
            .map(|(_, dependent)| dependent.as_str())
            .collect();

        // Ready nodes keep first-encounter order over the pair list.
        let mut ready: Vec<String> = Vec::new();
        let mut ready_set: HashSet<String> = HashSet::new();
        for (dependency, _) in &remaining {
            if !blocked.contains(dependency.as_str()) && ready_set.insert(dependency.clone()) {
                ready.push(dependency.clone());
            }
        }

        if ready.is_empty() {
            return Err(CycleError { pairs: remaining });
        }

        remaining.retain(|(dependency, _)| !ready_set.contains(dependency));
        ordered.extend(ready);
    }

    // Names never peeled (pure dependents and isolated universe entries)
    // follow in lexical order.
    let placed: HashSet<&str> = ordered.iter().map(String::as_str).collect();
    let leftover: Vec<String> = all
        .into_iter()
        .filter(|name| !placed.contains(name.as_str()))
        .collect();
    ordered.extend(leftover);

    Ok(ordered)
}

pub fn format_cycle(pairs: &[Pair]) -> String {
    pairs
        .iter()
        .flat_map(|(dependency, dependent)| [dependent.as_str(), dependency.as_str()])
        .collect::<Vec<_>>()
        .join(" -> ")
}
