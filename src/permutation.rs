//! Cycle structure of the permutation between two orderings of the same items.
//!
//! Sorting one ordering into another by transpositions takes exactly `n - c` swaps,
//! where `c` counts the cycles (fixed points included) of the permutation relating them.

use std::collections::HashMap;
use std::hash::Hash;

use unordered_pair::UnorderedPair;

/// An exchange of the items at two positions.
pub type Swap = UnorderedPair<usize>;

/// Reasons two orderings cannot be related by a permutation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PermutationError {
    /// The lengths of `start` and `target`.
    #[error("orderings have different lengths ({0} and {1})")]
    LengthMismatch(usize, usize),
    /// The item at this position of `target` already occurs earlier in `target`.
    #[error("target repeats its item at position {0}")]
    DuplicateInTarget(usize),
    /// The item at this position of `start` does not occur in `target`, or is a repeat within `start`.
    #[error("item at position {0} has no unique place in the target")]
    NotAPermutation(usize),
}

/// Map every position in `start` to the position its item holds in `target`.
fn destinations<T>(start: &[T], target: &[T]) -> Result<Vec<usize>, PermutationError>
where
    T: Eq + Hash,
{
    if start.len() != target.len() {
        return Err(PermutationError::LengthMismatch(start.len(), target.len()));
    }

    let mut target_index = HashMap::with_capacity(target.len());
    for (index, item) in target.iter().enumerate() {
        if target_index.insert(item, index).is_some() {
            return Err(PermutationError::DuplicateInTarget(index));
        }
    }

    let mut taken = vec![false; target.len()];
    let mut dest = Vec::with_capacity(start.len());
    for (index, item) in start.iter().enumerate() {
        match target_index.get(item) {
            Some(d) if !taken[*d] => {
                taken[*d] = true;
                dest.push(*d);
            }
            _ => return Err(PermutationError::NotAPermutation(index)),
        }
    }

    Ok(dest)
}

/// Decompose the permutation taking `start` to `target` into disjoint cycles of positions.
///
/// Each cycle begins at its lowest position and follows "position in `start`" to
/// "position of the same item in `target`". Fixed points are reported as cycles of length 1.
pub fn cycles<T>(start: &[T], target: &[T]) -> Result<Vec<Vec<usize>>, PermutationError>
where
    T: Eq + Hash,
{
    Ok(cycles_of(&destinations(start, target)?))
}

/// Cycles of the permutation `position -> dest[position]`; `dest` must be a permutation of its indices.
pub(crate) fn cycles_of(dest: &[usize]) -> Vec<Vec<usize>> {
    let mut seen = vec![false; dest.len()];
    let mut out = Vec::new();

    for first in 0..dest.len() {
        let mut cycle = Vec::new();
        let mut cur = first;
        while !seen[cur] {
            seen[cur] = true;
            cycle.push(cur);
            cur = dest[cur];
        }
        if !cycle.is_empty() {
            out.push(cycle);
        }
    }

    out
}

/// The fewest transpositions turning `start` into `target`.
pub fn swap_count<T>(start: &[T], target: &[T]) -> Result<usize, PermutationError>
where
    T: Eq + Hash,
{
    Ok(start.len() - cycles(start, target)?.len())
}

/// An explicit minimal sequence of swaps turning `start` into `target`.
///
/// Positions are fixed left to right: whenever the item at position `i` is wrong it is swapped with
/// the position currently holding the item `target` wants there. Every swap settles at least one
/// item and the last swap of each cycle settles two, so the length equals [`swap_count`].
pub fn swap_sequence<T>(start: &[T], target: &[T]) -> Result<Vec<Swap>, PermutationError>
where
    T: Eq + Hash + Clone,
{
    destinations(start, target)?;
    Ok(settle(start, target))
}

/// [`swap_sequence`] for orderings already known to hold the same items.
pub(crate) fn settle<T>(start: &[T], target: &[T]) -> Vec<Swap>
where
    T: Eq + Hash + Clone,
{
    let mut cur = start.to_vec();
    let mut position_of: HashMap<T, usize> = cur.iter()
        .cloned()
        .enumerate()
        .map(|(index, item)| (item, index))
        .collect();
    let mut swaps = Vec::new();

    for i in 0..cur.len() {
        if cur[i] == target[i] {
            continue;
        }

        let j = position_of[&target[i]];
        swaps.push(UnorderedPair(i, j));
        cur.swap(i, j);
        position_of.insert(cur[i].clone(), i);
        position_of.insert(cur[j].clone(), j);
    }

    swaps
}

/// Every state visited while applying `swaps` to `start`, beginning with `start` itself.
pub fn replay<T>(start: &[T], swaps: &[Swap]) -> Vec<Vec<T>>
where
    T: Clone,
{
    let mut states = Vec::with_capacity(swaps.len() + 1);
    let mut cur = start.to_vec();
    states.push(cur.clone());
    for UnorderedPair(a, b) in swaps {
        cur.swap(*a, *b);
        states.push(cur.clone());
    }

    states
}
