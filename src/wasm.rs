//! Exports for the browser front-end.
//!
//! Marks cross the boundary as their discriminants (`0..6`) and cards as their ids (`0..9`).

use itertools::Itertools;
use js_sys::{Uint16Array, Uint8Array};
use strum::VariantArray;
use wasm_bindgen::prelude::*;

use crate::arrangement::{Arrangement, POSITIONS};
use crate::judge::judge;
use crate::mark::Mark;
use crate::pattern::PatternSet;
use crate::permutation;
use crate::solver::ArrangementSolver;
use crate::timer;

fn error(message: impl ToString) -> JsValue {
    JsValue::from_str(&message.to_string())
}

fn marks_from<const N: usize>(ids: &[u8]) -> Result<[Mark; N], JsValue> {
    if ids.len() != N {
        return Err(error(format!("expected {N} marks, got {}", ids.len())));
    }

    let mut marks = [Mark::Maru; N];
    for (mark, id) in marks.iter_mut().zip(ids) {
        *mark = *Mark::VARIANTS.get(usize::from(*id)).ok_or_else(|| error(format!("no mark has id {id}")))?;
    }
    Ok(marks)
}

/// Whether three marks are a correct selection from a layout with `warm_total` warm marks.
#[wasm_bindgen(js_name = "judgeSelection")]
pub fn judge_selection(marks: &[u8], warm_total: usize) -> Result<bool, JsValue> {
    Ok(judge(marks_from::<3>(marks)?, warm_total).correct)
}

/// Card ids of the target arrangement closest to `start` showing `targets`.
#[wasm_bindgen(js_name = "solveArrangement")]
pub fn solve_arrangement(start: &[u8], targets: &[u8]) -> Result<Uint8Array, JsValue> {
    let start = Arrangement::from_ids(start).map_err(error)?;
    let targets = marks_from::<POSITIONS>(targets)?;
    let solution = ArrangementSolver::new(&start, targets).solve().map_err(error)?;
    Ok(Uint8Array::from(&solution.arrangement.ids()[..]))
}

/// Minimal swaps from `start` to `target`, flattened as `[a0, b0, a1, b1, ...]`.
#[wasm_bindgen(js_name = "swapSequence")]
pub fn swap_sequence(start: &[u8], target: &[u8]) -> Result<Uint8Array, JsValue> {
    let swaps = permutation::swap_sequence(start, target).map_err(error)?;
    let flat = swaps.iter()
        .flat_map(|swap| [swap.0, swap.1])
        .map(|position| position as u8)
        .collect_vec();
    Ok(Uint8Array::from(&flat[..]))
}

/// Index of every valid pattern, ascending.
#[wasm_bindgen(js_name = "validPatternIndices")]
pub fn valid_pattern_indices() -> Uint16Array {
    let indices = PatternSet::enumerate().iter().map(|pattern| pattern.index()).collect_vec();
    Uint16Array::from(&indices[..])
}

/// See [`timer::format_elapsed`].
#[wasm_bindgen(js_name = "formatElapsed")]
pub fn format_elapsed(secs: f64) -> String {
    timer::format_elapsed(secs)
}
