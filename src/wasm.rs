//! JavaScript bindings for browser hosts.
//!
//! The roster crosses the boundary as the same JSON shape the ingestion
//! layer produces from its spreadsheet import: an array of
//! `{ name, gender }` objects. Groups come back as an array of arrays of
//! the same objects, in group index order.

use crate::partition::{CompositionMode, PartitionConfig, PartitionRunner};
use crate::roster::Roster;
use wasm_bindgen::prelude::*;

/// Partitions a roster into `group_count` groups.
///
/// `mode` is one of `"any"`, `"male-only"`, `"female-only"`,
/// `"balanced-mixed"`. Anything else is rejected; there is no fallback
/// mode.
///
/// Pass a `seed` to reproduce a partition exactly; `null`/`undefined`
/// draws a fresh one.
#[wasm_bindgen]
pub fn partition_roster(
    people: JsValue,
    group_count: usize,
    mode: &str,
    seed: Option<u64>,
) -> Result<JsValue, JsValue> {
    let roster: Roster =
        serde_wasm_bindgen::from_value(people).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let composition = match mode {
        "any" => CompositionMode::Any,
        "male-only" => CompositionMode::MaleOnly,
        "female-only" => CompositionMode::FemaleOnly,
        "balanced-mixed" => CompositionMode::BalancedMixed,
        other => {
            return Err(JsValue::from_str(&format!(
                "unrecognized composition mode: {other:?}"
            )))
        }
    };

    let mut config = PartitionConfig::new(group_count).with_composition(composition);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let groups = PartitionRunner::run(&roster, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&groups).map_err(|e| JsValue::from_str(&e.to_string()))
}
