use super::{Compound, StoreCodec, Tag};
use crate::config::NeedsConfig;
use crate::error::DecodeError;
use crate::store::NeedState;

/// ```text
/// { <need>: { "current": Double,
///             "levels": { <level>: { "lastAdjustment": Double } } } }
/// ```
///
/// A need that only carries adjustments is written without `current`. Older
/// saves stored each need as a bare `Double`; that form is still accepted on
/// read as the need's current value.
impl StoreCodec for NeedState {
    fn encode(&self, config: &NeedsConfig) -> Compound {
        let mut root = Compound::new();

        for (need, value) in self.values() {
            let mut node = Compound::new();
            node.put(NeedsConfig::CURRENT_KEY, *value);
            root.put(need.clone(), node);
        }

        for (need, levels) in self.adjustments() {
            let mut level_nodes = Compound::new();
            for (level, adjustment) in levels {
                if *adjustment == 0.0 && !config.persist_zero_adjustments {
                    continue;
                }
                let mut level_node = Compound::new();
                level_node.put(NeedsConfig::LAST_ADJUSTMENT_KEY, *adjustment);
                level_nodes.put(level.clone(), level_node);
            }
            if level_nodes.is_empty() {
                continue;
            }

            let mut node = match root.remove(need) {
                Some(Tag::Compound(existing)) => existing,
                _ => Compound::new(),
            };
            node.put(NeedsConfig::LEVELS_KEY, level_nodes);
            root.put(need.clone(), node);
        }

        root
    }

    fn decode(tag: &Tag) -> Result<Self, DecodeError> {
        let root = tag.as_compound()?;
        let mut state = NeedState::new();

        for (need, node) in root.iter() {
            let node = match node {
                Tag::Compound(node) => node,
                Tag::Double(legacy) => {
                    state.set(need, *legacy);
                    continue;
                }
                other => {
                    return Err(DecodeError::NotACompound {
                        path: need.to_string(),
                        found: other.kind(),
                    });
                }
            };

            decode_need(&mut state, need, node).map_err(|e| e.within(need))?;
        }

        Ok(state)
    }
}

fn decode_need(state: &mut NeedState, need: &str, node: &Compound) -> Result<(), DecodeError> {
    if let Some(current) = node.get_double(NeedsConfig::CURRENT_KEY)? {
        state.set(need, current);
    }

    let Some(levels) = node.get_compound(NeedsConfig::LEVELS_KEY)? else {
        return Ok(());
    };

    for level in levels.keys() {
        let level_node = levels
            .get_compound(level)
            .map_err(|e| e.within(NeedsConfig::LEVELS_KEY))?;
        let Some(level_node) = level_node else {
            continue;
        };

        let adjustment = level_node
            .get_double(NeedsConfig::LAST_ADJUSTMENT_KEY)
            .map_err(|e| e.within(level).within(NeedsConfig::LEVELS_KEY))?;
        state.store_adjustment(need, level, adjustment.unwrap_or(0.0));
    }

    Ok(())
}
