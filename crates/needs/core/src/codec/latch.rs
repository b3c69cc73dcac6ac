use super::{Compound, StoreCodec, Tag};
use crate::config::NeedsConfig;
use crate::error::DecodeError;
use crate::store::LatchState;

/// `{ <key>: Bool }`
impl StoreCodec for LatchState {
    fn encode(&self, _config: &NeedsConfig) -> Compound {
        self.values()
            .iter()
            .map(|(key, value)| (key.clone(), Tag::Bool(*value)))
            .collect()
    }

    fn decode(tag: &Tag) -> Result<Self, DecodeError> {
        let root = tag.as_compound()?;
        let mut state = LatchState::new();

        for key in root.keys() {
            if let Some(value) = root.get_bool(key)? {
                state.set(key, value);
            }
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::TagKind;

    #[test]
    fn encodes_one_bool_leaf_per_key() {
        let mut state = LatchState::new();
        state.set("seen_tutorial", true);
        state.set("", false);

        let tree = state.encode(&NeedsConfig::default());

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get_bool("seen_tutorial"), Ok(Some(true)));
        assert_eq!(tree.get_bool(""), Ok(Some(false)));
    }

    #[test]
    fn round_trips_through_the_tree() {
        let mut state = LatchState::new();
        state.set("a", true);
        state.set("b", false);

        let tree = Tag::Compound(state.encode(&NeedsConfig::default()));
        let decoded = LatchState::decode(&tree).unwrap();

        assert_eq!(decoded, state);
    }

    #[test]
    fn rejects_scalar_root() {
        let err = LatchState::decode(&Tag::Bool(true)).unwrap_err();
        assert!(matches!(err, DecodeError::NotACompound { found: TagKind::Bool, .. }));
    }

    #[test]
    fn rejects_non_bool_leaf() {
        let mut tree = Compound::new();
        tree.put("a", true);
        tree.put("b", 1_i64);

        let err = LatchState::decode(&Tag::Compound(tree)).unwrap_err();
        assert_eq!(err.path(), "b");
    }
}
