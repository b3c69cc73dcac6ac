use super::{Compound, StoreCodec, Tag};
use crate::config::NeedsConfig;
use crate::error::DecodeError;
use crate::store::ItemUseState;

/// `{ <bucket>: { <item>: Int } }`
///
/// Empty buckets are not written.
impl StoreCodec for ItemUseState {
    fn encode(&self, _config: &NeedsConfig) -> Compound {
        self.buckets()
            .iter()
            .filter(|(_, counts)| !counts.is_empty())
            .map(|(bucket, counts)| {
                let items: Compound = counts
                    .iter()
                    .map(|(item, count)| (item.clone(), Tag::Int(i64::from(*count))))
                    .collect();
                (bucket.clone(), Tag::Compound(items))
            })
            .collect()
    }

    fn decode(tag: &Tag) -> Result<Self, DecodeError> {
        let root = tag.as_compound()?;
        let mut state = ItemUseState::new();

        for bucket in root.keys() {
            let Some(items) = root.get_compound(bucket)? else {
                continue;
            };

            let counts = state.bucket_mut(bucket);
            for item in items.keys() {
                let Some(raw) = items.get_int(item).map_err(|e| e.within(bucket))? else {
                    continue;
                };
                let count = u32::try_from(raw).map_err(|_| DecodeError::CountOutOfRange {
                    path: format!("{bucket}.{item}"),
                    value: raw,
                })?;
                counts.insert(item.to_string(), count);
            }
        }

        Ok(state)
    }
}
