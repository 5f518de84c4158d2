use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

/// Full ordered listing plus count. Pure query.
pub fn run(store: &RecordStore) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.attach_listing(store);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn lists_in_insertion_order() {
        let store = StoreFixture::new().with_employees(3).store;
        let result = run(&store).unwrap();

        assert_eq!(result.count, 3);
        let ids: Vec<_> = result.listed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["E1", "E2", "E3"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = RecordStore::new();
        let result = run(&store).unwrap();
        assert_eq!(result.count, 0);
        assert!(result.listed.is_empty());
    }
}
