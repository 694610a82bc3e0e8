use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::stats::Progress;
use crate::store::TodoStore;

pub fn run(store: &TodoStore) -> Result<CmdResult> {
    let statistics = store.statistics();
    let progress = Progress::from_statistics(statistics);

    let mut result = CmdResult::default()
        .with_statistics(statistics)
        .with_progress(progress);
    result.add_message(CmdMessage::info(statistics.summary()));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{ProgressStatus, Statistics};
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn empty_store() {
        let store = TodoStore::new();
        let result = run(&store).unwrap();
        assert_eq!(result.statistics, Some(Statistics::default()));
        assert_eq!(result.progress.unwrap().status, ProgressStatus::None);
        assert_eq!(result.messages[0].content, "0/0 todos completed (0%)");
    }

    #[test]
    fn reports_counts_and_progress() {
        let store = StoreFixture::new().with_sample_todos().store;
        let result = run(&store).unwrap();
        let stats = result.statistics.unwrap();
        assert_eq!((stats.total, stats.completed, stats.pending), (5, 2, 3));
        assert_eq!(
            result.progress.unwrap().status,
            ProgressStatus::NeedsAttention
        );
    }
}
