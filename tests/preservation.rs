//! Byte-exact preservation around the patched span

use notification_patcher::DEDUPLICATION;
use proptest::prelude::*;

proptest! {
    #[test]
    fn surrounding_text_is_untouched(prefix in "[ -~\n]{0,200}", suffix in "[ -~\n]{0,200}") {
        let content = format!("{prefix}{}{suffix}", DEDUPLICATION.search);
        let patched = DEDUPLICATION.apply_to_str(&content).unwrap().unwrap();

        prop_assert_eq!(&patched, &format!("{prefix}{}{suffix}", DEDUPLICATION.replacement));
        prop_assert_eq!(DEDUPLICATION.apply_to_str(&patched).unwrap(), None);
    }

    #[test]
    fn text_without_search_block_is_never_changed(content in "[ -~\n]{0,400}") {
        prop_assert_eq!(DEDUPLICATION.apply_to_str(&content).unwrap(), None);
    }
}
