#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::db::{ActivityKind, ActivityStore, Flag, SqliteStore, StoreError, WordStore};

    fn store_with_words() -> SqliteStore {
        let store = SqliteStore::open_in_memory().expect("in-memory store");
        WordStore::insert(&store, "apple", "りんご").unwrap();
        WordStore::insert(&store, "dog", "犬").unwrap();
        WordStore::insert(&store, "cat", "猫").unwrap();
        store
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn insert_and_counts() {
        let store = store_with_words();
        assert_eq!(store.count_all().unwrap(), 3);
        assert_eq!(store.count_is_correct().unwrap(), 0);
        assert_eq!(store.count_bookmark().unwrap(), 0);

        store.update_is_correct_flag(1, Flag::True).unwrap();
        store.update_bookmark_flag(2, Flag::True).unwrap();
        assert_eq!(store.count_is_correct().unwrap(), 1);
        assert_eq!(store.count_bookmark().unwrap(), 1);
    }

    #[test]
    fn new_words_start_unmastered_and_unbookmarked() {
        let store = store_with_words();
        let words = store.select_english_list().unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.iter().all(|w| w.is_correct == Flag::False));
        assert!(words.iter().all(|w| w.bookmark == Flag::False));
        assert_eq!(words[0].english, "apple");
        assert_eq!(words[0].japanese, "りんご");
    }

    #[test]
    fn select_learning_excludes_mastered_words() {
        let store = store_with_words();
        store.update_is_correct_flag(1, Flag::True).unwrap();

        let learning = store.select_learning().unwrap();
        assert_eq!(learning.len(), 2);
        assert!(learning.iter().all(|w| w.english != "apple"));
    }

    #[test]
    fn select_incorrect_returns_every_japanese_term() {
        let store = store_with_words();
        let pool = store.select_incorrect().unwrap();
        assert_eq!(pool, vec!["りんご", "犬", "猫"]);
    }

    #[test]
    fn select_bookmark_filters_on_flag() {
        let store = store_with_words();
        store.update_bookmark_flag(3, Flag::True).unwrap();

        let bookmarked = store.select_bookmark().unwrap();
        assert_eq!(bookmarked.len(), 1);
        assert_eq!(bookmarked[0].english, "cat");
    }

    #[test]
    fn updates_return_the_affected_english_term() {
        let store = store_with_words();
        assert_eq!(store.update_is_correct_flag(1, Flag::True).unwrap(), "apple");
        assert_eq!(store.update_bookmark_flag(2, Flag::True).unwrap(), "dog");
    }

    #[test]
    fn update_missing_pkey_is_not_found() {
        let store = store_with_words();
        let err = store.update_is_correct_flag(99, Flag::True).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(99)));
    }

    #[test]
    fn delete_resolves_term_then_removes_the_row() {
        let store = store_with_words();
        assert_eq!(store.delete(2).unwrap(), "dog");
        assert_eq!(store.count_all().unwrap(), 2);

        let err = store.delete(2).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(2)));
    }

    #[test]
    fn activity_log_is_append_only_and_ordered_desc() {
        let store = store_with_words();
        let today = date("2020-10-01");
        for i in 0..6 {
            let detail = format!("entry {i}");
            ActivityStore::insert(&store, today, ActivityKind::Registered, &detail).unwrap();
        }

        let recent = store.select_activity_order_by_desc_limit_5().unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].detail, "entry 5");
        assert_eq!(recent[4].detail, "entry 1");

        let all = store.select_all().unwrap();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].detail, "entry 5");
        assert_eq!(all[0].kind, ActivityKind::Registered.code());
        assert_eq!(all[0].date, "2020-10-01");
    }

    #[test]
    fn learning_counts_group_mastered_activity_by_date() {
        let store = store_with_words();
        let log = |d: &str, kind: ActivityKind, detail: &str| {
            ActivityStore::insert(&store, date(d), kind, detail).unwrap();
        };
        log("2020-10-01", ActivityKind::Mastered, "a");
        log("2020-10-01", ActivityKind::Mastered, "b");
        log("2020-10-03", ActivityKind::Mastered, "c");
        // Other categories never show up in the learning log.
        log("2020-10-02", ActivityKind::Registered, "d");
        // Out of range.
        log("2020-09-01", ActivityKind::Mastered, "e");

        let counts = store
            .select_count_learning_date(date("2020-09-27"), date("2020-10-04"))
            .unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].date, "2020-10-01");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].date, "2020-10-03");
        assert_eq!(counts[1].count, 1);
    }
}
