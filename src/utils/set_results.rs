use crate::models::matches::{MatchStatistic, SetResult};

const SET_KEY_PREFIX: &str = "set";

/// Parse a statistic key such as `set2` or `Set 3` into its set number.
pub fn parse_set_number(stat_key: &str) -> Option<i32> {
    let key = stat_key.trim().to_lowercase();
    let suffix = key.strip_prefix(SET_KEY_PREFIX)?;
    suffix.trim().parse::<i32>().ok()
}

/// Parse a statistic value such as `6-4` into the two athletes' scores.
pub fn parse_set_score(stat_value: &str) -> Option<(i32, i32)> {
    let (score1, score2) = stat_value.split_once('-')?;
    let score1 = score1.trim().parse::<i32>().ok()?;
    let score2 = score2.trim().parse::<i32>().ok()?;
    Some((score1, score2))
}

/// Derive per-set results from the key/value statistics of a match
///
/// Rows whose key is not `set<N>` or whose value is not `<score1>-<score2>`
/// are skipped. The result is sorted by set number; rows sharing a set
/// number are all kept, in their original order.
///
/// # Examples
/// ```
/// use blindstat_backend::models::matches::MatchStatistic;
/// use blindstat_backend::utils::set_results::parse_set_results;
///
/// let stat = |id: i32, key: &str, value: &str| MatchStatistic {
///     id,
///     athlete_id: None,
///     stat_key: Some(key.to_string()),
///     stat_value: Some(value.to_string()),
/// };
/// let results = parse_set_results(&[stat(1, "set2", "3-6"), stat(2, "Set1", "6-4")]);
/// assert_eq!(results[0].set_number, 1);
/// assert_eq!(results[1].score2, 6);
/// ```
pub fn parse_set_results(statistics: &[MatchStatistic]) -> Vec<SetResult> {
    let mut set_results: Vec<SetResult> = statistics
        .iter()
        .filter_map(|stat| {
            let set_number = parse_set_number(stat.stat_key.as_deref()?)?;
            let (score1, score2) = parse_set_score(stat.stat_value.as_deref()?)?;
            Some(SetResult { set_number, score1, score2 })
        })
        .collect();

    set_results.sort_by_key(|result| result.set_number);
    set_results
}
