//! 학습 기록에서 최근 학습 ID 집합 만들기

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::types::RecentIdSet;

/// 하루치 학습 기록
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyRecord {
    pub date: NaiveDate,
    /// 학습 완료 (아직 익히지 못함)
    #[serde(default)]
    pub done: Vec<String>,
    /// 이미 아는 항목
    #[serde(default, alias = "mastered")]
    pub known: Vec<String>,
}

/// 최근 기록 집계 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPolicy {
    /// 오늘 기준 며칠 전까지 볼지
    pub lookback_days: u32,
    /// 아는 항목도 제외 대상에 포함할지
    pub exclude_known: bool,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            lookback_days: 7,
            exclude_known: true,
        }
    }
}

/// `today - lookback_days ..= today` 범위 기록의 ID 합집합
///
/// 미래 날짜 기록은 무시. 기간이 날짜 범위를 넘으면 전체 과거 기록 사용
pub fn collect_recent_ids(
    records: &[StudyRecord],
    today: NaiveDate,
    policy: &HistoryPolicy,
) -> RecentIdSet {
    let since = today
        .checked_sub_signed(Duration::days(i64::from(policy.lookback_days)))
        .unwrap_or(NaiveDate::MIN);
    let mut ids = RecentIdSet::new();

    for record in records
        .iter()
        .filter(|r| r.date >= since && r.date <= today)
    {
        ids.extend(record.done.iter().cloned());
        if policy.exclude_known {
            ids.extend(record.known.iter().cloned());
        }
    }

    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(d: &str, done: &[&str], known: &[&str]) -> StudyRecord {
        StudyRecord {
            date: date(d),
            done: done.iter().map(|s| s.to_string()).collect(),
            known: known.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_lookback_window() {
        let records = vec![
            record("2024-03-10", &["today"], &[]),
            record("2024-03-03", &["edge"], &[]),
            record("2024-03-02", &["old"], &[]),
            record("2024-03-11", &["future"], &[]),
        ];
        let ids = collect_recent_ids(&records, date("2024-03-10"), &HistoryPolicy::default());

        assert!(ids.contains("today"));
        assert!(ids.contains("edge"));
        assert!(!ids.contains("old"));
        assert!(!ids.contains("future"));
    }

    #[test]
    fn test_huge_lookback_does_not_overflow() {
        let records = vec![
            record("1900-01-01", &["ancient"], &[]),
            record("2024-05-02", &["today"], &[]),
        ];
        let policy = HistoryPolicy {
            lookback_days: u32::MAX,
            ..HistoryPolicy::default()
        };
        let ids = collect_recent_ids(&records, date("2024-05-02"), &policy);
        assert!(ids.contains("ancient"));
        assert!(ids.contains("today"));

        let empty = collect_recent_ids(&[], date("2024-05-02"), &policy);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_known_policy() {
        let records = vec![record("2024-03-10", &["w1"], &["w2"])];
        let today = date("2024-03-10");

        let ids = collect_recent_ids(&records, today, &HistoryPolicy::default());
        assert_eq!(ids.len(), 2);

        let policy = HistoryPolicy {
            exclude_known: false,
            ..HistoryPolicy::default()
        };
        let ids = collect_recent_ids(&records, today, &policy);
        assert!(ids.contains("w1"));
        assert!(!ids.contains("w2"));
    }

    #[test]
    fn test_union_across_days() {
        let records = vec![
            record("2024-03-09", &["a", "b"], &[]),
            record("2024-03-10", &["b", "c"], &["d"]),
        ];
        let ids = collect_recent_ids(&records, date("2024-03-10"), &HistoryPolicy::default());
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_deserialize_mastered_alias() {
        let json = r#"{"date": "2024-03-10", "mastered": ["m1"]}"#;
        let record: StudyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.known, vec!["m1".to_string()]);
        assert!(record.done.is_empty());
    }
}
