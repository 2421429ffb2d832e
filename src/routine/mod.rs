//! 하루 학습 루틴 선택
//!
//! 분류별 항목 풀과 최근 학습 ID를 받아 오늘 공부할 항목을 고릅니다.
//! 최근에 보지 않은 항목을 우선하고, 부족하면 전체 풀에서 보충합니다.
//!
//! ```
//! use koyin::routine::{build_routine, RecentIdSet, RoutineCounts, RoutinePools, StudyItem};
//!
//! let pools = RoutinePools {
//!     words: vec![StudyItem::new("w1"), StudyItem::new("w2")],
//!     ..RoutinePools::default()
//! };
//! let recent: RecentIdSet = ["w1".to_string()].into_iter().collect();
//! let plan = build_routine(&pools, &recent, &RoutineCounts::new(1, 0, 0, 0));
//! assert_eq!(plan.words, vec!["w2".to_string()]);
//! assert!(plan.sentences.is_empty());
//! ```

mod history;
mod sampling;
mod selector;
mod types;

pub use history::{collect_recent_ids, HistoryPolicy, StudyRecord};
pub use sampling::{sample_without_replacement, sample_without_replacement_with_rng};
pub use selector::{
    build_routine, build_routine_with_rng, select_excluding_recent,
    select_excluding_recent_with_rng,
};
pub use types::{
    Category, ContentItem, RecentIdSet, RoutineCounts, RoutinePlan, RoutinePools, StudyItem,
};
