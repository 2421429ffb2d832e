//! 최근 학습 항목을 피하는 하루 학습 항목 선택

use std::collections::HashSet;

use rand::Rng;

use super::sampling::sample_without_replacement_with_rng;
use super::types::{Category, ContentItem, RecentIdSet, RoutineCounts, RoutinePlan, RoutinePools};

/// 최근에 보지 않은 항목을 우선하여 최대 n개 선택
///
/// 1. 최근 ID에 없는 후보가 n개 이상이면 후보에서만 추출
/// 2. 부족하면 후보 전부 + 나머지 풀에서 부족분을 추출
///
/// 결과 ID는 중복이 없고 길이는 min(n, 풀의 고유 ID 수)
pub fn select_excluding_recent<T: ContentItem + Clone>(
    pool: &[T],
    n: usize,
    recent_ids: &RecentIdSet,
) -> Vec<T> {
    select_excluding_recent_with_rng(pool, n, recent_ids, &mut rand::thread_rng())
}

/// 난수 생성기를 지정한 선택
pub fn select_excluding_recent_with_rng<T: ContentItem + Clone, R: Rng + ?Sized>(
    pool: &[T],
    n: usize,
    recent_ids: &RecentIdSet,
    rng: &mut R,
) -> Vec<T> {
    if n == 0 || pool.is_empty() {
        return Vec::new();
    }

    // 같은 ID가 여러 번 들어온 풀은 첫 항목만 사용
    let mut seen = HashSet::new();
    let pool: Vec<&T> = pool.iter().filter(|item| seen.insert(item.id())).collect();

    let candidates: Vec<&T> = pool
        .iter()
        .copied()
        .filter(|item| !recent_ids.contains(item.id()))
        .collect();

    if candidates.len() >= n {
        return sample_without_replacement_with_rng(&candidates, n, rng)
            .into_iter()
            .cloned()
            .collect();
    }

    let picked_ids: HashSet<&str> = candidates.iter().map(|item| item.id()).collect();
    let remainder: Vec<&T> = pool
        .iter()
        .copied()
        .filter(|item| !picked_ids.contains(item.id()))
        .collect();

    let shortfall = n - candidates.len();
    log::debug!(
        "새 항목 부족: 후보 {}개, 최근 항목에서 최대 {}개 보충",
        candidates.len(),
        shortfall
    );

    let mut picked: Vec<T> = candidates.into_iter().cloned().collect();
    picked.extend(
        sample_without_replacement_with_rng(&remainder, shortfall, rng)
            .into_iter()
            .cloned(),
    );
    picked
}

/// 4개 분류 각각에 대해 선택 후 ID만 남긴 학습 계획 생성
///
/// 목표 개수가 0인 분류나 빈 풀은 빈 목록
pub fn build_routine<T: ContentItem + Clone>(
    pools: &RoutinePools<T>,
    recent_ids: &RecentIdSet,
    counts: &RoutineCounts,
) -> RoutinePlan {
    build_routine_with_rng(pools, recent_ids, counts, &mut rand::thread_rng())
}

pub fn build_routine_with_rng<T: ContentItem + Clone, R: Rng + ?Sized>(
    pools: &RoutinePools<T>,
    recent_ids: &RecentIdSet,
    counts: &RoutineCounts,
    rng: &mut R,
) -> RoutinePlan {
    let mut plan = RoutinePlan::default();

    for category in Category::ALL {
        let selected = select_excluding_recent_with_rng(
            pools.get(category),
            counts.count(category),
            recent_ids,
            rng,
        );
        plan.set(
            category,
            selected.iter().map(|item| item.id().to_string()).collect(),
        );
    }

    plan
}
