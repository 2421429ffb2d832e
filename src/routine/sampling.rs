//! 비복원 무작위 추출

use rand::seq::SliceRandom;
use rand::Rng;

/// 풀에서 최대 n개를 무작위로 추출
///
/// Fisher–Yates 셔플 후 앞쪽 n개. n이 풀 크기 이상이면 전체 순열.
pub fn sample_without_replacement<T: Clone>(pool: &[T], n: usize) -> Vec<T> {
    sample_without_replacement_with_rng(pool, n, &mut rand::thread_rng())
}

/// 난수 생성기를 지정한 추출
pub fn sample_without_replacement_with_rng<T: Clone, R: Rng + ?Sized>(
    pool: &[T],
    n: usize,
    rng: &mut R,
) -> Vec<T> {
    if pool.is_empty() || n == 0 {
        return Vec::new();
    }

    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(n);
    shuffled
}
