//! 规约（Specification）
//!
//! 查询条件以可组合的对象表达。内存仓储据此筛选聚合，
//! SQL 仓储中对应的 `WHERE` 条件须保持同一语义。
//!
pub trait Specification<T>: Send + Sync {
    fn is_satisfied_by(&self, candidate: &T) -> bool;
}

/// 无条件（全部满足）
pub struct AnySpecification;

impl<T> Specification<T> for AnySpecification {
    fn is_satisfied_by(&self, _: &T) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;
    impl Specification<i32> for Even {
        fn is_satisfied_by(&self, n: &i32) -> bool {
            n % 2 == 0
        }
    }

    fn matching(spec: &dyn Specification<i32>, candidates: &[i32]) -> Vec<i32> {
        candidates
            .iter()
            .copied()
            .filter(|n| spec.is_satisfied_by(n))
            .collect()
    }

    #[test]
    fn filters_through_trait_objects() {
        assert_eq!(matching(&Even, &[1, 2, 3, 4]), vec![2, 4]);
        assert_eq!(matching(&AnySpecification, &[-1, 0, 7]), vec![-1, 0, 7]);
    }
}
