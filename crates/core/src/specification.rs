//! Specification predicates: typed, ahead-of-time eligibility rules.
//!
//! A specification replaces an interpreted filter expression with a plain
//! object that answers a yes/no question about a candidate. Repositories
//! accept specifications to return the eligible subset of their records.

/// A typed predicate over candidates of type `T`.
pub trait Specification<T>: Send + Sync {
    fn is_satisfied_by(&self, candidate: &T) -> bool;
}

impl<T, S> Specification<T> for &S
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NonEmpty;

    impl Specification<String> for NonEmpty {
        fn is_satisfied_by(&self, candidate: &String) -> bool {
            !candidate.is_empty()
        }
    }

    #[test]
    fn predicate_answers_per_candidate() {
        assert!(NonEmpty.is_satisfied_by(&"x".to_string()));
        assert!(!NonEmpty.is_satisfied_by(&String::new()));
    }

    #[test]
    fn references_delegate() {
        let spec: &dyn Specification<String> = &NonEmpty;
        assert!(spec.is_satisfied_by(&"x".to_string()));
    }
}
