use super::canonical::CanonicalKey;
use super::deal::Deal;
use super::permutation::Permutation;

/// Isomorphism identifies a deal up to any relabeling of suits.
///
/// It is the least CanonicalKey over all 24 suit permutations of the deal,
/// so two deals share an Isomorphism exactly when some relabeling carries
/// one onto the other. Every such pair has identical hold EVs up to the
/// positional correspondence given by [`Permutation::align`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Isomorphism(CanonicalKey);

impl Isomorphism {
    pub fn key(&self) -> CanonicalKey {
        self.0
    }
}

impl From<&Deal> for Isomorphism {
    fn from(deal: &Deal) -> Self {
        Self(
            Permutation::exhaust()
                .iter()
                .map(|p| CanonicalKey::from(&p.permute(deal)))
                .min()
                .unwrap_or_else(|| CanonicalKey::from(deal)),
        )
    }
}

impl std::fmt::Display for Isomorphism {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn invariant_under_relabeling() {
        let deal = Deal::random();
        let iso = Isomorphism::from(&deal);
        Permutation::exhaust()
            .into_iter()
            .map(|p| p.permute(&deal))
            .for_each(|image| assert_eq!(iso, Isomorphism::from(&image)));
    }

    #[test]
    fn invariant_under_order() {
        let a = Deal::try_from("Ks 2h Jd 2s 7c").unwrap();
        let b = Deal::try_from("2h 2s 7c Jd Ks").unwrap();
        assert_eq!(Isomorphism::from(&a), Isomorphism::from(&b));
    }

    #[test]
    fn joins_split_keys() {
        let a = Deal::try_from("2h 2d 3h 4c 5s").unwrap();
        let b = Deal::try_from("2h 2d 3d 4c 5s").unwrap();
        assert_eq!(Isomorphism::from(&a), Isomorphism::from(&b));
    }

    #[test]
    fn separates_distinct_patterns() {
        let flush = Deal::try_from("2s 5s 7s Js Ks").unwrap();
        let broken = Deal::try_from("2s 5s 7s Js Kh").unwrap();
        assert_ne!(Isomorphism::from(&flush), Isomorphism::from(&broken));
    }

    #[test]
    fn equal_iff_related() {
        let a = Deal::random();
        let b = Deal::random();
        assert_eq!(
            Isomorphism::from(&a) == Isomorphism::from(&b),
            Permutation::between(&a, &b).is_some()
        );
    }
}
