use geo_traits::CoordTrait;

/// Ordinate equality where the null-ordinate sentinel equals itself.
#[inline]
pub(crate) fn ordinate_eq(left: f64, right: f64) -> bool {
    left == right || (left.is_nan() && right.is_nan())
}

pub(crate) fn ordinates_eq(left: &[f64], right: &[f64]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| ordinate_eq(*l, *r))
}

pub(crate) fn optional_ordinates_eq(left: Option<&[f64]>, right: Option<&[f64]>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => ordinates_eq(left, right),
        (None, None) => true,
        _ => false,
    }
}

pub(crate) fn coord_eq(left: &impl CoordTrait<T = f64>, right: &impl CoordTrait<T = f64>) -> bool {
    let left_dim = left.dim();
    if left_dim != right.dim() {
        return false;
    }

    (0..left_dim.size()).all(|n| ordinate_eq(left.nth_or_panic(n), right.nth_or_panic(n)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NULL_ORDINATE;

    #[test]
    fn sentinel_equals_itself() {
        assert!(ordinate_eq(NULL_ORDINATE, NULL_ORDINATE));
        assert!(!ordinate_eq(NULL_ORDINATE, 0.0));
        assert!(ordinates_eq(&[1.0, NULL_ORDINATE], &[1.0, NULL_ORDINATE]));
        assert!(!ordinates_eq(&[1.0], &[1.0, 2.0]));
    }

    #[test]
    fn optional_buffers() {
        assert!(optional_ordinates_eq(None, None));
        assert!(!optional_ordinates_eq(Some(&[]), None));
    }
}
