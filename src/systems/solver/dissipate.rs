#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Multiply every cell by `factor`. A factor of exactly 1 is a no-op.
#[inline]
pub fn scale(field: &mut [f32], factor: f32) {
    if factor == 1.0 {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        field.par_iter_mut().for_each(|v| *v *= factor);
    }
    #[cfg(not(feature = "parallel"))]
    {
        for v in field.iter_mut() {
            *v *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_every_cell() {
        let mut field = vec![2.0, 4.0, -8.0];
        scale(&mut field, 0.5);
        assert_eq!(field, vec![1.0, 2.0, -4.0]);
    }

    #[test]
    fn unit_factor_leaves_nan_untouched() {
        let mut field = vec![1.0, f32::NAN];
        scale(&mut field, 1.0);
        assert_eq!(field[0], 1.0);
        assert!(field[1].is_nan());
    }
}
