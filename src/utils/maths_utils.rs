use argminmax::ArgMinMax;

#[inline]
pub(crate) fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

#[inline]
pub(crate) fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

#[inline]
pub(crate) fn mean(data: &[f64]) -> f64 {
    let count = data.len();
    if count == 0 {
        return 0.0;
    }

    let sum: f64 = data.iter().sum();
    sum / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_and_mean() {
        let data = [3.0, 9.0, 1.0, 7.0];
        assert_eq!(get_max(&data), 9.0);
        assert_eq!(get_min(&data), 1.0);
        assert_eq!(mean(&data), 5.0);
        assert_eq!(mean(&[]), 0.0);
    }
}
