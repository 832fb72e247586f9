/// Composite Simpson's rule over `[a, b]` with `panels` subintervals
/// (rounded up to an even number). Weights are the usual 1/6, 4/6 pattern
/// scaled to the panel pair width.
pub fn simpson<F>(f: F, a: f64, b: f64, panels: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let m = panels.max(2).next_multiple_of(2);
    let h = (b - a) / m as f64;
    let interior: f64 = (1..m)
        .map(|i| {
            let w = if i % 2 == 1 { 4. } else { 2. };
            w * f(a + h * i as f64)
        })
        .sum();
    (f(a) + interior + f(b)) * h / 3.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simpson_cubic_is_exact() {
        let res = simpson(|x| x * x * x - x, 0., 2., 2);
        assert!((res - 2.).abs() < 1e-12);
    }

    #[test]
    fn simpson_odd_panels_rounded() {
        let res = simpson(|x| x.sin(), 0., std::f64::consts::PI, 101);
        assert!((res - 2.).abs() < 1e-6);
    }
}
