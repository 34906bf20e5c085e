//! Bézier-Auswertung beliebigen Grades über die Bernstein-Basis.

use glam::DVec2;

/// Binomialkoeffizient C(n, k) als iteratives Produkt (ohne Fakultäten).
///
/// Symmetrisch per Konstruktion: es wird immer mit `min(k, n − k)` gerechnet.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

/// B(t) = Σ C(n,i) · tⁱ · (1−t)ⁿ⁻ⁱ · Pᵢ
///
/// Erwartet mindestens zwei Kontrollpunkte. Bei t = 0 bzw. t = 1 ist das
/// Ergebnis exakt der erste bzw. letzte Kontrollpunkt.
pub fn bezier_point(controls: &[DVec2], t: f64) -> DVec2 {
    let Some(degree) = controls.len().checked_sub(1) else {
        return DVec2::ZERO;
    };
    let inv = 1.0 - t;
    controls
        .iter()
        .enumerate()
        .fold(DVec2::ZERO, |acc, (i, &p)| {
            let weight = binomial(degree, i) * t.powi(i as i32) * inv.powi((degree - i) as i32);
            acc + weight * p
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_binomial_bekannte_werte() {
        assert_eq!(binomial(4, 2), 6.0);
        assert_eq!(binomial(5, 0), 1.0);
        assert_eq!(binomial(5, 5), 1.0);
        assert_eq!(binomial(10, 3), 120.0);
        assert_eq!(binomial(3, 4), 0.0);
    }

    #[test]
    fn test_binomial_symmetrie() {
        for n in 0..30 {
            for k in 0..=n {
                assert_eq!(binomial(n, k), binomial(n, n - k), "C({}, {})", n, k);
            }
        }
    }

    #[test]
    fn test_binomial_hoher_grad_ohne_ueberlauf() {
        // 60! sprengt u64, C(60, 30) nicht
        assert!((binomial(60, 30) - 1.182_645_815_648_614e17).abs() / 1.18e17 < 1e-12);
    }

    #[test]
    fn test_bezier_endpunkte_exakt() {
        let controls = [
            DVec2::new(0.3, -1.7),
            DVec2::new(5.0, 10.0),
            DVec2::new(-2.0, 4.5),
            DVec2::new(7.25, 3.0),
            DVec2::new(10.1, -0.9),
        ];
        assert_eq!(bezier_point(&controls, 0.0), controls[0]);
        assert_eq!(bezier_point(&controls, 1.0), controls[4]);
    }

    #[test]
    fn test_bezier_linear_ist_lerp() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(10.0, 4.0);
        let p = bezier_point(&[a, b], 0.25);
        assert_abs_diff_eq!(p.x, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bezier_kubisch_symmetrie() {
        // Symmetrische S-Kurve → Mittelpunkt bei (5, 5)
        let controls = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 10.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
        ];
        let mid = bezier_point(&controls, 0.5);
        assert_abs_diff_eq!(mid.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 5.0, epsilon = 1e-12);
    }
}
