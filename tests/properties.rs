#![allow(clippy::unwrap_used)]

use std::f64::consts::{FRAC_PI_3, TAU};

use proptest::prelude::*;
use trilat::{
    intersect_circles, overlap_area, project_to_circumference, triangle_area, Circle, Point2,
};

fn circle(x: f64, y: f64, r: f64) -> Circle {
    Circle::from_xyr(x, y, r).unwrap()
}

/// Three anchors spread around a target, each range slightly overshooting it.
fn anchored_triple() -> impl Strategy<Value = [Circle; 3]> {
    (
        -100.0..100.0f64,
        -100.0..100.0f64,
        0.0..TAU,
        prop::array::uniform3((-0.3..0.3f64, 50.0..100.0f64, 5.0..20.0f64)),
    )
        .prop_map(|(tx, ty, base, anchors)| {
            let mut out = [circle(0.0, 0.0, 1.0); 3];
            for (k, (jitter, dist, margin)) in anchors.into_iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let angle = base + 2.0 * FRAC_PI_3 * k as f64 + jitter;
                out[k] = circle(
                    tx + dist * angle.cos(),
                    ty + dist * angle.sin(),
                    dist + margin,
                );
            }
            out
        })
}

proptest! {
    #[test]
    fn intersection_points_lie_on_both_circles(
        x1 in -100.0..100.0f64,
        y1 in -100.0..100.0f64,
        r1 in 1.0..100.0f64,
        r2 in 1.0..100.0f64,
        angle in 0.0..TAU,
        t in 0.001..0.999f64,
    ) {
        let min = (r1 - r2).abs();
        let d = min + t * (r1 + r2 - min);
        prop_assume!(d > 1e-6);
        let c1 = circle(x1, y1, r1);
        let c2 = circle(x1 + d * angle.cos(), y1 + d * angle.sin(), r2);
        let hits = intersect_circles(&c1, &c2).unwrap();
        prop_assert!(!hits.is_empty());
        for p in hits.points() {
            let d1 = (p - *c1.center()).norm();
            let d2 = (p - *c2.center()).norm();
            prop_assert!((d1 - r1).abs() <= 1e-6 * r1, "d1={d1} r1={r1}");
            prop_assert!((d2 - r2).abs() <= 1e-6 * r2, "d2={d2} r2={r2}");
        }
    }

    #[test]
    fn apart_circles_never_intersect(
        r1 in 1.0..100.0f64,
        r2 in 1.0..100.0f64,
        gap in 0.01..100.0f64,
        angle in 0.0..TAU,
    ) {
        let d = r1 + r2 + gap;
        let c1 = circle(0.0, 0.0, r1);
        let c2 = circle(d * angle.cos(), d * angle.sin(), r2);
        prop_assert!(intersect_circles(&c1, &c2).unwrap().is_empty());
    }

    #[test]
    fn triangle_area_ignores_vertex_order(
        pts in prop::array::uniform3((-1000.0..1000.0f64, -1000.0..1000.0f64)),
    ) {
        let [a, b, c] = pts.map(|(x, y)| Point2::new(x, y));
        let area = triangle_area(&[a, b, c]);
        prop_assert!((triangle_area(&[b, c, a]) - area).abs() <= 1e-6);
        prop_assert!((triangle_area(&[c, a, b]) - area).abs() <= 1e-6);
        prop_assert!((triangle_area(&[c, b, a]) - area).abs() <= 1e-6);
    }

    #[test]
    fn projection_is_idempotent_on_circle(
        cx in -100.0..100.0f64,
        cy in -100.0..100.0f64,
        r in 0.1..100.0f64,
        angle in 0.0..TAU,
    ) {
        let c = circle(cx, cy, r);
        let p = Point2::new(cx + r * angle.cos(), cy + r * angle.sin());
        let projected = project_to_circumference(&c, &p).unwrap();
        prop_assert!((projected - p).norm() <= 1e-9 * r.max(1.0));
    }

    #[test]
    fn overlap_is_symmetric_under_relabeling(cs in anchored_triple()) {
        let base = overlap_area(&cs);
        prop_assume!(base.is_ok());
        let total = base.unwrap().total_area;
        prop_assert!(total > 0.0);
        prop_assert!(cs.iter().all(|c| total <= c.area()));

        let [a, b, c] = cs;
        for perm in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            let relabeled = overlap_area(&perm).unwrap().total_area;
            prop_assert!(
                (relabeled - total).abs() <= 1e-9 * total.max(1.0),
                "{relabeled} != {total}"
            );
        }
    }
}
