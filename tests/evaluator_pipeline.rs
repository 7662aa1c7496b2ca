//! End-to-end: random projection, inferred cells, and bucket keys.

use projgrid::{
    BoxSampler, EuclideanProjection, EvaluatorSettings, LinearProjection, OrthogonalProjection,
    Projection, ProjectionCoordinates, ProjectionError, ProjectionEvaluator, ProjectionMatrix,
    RealVectorBounds, StateSampler,
};
use std::collections::HashMap;

fn arm_sampler(seed: u64) -> BoxSampler {
    let bounds = RealVectorBounds::uniform(10, -1.0, 1.0).unwrap();
    BoxSampler::with_seed("arm", bounds, seed)
}

#[test]
fn seeded_pipeline_is_reproducible() {
    let build = || {
        let mut e = ProjectionEvaluator::new(LinearProjection::with_seed(10, 3, 99));
        e.setup(&mut arm_sampler(1)).unwrap();
        e
    };
    let a = build();
    let b = build();
    assert_eq!(a.cell_dimensions(), b.cell_dimensions());

    let mut sampler = arm_sampler(2);
    for _ in 0..50 {
        let s = sampler.sample_uniform();
        assert_eq!(
            a.compute_coordinates_for_state(&s).unwrap(),
            b.compute_coordinates_for_state(&s).unwrap()
        );
    }
}

#[test]
fn inferred_grid_spans_about_split_count_cells() {
    let mut e = ProjectionEvaluator::new(LinearProjection::with_seed(10, 2, 5));
    let mut sampler = arm_sampler(3);
    e.setup(&mut sampler).unwrap();

    let mut low = [i32::MAX; 2];
    let mut high = [i32::MIN; 2];
    for _ in 0..2000 {
        let c = e.compute_coordinates_for_state(&sampler.sample_uniform()).unwrap();
        for axis in 0..2 {
            low[axis] = low[axis].min(c[axis]);
            high[axis] = high[axis].max(c[axis]);
        }
    }
    for axis in 0..2 {
        let span = high[axis] - low[axis] + 1;
        assert!(
            (15..=60).contains(&span),
            "axis {} spans {} cells",
            axis,
            span
        );
    }
}

#[test]
fn coordinates_bucket_nearby_states_together() {
    let mut e = ProjectionEvaluator::new(OrthogonalProjection::new(4, vec![0, 2]).unwrap());
    e.set_cell_dimensions(vec![1.0, 1.0]).unwrap();

    let mut buckets: HashMap<ProjectionCoordinates, Vec<usize>> = HashMap::new();
    let states = [
        [0.1, 9.0, 0.2, 9.0],
        [0.9, -9.0, 0.8, -9.0],
        [-0.1, 0.0, 0.2, 0.0],
        [1.5, 0.0, 0.5, 0.0],
    ];
    for (i, s) in states.iter().enumerate() {
        let key = e.compute_coordinates_for_state(s).unwrap();
        buckets.entry(key).or_default().push(i);
    }

    assert_eq!(buckets[&ProjectionCoordinates::from_cells(vec![0, 0])], vec![0, 1]);
    assert_eq!(buckets[&ProjectionCoordinates::from_cells(vec![-1, 0])], vec![2]);
    assert_eq!(buckets[&ProjectionCoordinates::from_cells(vec![1, 0])], vec![3]);
}

#[test]
fn settings_from_json_drive_inference() {
    let settings = EvaluatorSettings::from_json(r#"{"extent_samples": 7, "dimension_splits": 2.0}"#)
        .unwrap();

    struct Counting<'a> {
        inner: &'a mut BoxSampler,
        draws: usize,
    }

    impl StateSampler for Counting<'_> {
        type State = Vec<f64>;

        fn sample_uniform(&mut self) -> Vec<f64> {
            self.draws += 1;
            self.inner.sample_uniform()
        }
    }

    let mut inner = arm_sampler(4);
    let mut sampler = Counting {
        inner: &mut inner,
        draws: 0,
    };
    let mut e = ProjectionEvaluator::with_settings(LinearProjection::with_seed(10, 2, 6), settings);
    e.setup(&mut sampler).unwrap();
    assert_eq!(sampler.draws, 7);
}

#[test]
fn explicit_reconfiguration_is_validated() {
    let mut e = ProjectionEvaluator::new(LinearProjection::with_seed(10, 3, 8));
    e.setup(&mut arm_sampler(5)).unwrap();
    assert!(e.is_configured());

    let err = e.set_cell_dimensions(vec![0.5; 4]).unwrap_err();
    assert!(matches!(
        err,
        ProjectionError::CellDimensionMismatch { expected: 3, got: 4 }
    ));
    assert!(e.compute_coordinates(&EuclideanProjection::zeros(3)).is_err());

    e.set_cell_dimensions(vec![0.5; 3]).unwrap();
    let c = e
        .compute_coordinates(&EuclideanProjection::from_values(vec![0.6, -0.6, 1.0]))
        .unwrap();
    assert_eq!(c.cells(), &[1, -2, 2]);
}

#[test]
fn custom_matrix_projection() {
    let matrix = ProjectionMatrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, -1.0]]).unwrap();
    let p = LinearProjection::new(matrix);
    assert_eq!(p.project(&[2.0, 0.5]).values(), &[2.5, 1.5]);
}
