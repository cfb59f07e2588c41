use samme::prelude::*;
use samme::LearnerError;


/// A classifier that answers from a lookup table indexed by the sample.
#[derive(Debug, Clone)]
struct Table(Vec<usize>);

impl Classifier<usize> for Table {
    fn predict(&self, sample: &usize) -> Result<usize, LearnerError> {
        Ok(self.0[*sample])
    }
}


#[derive(Debug)]
struct Unavailable;

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "model server unavailable")
    }
}

impl std::error::Error for Unavailable {}


/// Fails on samples at or above `from`.
#[derive(Debug, Clone)]
struct FailsFrom(usize);

impl Classifier<usize> for FailsFrom {
    fn predict(&self, sample: &usize) -> Result<usize, LearnerError> {
        if *sample >= self.0 { Err(Box::new(Unavailable)) } else { Ok(0) }
    }
}


fn dataset(labels: &[usize]) -> Vec<(usize, usize)> {
    labels.iter()
        .copied()
        .enumerate()
        .collect()
}


/// Tests for `Samme`.
#[cfg(test)]
pub mod samme_tests {
    use super::*;

    #[test]
    fn construction() {
        for k in [0, 1] {
            match Samme::<Table>::new(3, k) {
                Err(SammeError::InvalidConfiguration { num_cats }) => {
                    assert_eq!(num_cats, k);
                },
                other => panic!("unexpected result {other:?}"),
            }
        }
        let booster = Samme::<Table>::new(3, 2).unwrap();
        assert!(!booster.is_trained());
        assert_eq!(booster.num_learner(), 3);
        assert_eq!(booster.num_cats(), 2);
        assert!(booster.learner_weights().is_none());
    }


    #[test]
    fn error_message_names_the_value() {
        let err = Samme::<Table>::new(3, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Param num_cats should be at least 2 but was 1"
        );
    }


    #[test]
    fn predict_before_train() {
        let booster = Samme::<Table>::new(1, 2).unwrap();
        assert!(matches!(booster.predict(&0), Err(SammeError::NotTrained)));
        assert!(matches!(booster.predict_all(&[0, 1]), Err(SammeError::NotTrained)));
        assert!(matches!(booster.decision_scores(&0), Err(SammeError::NotTrained)));
    }


    #[test]
    fn perfect_and_always_wrong() {
        let labels = [0, 1, 1, 0];
        let data = dataset(&labels);
        let a = Table(vec![0, 1, 1, 0]);
        let b = Table(vec![1, 0, 0, 1]);

        // `b` comes first in the pool but ranks last.
        let mut booster = Samme::new(2, 2).unwrap();
        booster.train(&data, vec![b.clone(), a.clone()]).unwrap();

        let f = booster.ensemble().unwrap();
        let ranked = f.learners().map(|h| h.0.clone()).collect::<Vec<_>>();
        assert_eq!(ranked, vec![a.0.clone(), b.0.clone()]);

        let w = booster.learner_weights().unwrap();
        assert!((w[0] - 1.0).abs() < 1e-5);
        assert!(w[1].abs() < 1e-5);

        for (x, _) in &data {
            assert_eq!(booster.predict(x).unwrap(), a.0[*x]);
        }
    }


    #[test]
    fn always_wrong_binary_gets_zero_alpha() {
        let data = dataset(&[0, 0, 1, 1]);
        let good = Table(vec![0, 0, 1, 0]);
        let bad = Table(vec![1, 1, 0, 0]);

        let mut booster = Samme::new(2, 2).unwrap();
        booster.train(&data, vec![bad, good]).unwrap();

        let history = booster.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].learner, 0);
        assert_eq!(history[1].raw_misses, 4);
        assert!((history[1].weighted_error - 1.0).abs() < 1e-9);
        assert_eq!(history[1].alpha, 0.0);
        assert_eq!(booster.learner_weights().unwrap()[1], 0.0);
    }


    #[test]
    fn perfect_learner_alpha() {
        let data = dataset(&[0, 1, 2]);
        let perfect = Table(vec![0, 1, 2]);
        let mut booster = Samme::new(1, 3).unwrap();
        booster.train(&data, vec![perfect]).unwrap();

        let alpha = booster.history()[0].alpha;
        let expected = (1.0 / 1e-6 - 1.0f64).ln() + 2f64.ln();
        assert!((alpha - expected).abs() < 1e-9);
        assert_eq!(booster.learner_weights().unwrap(), vec![1.0]);
    }


    #[test]
    fn half_right_with_three_categories() {
        let data = dataset(&[0, 1, 2, 0]);
        let h = Table(vec![0, 1, 0, 1]);
        let mut booster = Samme::new(1, 3).unwrap();
        booster.train(&data, vec![h]).unwrap();

        let record = booster.history()[0];
        assert!((record.weighted_error - 0.5).abs() < 1e-12);
        let expected = ((1.0 / (0.5 + 1e-6) - 1.0f64).ln() + 2f64.ln()).max(0.0);
        assert!((record.alpha - expected).abs() < 1e-12);
    }


    #[test]
    fn predict_is_idempotent() {
        let data = dataset(&[0, 1, 2, 2, 1, 0]);
        let pool = vec![
            Table(vec![0, 1, 2, 0, 1, 0]),
            Table(vec![0, 1, 1, 2, 2, 0]),
            Table(vec![2, 1, 2, 2, 1, 1]),
        ];
        let mut booster = Samme::new(3, 3).unwrap();
        booster.train(&data, pool).unwrap();

        for (x, _) in &data {
            let first = booster.predict(x).unwrap();
            let second = booster.predict(x).unwrap();
            assert_eq!(first, second);
        }
        let sum = booster.learner_weights().unwrap().iter().sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-5);
    }


    #[test]
    fn pool_size_must_match_num_learner() {
        let data = dataset(&[0, 1]);
        let mut booster = Samme::new(3, 2).unwrap();
        let result = booster.train(&data, vec![Table(vec![0, 1])]);
        match result {
            Err(SammeError::LearnerCountMismatch { expected, actual }) => {
                assert_eq!((expected, actual), (3, 1));
            },
            other => panic!("unexpected result {other:?}"),
        }
        assert!(!booster.is_trained());
    }


    #[test]
    fn empty_inputs_are_rejected() {
        let mut booster = Samme::new(1, 2).unwrap();
        let empty: Vec<(usize, usize)> = Vec::new();
        assert!(matches!(
            booster.train(&empty, vec![Table(vec![])]),
            Err(SammeError::EmptyDataset)
        ));

        let mut booster = Samme::<Table>::new(0, 2).unwrap();
        assert!(matches!(
            booster.train(&dataset(&[0]), Vec::new()),
            Err(SammeError::EmptyLearnerPool)
        ));
    }


    #[test]
    fn labels_and_predictions_are_range_checked() {
        let mut booster = Samme::new(1, 2).unwrap();
        let result = booster.train(&dataset(&[0, 2]), vec![Table(vec![0, 1])]);
        match result {
            Err(SammeError::LabelOutOfRange { index, label, num_cats }) => {
                assert_eq!((index, label, num_cats), (1, 2, 2));
            },
            other => panic!("unexpected result {other:?}"),
        }

        let result = booster.train(&dataset(&[0, 1]), vec![Table(vec![0, 5])]);
        match result {
            Err(SammeError::PredictionOutOfRange { learner, prediction, num_cats }) => {
                assert_eq!((learner, prediction, num_cats), (0, 5, 2));
            },
            other => panic!("unexpected result {other:?}"),
        }
    }


    #[test]
    fn learner_failure_is_passed_through() {
        let data = dataset(&[0, 0, 1]);
        let mut booster = Samme::new(1, 2).unwrap();
        match booster.train(&data, vec![FailsFrom(2)]) {
            Err(SammeError::Learner(e)) => {
                assert!(e.is::<Unavailable>());
                assert_eq!(e.to_string(), "model server unavailable");
            },
            other => panic!("unexpected result {other:?}"),
        }

        // Trained on samples it can answer, then asked about one it cannot.
        let data = dataset(&[0, 0]);
        let mut booster = Samme::new(1, 2).unwrap();
        booster.train(&data, vec![FailsFrom(2)]).unwrap();
        let err = booster.predict(&5).unwrap_err();
        assert_eq!(err.to_string(), "model server unavailable");
    }


    #[test]
    fn degenerate_pool() {
        // Both classifiers are always wrong.
        let data = dataset(&[0, 1, 0, 1]);
        let pool = vec![Table(vec![1, 0, 1, 0]), Table(vec![1, 0, 1, 0])];

        let mut booster = Samme::new(2, 2).unwrap();
        assert!(matches!(
            booster.train(&data, pool.clone()),
            Err(SammeError::DegenerateEnsemble)
        ));
        assert!(!booster.is_trained());

        let mut booster = Samme::new(2, 2).unwrap()
            .degenerate_policy(DegeneratePolicy::Uniform);
        booster.train(&data, pool).unwrap();
        assert_eq!(booster.learner_weights().unwrap(), vec![0.5, 0.5]);
        assert_eq!(booster.predict(&0).unwrap(), 1);
    }


    #[test]
    fn failed_retrain_keeps_the_previous_model() {
        let data = dataset(&[0, 1]);
        let mut booster = Samme::new(1, 2).unwrap();
        booster.train(&data, vec![Table(vec![0, 1])]).unwrap();

        let bad = dataset(&[0, 7]);
        assert!(booster.train(&bad, vec![Table(vec![0, 1])]).is_err());
        assert!(booster.is_trained());
        assert_eq!(booster.predict(&1).unwrap(), 1);
    }


    #[test]
    fn trained_booster_is_shared_across_threads() {
        let data = dataset(&[0, 1, 2, 1]);
        let pool = vec![Table(vec![0, 1, 2, 2]), Table(vec![0, 1, 1, 1])];
        let mut booster = Samme::new(2, 3).unwrap();
        booster.train(&data, pool).unwrap();

        let expected = booster.predict_all(&[0, 1, 2, 3]).unwrap();
        std::thread::scope(|s| {
            let handles = (0..4)
                .map(|_| s.spawn(|| booster.predict_all(&[0, 1, 2, 3]).unwrap()))
                .collect::<Vec<_>>();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }


    #[test]
    fn from_weighted_vote() {
        let f = WeightedVote::new(2, vec![(Table(vec![1, 0]), 1.0)]).unwrap();
        let booster = Samme::from(f);
        assert!(booster.is_trained());
        assert_eq!(booster.num_learner(), 1);
        assert_eq!(booster.predict(&0).unwrap(), 1);
    }
}
