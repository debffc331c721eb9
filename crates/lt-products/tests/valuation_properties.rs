//! End-to-end properties of the valuation engines on every lattice.
//!
//! These integration tests drive `EuropeanOption`, `AmericanOption` and
//! `BermudanOption` through the `TreeModel` contract only, on the
//! Cox-Ross-Rubinstein, Jarrow-Rudd, Leisen-Reimer and Boyle lattices.

use approx::assert_abs_diff_eq;
use lt_core::{Error, Real, Time};
use lt_math::{black_scholes_price, OptionType};
use lt_methods::{BinomialModel, ModelParameters, TreeModel, TrinomialModel};
use lt_products::{
    payoff, AmericanOption, BermudanOption, EuropeanOption, ExerciseDecision, ExerciseSchedule,
};
use proptest::prelude::*;

/// Every lattice built from `params`; Leisen-Reimer is centred on `strike`.
fn lattices(params: &ModelParameters, strike: Real) -> Vec<Box<dyn TreeModel>> {
    vec![
        Box::new(BinomialModel::cox_ross_rubinstein(params).unwrap()),
        Box::new(BinomialModel::jarrow_rudd(params).unwrap()),
        Box::new(BinomialModel::leisen_reimer(params, strike).unwrap()),
        Box::new(TrinomialModel::boyle(params).unwrap()),
    ]
}

/// spot 1, rate 2 %, volatility 70 %, maturity 3.5, at-the-money put.
fn long_dated_put_params(steps: usize) -> ModelParameters {
    ModelParameters::new(1.0, 0.02, 0.7, 3.5, steps).unwrap()
}

fn half_yearly_to(maturity: Time) -> ExerciseSchedule {
    let count = (maturity / 0.5).round() as usize;
    let dates = (1..=count).map(|i| i as Time * 0.5).collect();
    ExerciseSchedule::with_maturity(dates, maturity).unwrap()
}

// ───────────────────────── European convergence ─────────────────────────

#[test]
fn test_european_converges_to_black_scholes_at_500_steps() {
    let params = ModelParameters::new(100.0, 0.05, 0.2, 1.0, 500).unwrap();
    let oracle = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.2, 1.0);
    let option = EuropeanOption::new(1.0, payoff::call(100.0));
    for model in lattices(&params, 100.0) {
        let value = option.value(model.as_ref()).unwrap();
        assert!(
            (value - oracle).abs() < 1e-2,
            "lattice value {value} vs Black-Scholes {oracle}"
        );
    }
}

#[test]
fn test_in_the_money_call_on_crr_within_five_cents() {
    // Black-Scholes gives 21.1859 for these inputs.
    let params = ModelParameters::new(100.0, 0.0, 0.2, 1.0, 100).unwrap();
    let model = BinomialModel::cox_ross_rubinstein(&params).unwrap();
    let value = EuropeanOption::new(1.0, payoff::call(80.0))
        .value(&model)
        .unwrap();
    let oracle = black_scholes_price(OptionType::Call, 100.0, 80.0, 0.0, 0.0, 0.2, 1.0);
    assert_abs_diff_eq!(oracle, 21.1859, epsilon = 1e-4);
    assert_abs_diff_eq!(value, oracle, epsilon = 0.05);
}

#[test]
fn test_direct_binomial_value_equals_induction() {
    let params = ModelParameters::new(100.0, 0.03, 0.35, 1.5, 200).unwrap();
    let option = EuropeanOption::new(1.5, payoff::digital_call(105.0, 1.0));
    for model in [
        BinomialModel::cox_ross_rubinstein(&params).unwrap(),
        BinomialModel::jarrow_rudd(&params).unwrap(),
    ] {
        assert_abs_diff_eq!(
            option.value_direct(&model).unwrap(),
            option.value(&model).unwrap(),
            epsilon = 1e-10
        );
    }
}

// ───────────────────────── Early-exercise premium ─────────────────────────

#[test]
fn test_american_put_carries_early_exercise_premium() {
    let params = long_dated_put_params(300);
    let european = EuropeanOption::new(3.5, payoff::put(1.0));
    let american = AmericanOption::new(3.5, payoff::put(1.0));
    for model in lattices(&params, 1.0) {
        let e = european.value(model.as_ref()).unwrap();
        let a = american.value(model.as_ref()).unwrap();
        assert!(a - e > 0.01, "american {a} european {e}");
    }
}

#[test]
fn test_bermudan_lies_between_european_and_american() {
    let model = BinomialModel::cox_ross_rubinstein(&long_dated_put_params(300)).unwrap();
    let european = EuropeanOption::new(3.5, payoff::put(1.0)).value(&model).unwrap();
    let american = AmericanOption::new(3.5, payoff::put(1.0)).value(&model).unwrap();
    let bermudan = BermudanOption::new(half_yearly_to(3.5), payoff::put(1.0))
        .value(&model)
        .unwrap();
    assert!(european < bermudan, "{european} < {bermudan}");
    assert!(bermudan < american, "{bermudan} < {american}");
}

#[test]
fn test_more_exercise_dates_are_worth_more() {
    // dt = 0.125: all schedules below lie on the lattice
    let model = TrinomialModel::boyle(&long_dated_put_params(28)).unwrap();
    let yearly = ExerciseSchedule::new(vec![0.5, 1.5, 2.5, 3.5]).unwrap();
    let half_yearly = half_yearly_to(3.5);
    let quarterly = ExerciseSchedule::new((1..=14).map(|i| i as Time * 0.25).collect()).unwrap();

    let values: Vec<Real> = [yearly, half_yearly, quarterly]
        .into_iter()
        .map(|s| BermudanOption::new(s, payoff::put(1.0)).value(&model).unwrap())
        .collect();
    let american = AmericanOption::new(3.5, payoff::put(1.0)).value(&model).unwrap();
    assert!(values[0] <= values[1]);
    assert!(values[1] <= values[2]);
    assert!(values[2] <= american);
}

// ───────────────────────── Exercise histories ─────────────────────────

#[test]
fn test_history_root_equals_value() {
    let params = long_dated_put_params(120);
    let american = AmericanOption::new(3.5, payoff::put(1.0));
    let dates = (0..=7).map(|i| i as Time * 0.5).collect();
    let bermudan = BermudanOption::new(ExerciseSchedule::new(dates).unwrap(), payoff::put(1.0));
    for model in lattices(&params, 1.0) {
        let model = model.as_ref();
        let a = american.option_data(model).unwrap();
        assert_eq!(a.values_at_index(0).unwrap()[0], american.value(model).unwrap());

        let b = bermudan.option_data(model).unwrap();
        assert_eq!(b.len(), 8);
        assert_eq!(b.root_value().unwrap(), bermudan.value(model).unwrap());
    }
}

#[test]
fn test_held_value_never_below_exercise_value() {
    let model = BinomialModel::jarrow_rudd(&long_dated_put_params(150)).unwrap();
    let histories = [
        AmericanOption::new(3.5, payoff::put(1.0))
            .option_data(&model)
            .unwrap(),
        BermudanOption::new(half_yearly_to(3.5), payoff::put(1.0))
            .option_data(&model)
            .unwrap(),
    ];
    for history in &histories {
        for k in 0..history.len() {
            let v = history.values_at_index(k).unwrap();
            let e = history.exercise_values_at_index(k).unwrap();
            let c = history.continuation_values_at_index(k).unwrap();
            let d = history.decisions_at_index(k).unwrap();
            for j in 0..v.len() {
                assert!(v[j] >= e[j]);
                assert_eq!(v[j], c[j].max(e[j]));
                assert_eq!(d[j] == ExerciseDecision::Wait, c[j] > e[j]);
            }
        }
        let maturity = history.len() - 1;
        assert!(history
            .decisions_at_index(maturity)
            .unwrap()
            .iter()
            .all(|d| d.is_exercise()));
    }
}

#[test]
fn test_history_access_errors() {
    let model = BinomialModel::cox_ross_rubinstein(&long_dated_put_params(35)).unwrap();
    let history = AmericanOption::new(3.5, payoff::put(1.0))
        .option_data(&model)
        .unwrap();
    assert_eq!(
        history.values_at_index(36).unwrap_err(),
        Error::IndexOutOfRange {
            index: 36,
            size: 36
        }
    );
    assert_eq!(
        history.values_at_time(10.0).unwrap_err(),
        Error::IndexOutOfRange {
            index: 36,
            size: 36
        }
    );
    assert!(matches!(
        history.decisions_at_time(-1.0),
        Err(Error::IndexOutOfRange { .. })
    ));
    assert_eq!(
        history.values_at_time(1.0).unwrap(),
        history.values_at_index(10).unwrap()
    );
}

// ───────────────────────── Properties ─────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_american_dominates_european(
        spot in 50.0f64..150.0,
        strike in 50.0f64..150.0,
        rate in 0.0f64..0.08,
        vol in 0.1f64..0.6,
        steps in 20usize..80,
    ) {
        let params = ModelParameters::new(spot, rate, vol, 1.0, steps).unwrap();
        let model = BinomialModel::cox_ross_rubinstein(&params).unwrap();
        for (american, european) in [
            (
                AmericanOption::new(1.0, payoff::put(strike)).value(&model).unwrap(),
                EuropeanOption::new(1.0, payoff::put(strike)).value(&model).unwrap(),
            ),
            (
                AmericanOption::new(1.0, payoff::call(strike)).value(&model).unwrap(),
                EuropeanOption::new(1.0, payoff::call(strike)).value(&model).unwrap(),
            ),
        ] {
            prop_assert!(american >= european - 1e-12);
        }
    }

    #[test]
    fn prop_held_value_dominates_exercise(
        spot in 0.5f64..1.5,
        vol in 0.2f64..0.9,
        steps in 10usize..60,
    ) {
        let params = ModelParameters::new(spot, 0.02, vol, 3.5, steps).unwrap();
        let model = TrinomialModel::boyle(&params).unwrap();
        let history = AmericanOption::new(3.5, payoff::put(1.0)).option_data(&model).unwrap();
        prop_assert_eq!(history.len(), steps + 1);
        for k in 0..history.len() {
            let v = history.values_at_index(k).unwrap();
            let e = history.exercise_values_at_index(k).unwrap();
            prop_assert!(v.iter().zip(e).all(|(v, e)| v >= e));
        }
    }
}
