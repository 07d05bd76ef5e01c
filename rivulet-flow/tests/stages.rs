//! Stage-level properties: warm-up counts, agreement with naive
//! non-incremental references, and automatic idle-period alignment.

use rivulet_flow::{Aligned, Flow, MovingMax, MovingMin, Sma, Stage, WindowParams, Wma};
use rust_decimal::Decimal;

const PRICES: [i64; 16] = [44, 47, 45, 50, 52, 49, 48, 51, 55, 53, 50, 46, 47, 49, 54, 56];

fn naive_window_extrema(input: &[i64], period: usize) -> (Vec<i64>, Vec<i64>) {
    let maxima = input
        .windows(period)
        .map(|w| *w.iter().max().unwrap())
        .collect();
    let minima = input
        .windows(period)
        .map(|w| *w.iter().min().unwrap())
        .collect();
    (maxima, minima)
}

#[tokio::test]
async fn extrema_agree_with_the_naive_reference() {
    for period in [1, 2, 3, 5, 8, 16] {
        let (expected_max, expected_min) = naive_window_extrema(&PRICES, period);

        let max_stage = MovingMax::with_period(period);
        let got_max = max_stage.compute(Flow::from_iter(PRICES)).collect().await;
        assert_eq!(got_max, expected_max, "max disagrees at period {period}");

        let min_stage = MovingMin::with_period(period);
        let got_min = min_stage.compute(Flow::from_iter(PRICES)).collect().await;
        assert_eq!(got_min, expected_min, "min disagrees at period {period}");
    }
}

#[tokio::test]
async fn warm_up_withholds_exactly_the_idle_period() {
    for period in [1, 4, 7] {
        let stage = MovingMax::with_period(period);
        let out = stage.compute(Flow::from_iter(PRICES)).collect().await;
        assert_eq!(stage.idle_period(), period - 1);
        assert_eq!(out.len(), PRICES.len() - stage.idle_period());
    }
}

#[tokio::test]
async fn monotonic_input_remains_exact() {
    // A steadily trending series is the worst case for an unbalanced
    // tree-backed window; the balanced multiset must stay exact.
    let rising: Vec<i64> = (0..500).collect();
    let stage = MovingMax::with_period(25);
    let out = stage.compute(Flow::from_iter(rising.clone())).collect().await;
    let (expected, _) = naive_window_extrema(&rising, 25);
    assert_eq!(out, expected);
}

#[tokio::test]
async fn aligned_combination_reconciles_different_warm_ups() {
    // Fast and slow SMAs of the same source: the fast branch starts
    // emitting earlier and must be trimmed before subtraction.
    let prices: Vec<Decimal> = (1..=8).map(Decimal::from).collect();
    let fast = Sma::with_period(2);
    let slow = Sma::with_period(4);

    let (for_fast, for_slow) = Flow::from_iter(prices).tee();
    let fast_out = Aligned::from_stage(&fast, fast.compute(for_fast));
    let slow_out = Aligned::from_stage(&slow, slow.compute(for_slow));

    let spread = fast_out.combine(slow_out, |f, s| f - s);
    assert_eq!(spread.idle_period(), 3);

    // Fast SMA from index 3: 3.5, 4.5, 5.5, 6.5, 7.5; slow SMA: 2.5,
    // 3.5, 4.5, 5.5, 6.5. Spread is a constant 1.
    let expected = vec![Decimal::ONE; 5];
    assert_eq!(spread.into_flow().collect().await, expected);
}

#[tokio::test]
async fn wma_weights_only_the_full_window() {
    let stage = Wma::new(WindowParams { period: 3 });
    let input = Flow::from_iter([3, 6, 9, 12].map(Decimal::from).to_vec());
    let out = stage.compute(input).collect().await;
    // (9*3 + 6*2 + 3*1) / 6 = 7 and (12*3 + 9*2 + 6*1) / 6 = 10.
    assert_eq!(out, vec![Decimal::from(7), Decimal::from(10)]);
}
