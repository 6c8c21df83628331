use rand::{rngs::StdRng, Rng, SeedableRng};
use tuplet::{PlannerFlags, Problem, SelectorConfig, Strategy};

fn gen_data(len: usize) -> Vec<usize> {
    (0..len).collect()
}

fn reference(input: &[usize], n: usize, m: usize, tuple: usize) -> Vec<usize> {
    let mut output = vec![0; n * m * tuple];
    for i in 0..n {
        for j in 0..m {
            for k in 0..tuple {
                output[(j * n + i) * tuple + k] = input[(i * m + j) * tuple + k];
            }
        }
    }
    output
}

const CUTOFF: usize = 8;

const SIZES: [usize; 9] = [0, 1, 2, 3, CUTOFF - 1, CUTOFF, CUTOFF + 1, CUTOFF * 4 - 1, CUTOFF * 5];

#[test]
fn test_in_place_transpose() {
    for &tuple in &[1, 2, 3] {
        for &width in &SIZES {
            for &height in &SIZES {
                let input = gen_data(width * height * tuple);
                let mut data = input.clone();

                tuplet::transpose_in_place(&mut data, height, width, tuple).unwrap();

                for x in 0..width {
                    for y in 0..height {
                        for k in 0..tuple {
                            assert_eq!(
                                input[(x + y * width) * tuple + k],
                                data[(y + x * height) * tuple + k],
                                "x = {}, y = {}, k = {}, tuple = {}",
                                x,
                                y,
                                k,
                                tuple
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_every_strategy_matches_reference() {
    let flags = PlannerFlags::PATIENT;
    let config = SelectorConfig::default();
    let mut rng = StdRng::seed_from_u64(0);

    for &tuple in &[1, 2, 3, 4] {
        for n in 1..18 {
            for m in 1..18 {
                let input: Vec<usize> = (0..n * m * tuple).map(|_| rng.gen()).collect();
                let expected = reference(&input, n, m, tuple);
                let problem = Problem::matrix(n, m, tuple);

                let mut ran = 0;
                for plan in tuplet::selector::candidates(&problem, flags, &config) {
                    let mut data = input.clone();
                    plan.execute(&mut data).unwrap();
                    assert_eq!(data, expected, "{plan} on {n}x{m}x{tuple}");
                    ran += 1;
                }
                assert!(ran > 0, "no strategy for {n}x{m}x{tuple}");
            }
        }
    }
}

#[test]
fn test_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    for &(n, m, tuple) in &[(6, 4, 2), (5, 7, 1), (13, 8, 3), (64, 48, 2), (100, 3, 1)] {
        let input: Vec<u64> = (0..n * m * tuple).map(|_| rng.gen()).collect();
        let mut data = input.clone();
        tuplet::transpose_in_place(&mut data, n, m, tuple).unwrap();
        assert_ne!(data, input);
        tuplet::transpose_in_place(&mut data, m, n, tuple).unwrap();
        assert_eq!(data, input, "{n}x{m}x{tuple}");
    }
}

#[test]
fn test_scenario_square_scalars() {
    let mut data: Vec<u32> = (0..16).collect();
    tuplet::transpose_in_place(&mut data, 4, 4, 1).unwrap();
    assert_eq!(data, vec![0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15]);
}

#[test]
fn test_scenario_gcd_complex_pairs() {
    let input: Vec<f32> = (0..48).map(|x| x as f32).collect();
    let problem = Problem::matrix(6, 4, 2);
    let plan = Strategy::Gcd
        .plan(&problem, PlannerFlags::PATIENT, &SelectorConfig::default())
        .unwrap();
    assert_eq!(plan.buffer_len(), 6 * 2 * 2);

    let mut data = input.clone();
    plan.execute(&mut data).unwrap();

    for i in 0..6 {
        for j in 0..4 {
            assert_eq!(data[(j * 6 + i) * 2], input[(i * 4 + j) * 2]);
            assert_eq!(data[(j * 6 + i) * 2 + 1], input[(i * 4 + j) * 2 + 1]);
        }
    }
}

#[test]
fn test_scenario_cut_and_cycles_agree() {
    let input = gen_data(35);
    let expected = reference(&input, 5, 7, 1);
    let problem = Problem::matrix(5, 7, 1);
    let flags = PlannerFlags::PATIENT;
    let config = SelectorConfig::default();

    let mut by_cut = input.clone();
    Strategy::Cut
        .plan(&problem, flags, &config)
        .unwrap()
        .execute(&mut by_cut)
        .unwrap();

    let mut by_cycles = input.clone();
    Strategy::Toms513
        .plan(&problem, flags, &config)
        .unwrap()
        .execute(&mut by_cycles)
        .unwrap();

    assert_eq!(by_cut, by_cycles);
    assert_eq!(by_cut, expected);
}

#[test]
fn test_degenerate_shapes_keep_order() {
    for &len in &[1, 2, 17, 100] {
        for &tuple in &[1, 2, 5] {
            let input = gen_data(len * tuple);

            let mut row = input.clone();
            tuplet::transpose_in_place(&mut row, 1, len, tuple).unwrap();
            assert_eq!(row, input);

            let mut column = input.clone();
            tuplet::transpose_in_place(&mut column, len, 1, tuple).unwrap();
            assert_eq!(column, input);
        }
    }
}

#[test]
fn test_padded_square() {
    let (n, stride, tuple) = (37, 41, 2);
    let input = gen_data(n * stride * tuple);
    let problem = Problem::padded_square(n, stride, tuple);
    let plan = Strategy::RecSquare
        .plan(&problem, PlannerFlags::ESTIMATE, &SelectorConfig::default())
        .unwrap();
    assert_eq!(plan.buffer_len(), 0);

    let mut data = input.clone();
    plan.execute(&mut data).unwrap();
    for i in 0..n {
        for j in 0..n {
            for k in 0..tuple {
                assert_eq!(
                    data[(i * stride + j) * tuple + k],
                    input[(j * stride + i) * tuple + k]
                );
            }
        }
        // padding is not part of the array and stays as it was
        for j in n..stride {
            for k in 0..tuple {
                let at = (i * stride + j) * tuple + k;
                assert_eq!(data[at], input[at]);
            }
        }
    }
}
