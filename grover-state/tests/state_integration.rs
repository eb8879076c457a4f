use approx::assert_abs_diff_eq;
use grover_core::{Gate, QubitId};
use grover_state::{kernels, validate_normalization, Sampler, Severity, StateVector};

#[test]
fn test_uniform_above_parallel_threshold() {
    let n = 15;
    assert!(1usize << n >= kernels::PARALLEL_MIN_DIMENSION);

    let state = StateVector::uniform(n).unwrap();
    let expected = 1.0 / ((1usize << n) as f64).sqrt();
    for amp in state.amplitudes() {
        assert_abs_diff_eq!(amp.re, expected, epsilon = 1e-12);
    }
    assert_eq!(
        validate_normalization(state.amplitudes(), 1e-6).severity(),
        Severity::Exact
    );
}

#[test]
fn test_phase_flip_large_register() {
    let n = 15;
    let controls: Vec<QubitId> = QubitId::range(n - 1).collect();
    let mut state = StateVector::uniform(n).unwrap();
    let amp = state.amplitudes()[0].re;

    kernels::multi_controlled_phase_flip(&mut state, &controls, QubitId::new(n - 1)).unwrap();

    let last = (1usize << n) - 1;
    for (index, a) in state.amplitudes().iter().enumerate() {
        let expected = if index == last { -amp } else { amp };
        assert_abs_diff_eq!(a.re, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_gate_sequence_validated_up_front() {
    let mut state = StateVector::uniform(3).unwrap();
    let before = state.clone();
    let gates = [
        Gate::Hadamard(QubitId::new(0)),
        Gate::mcx(&[QubitId::new(1)], QubitId::new(1)),
    ];

    assert!(kernels::apply_gates(&mut state, &gates).is_err());
    assert_eq!(state, before);
}

#[test]
fn test_sampled_histogram_matches_marked_state() {
    // H on q0 and q2 of |000⟩: outcomes 000, 001, 100, 101 at 1/4 each
    let mut state = StateVector::new(3).unwrap();
    kernels::hadamard(&mut state, QubitId::new(0)).unwrap();
    kernels::hadamard(&mut state, QubitId::new(2)).unwrap();

    let counts = Sampler::seeded(17).sample(&state, 8000).unwrap();
    assert_eq!(counts.total_shots(), 8000);
    for bits in ["000", "001", "100", "101"] {
        assert!((counts.probability(bits) - 0.25).abs() < 0.03, "{}", bits);
    }
    for bits in ["010", "011", "110", "111"] {
        assert_eq!(counts.get(bits), 0);
    }
}
