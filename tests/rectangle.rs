use qrect::prelude::*;

/// Classical answer: sorted lengths must come as two equal pairs.
fn classical(lengths: [Length; 4]) -> bool {
    let mut s = lengths;
    s.sort_unstable();
    s[0] == s[1] && s[2] == s[3]
}

fn permutations(v: [Length; 4]) -> Vec<[Length; 4]> {
    let mut out = vec![];
    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    let idx = [a, b, c, d];
                    let mut seen = [false; 4];
                    idx.iter().for_each(|i| seen[*i] = true);
                    if seen.iter().all(|s| *s) {
                        out.push([v[a], v[b], v[c], v[d]]);
                    }
                }
            }
        }
    }
    out
}

#[test]
fn test_scenarios() -> RectangleResult<()> {
    assert!(is_rectangle(5, 6, 6, 5)?);
    assert!(!is_rectangle(5, 6, 7, 8)?);
    assert!(is_rectangle(3, 3, 3, 3)?);
    assert!(is_rectangle(2, 2, 5, 5)?);
    assert!(!is_rectangle(1, 2, 3, 3)?);
    assert!(is_rectangle(2, 4, 4, 2)?);
    Ok(())
}

#[test]
fn test_three_equal() -> RectangleResult<()> {
    assert!(!is_rectangle(4, 4, 4, 1)?);
    assert!(!is_rectangle(1, 4, 4, 4)?);
    Ok(())
}

#[test]
fn test_permutation_invariance() -> RectangleResult<()> {
    let checker = RectangleChecker::<f64>::default();
    for lengths in [[5, 6, 6, 5], [5, 6, 7, 8], [1, 2, 3, 3], [7, 1, 7, 1], [9, 9, 2, 2]] {
        let expected = classical(lengths);
        let perms = permutations(lengths);
        assert_eq!(perms.len(), 24);
        for [a, b, c, d] in perms {
            assert_eq!(checker.is_rectangle(a, b, c, d)?, expected, "{:?}", [a, b, c, d]);
        }
    }
    Ok(())
}

#[test]
fn test_matches_classical_small() -> RectangleResult<()> {
    let checker = RectangleChecker::<f64>::default();
    for a in 1..5 {
        for b in 1..5 {
            for c in 1..5 {
                for d in 1..5 {
                    assert_eq!(
                        checker.is_rectangle(a, b, c, d)?,
                        classical([a, b, c, d]),
                        "{:?}",
                        [a, b, c, d]
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_largest_lengths() -> RectangleResult<()> {
    assert!(is_rectangle(31, 30, 30, 31)?);
    assert!(!is_rectangle(31, 30, 29, 31)?);
    Ok(())
}

#[test]
fn test_overflow() {
    let res = is_rectangle(32, 1, 1, 32);
    assert_eq!(
        res,
        Err(RectangleError::EncodingOverflow { value: 32, bits: 6 })
    );
    assert!(!res.unwrap_err().is_internal());

    let config = RectangleConfig::default().with_register_bits(2);
    let checker = RectangleChecker::<f64>::new(config).unwrap();
    assert_eq!(
        checker.is_rectangle(1, 2, 4, 1),
        Err(RectangleError::EncodingOverflow { value: 4, bits: 2 })
    );
}

#[test]
fn test_zero_length() {
    for lengths in [[0, 0, 9, 9], [0, 0, 0, 0], [3, 3, 3, 0]] {
        let [a, b, c, d] = lengths;
        let res = is_rectangle(a, b, c, d);
        assert_eq!(res, Err(RectangleError::InvalidLength { value: 0 }));
        assert!(!res.unwrap_err().is_internal());
    }
    let mut rng = qrect::rand::thread_rng();
    assert_eq!(
        RectangleChecker::<f64>::default().sampled_report([5, 0, 5, 0], 10, &mut rng),
        Err(RectangleError::InvalidLength { value: 0 })
    );
}

#[test]
fn test_batch_matches_single() -> RectangleResult<()> {
    let checker = RectangleChecker::<f64>::default();
    let quads = vec![
        [5, 6, 6, 5],
        [5, 6, 7, 8],
        [3, 3, 3, 3],
        [2, 2, 5, 5],
        [1, 2, 3, 3],
        [40, 1, 1, 40],
        [0, 7, 7, 0],
    ];
    let batch = checker.are_rectangles(&quads);
    assert_eq!(batch.len(), quads.len());
    for (res, [a, b, c, d]) in batch.into_iter().zip(quads) {
        assert_eq!(res, checker.is_rectangle(a, b, c, d));
    }
    Ok(())
}

#[test]
fn test_report_agrees() -> RectangleResult<()> {
    let checker = RectangleChecker::<f64>::default();
    for lengths in [[5, 6, 6, 5], [5, 6, 7, 8], [3, 3, 3, 3], [2, 2, 5, 5], [1, 2, 3, 3]] {
        let [a, b, c, d] = lengths;
        let report = checker.report(a, b, c, d)?;
        assert_eq!(report.is_rectangle, checker.is_rectangle(a, b, c, d)?);
        assert_eq!(report.comparisons.len(), 3);
        for (_, _, c) in &report.comparisons {
            let expected = if c.equal { 1.0 } else { 0.5 };
            assert!((c.probability - expected).abs() < 1e-12);
        }
    }
    Ok(())
}

#[test]
fn test_all_equal_report() -> RectangleResult<()> {
    let report = RectangleChecker::<f64>::default().report(3, 3, 3, 3)?;
    assert!(report.comparisons.iter().all(|(_, _, c)| c.equal));
    Ok(())
}

#[test]
fn test_sampled_report() -> RectangleResult<()> {
    use qrect::rand::rngs::StdRng;
    use qrect::rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(5);
    let checker = RectangleChecker::<f64>::default();
    let report = checker.sampled_report([2, 2, 5, 5], 300, &mut rng)?;
    assert!(report.is_rectangle);
    // (2,5) vs (2,5) never reads 1.
    assert_eq!(report.comparisons[1].2.probability, 1.0);
    assert_eq!(
        checker.sampled_report([2, 2, 5, 5], 0, &mut rng),
        Err(RectangleError::InvalidShots)
    );
    Ok(())
}
