use fastrand::Rng;
use pixcrypt_core::{Key, Method, PixelBuffer, TransformEngine, LOSSLESS_BAND};

const CASES: usize = 64;

fn random_buffer(rng: &mut Rng, height: usize, width: usize) -> PixelBuffer {
    let mut data = vec![0u8; height * width * 3];
    rng.fill(&mut data);
    PixelBuffer::new(height, width, data).expect("valid shape")
}

fn random_shape(rng: &mut Rng) -> (usize, usize) {
    match rng.u8(0..10) {
        0 => (0, 0),
        1 => (1, 1),
        2 => (0, rng.usize(1..20)),
        3 => (rng.usize(1..20), 0),
        4 => (rng.usize(200..400), rng.usize(200..400)),
        _ => (rng.usize(1..40), rng.usize(1..40)),
    }
}

#[test]
fn exact_methods_round_trip_for_random_shapes_and_keys() {
    let mut rng = Rng::with_seed(0x5eed);

    for _ in 0..CASES {
        let (height, width) = random_shape(&mut rng);
        let plain = random_buffer(&mut rng, height, width);
        let engine = TransformEngine::new(rng.i64(..));

        for method in [Method::XOR, Method::SWAP, Method::MATH] {
            let encoded = engine.encode(&plain, method);
            assert_eq!(encoded.shape(), plain.shape(), "{method}");
            assert_eq!(
                engine.decode(&encoded, method),
                plain,
                "{method} on {height}x{width}"
            );
        }
    }
}

#[test]
fn shuffle_round_trips_exactly_inside_the_noise_band() {
    let mut rng = Rng::with_seed(0xc0ffee);

    for _ in 0..CASES {
        let (height, width) = random_shape(&mut rng);
        let data = (0..height * width * 3)
            .map(|_| rng.u8(LOSSLESS_BAND))
            .collect();
        let plain = PixelBuffer::new(height, width, data).expect("valid shape");
        let engine = TransformEngine::new(rng.i64(..));

        let encoded = engine.encode(&plain, Method::SHUFFLE);
        assert_eq!(encoded.shape(), plain.shape());
        assert_eq!(engine.decode(&encoded, Method::SHUFFLE), plain);
    }
}

#[test]
fn shuffle_deviation_is_bounded_everywhere() {
    let mut rng = Rng::with_seed(0xbad);

    for _ in 0..CASES {
        let (height, width) = random_shape(&mut rng);
        let plain = random_buffer(&mut rng, height, width);
        let engine = TransformEngine::new(rng.i64(..));

        let decoded = engine.decode(&engine.encode(&plain, Method::SHUFFLE), Method::SHUFFLE);
        assert_eq!(decoded.shape(), plain.shape());
        for (before, after) in plain.as_bytes().iter().zip(decoded.as_bytes()) {
            if LOSSLESS_BAND.contains(before) {
                assert_eq!(before, after);
            } else {
                assert!(before.abs_diff(*after) <= 50, "{before} became {after}");
            }
        }
    }
}

#[test]
fn engines_with_the_same_key_agree() {
    let mut rng = Rng::with_seed(1);
    let plain = random_buffer(&mut rng, 31, 17);
    let first = TransformEngine::new(987_654_321);
    let second = TransformEngine::new(987_654_321);

    for method in Method::ALL {
        assert_eq!(first.encode(&plain, method), second.encode(&plain, method));
        assert_eq!(first.decode(&plain, method), second.decode(&plain, method));
    }
}

#[test]
fn xor_and_math_are_key_sensitive() {
    let mut rng = Rng::with_seed(2);

    for _ in 0..CASES {
        let plain = random_buffer(&mut rng, 8, 8);
        let a = rng.i64(..);
        let mut b = rng.i64(..);
        while Key::new(a).residue() == Key::new(b).residue() {
            b = rng.i64(..);
        }

        for method in [Method::XOR, Method::MATH] {
            assert_ne!(
                TransformEngine::new(a).encode(&plain, method),
                TransformEngine::new(b).encode(&plain, method),
                "{method} with keys {a} and {b}"
            );
        }
    }
}

#[test]
fn xor_is_self_inverse() {
    let engine = TransformEngine::new(7);
    let plain = PixelBuffer::new(1, 1, vec![10, 20, 30]).expect("valid shape");

    let once = engine.encode(&plain, Method::XOR);
    assert_eq!(once, engine.encode(&plain, Method::XOR));
    assert_eq!(engine.encode(&once, Method::XOR), plain);
    assert_eq!(engine.decode(&plain, Method::XOR), once);
}

#[test]
fn math_with_key_123_maps_zeros_to_zeros() {
    let engine = TransformEngine::new(123);
    let zeros = PixelBuffer::from_shape(&[2, 2, 3], vec![0; 12]).expect("valid shape");

    let encoded = engine.encode(&zeros, Method::MATH);
    assert_eq!(encoded.as_bytes(), &[(123 ^ 123) as u8; 12]);
    assert_eq!(engine.decode(&encoded, Method::MATH), zeros);
}

#[test]
fn a_shared_engine_gives_identical_results_across_threads() {
    let mut rng = Rng::with_seed(3);
    let plain = random_buffer(&mut rng, 64, 48);
    let engine = TransformEngine::new(-17);
    let expected: Vec<_> = Method::ALL
        .iter()
        .map(|&m| engine.encode(&plain, m))
        .collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let (engine, plain) = (&engine, &plain);
                s.spawn(move || {
                    let method = Method::ALL[i % Method::ALL.len()];
                    (i % Method::ALL.len(), engine.encode(plain, method))
                })
            })
            .collect();

        for handle in handles {
            let (index, encoded) = handle.join().expect("worker panicked");
            assert_eq!(encoded, expected[index]);
        }
    });
}
