//! Integration tests for chroma3 crates.
//!
//! Property checks that cut across arithmetic, HSV, colormaps, the binary
//! layout and the textual/serde forms. Inputs come from a seeded RNG so
//! failures reproduce.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chroma3_core::prelude::*;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const SAMPLES: usize = 500;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x00C0_1035)
    }

    fn any_color(rng: &mut StdRng) -> Color3 {
        Color3::new(
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
        )
    }

    fn unit_cube_color(rng: &mut StdRng) -> Color3 {
        Color3::new(
            rng.gen_range(0.01..0.99),
            rng.gen_range(0.01..0.99),
            rng.gen_range(0.01..0.99),
        )
    }

    #[test]
    fn test_field_fidelity() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let (r, g, b): (f32, f32, f32) = (
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
            );
            let c = Color3::new(r, g, b);
            assert_eq!((c.r, c.g, c.b), (r, g, b));
            assert_eq!((c[0], c[1], c[2]), (r, g, b));
        }
    }

    #[test]
    fn test_additive_inverse_is_exact_zero() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let c = any_color(&mut rng);
            assert_eq!(c + (-c), Color3::new(0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_scale_then_unscale() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let c = unit_cube_color(&mut rng);
            let s: f32 = rng.gen_range(0.001..1000.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            assert!(((c * s) / s).fuzzy_eq(c), "{c} * {s}");
        }
    }

    #[test]
    fn test_hsv_round_trip() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let c = unit_cube_color(&mut rng);
            if c.max() - c.min() < 1e-3 {
                continue;
            }
            let back = Color3::from_hsv(Color3::to_hsv(c));
            assert!(back.fuzzy_eq(c), "{c} -> {back}");
        }
    }

    #[test]
    fn test_hsv_components_in_unit_interval() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let hsv = Color3::to_hsv(unit_cube_color(&mut rng));
            for x in hsv.to_array() {
                assert!((0.0..=1.0).contains(&x), "{hsv:?}");
            }
            assert!(hsv.x < 1.0);
        }
    }

    #[test]
    fn test_packed_constants() {
        assert_eq!(Color3::from_argb(0xFF0000), Color3::red());
        assert_eq!(Color3::from_argb(0x000000), Color3::black());
        assert_eq!(Color3::from_argb(0xFFFFFF), Color3::white());
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let a = Color3::random(&mut rng);
            let b = Color3::random(&mut rng);
            let n = a.cross(b);
            assert_abs_diff_eq!(n.dot(a), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(n.dot(b), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_pastel_is_deterministic() {
        let first: Vec<Color3> = (0..256).map(Color3::pastel_map).collect();
        let second: Vec<Color3> = (0..256).map(Color3::pastel_map).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clamp_bounds() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let c = any_color(&mut rng).clamp(0.0, 1.0);
            for x in c.to_array() {
                assert!((0.0..=1.0).contains(&x));
            }
        }
    }

    #[test]
    fn test_binary_round_trip_through_file() {
        use std::fs::File;
        use std::io::{BufReader, BufWriter, Write};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radiance.bin");
        let mut rng = rng();
        let colors: Vec<Color3> = (0..64).map(|_| any_color(&mut rng)).collect();

        for endian in [Endian::Little, Endian::Big] {
            let mut out = BufWriter::new(File::create(&path).unwrap());
            for c in &colors {
                c.serialize(&mut out, endian).unwrap();
            }
            out.flush().unwrap();
            drop(out);

            assert_eq!(
                std::fs::metadata(&path).unwrap().len() as usize,
                colors.len() * Color3::SERIALIZED_SIZE
            );

            let mut input = BufReader::new(File::open(&path).unwrap());
            for c in &colors {
                let mut back = Color3::default();
                back.deserialize(&mut input, endian).unwrap();
                assert_eq!(back, *c);
            }
            let err = Color3::read_from(&mut input, endian).unwrap_err();
            assert!(err.is_io_error());
        }
    }

    #[test]
    fn test_text_round_trip() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let c = any_color(&mut rng);
            assert_eq!(c.to_string().parse::<Color3>().unwrap(), c);
        }
    }

    #[test]
    fn test_aliases_share_representation() {
        let p: Power3 = Color3::parse("Power3(1, 2, 3)").unwrap();
        let r: Radiance3 = p;
        let e: Irradiance3 = r * 2.0;
        assert_eq!(e, Color3::new(2.0, 4.0, 6.0));
        assert_eq!(std::mem::size_of::<Radiance3>(), 12);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Color3::new(1.0, 0.5, 0.25)).unwrap();
        assert_eq!(json, r#"{"r":1.0,"g":0.5,"b":0.25}"#);
        let back: Color3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color3::new(1.0, 0.5, 0.25));
        assert_eq!(serde_json::from_str::<Color3>("[0, 0, 1]").unwrap(), Color3::BLUE);
        assert_eq!(
            serde_json::from_str::<Color3>(r#""Color3::fromARGB(0xFF0000)""#).unwrap(),
            Color3::RED
        );
    }

    #[test]
    fn test_json_non_finite_round_trip() {
        let json = serde_json::to_string(&Color3::NAN).unwrap();
        assert_eq!(json, r#""Color3(NaN, NaN, NaN)""#);
        assert!(serde_json::from_str::<Color3>(&json).unwrap().is_nan());

        let c = Color3::new(f32::INFINITY, 0.0, f32::NEG_INFINITY);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#""Color3(inf, 0, -inf)""#);
        assert_eq!(serde_json::from_str::<Color3>(&json).unwrap(), c);
    }

    #[test]
    fn test_yaml_config_struct() {
        #[derive(serde::Deserialize)]
        struct Light {
            name: String,
            power: Power3,
            tint: Option<Color3>,
        }

        let yaml = r#"
- name: key
  power: [100, 90, 80]
  tint: Color3::orange()
- name: fill
  power: 25
"#;
        let lights: Vec<Light> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(lights.len(), 2);
        assert_eq!(lights[0].name, "key");
        assert_eq!(lights[0].power, Color3::new(100.0, 90.0, 80.0));
        assert_eq!(lights[0].tint, Some(Color3::ORANGE));
        assert_eq!(lights[1].power, Color3::splat(25.0));
        assert_eq!(lights[1].tint, None);
    }

    #[test]
    fn test_rainbow_matches_hsv() {
        for i in 0..=60 {
            let h = i as f32 / 60.0;
            let c = Color3::rainbow_color_map(h);
            assert_eq!(c, Color3::from_hsv(Vec3::new(h, 1.0, 1.0)));
        }
    }

    #[test]
    fn test_direction_is_unit_or_nan() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let d = any_color(&mut rng).direction();
            assert_abs_diff_eq!(d.length(), 1.0, epsilon = 1e-5);
        }
        assert!(Color3::ZERO.direction().is_nan());
    }
}
