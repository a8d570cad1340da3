//! Configuration test suite
//!
//! Constants consistency and loading curve parameter sets from JSON/TOML.

mod constants_tests {
    use wallet_config::*;

    #[test]
    fn test_point_sizes_follow_coordinate_size() {
        assert_eq!(COMPRESSED_POINT_SIZE, 33);
        assert_eq!(UNCOMPRESSED_POINT_SIZE, 65);
        assert_eq!(COMPACT_SIGNATURE_SIZE, 64);
        assert_eq!(secp256k1::P.len(), 2 * SECP256K1_COORDINATE_SIZE);
        assert_eq!(secp256k1::N.len(), 2 * SECP256K1_COORDINATE_SIZE);
    }

    #[test]
    fn test_varint_tags_are_ordered() {
        assert!(VARINT_TAG_U16 < VARINT_TAG_U32);
        assert!(VARINT_TAG_U32 < VARINT_TAG_U64);
        assert_eq!(SEC1_TAG_EVEN + 1, SEC1_TAG_ODD);
    }
}

mod named_curve_tests {
    use wallet_config::NamedCurve;

    #[test]
    fn test_named_curve_parse_and_display() {
        assert_eq!("secp256k1".parse::<NamedCurve>().unwrap(), NamedCurve::Secp256k1);
        assert_eq!("Bitcoin".parse::<NamedCurve>().unwrap(), NamedCurve::Secp256k1);
        assert_eq!("CUSTOM".parse::<NamedCurve>().unwrap(), NamedCurve::Custom);
        assert!("p256".parse::<NamedCurve>().is_err());

        for curve in [NamedCurve::Secp256k1, NamedCurve::Custom] {
            assert_eq!(curve.to_string().parse::<NamedCurve>().unwrap(), curve);
        }
    }
}

mod curve_config_tests {
    use wallet_config::{CurveConfig, GroupConfig, NamedCurve};

    #[test]
    fn test_default_is_secp256k1() {
        let config = CurveConfig::default();
        assert_eq!(config, CurveConfig::secp256k1());
        assert_eq!(config.name, NamedCurve::Secp256k1);
        assert!(config.has_group());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = CurveConfig::secp256k1();
        let json = serde_json::to_string(&config).unwrap();
        let decoded: CurveConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_load_custom_curve_from_toml() {
        let source = r#"
            name = "Custom"
            a = "2"
            b = "3"
            p = "61"
        "#;
        let config: CurveConfig = toml::from_str(source).unwrap();
        assert_eq!(config.name, NamedCurve::Custom);
        assert_eq!(config.p, "61");
        assert!(!config.has_group());
    }

    #[test]
    fn test_load_group_from_toml() {
        let source = r#"
            a = "0"
            b = "7"
            p = "0x43"

            [group]
            n = "0x4f"
            gx = "0x02"
            gy = "0x16"
        "#;
        let config: CurveConfig = toml::from_str(source).unwrap();
        assert_eq!(config.name, NamedCurve::Secp256k1);
        assert_eq!(
            config.group,
            Some(GroupConfig {
                n: "0x4f".to_string(),
                gx: "0x02".to_string(),
                gy: "0x16".to_string(),
            })
        );
    }

    #[test]
    fn test_group_is_omitted_when_absent() {
        let mut config = CurveConfig::secp256k1();
        config.group = None;
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("group").is_none());
    }
}
