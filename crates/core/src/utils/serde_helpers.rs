//! Serde utility helpers for case-insensitive deserialization

/// Macro to implement case-insensitive deserialization for unit enums
///
/// Snapshots produced by different tools disagree on casing (`running`,
/// `Running`, `RUNNING`); all of them map onto the same variant.
///
/// Usage:
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     MyEnum,
///     Variant1 => "variant1",
///     Variant2 => "variant2"
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:expr),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    enum Mode {
        Replicated,
        Global,
        ReplicatedJob,
    }

    impl_case_insensitive_deserialize!(
        Mode,
        Replicated => "replicated",
        Global => "global",
        ReplicatedJob => "replicatedjob"
    );

    #[test]
    fn test_case_insensitive_deserialize() {
        let result: Mode = serde_json::from_str(r#""global""#).unwrap();
        assert_eq!(result, Mode::Global);

        let result: Mode = serde_json::from_str(r#""GLOBAL""#).unwrap();
        assert_eq!(result, Mode::Global);

        let result: Mode = serde_json::from_str(r#""ReplicatedJob""#).unwrap();
        assert_eq!(result, Mode::ReplicatedJob);

        let result: Result<Mode, _> = serde_json::from_str(r#""sharded""#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown variant 'sharded'"));
        assert!(err.contains("expected one of: replicated, global, replicatedjob"));
    }
}
