use anycors::{AdmissionPolicy, ProxyOptions, decode_target};
use proptest::prelude::*;
use std::fmt::Write;

/// Encodes every byte, including the unreserved ones; decoding must still
/// invert it exactly.
fn percent_encode_all(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        let _ = write!(encoded, "%{byte:02X}");
    }
    encoded
}

proptest! {
    #[test]
    fn decoding_inverts_full_encoding(input in ".*") {
        let encoded = percent_encode_all(&input);

        prop_assert_eq!(decode_target(&encoded).expect("fully encoded input decodes"), input);
    }

    #[test]
    fn plain_strings_pass_through_untouched(input in "[A-Za-z0-9._~/:?=&-]*") {
        prop_assert_eq!(decode_target(&input).expect("plain input decodes"), input);
    }

    #[test]
    fn truncated_escapes_never_decode(prefix in "[a-z]{0,8}", digit in "[0-9a-fA-F]?") {
        // A trailing % with fewer than two hex digits is always malformed.
        let input = format!("{prefix}%{digit}");

        prop_assert!(decode_target(&input).is_err());
    }

    #[test]
    fn default_policy_admits_any_target_and_origin(target in ".*", origin in ".*") {
        let policy = AdmissionPolicy::compile(&ProxyOptions::default())
            .expect("default configuration compiles");

        prop_assert!(policy.admit(&target, Some(&origin)));
        prop_assert!(policy.admit(&target, None));
    }
}
