use proptest::prelude::*;
use wallet_blocks::writer::{GeneratedBlock, merge};
use wallet_blocks::{find_region, parse_regions};

const TAG: &str = "react-native-wallet-libs-repository";

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 {}()=\"'/.]{0,40}", 0..12).prop_map(|lines| lines.join("\n"))
}

fn body() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 {}()\t]{0,30}", 1..6).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn merge_is_idempotent(doc in document(), body in body()) {
        let block = GeneratedBlock::new(TAG, "//", body);
        let once = merge(doc, &block);
        let twice = merge(once.contents.clone(), &block);

        prop_assert!(once.did_merge);
        prop_assert!(!twice.did_merge);
        prop_assert_eq!(twice.contents, once.contents);
    }

    #[test]
    fn repeated_merges_leave_one_region(doc in document(), bodies in prop::collection::vec(body(), 1..5)) {
        let mut contents = doc;
        for body in &bodies {
            contents = merge(contents, &GeneratedBlock::new(TAG, "//", body.clone())).contents;
        }

        let regions = parse_regions(&contents);
        prop_assert_eq!(regions.len(), 1);
        let last = bodies.last().unwrap();
        prop_assert_eq!(&find_region(&contents, TAG).unwrap().body, last);
    }

    #[test]
    fn differing_body_clears(doc in document(), a in body(), b in body()) {
        prop_assume!(a != b);
        let first = merge(doc, &GeneratedBlock::new(TAG, "//", a)).contents;
        let second = merge(first, &GeneratedBlock::new(TAG, "//", b));

        prop_assert!(second.did_clear);
        prop_assert!(second.did_merge);
    }
}
