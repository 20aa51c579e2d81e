use crate::parser::{BLOCK_SEPARATOR, LINE_SEPARATOR};
use crate::srt::SubtitleEntry;

pub fn serialise(subs: &[SubtitleEntry]) -> String {
    let mut out = String::new();
    for (i, sub) in subs.iter().enumerate() {
        if i > 0 {
            out.push_str(BLOCK_SEPARATOR);
        }
        push_sub(&mut out, sub);
    }
    out
}

fn push_sub(out: &mut String, sub: &SubtitleEntry) {
    out.push_str(&sub.id);
    out.push_str(LINE_SEPARATOR);
    out.push_str(sub.time.as_deref().unwrap_or_default());
    out.push_str(LINE_SEPARATOR);
    out.push_str(sub.sub.as_deref().unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    macro_rules! test_serialise {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, expected): (Vec<SubtitleEntry>, &str) = $value;

                assert_eq!(serialise(&input), expected);
            }
        )*
        }
    }

    test_serialise! {
        test_serialise_none: (vec![], ""),
        test_serialise_one: (vec![SubtitleEntry::new("1", "t", "a")], "1\nt\na"),
        test_serialise_two: (
            vec![SubtitleEntry::new("1", "t", "a"), SubtitleEntry::new("2", "u", "b")],
            "1\nt\na\n\n2\nu\nb"
        ),
        test_serialise_absent: (
            vec![SubtitleEntry { id: "7".to_string(), time: None, sub: None }],
            "7\n\n"
        ),
        test_serialise_absent_sub: (
            vec![SubtitleEntry { id: "7".to_string(), time: Some("t".to_string()), sub: None }],
            "7\nt\n"
        ),
    }

    #[test]
    fn well_formed_text_is_reproduced() {
        let text = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:03,000 --> 00:00:04,000\nWorld";

        assert_eq!(serialise(&parse(text)), text);
    }

    fn arb_entries() -> impl Strategy<Value = Vec<SubtitleEntry>> {
        prop::collection::vec(("[^\n]{1,20}", "[^\n]{1,40}"), 0..20).prop_map(|fields| {
            fields
                .into_iter()
                .enumerate()
                .map(|(i, (time, sub))| SubtitleEntry::new((i + 1).to_string(), time, sub))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn parse_inverts_serialise(subs in arb_entries()) {
            prop_assume!(!subs.is_empty());
            prop_assert_eq!(parse(&serialise(&subs)), subs);
        }
    }
}
