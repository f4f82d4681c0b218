use super::*;

#[test]
fn finds_the_classic_subsequence() {
    let trace = lcs("ABCBDAB", "BDCABA").unwrap();
    let last = trace.last().unwrap();
    match &last.event {
        LcsEvent::Complete { lcs, length } => {
            assert_eq!(*length, 4);
            assert_eq!(lcs.chars().count(), 4);
            assert_eq!(lcs, &last.collected);
        }
        other => panic!("expected complete, got {other:?}"),
    }
    assert_eq!(last.table[7][6], 4);
    assert_eq!(trace.count("backtrack"), 4);
    assert_eq!(trace.count("match") + trace.count("max"), 7 * 6);
}

#[test]
fn backtrack_collects_a_growing_suffix() {
    let trace = lcs("AXB", "AB").unwrap();
    let collected: Vec<&str> = trace
        .iter()
        .filter(|s| s.action() == "backtrack")
        .map(|s| s.collected.as_str())
        .collect();
    assert_eq!(collected, vec!["B", "AB"]);
}

#[test]
fn disjoint_strings_have_empty_lcs() {
    let trace = lcs("abc", "xyz").unwrap();
    assert_eq!(trace.count("match"), 0);
    assert_eq!(
        trace.last().unwrap().event,
        LcsEvent::Complete {
            lcs: String::new(),
            length: 0
        }
    );
    assert_eq!(lcs("", "").unwrap().actions(), vec!["complete"]);
}

#[test]
fn long_strings_are_malformed() {
    let long = "a".repeat(Limits::MAX_LCS_LEN + 1);
    assert!(lcs(&long, "a").is_err());
}

#[derive(Clone, Default)]
struct SpanFields(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for SpanFields {
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if attrs.metadata().name() == "lcs" {
            let mut names = self.0.lock().unwrap();
            names.extend(attrs.metadata().fields().iter().map(|f| f.name().to_owned()));
        }
    }
}

#[test]
fn span_records_lengths_not_strings() {
    use tracing_subscriber::layer::SubscriberExt as _;

    let fields = SpanFields::default();
    let subscriber = tracing_subscriber::registry().with(fields.clone());
    tracing::subscriber::with_default(subscriber, || lcs("ABCB", "BCA").unwrap());

    let names = fields.0.lock().unwrap().clone();
    assert_eq!(names, ["a_len", "b_len"]);
}
