use proptest::prelude::*;
use seqmorph::describe::describe;
use seqmorph::sequence_processor::readers::MemorySource;
use seqmorph::sequence_processor::{compose, SequenceRecord, TransformOptions};
use seqmorph::types::FileFormat;

fn collection(seqs: &[String]) -> Vec<SequenceRecord> {
    seqs.iter()
        .enumerate()
        .map(|(i, s)| SequenceRecord::new(format!("seq{i}"), "", s.as_bytes().to_vec()))
        .collect()
}

fn transform(options: &TransformOptions, records: Vec<SequenceRecord>) -> Vec<SequenceRecord> {
    let source = MemorySource::new("mem", FileFormat::Fasta, records);
    compose(options, &source)
        .unwrap()
        .collect::<seqmorph::Result<Vec<_>>>()
        .unwrap()
}

fn alignment() -> impl Strategy<Value = Vec<String>> {
    (0usize..12).prop_flat_map(|width| {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!['A', 'C', '-']), width)
                .prop_map(|chars| chars.into_iter().collect::<String>()),
            0..8,
        )
    })
}

fn sequences() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ACGT]{0,6}", 0..10)
}

proptest! {
    #[test]
    fn squeeze_is_idempotent(seqs in alignment()) {
        let options = TransformOptions { squeeze: true, ..Default::default() };
        let once = transform(&options, collection(&seqs));
        let twice = transform(&options, once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn head_yields_leading_records(seqs in sequences(), n in 0usize..12) {
        let records = collection(&seqs);
        let options = TransformOptions { head: Some(n), ..Default::default() };
        let head = transform(&options, records.clone());
        prop_assert_eq!(head.len(), n.min(records.len()));
        prop_assert_eq!(&head[..], &records[..head.len()]);
    }

    #[test]
    fn tail_is_reversed_head_of_reversed(seqs in sequences(), n in 0usize..12) {
        let records = collection(&seqs);
        let tail = transform(&TransformOptions { tail: Some(n), ..Default::default() }, records.clone());

        let mut reversed = records;
        reversed.reverse();
        let mut expected = transform(&TransformOptions { head: Some(n), ..Default::default() }, reversed);
        expected.reverse();
        prop_assert_eq!(tail, expected);
    }

    #[test]
    fn describe_counts_every_record(seqs in sequences()) {
        let records = collection(&seqs);
        let summary = describe("mem", records.iter().cloned().map(Ok)).unwrap();
        prop_assert_eq!(summary.count as usize, records.len());
    }

    #[test]
    fn alignment_flag_follows_running_max(lengths in prop::collection::vec(0usize..5, 0..10)) {
        let records: Vec<_> = lengths
            .iter()
            .map(|&len| SequenceRecord::new("r", "", vec![b'A'; len]))
            .collect();
        let summary = describe("mem", records.into_iter().map(Ok)).unwrap();

        let mut expected = true;
        for i in 1..lengths.len() {
            let running_max = lengths[..i].iter().copied().max().unwrap_or(0);
            if lengths[i] != running_max {
                expected = false;
            }
        }
        prop_assert_eq!(summary.is_alignment, expected);
    }
}
