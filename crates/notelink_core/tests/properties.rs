use notelink_core::{
    backlinks, extract_wiki_links, parse_content, reconstruct, tokenize, LinkIndex, Note,
};
use proptest::prelude::*;

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("[[".to_string()),
        Just("]]".to_string()),
        Just("![".to_string()),
        Just("](".to_string()),
        Just(")".to_string()),
        Just("|size:large".to_string()),
        Just("|offsetX:".to_string()),
        Just("Plan".to_string()),
        Just("odd]".to_string()),
        r"[\[\]!()|:abPé✓ \n]{1,4}",
    ]
}

fn note_body() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..24).prop_map(|parts| parts.concat())
}

fn note_title() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Plan".to_string()),
        Just("PLAN".to_string()),
        Just("Project Plan".to_string()),
        Just("odd]".to_string()),
        Just("a]]b".to_string()),
        Just("[x".to_string()),
        r"[abé\[\]]{1,3}",
    ]
}

fn note_collection() -> impl Strategy<Value = Vec<Note>> {
    prop::collection::vec((note_title(), note_body()), 1..6).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(title, body)| Note::new(title, body))
            .collect()
    })
}

fn assert_index_matches_scan(index: &LinkIndex, notes: &[Note]) -> Result<(), TestCaseError> {
    for note in notes {
        prop_assert_eq!(
            index.backlinks(note.id, &note.title, notes),
            backlinks(note.id, &note.title, notes),
            "title: {:?}",
            &note.title
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn reconstruct_restores_any_input(content in note_body()) {
        prop_assert_eq!(reconstruct(&parse_content(&content)), content);
    }

    #[test]
    fn reconstruct_restores_arbitrary_text(content in r"[\[\]!()|:a-zé✓ \n]{0,80}") {
        prop_assert_eq!(reconstruct(&parse_content(&content)), content);
    }

    #[test]
    fn spans_tile_the_input(content in note_body()) {
        let mut cursor = 0;
        for spanned in tokenize(&content) {
            prop_assert_eq!(spanned.range.start, cursor);
            prop_assert_eq!(&content[spanned.range.clone()], spanned.segment.to_source());
            cursor = spanned.range.end;
        }
        prop_assert_eq!(cursor, content.len());
    }

    #[test]
    fn image_free_input_matches_wiki_extractor(content in r"[\[\]()|:abé ]{0,60}") {
        prop_assert_eq!(parse_content(&content), extract_wiki_links(&content));
    }

    #[test]
    fn index_agrees_with_scan(notes in note_collection()) {
        let index = LinkIndex::build(&notes);
        assert_index_matches_scan(&index, &notes)?;
    }

    #[test]
    fn index_agrees_with_scan_after_edits(
        mut notes in note_collection(),
        edited_body in note_body(),
        remove_last in any::<bool>(),
    ) {
        let mut index = LinkIndex::build(&notes);

        notes[0].content = edited_body;
        index.upsert(&notes[0]);
        if remove_last && notes.len() > 1 {
            if let Some(removed) = notes.pop() {
                index.remove(removed.id);
            }
        }

        assert_index_matches_scan(&index, &notes)?;
    }
}
