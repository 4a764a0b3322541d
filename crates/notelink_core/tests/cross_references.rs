use notelink_core::{
    backlinks, outgoing_links, resolve, rewrite_wiki_links, EngineConfig, LinkIndex,
    LinkMatchPolicy, LinkResolver, Note,
};

fn plan_fixture() -> (Note, Note, Note) {
    let a = Note::new("Plan", "the plan itself");
    let b = Note::new("Project Plan", "bigger picture");
    let c = Note::new("Weekly", "follow up on [[Plan]]");
    (a, b, c)
}

#[test]
fn backlinks_are_exact_while_resolution_is_loose() {
    let (a, b, c) = plan_fixture();
    let notes = vec![a.clone(), b.clone(), c.clone()];

    let found = backlinks(a.id, "Plan", &notes);
    assert_eq!(found, vec![&c]);
    assert!(backlinks(b.id, "Project Plan", &notes).is_empty());

    let pair = vec![a.clone(), b.clone()];
    assert_eq!(resolve("Plan", &pair).map(|note| note.id), Some(a.id));
}

#[test]
fn legacy_resolution_uses_iteration_order() {
    let (a, b, _) = plan_fixture();
    let notes = vec![b.clone(), a.clone()];

    assert_eq!(resolve("Plan", &notes).map(|note| note.id), Some(b.id));

    let resolver = LinkResolver::from_config(&EngineConfig::default());
    assert_eq!(
        resolver.resolve("Plan", &notes).map(|note| note.id),
        Some(a.id)
    );
}

#[test]
fn self_reference_is_not_a_backlink() {
    let looped = Note::new("Journal", "see [[journal]] again");
    let other = Note::new("Other", "[[Journal]]");
    let notes = vec![looped.clone(), other.clone()];

    let found = backlinks(looped.id, &looped.title, &notes);
    assert_eq!(found, vec![&other]);
}

#[test]
fn renaming_invalidates_backlinks_until_text_is_rewritten() {
    let (mut a, _, mut c) = plan_fixture();
    a.title = "Roadmap".to_string();
    let notes = vec![a.clone(), c.clone()];
    assert!(backlinks(a.id, &a.title, &notes).is_empty());

    c.content = rewrite_wiki_links(&c.content, "Plan", "Roadmap").expect("link rewritten");
    let notes = vec![a.clone(), c.clone()];
    assert_eq!(backlinks(a.id, &a.title, &notes), vec![&c]);
}

#[test]
fn index_agrees_with_full_scan() {
    let notes = vec![
        Note::new("Plan", "[[project plan]] and [[PLAN]]"),
        Note::new("Project Plan", "[[[Plan]]] nested"),
        Note::new("Weekly", "[[Plan]] ![[[Plan]]|size:small](x.png)"),
        Note::new("Empty", ""),
        Note::new("Loose", "[[Plan"),
    ];
    let index = LinkIndex::build(&notes);

    for note in &notes {
        assert_eq!(
            index.backlinks(note.id, &note.title, &notes),
            backlinks(note.id, &note.title, &notes),
            "title: {}",
            note.title
        );
    }
}

#[test]
fn index_follows_note_edits() {
    let (a, b, mut c) = plan_fixture();
    let mut notes = vec![a.clone(), b.clone(), c.clone()];
    let mut index = LinkIndex::build(&notes);

    c.content = "now about [[Project Plan]]".to_string();
    index.upsert(&c);
    notes[2] = c.clone();

    assert!(index.backlinks(a.id, &a.title, &notes).is_empty());
    assert_eq!(index.backlinks(b.id, &b.title, &notes), vec![&c]);

    index.remove(c.id);
    assert!(index.backlinks(b.id, &b.title, &notes).is_empty());
}

#[test]
fn outgoing_links_follow_configured_policy() {
    let (a, b, _) = plan_fixture();
    let notes = vec![b.clone(), a.clone()];
    let content = "[[Plan]] [[Nowhere]]";

    let exact_first = outgoing_links(content, &notes, &LinkResolver::default());
    assert_eq!(exact_first[0].target, Some(a.id));
    assert!(exact_first[1].is_broken());

    let legacy = outgoing_links(
        content,
        &notes,
        &LinkResolver::new(LinkMatchPolicy::FirstMatch),
    );
    assert_eq!(legacy[0].target, Some(b.id));
}
