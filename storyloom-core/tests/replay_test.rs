use loomscript_core::{parse, Instruction, Script};
use storyloom_core::runtime::{Asset, AssetTable, Character, Library, Scene};
use storyloom_core::replay;

fn library() -> Library {
    let mut characters: AssetTable<Character> = AssetTable::new();
    characters.register("Alice", "alice.png");
    characters.insert(Character::new("bob".into(), "Bob".into(), "bob.png".into()));
    let mut scenes: AssetTable<Scene> = AssetTable::new();
    scenes.register("Cafe", "cafe.png");
    scenes.register("Bedroom", "bedroom.png");
    Library::new(characters, scenes)
}

fn script(body: Vec<Instruction>) -> Script {
    Script { body }
}

#[test]
fn test_end_to_end_cursor_states() {
    let sc = parse("scene Cafe\nshow Alice\nAlice \"Hi\"\nhide Alice\n\"The end.\"");
    assert_eq!(sc.len(), 5);
    let lib = library();

    let at2 = replay(&sc, 2, &lib);
    assert_eq!(at2.background_id(), Some("Cafe"));
    assert_eq!(at2.visible_ids(), vec!["Alice"]);
    assert_eq!(at2.speaker(), Some("Alice"));
    assert_eq!(at2.text(), Some("Hi"));

    let at4 = replay(&sc, 4, &lib);
    assert_eq!(at4.background_id(), Some("Cafe"));
    assert!(at4.visible.is_empty());
    assert_eq!(at4.speaker(), None);
    assert_eq!(at4.text(), Some("The end."));
}

#[test]
fn test_dangling_show_is_noop() {
    let sc = parse("show Ghost");
    let state = replay(&sc, 0, &Library::default());
    assert!(state.visible.is_empty());
}

#[test]
fn test_dangling_scene_clears_background() {
    let sc = script(vec![Instruction::scene("Cafe"), Instruction::scene("Moon")]);
    let lib = library();
    assert_eq!(replay(&sc, 0, &lib).background_id(), Some("Cafe"));
    assert_eq!(replay(&sc, 1, &lib).background, None);
}

#[test]
fn test_dialogue_survives_scene_change() {
    let sc = script(vec![Instruction::say("Alice", "x"), Instruction::scene("Bedroom")]);
    let state = replay(&sc, 1, &library());
    assert_eq!(state.background_id(), Some("Bedroom"));
    assert_eq!(state.speaker(), Some("Alice"));
    assert_eq!(state.text(), Some("x"));
    assert_eq!(state.dialogue.as_ref().map(|d| d.source), Some(0));
}

#[test]
fn test_hide_is_idempotent() {
    let sc = script(vec![Instruction::hide("Alice"), Instruction::hide("Alice")]);
    let state = replay(&sc, 1, &library());
    assert!(state.visible.is_empty());
}

#[test]
fn test_speaker_resolution() {
    let sc = script(vec![
        Instruction::say("bob", "hey"),
        Instruction::say("Stranger", "who?"),
    ]);
    let lib = library();
    assert_eq!(replay(&sc, 0, &lib).speaker(), Some("Bob"));
    assert_eq!(replay(&sc, 1, &lib).speaker(), Some("Stranger"));
}

#[test]
fn test_empty_display_name_falls_back_to_id() {
    let mut characters: AssetTable<Character> = AssetTable::new();
    characters.insert(Character::new("anon".into(), String::new(), "x.png".into()));
    let lib = Library::new(characters, AssetTable::new());
    let sc = script(vec![Instruction::say("anon", "...")]);
    assert_eq!(replay(&sc, 0, &lib).speaker(), Some("anon"));
}

#[test]
fn test_show_again_updates_position_in_place() {
    let sc = script(vec![
        Instruction::show("Alice", "left"),
        Instruction::show("bob", "center"),
        Instruction::show("Alice", "right"),
    ]);
    let state = replay(&sc, 2, &library());
    assert_eq!(state.visible.len(), 2);
    assert_eq!(state.visible[0].character.id, "Alice");
    assert_eq!(state.sprite("Alice").map(|s| s.position.as_str()), Some("right"));
}

#[test]
fn test_replay_is_prefix_only() {
    let sc = script(vec![Instruction::show("Alice", "center"), Instruction::hide("Alice")]);
    let lib = library();
    assert!(replay(&sc, 0, &lib).is_visible("Alice"));
    assert!(!replay(&sc, 1, &lib).is_visible("Alice"));
}

#[test]
fn test_cursor_past_end_and_empty_script() {
    let sc = script(vec![Instruction::scene("Cafe")]);
    let lib = library();
    assert_eq!(replay(&sc, 99, &lib), replay(&sc, 0, &lib));
    assert_eq!(replay(&Script::default(), 0, &lib), storyloom_core::PresentationState::default());
}

#[test]
fn test_random_seek_matches_sequential_walk() {
    let sc = parse(
        "scene Bedroom\nshow Alice\nAlice \"a\"\nshow bob at left\nscene Cafe\nhide Alice\n\"b\"\nscene Moon",
    );
    let lib = library();
    let mut walked = storyloom_core::PresentationState::default();
    for (i, ins) in sc.iter().enumerate() {
        storyloom_core::executor::walk_instruction(&mut walked, &lib, i, ins);
        assert_eq!(replay(&sc, i, &lib), walked);
    }
}
