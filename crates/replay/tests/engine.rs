use std::fs;
use std::path::{Path, PathBuf};

use game_core::{Action, Coord, ItemId, PotionId, Wish};
use replay::{
    ConsoleInput, DEFAULT_MAX_LINE_LENGTH, DecodeErrorKind, Header, LiveSource, ScriptConfig,
    ScriptEngine, ScriptError, ScriptMode, SystemRandom,
};
use tempfile::TempDir;

fn script_path(dir: &TempDir) -> PathBuf {
    dir.path().join("session.script")
}

fn item(hex_id: &str) -> ItemId {
    let bytes: [u8; 32] = hex::decode(hex_id).unwrap().try_into().unwrap();
    ItemId::from_be_bytes(bytes)
}

fn open(config: &ScriptConfig) -> ScriptEngine<SystemRandom> {
    ScriptEngine::open(config, SystemRandom::seeded(42)).unwrap()
}

fn read_text(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Records a short session: one decision, two draws, one more decision.
fn record_session(path: &Path) -> (u32, Vec<i32>) {
    let mut engine = open(&ScriptConfig::write(path));
    assert_eq!(engine.mode(), ScriptMode::Write);
    assert_eq!(engine.get_decision().unwrap(), None);

    engine.record_decision(&Action::Move(Coord::new(1, -1))).unwrap();
    let draws = vec![
        engine.get_rng_input("hit_roll").unwrap(),
        engine.get_rng_input("damage").unwrap(),
    ];
    engine.record_decision(&Action::Wait).unwrap();
    (engine.seed().unwrap(), draws)
}

#[test]
fn test_replay_reproduces_recording() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    let (seed, draws) = record_session(&path);

    let mut engine = open(&ScriptConfig::read(&path));
    assert_eq!(engine.header(), Some(Header::Seed(seed)));
    assert_eq!(engine.seed(), Some(seed));

    assert_eq!(
        engine.get_decision().unwrap(),
        Some(Action::Move(Coord::new(1, -1)))
    );
    assert_eq!(engine.get_rng_input("hit_roll").unwrap(), draws[0]);
    assert_eq!(engine.get_rng_input("damage").unwrap(), draws[1]);
    assert_eq!(engine.get_decision().unwrap(), Some(Action::Wait));
}

#[test]
fn test_recording_writes_header_then_lines() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    let (seed, draws) = record_session(&path);

    let expected = format!(
        "{}move 1 -1\n@rng {} hit_roll\n@rng {} damage\nwait\n",
        Header::Seed(seed).encode(),
        draws[0],
        draws[1]
    );
    assert_eq!(read_text(&path), expected);
}

#[test]
fn test_read_end_of_script_switches_to_ignore() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@test\nwait\n").unwrap();

    let mut engine = open(&ScriptConfig::read(&path));
    assert!(engine.test_mode());
    assert_eq!(engine.seed(), None);
    assert_eq!(engine.get_decision().unwrap(), Some(Action::Wait));
    assert_eq!(engine.get_decision().unwrap(), None);
    assert_eq!(engine.mode(), ScriptMode::Ignore);

    // Nothing is persisted once replay is over.
    engine.record_decision(&Action::GoDown).unwrap();
    engine.get_rng_input("after_end").unwrap();
    assert_eq!(engine.get_decision().unwrap(), None);
    assert_eq!(read_text(&path), "@test\nwait\n");
}

#[test]
fn test_read_write_resumes_recording_at_end() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    let (seed, draws) = record_session(&path);
    let recorded = read_text(&path);

    let mut engine = open(&ScriptConfig::read_write(&path));
    assert_eq!(engine.mode(), ScriptMode::ReadWrite);
    assert_eq!(engine.seed(), Some(seed));
    assert_eq!(engine.line_number(), Some(1));

    assert_eq!(
        engine.get_decision().unwrap(),
        Some(Action::Move(Coord::new(1, -1)))
    );
    assert_eq!(engine.get_rng_input("hit_roll").unwrap(), draws[0]);
    assert_eq!(engine.get_rng_input("damage").unwrap(), draws[1]);
    assert_eq!(engine.get_decision().unwrap(), Some(Action::Wait));
    assert_eq!(engine.line_number(), Some(5));

    assert_eq!(engine.get_decision().unwrap(), None);
    assert_eq!(engine.mode(), ScriptMode::Write);
    assert_eq!(engine.line_number(), None);

    engine.record_decision(&Action::Attack(Coord::new(0, 1))).unwrap();
    let value = engine.get_rng_input("damage").unwrap();
    drop(engine);

    let expected = format!("{recorded}attack 0 1\n@rng {value} damage\n");
    assert_eq!(read_text(&path), expected);
}

#[test]
fn test_tag_at_line_limit_replays() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    // "@rng 5 " plus the tag fills the line exactly.
    let tag = "t".repeat(DEFAULT_MAX_LINE_LENGTH - "@rng 5 ".len());

    let console = ConsoleInput::new(&b"5\n"[..], Vec::new());
    let config = ScriptConfig::write(&path).with_test_mode(true);
    let mut engine = ScriptEngine::open(&config, console).unwrap();
    assert_eq!(engine.get_rng_input(&tag).unwrap(), 5);
    drop(engine);

    let mut engine = open(&ScriptConfig::read(&path));
    assert_eq!(engine.get_rng_input(&tag).unwrap(), 5);
}

#[test]
fn test_line_over_limit_is_not_recorded() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    let tag = "t".repeat(DEFAULT_MAX_LINE_LENGTH);

    let config = ScriptConfig::write(&path).with_test_mode(true);
    let mut engine = open(&config);
    engine.record_decision(&Action::Wait).unwrap();
    let err = engine.get_rng_input(&tag).unwrap_err();
    assert!(matches!(
        err,
        ScriptError::Oversized {
            limit: DEFAULT_MAX_LINE_LENGTH,
            ..
        }
    ));
    drop(engine);

    // Everything on disk still replays.
    assert_eq!(read_text(&path), "@test\nwait\n");
    let mut engine = open(&ScriptConfig::read(&path));
    assert_eq!(engine.get_decision().unwrap(), Some(Action::Wait));
}

#[test]
fn test_item_lines_respect_a_lowered_limit() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    let potion = item("00000000000000010000000000000002000000000000000300000000000000ff");

    let config = ScriptConfig::write(&path)
        .with_test_mode(true)
        .with_max_line_length(32);
    let mut engine = open(&config);
    let err = engine.record_decision(&Action::Quaff(potion)).unwrap_err();
    assert!(matches!(err, ScriptError::Oversized { limit: 32, .. }));
}

#[test]
fn test_read_write_without_script_records_fresh() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);

    let mut engine = open(&ScriptConfig::read_write(&path).with_test_mode(true));
    assert_eq!(engine.mode(), ScriptMode::Write);
    engine.record_decision(&Action::CheatGainLevel).unwrap();
    drop(engine);

    assert_eq!(read_text(&path), "@test\n!levelup\n");
}

#[test]
fn test_draw_values_survive_extremes() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(
        &path,
        "@test\n@rng -2147483648 low\n@rng 2147483647 high\n@rng -5 small\n",
    )
    .unwrap();

    let mut engine = open(&ScriptConfig::read(&path));
    assert_eq!(engine.get_rng_input("low").unwrap(), i32::MIN);
    assert_eq!(engine.get_rng_input("high").unwrap(), i32::MAX);
    assert_eq!(engine.get_rng_input("small").unwrap(), -5);
}

#[test]
fn test_item_arguments_replay() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    let potion = item("00000000000000010000000000000002000000000000000300000000000000ff");

    let mut engine = open(&ScriptConfig::write(&path).with_test_mode(true));
    engine.record_decision(&Action::Quaff(potion)).unwrap();
    engine
        .record_decision(&Action::CheatWish(Wish::Potion(PotionId::EtherealVision)))
        .unwrap();
    drop(engine);

    let mut engine = open(&ScriptConfig::read(&path));
    assert_eq!(engine.get_decision().unwrap(), Some(Action::Quaff(potion)));
    assert_eq!(
        engine.get_decision().unwrap(),
        Some(Action::CheatWish(Wish::Potion(PotionId::EtherealVision)))
    );
}

#[test]
fn test_wrong_arity_is_reported_at_action_name() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@test\n  move 3\n").unwrap();

    let mut engine = open(&ScriptConfig::read(&path));
    let err = engine.get_decision().unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("{}:2:3: error: expected 2 arguments", path.display())
    );
}

#[test]
fn test_short_seed_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@seed 123\n").unwrap();

    let err = ScriptEngine::open(&ScriptConfig::read(&path), SystemRandom::seeded(1))
        .err()
        .unwrap();
    assert_eq!(err.decode_kind(), Some(&DecodeErrorKind::HexLength("uint32")));
    assert_eq!(err.position(), Some((1, 7)));
}

#[test]
fn test_tag_mismatch() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@test\n@rng 5 wrongtag\n").unwrap();

    let mut engine = open(&ScriptConfig::read(&path));
    let err = engine.get_rng_input("correcttag").unwrap_err();
    assert_eq!(
        err.decode_kind(),
        Some(&DecodeErrorKind::RngTagMismatch {
            expected: "correcttag".to_string()
        })
    );
    assert_eq!(err.position(), Some((2, 8)));
}

#[test]
fn test_decision_where_draw_expected() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@test\nwait\n").unwrap();

    let mut engine = open(&ScriptConfig::read(&path));
    let err = engine.get_rng_input("hit_roll").unwrap_err();
    assert_eq!(
        err.decode_kind(),
        Some(&DecodeErrorKind::ExpectedRngDirective {
            tag: "hit_roll".to_string()
        })
    );
}

#[test]
fn test_draw_past_end_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@test\n").unwrap();

    let mut engine = open(&ScriptConfig::read_write(&path));
    let err = engine.get_rng_input("hit_roll").unwrap_err();
    assert_eq!(err.decode_kind(), Some(&DecodeErrorKind::UnexpectedEof));
}

#[test]
fn test_missing_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@test\nwait").unwrap();

    let mut engine = open(&ScriptConfig::read(&path));
    let err = engine.get_decision().unwrap_err();
    assert_eq!(err.decode_kind(), Some(&DecodeErrorKind::MissingNewline));
}

#[test]
fn test_line_length_limit() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@test\nmove 1 0 # a rather long trailing comment\n").unwrap();

    let mut engine = open(&ScriptConfig::read(&path).with_max_line_length(16));
    let err = engine.get_decision().unwrap_err();
    assert_eq!(
        err.decode_kind(),
        Some(&DecodeErrorKind::LineTooLong { limit: 16 })
    );
}

#[test]
fn test_delete_in_progress_recording() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);

    let mut engine = open(&ScriptConfig::write(&path));
    engine.record_decision(&Action::Wait).unwrap();
    assert!(path.exists());

    engine.delete_in_progress_recording().unwrap();
    assert!(!path.exists());
    assert_eq!(engine.mode(), ScriptMode::Ignore);

    // Later calls neither fail nor recreate the file.
    engine.record_decision(&Action::Wait).unwrap();
    engine.get_rng_input("hit_roll").unwrap();
    engine.delete_in_progress_recording().unwrap();
    assert!(!path.exists());
}

#[test]
fn test_delete_keeps_replayed_script() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@test\nwait\n").unwrap();

    let mut engine = open(&ScriptConfig::read(&path));
    engine.delete_in_progress_recording().unwrap();
    assert_eq!(engine.mode(), ScriptMode::Read);
    assert!(path.exists());
    assert_eq!(engine.get_decision().unwrap(), Some(Action::Wait));
}

#[test]
fn test_pacing_holds_back_reads() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@test\nwait\ndown\n").unwrap();

    let mut engine = open(&ScriptConfig::read(&path).with_pacing(2));
    assert_eq!(engine.get_decision().unwrap(), None);
    assert_eq!(engine.get_decision().unwrap(), None);
    assert_eq!(engine.get_decision().unwrap(), Some(Action::Wait));
    assert_eq!(engine.get_decision().unwrap(), None);
    assert_eq!(engine.get_decision().unwrap(), None);
    assert_eq!(engine.get_decision().unwrap(), Some(Action::GoDown));
    assert_eq!(engine.mode(), ScriptMode::Read);
}

#[test]
fn test_set_delay_paces_replay() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@test\nwait\n").unwrap();

    let mut engine = open(&ScriptConfig::read(&path));
    engine.set_delay(1);
    assert_eq!(engine.get_decision().unwrap(), None);
    assert_eq!(engine.get_decision().unwrap(), Some(Action::Wait));
}

#[test]
fn test_delay_without_pacing_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    fs::write(&path, "@test\nwait\n").unwrap();

    let config = ScriptConfig {
        delay: 5,
        ..ScriptConfig::read(&path)
    };
    let mut engine = open(&config);
    assert_eq!(engine.get_decision().unwrap(), Some(Action::Wait));
}

#[test]
fn test_missing_path() {
    let config = ScriptConfig {
        mode: ScriptMode::Write,
        ..ScriptConfig::default()
    };
    let err = ScriptEngine::open(&config, SystemRandom::seeded(1))
        .err()
        .unwrap();
    assert!(matches!(err, ScriptError::MissingPath(ScriptMode::Write)));
}

#[test]
fn test_missing_script_cannot_be_read() {
    let dir = TempDir::new().unwrap();
    let err = ScriptEngine::open(&ScriptConfig::read(script_path(&dir)), SystemRandom::seeded(1))
        .err()
        .unwrap();
    assert!(matches!(err, ScriptError::Open { .. }));
}

#[test]
fn test_ignore_uses_live_source() {
    let mut engine = ScriptEngine::ignore(SystemRandom::seeded(9)).unwrap();
    let mut expected = SystemRandom::seeded(9);

    assert_eq!(engine.mode(), ScriptMode::Ignore);
    assert_eq!(engine.seed(), Some(expected.seed()));
    assert_eq!(engine.path(), None);
    assert_eq!(engine.get_decision().unwrap(), None);
    assert_eq!(
        engine.get_rng_input("hit_roll").unwrap(),
        expected.draw("hit_roll").unwrap()
    );
}

#[test]
fn test_console_draws_are_recorded() {
    let dir = TempDir::new().unwrap();
    let path = script_path(&dir);
    let console = ConsoleInput::new(&b"17\n-3\n"[..], Vec::new());

    let config = ScriptConfig::write(&path).with_test_mode(true);
    let mut engine = ScriptEngine::open(&config, console).unwrap();
    assert_eq!(engine.get_rng_input("damage").unwrap(), 17);
    assert_eq!(engine.get_rng_input("dodge").unwrap(), -3);
    assert!(engine.get_rng_input("extra").is_err());
    drop(engine);

    assert_eq!(read_text(&path), "@test\n@rng 17 damage\n@rng -3 dodge\n");
}

#[test]
#[should_panic(expected = "invalid rng tag")]
fn test_tag_with_whitespace_panics() {
    let mut engine = ScriptEngine::ignore(SystemRandom::seeded(1)).unwrap();
    let _ = engine.get_rng_input("two words");
}
