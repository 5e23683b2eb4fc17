//! Save/load integration tests
//!
//! Sessions are written to real files in the temp directory and read back
//! into fresh sessions.

use crypt_keeper::core::config::GameConfig;
use crypt_keeper::core::error::GameError;
use crypt_keeper::core::types::{MonsterKind, SessionState};
use crypt_keeper::entity::{Character, Combatant, Monster};
use crypt_keeper::events::EventLog;
use crypt_keeper::session::{Game, LoadWarning};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

fn temp_path(label: &str) -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "crypt-keeper-{}-{}-{}.txt",
        label,
        std::process::id(),
        id
    ))
}

fn empty_config() -> GameConfig {
    GameConfig {
        starting_roster: Vec::new(),
        ..GameConfig::default()
    }
}

fn fresh_session() -> Game {
    Game::with_player(
        Character::new("Stranger", 10, 1, 1).unwrap(),
        empty_config(),
        EventLog::memory(),
    )
}

fn saved_session() -> Game {
    let mut log = EventLog::memory();
    let mut hero = Character::new("Hero", 100, 45, 10).unwrap();
    hero.take_damage(20, &mut log).unwrap();
    hero.gain_experience(130, &mut log).unwrap();
    hero.add_item("Sword", &mut log).unwrap();
    hero.add_item("Shield", &mut log).unwrap();

    let mut game = Game::with_player(hero, empty_config(), EventLog::memory());
    game.add_monster(Monster::new(MonsterKind::Skeleton, "Skeleton1", 25, 10, 15).unwrap())
        .unwrap();
    game.add_monster(Monster::lich("LichKing").unwrap()).unwrap();
    game
}

#[test]
fn test_round_trip_through_file() {
    let path = temp_path("round-trip");
    let mut original = saved_session();
    original.save(&path).unwrap();

    let mut restored = fresh_session();
    let report = restored.load(&path).unwrap();

    assert_eq!(report.monsters_loaded, 2);
    assert!(report.warnings.is_empty());
    assert_eq!(restored.player(), original.player());
    assert_eq!(restored.player().health(), 80);
    assert_eq!(restored.player().level(), 2);
    assert_eq!(restored.player().experience(), 30);
    assert_eq!(restored.roster(), original.roster());

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_file_contents_are_exact() {
    let path = temp_path("layout");
    saved_session().save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();

    assert_eq!(
        content,
        "Hero,80,45,10,2,30,2 Sword Shield\n2\nSkeleton,Skeleton1,25,10,15\nLich,LichKing,600,35,25\n"
    );
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_corrupted_tag_is_skipped() {
    let path = temp_path("bad-tag");
    saved_session().save(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    fs::write(&path, content.replace("Skeleton,Skeleton1", "Skelet0n,Skeleton1")).unwrap();

    let mut restored = fresh_session();
    let report = restored.load(&path).unwrap();

    assert_eq!(report.monsters_loaded, 1);
    assert_eq!(
        report.warnings,
        vec![LoadWarning::UnknownKind {
            line: 3,
            tag: "Skelet0n".into()
        }]
    );
    assert_eq!(restored.roster().len(), 1);
    assert_eq!(restored.roster()[0].name(), "LichKing");
    assert_eq!(restored.player().name(), "Hero");
    assert!(restored
        .log()
        .lines()
        .iter()
        .any(|l| l.starts_with("Warning: Failed to load monster on line 3")));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_failed_load_keeps_current_session() {
    let path = temp_path("corrupt");
    fs::write(&path, "Hero,80,45\n1\nLich,L,600,35,25\n").unwrap();

    let mut game = saved_session();
    let before_player = game.player().clone();

    let err = game.load(&path).unwrap_err();

    assert!(matches!(err, GameError::CorruptSave(_)));
    assert_eq!(game.player(), &before_player);
    assert_eq!(game.roster().len(), 2);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file_is_io_error() {
    let mut game = fresh_session();
    let err = game.load(&temp_path("missing")).unwrap_err();
    assert!(matches!(err, GameError::IoError(_)));
}

#[test]
fn test_load_revives_finished_session() {
    let path = temp_path("revive");
    saved_session().save(&path).unwrap();

    let mut game = Game::with_player(
        Character::new("Doomed", 10, 45, 10).unwrap(),
        empty_config(),
        EventLog::memory(),
    );
    game.add_monster(Monster::lich("LichKing").unwrap()).unwrap();
    game.fight(0).unwrap();
    assert_eq!(game.state(), SessionState::GameOver);

    game.load(&path).unwrap();

    assert_eq!(game.state(), SessionState::Active);
    assert!(game.fight(0).is_ok());

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_and_load_are_logged() {
    let save_path = temp_path("logged-save");
    let log_path = temp_path("logged-log");

    let mut game = Game::new(
        GameConfig {
            log_path: log_path.clone(),
            ..GameConfig::default()
        },
        EventLog::file(&log_path).unwrap(),
    )
    .unwrap();
    game.save(&save_path).unwrap();
    game.load(&save_path).unwrap();
    game.end().unwrap();

    let log = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert!(lines[0].starts_with("Log initiated at "));
    assert!(lines.contains(&format!("Game progress saved to {}", save_path.display()).as_str()));
    assert!(lines.contains(&"Loaded character: Hero"));
    assert!(lines.contains(&"Loaded monster: LichKing"));
    assert_eq!(lines.last(), Some(&"Game ended."));

    fs::remove_file(&save_path).unwrap();
    fs::remove_file(&log_path).unwrap();
}

#[test]
fn test_multi_word_items_do_not_survive() {
    let path = temp_path("potion");
    let mut game = fresh_session();
    game.add_item("Health Potion").unwrap();
    game.save(&path).unwrap();

    let mut restored = fresh_session();
    restored.load(&path).unwrap();

    assert_eq!(restored.player().inventory().items(), ["Health"]);
    fs::remove_file(&path).unwrap();
}
