//! Menu command tests driving a session the way the interactive binary does

use crypt_keeper::command::{Command, CommandExecutor, CommandOutcome};
use crypt_keeper::core::config::GameConfig;
use crypt_keeper::core::error::GameError;
use crypt_keeper::entity::Combatant;
use crypt_keeper::events::EventLog;
use crypt_keeper::session::Game;
use std::fs;

fn run(game: &mut Game, input: &str) -> Result<CommandOutcome, GameError> {
    let command: Command = input.parse().expect("command should parse");
    CommandExecutor::execute(game, &command)
}

#[test]
fn test_scripted_session() {
    let save_path = std::env::temp_dir().join(format!(
        "crypt-keeper-command-surface-{}.txt",
        std::process::id()
    ));
    let config = GameConfig {
        save_path: save_path.clone(),
        ..GameConfig::default()
    };
    let mut game = Game::new(config, EventLog::memory()).unwrap();

    // Skeleton2 has 40 HP and takes 30 per hit; the Lich raises it again
    run(&mut game, "fight 2").unwrap();
    run(&mut game, "1 2").unwrap();
    assert_eq!(game.roster().len(), 3);
    assert_eq!(game.roster()[1].health(), 40);
    assert_eq!(game.player().experience(), 50);

    run(&mut game, "add Lantern").unwrap();
    run(&mut game, "remove Sword").unwrap();
    assert_eq!(game.player().inventory().items(), ["Shield", "Lantern"]);

    assert!(matches!(run(&mut game, "save").unwrap(), CommandOutcome::Saved(ref p) if *p == save_path));

    run(&mut game, "remove Shield").unwrap();
    run(&mut game, "load").unwrap();
    assert_eq!(game.player().inventory().items(), ["Shield", "Lantern"]);
    assert_eq!(game.player().experience(), 50);

    assert!(matches!(
        run(&mut game, "fight 4"),
        Err(GameError::InvalidSelection { index: 3, available: 3 })
    ));
    assert!(matches!(run(&mut game, "exit").unwrap(), CommandOutcome::Exit));

    fs::remove_file(&save_path).unwrap();
}

#[test]
fn test_heal_command() {
    let mut game = Game::new(GameConfig::default(), EventLog::memory()).unwrap();

    // LichKing hits back for 25
    run(&mut game, "fight 3").unwrap();
    assert_eq!(game.player().health(), 75);

    match run(&mut game, "heal").unwrap() {
        CommandOutcome::Healed { health } => assert_eq!(health, 95),
        other => panic!("unexpected outcome {:?}", other),
    }
    match run(&mut game, "2").unwrap() {
        CommandOutcome::Healed { health } => assert_eq!(health, 100),
        other => panic!("unexpected outcome {:?}", other),
    }
}
