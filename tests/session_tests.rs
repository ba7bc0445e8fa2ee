//! End-to-end session tests: play, persist, reload, resume

use chrono::NaiveDate;
use pitwall::core::LetterScore;
use pitwall::game::{FixedClock, GameConfig, GameSession, GameStatus, selector};
use pitwall::output::share_text;
use pitwall::store::{FileStore, SESSION_KEY, SessionStore};
use pitwall::wordlists::WordList;

fn epoch_clock() -> FixedClock {
    // Epoch day 0: the target is PITSTOP
    FixedClock(selector::default_epoch())
}

fn start(store: FileStore, clock: FixedClock) -> GameSession<FileStore> {
    GameSession::start(&GameConfig::default(), &WordList::embedded(), &clock, store)
}

#[test]
fn full_day_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();

    // First "process": two guesses and some thinking time
    let mut session = start(FileStore::new(dir.path()), epoch_clock());
    session.submit_guess("GEARBOX").unwrap();
    session.submit_guess("CHICANE").unwrap();
    for _ in 0..30 {
        session.tick();
    }
    drop(session);

    // Second "process": same day, same store
    let mut session = start(FileStore::new(dir.path()), epoch_clock());
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.elapsed_seconds(), 30);
    assert_eq!(session.rows().len(), 2);
    assert_eq!(session.rows()[0].text, "GEARBOX");
    assert_eq!(session.rows()[1].text, "CHICANE");

    // Hints come from re-folding the stored guesses: CHICANE's I appears in
    // PITSTOP, GEARBOX's Z-row letters mostly do not
    assert_eq!(session.letter_hint(b'I'), Some(LetterScore::Present));
    assert_eq!(session.letter_hint(b'Z'), None);

    // Finish the day
    assert_eq!(session.submit_guess("PITSTOP").unwrap(), GameStatus::Won);

    // Third "process": terminal state is final
    let mut session = start(FileStore::new(dir.path()), epoch_clock());
    assert_eq!(session.status(), GameStatus::Won);
    assert!(session.submit_guess("FERRARI").is_err());
    session.tick();
    assert_eq!(session.elapsed_seconds(), 30);
}

#[test]
fn six_misses_lose_and_persist_as_lost() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = start(FileStore::new(dir.path()), epoch_clock());

    for guess in ["GEARBOX", "CHICANE", "FERRARI", "MCLAREN", "PITWALL"] {
        assert_eq!(session.submit_guess(guess).unwrap(), GameStatus::InProgress);
    }
    assert_eq!(session.submit_guess("PADDOCK").unwrap(), GameStatus::Lost);

    let record = session
        .into_store()
        .load(SESSION_KEY)
        .unwrap()
        .unwrap();
    assert_eq!(record.status, GameStatus::Lost);
    assert_eq!(record.guesses.len(), 6);
}

#[test]
fn hints_only_upgrade_across_a_real_game() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = start(FileStore::new(dir.path()), epoch_clock());

    // PITWALL opens with P, I, T exactly in place against PITSTOP
    session.submit_guess("PITWALL").unwrap();
    assert_eq!(session.letter_hint(b'P'), Some(LetterScore::Correct));
    assert_eq!(session.letter_hint(b'T'), Some(LetterScore::Correct));

    // GEARBOX places no P or T; neither may regress
    session.submit_guess("GEARBOX").unwrap();
    assert_eq!(session.letter_hint(b'P'), Some(LetterScore::Correct));
    assert_eq!(session.letter_hint(b'T'), Some(LetterScore::Correct));
}

#[test]
fn new_day_supersedes_stored_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = start(FileStore::new(dir.path()), epoch_clock());
    session.submit_guess("GEARBOX").unwrap();
    drop(session);

    let next_day = FixedClock(selector::default_epoch().succ_opt().unwrap());
    let session = start(FileStore::new(dir.path()), next_day);
    assert!(session.rows().is_empty());
    assert_eq!(session.target().text(), "BOXBOX");

    // The fresh session already replaced the stored record
    let record = session
        .into_store()
        .load(SESSION_KEY)
        .unwrap()
        .unwrap();
    assert_eq!(record.word, "BOXBOX");
    assert!(record.guesses.is_empty());
}

#[test]
fn forced_word_session_is_isolated_from_daily_record() {
    let dir = tempfile::tempdir().unwrap();

    // A diagnostic session with a forced word
    let config = GameConfig {
        forced_word: Some(pitwall::core::Word::new("APEX").unwrap()),
        ..GameConfig::default()
    };
    let mut session = GameSession::start(
        &config,
        &WordList::embedded(),
        &epoch_clock(),
        FileStore::new(dir.path()),
    );
    assert_eq!(session.word_len(), 4);
    assert_eq!(session.submit_guess("APEX").unwrap(), GameStatus::Won);
    drop(session);

    // The normal daily session sees a mismatched word and starts fresh
    let session = start(FileStore::new(dir.path()), epoch_clock());
    assert_eq!(session.target().text(), "PITSTOP");
    assert!(session.rows().is_empty());
}

#[test]
fn share_text_reflects_a_finished_game() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = start(FileStore::new(dir.path()), epoch_clock());

    session.submit_guess("GEARBOX").unwrap();
    session.submit_guess("PITSTOP").unwrap();

    let puzzle = selector::puzzle_number(session.date(), selector::default_epoch());
    let text = share_text(puzzle, session.rows(), session.status());

    assert!(text.starts_with("Pitwall #0\n"));
    assert_eq!(text.lines().count(), 4); // Header, two rows, footer
    assert!(text.ends_with("Solved in 2/6 guesses!"));
    assert_eq!(text.lines().nth(2).unwrap(), "🟩🟩🟩🟩🟩🟩🟩");
}

#[test]
fn record_date_matches_clock_day() {
    let dir = tempfile::tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();

    let session = start(FileStore::new(dir.path()), FixedClock(date));
    let record = session
        .into_store()
        .load(SESSION_KEY)
        .unwrap()
        .unwrap();
    assert_eq!(record.date, date);
}
