//! Integration tests: a quiz screen driving all three calculators

use chrono::{DateTime, Duration, Utc};

use verse_quest::config::Config;
use verse_quest::progress::{
    Clock, HeartsState, ManualClock, PlayerLevel, ProgressError, QuizSession, effective_hearts,
    experience_threshold, level_for_experience, level_up, seconds_to_next_heart,
};

fn start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_750_000_000, 0).expect("valid timestamp")
}

#[test]
fn test_quiz_session_with_hearts_and_xp() {
    let config = Config::default();
    let hearts_config = config.hearts.to_hearts_config().unwrap();
    let clock = ManualClock::new(start());

    // Persisted state the caller fetched before the session
    let mut xp: u64 = 80;
    let mut hearts = HeartsState::full(&hearts_config, clock.now());
    let mut session = QuizSession::new();

    // (correct, seconds to answer)
    let script = [(true, 2), (true, 4), (false, 6), (true, 8), (true, 1)];
    let mut points = Vec::new();

    for (correct, seconds) in script {
        session = session.start_question(clock.now());
        clock.advance(Duration::seconds(seconds));
        let (next, outcome) = session.answer_question(correct, config.quiz.base_points, clock.now());
        session = next;
        points.push(outcome.points_earned);

        if !correct {
            hearts = hearts.lose_heart(&hearts_config, clock.now()).unwrap();
        }
    }

    // 15, 15*1.5=22.5->23, wrong, 12, 15*1.5=22.5->23
    assert_eq!(points, vec![15, 23, 0, 12, 23]);
    assert_eq!(session.total_points, 73);
    assert_eq!(session.max_combo, 2);
    assert_eq!(session.combo, 2);
    assert_eq!(hearts.hearts, 4);

    // Caller saves XP after the session
    let gained = session.total_points;
    let up = level_up(xp, gained).expect("crossed 100 XP");
    assert_eq!((up.old_level, up.new_level), (1, 2));
    xp += gained;
    assert_eq!(PlayerLevel::new(xp).earned_in_level(), 53);

    // The lost heart comes back 30 minutes after it was spent
    let spent_at = hearts.updated_at;
    clock.set(spent_at + Duration::minutes(29));
    assert_eq!(hearts.effective(&hearts_config, clock.now()), 4);
    assert_eq!(hearts.seconds_to_next(&hearts_config, clock.now()), Some(60));
    clock.advance(Duration::minutes(1));
    assert_eq!(hearts.effective(&hearts_config, clock.now()), 5);
}

#[test]
fn test_running_out_of_hearts() {
    let mut config = Config::default();
    config.hearts.max_hearts = 1;
    let hearts_config = config.hearts.to_hearts_config().unwrap();

    let hearts = HeartsState::full(&hearts_config, start());
    let hearts = hearts.lose_heart(&hearts_config, start()).unwrap();
    assert_eq!(
        hearts.lose_heart(&hearts_config, start() + Duration::minutes(10)),
        Err(ProgressError::OutOfHearts)
    );

    // Regenerated hearts can be spent again
    let later = start() + Duration::minutes(30);
    assert!(hearts.lose_heart(&hearts_config, later).is_ok());
}

#[test]
fn test_documented_examples() {
    assert_eq!(level_for_experience(0), 1);
    assert_eq!(level_for_experience(99), 1);
    assert_eq!(level_for_experience(100), 2);
    assert_eq!(level_for_experience(249), 2);
    for level in 1..=200 {
        assert_eq!(level_for_experience(experience_threshold(level)), level);
    }

    let now = start();
    assert_eq!(effective_hearts(3, now - Duration::minutes(31), now, 5), 4);
    assert_eq!(effective_hearts(3, now - Duration::minutes(61), now, 5), 5);
    assert_eq!(effective_hearts(5, now - Duration::minutes(1000), now, 5), 5);
    assert_eq!(seconds_to_next_heart(5, now - Duration::minutes(13), now, 5), None);
    assert_eq!(seconds_to_next_heart(0, now, now, 5), Some(1800));
}

#[test]
fn test_reset_session_is_fresh() {
    let clock = ManualClock::new(start());
    let run = |session: QuizSession| {
        let mut session = session;
        let mut outcomes = Vec::new();
        for correct in [true, true, false, true] {
            session = session.start_question(clock.now());
            clock.advance(Duration::seconds(3));
            let (next, outcome) = session.answer(correct, clock.now());
            session = next;
            outcomes.push(outcome);
        }
        (session, outcomes)
    };

    let (played, first) = run(QuizSession::new());
    let (replayed, second) = run(played.clone().reset());
    assert_eq!(first, second);
    assert_eq!(replayed, played);
}
