//! End-to-end checks for the tabular Q-learning engine: temporal
//! difference updates, epsilon scheduling, and table persistence
//! through the store adapters.

use morris::adapters::{InMemoryStore, MsgPackStore};
use morris::morris::{GameState, Move};
use morris::ports::QTableStore;
use morris::q_learning::{QLearningAgent, QTable};
use morris::types::BoardKey;

fn fresh_agent() -> QLearningAgent {
    QLearningAgent::new(0.1, 0.9, 1.0, 0.995, 0.1).with_seed(7)
}

mod td_updates {
    use super::*;

    #[test]
    fn test_update_moves_estimate_toward_reward() {
        let state = GameState::new();
        let mut next = state.clone();
        assert_ne!(
            next.apply_move(Move::Place(0)),
            morris::morris::MoveOutcome::Rejected
        );

        let mut agent = fresh_agent();
        agent.update(&state, Move::Place(0), 1.0, &next, &next.legal_moves());

        // alpha = 0.1 against a zero-initialized table and zero future:
        // Q = 0.9 * 0 + 0.1 * (1 + 0.9 * 0) = 0.1
        let key = BoardKey::from(&state);
        let value = agent.q_table().get(&key, Move::Place(0));
        assert!((value - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_full_learning_rate_adopts_the_target_exactly() {
        let state = GameState::new();
        let next = GameState::new();

        let mut table = QTable::new(1.0, 0.9);
        let key = BoardKey::from(&state);
        let next_key = BoardKey::from(&next);
        table.set(next_key.clone(), Move::Place(5), 2.0);

        table.update(
            key.clone(),
            Move::Place(0),
            1.0,
            &next_key,
            &[Move::Place(5), Move::Place(6)],
        );

        // alpha = 1.0: Q = reward + gamma * max_future = 1 + 0.9 * 2
        assert!((table.get(&key, Move::Place(0)) - 2.8).abs() < 1e-12);
    }

    #[test]
    fn test_terminal_transition_has_no_future_term() {
        let state = GameState::new();
        let next = GameState::new();

        let mut table = QTable::new(0.5, 0.9);
        let key = BoardKey::from(&state);
        table.update(key.clone(), Move::Place(0), 1.0, &BoardKey::from(&next), &[]);

        // Empty next action set: Q = 0.5 * 0 + 0.5 * 1.0
        assert!((table.get(&key, Move::Place(0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_updates_converge_toward_reward() {
        let state = GameState::new();
        let next = GameState::new();
        let key = BoardKey::from(&state);

        let mut table = QTable::new(0.1, 0.9);
        let mut previous = 0.0;
        for _ in 0..200 {
            table.update(key.clone(), Move::Place(0), 1.0, &BoardKey::from(&next), &[]);
            let current = table.get(&key, Move::Place(0));
            assert!(current > previous);
            previous = current;
        }
        assert!(previous > 0.99 && previous < 1.0 + 1e-9);
    }
}

mod epsilon_schedule {
    use super::*;

    #[test]
    fn test_decay_is_monotone_and_floored() {
        let mut agent = fresh_agent();
        let mut previous = agent.epsilon();
        assert!((previous - 1.0).abs() < 1e-12);

        for _ in 0..2000 {
            agent.decay_epsilon();
            let current = agent.epsilon();
            assert!(current <= previous);
            assert!(current >= 0.1);
            previous = current;
        }
        assert!((agent.epsilon() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_reset_restores_initial_epsilon() {
        let mut agent = fresh_agent();
        for _ in 0..50 {
            agent.decay_epsilon();
        }
        assert!(agent.epsilon() < 1.0);
        agent.reset_epsilon();
        assert!((agent.epsilon() - 1.0).abs() < 1e-12);
    }
}

mod action_selection {
    use super::*;

    #[test]
    fn test_no_legal_moves_yields_no_action() {
        let mut agent = fresh_agent();
        let state = GameState::new();
        assert_eq!(agent.choose_action(&state, &[]), None);
    }

    #[test]
    fn test_greedy_agent_picks_the_highest_valued_move() {
        // epsilon = 0 makes the policy purely greedy.
        let mut agent = QLearningAgent::new(0.1, 0.9, 0.0, 0.995, 0.0).with_seed(11);
        let state = GameState::new();
        let terminal = GameState::new();

        // Drive the estimate for Place(3) above its zero-valued peers.
        agent.update(&state, Move::Place(3), 1.0, &terminal, &[]);

        let legal = state.legal_moves();
        for _ in 0..20 {
            assert_eq!(agent.choose_action(&state, &legal), Some(Move::Place(3)));
        }
    }

    #[test]
    fn test_seeded_agents_explore_identically() {
        let state = GameState::new();
        let legal = state.legal_moves();

        let mut first = QLearningAgent::new(0.1, 0.9, 1.0, 0.995, 0.1).with_seed(42);
        let mut second = QLearningAgent::new(0.1, 0.9, 1.0, 0.995, 0.1).with_seed(42);

        for _ in 0..32 {
            assert_eq!(
                first.choose_action(&state, &legal),
                second.choose_action(&state, &legal)
            );
        }
    }
}

mod persistence {
    use super::*;

    fn trained_agent() -> QLearningAgent {
        let mut agent = fresh_agent();
        let state = GameState::new();
        let mut next = state.clone();
        next.apply_move(Move::Place(0));
        agent.update(&state, Move::Place(0), 1.0, &next, &next.legal_moves());
        let mut slid = next.clone();
        slid.switch_player();
        agent.update(&next, Move::Place(1), 0.0, &slid, &slid.legal_moves());
        agent
    }

    #[test]
    fn test_msgpack_round_trip_preserves_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q_table.msgpack");
        let store = MsgPackStore::new();

        let agent = trained_agent();
        agent.save_table(&store, &path).unwrap();

        let mut restored = fresh_agent();
        restored.load_table(&store, &path).unwrap();

        let key = BoardKey::from(&GameState::new());
        assert_eq!(restored.q_table().len(), agent.q_table().len());
        assert_eq!(
            restored.q_table().get(&key, Move::Place(0)),
            agent.q_table().get(&key, Move::Place(0))
        );
    }

    #[test]
    fn test_missing_file_means_fresh_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never_written.msgpack");
        let store = MsgPackStore::new();

        assert!(store.load(&path).unwrap().is_none());

        let mut agent = trained_agent();
        let populated = agent.q_table().len();
        agent.load_table(&store, &path).unwrap();
        // Nothing persisted: the in-memory table is left alone.
        assert_eq!(agent.q_table().len(), populated);
    }

    #[test]
    fn test_clear_removes_both_memory_and_disk_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q_table.msgpack");
        let store = MsgPackStore::new();

        let mut agent = trained_agent();
        agent.save_table(&store, &path).unwrap();
        assert!(path.exists());

        agent.clear(&store, &path).unwrap();
        assert!(agent.q_table().is_empty());
        assert!(!path.exists());

        // Clearing an already-absent file is not an error.
        agent.clear(&store, &path).unwrap();
    }

    #[test]
    fn test_in_memory_store_round_trip() {
        let store = InMemoryStore::new();
        let path = std::path::Path::new("tables/morris.msgpack");

        assert!(store.load(path).unwrap().is_none());

        let agent = trained_agent();
        agent.save_table(&store, path).unwrap();
        assert!(store.contains(path));
        assert_eq!(store.count(), 1);

        let restored = store.load(path).unwrap().unwrap();
        assert_eq!(restored.len(), agent.q_table().len());

        store.clear(path).unwrap();
        assert!(!store.contains(path));
        assert!(store.load(path).unwrap().is_none());
    }
}
