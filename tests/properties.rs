//! Property tests for scoring and round flow.

use std::collections::HashSet;

use blackjack21::{
    Card, DECK_SIZE, EngineOptions, GameEngine, Hand, Outcome, Participant, Rank, RoundState, Suit,
};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

proptest! {
    #[test]
    fn total_is_between_hard_and_all_aces_high(cards in prop::collection::vec(any_card(), 0..12)) {
        let hand = Hand::from_cards(cards.iter().copied());
        let aces = cards.iter().filter(|c| c.rank.is_ace()).count() as u8;
        let low = hand.hard_total();
        let high = low + 10 * aces;

        prop_assert!(hand.total() >= low);
        prop_assert!(hand.total() <= high);
        // Promotions are whole aces: the difference is a multiple of ten.
        prop_assert_eq!((hand.total() - low) % 10, 0);
        // An ace is only kept at 11 when that does not bust the hand.
        if hand.is_soft() {
            prop_assert!(hand.total() <= 21);
        }
        if hand.total() > 21 {
            prop_assert_eq!(hand.total(), low);
        }
    }

    #[test]
    fn stand_leaves_dealer_at_seventeen_or_more(seed in any::<u64>()) {
        let mut game = GameEngine::new(EngineOptions::default(), seed);
        game.new_game().unwrap();
        prop_assert_eq!(game.player_hand().len(), 2);
        prop_assert_eq!(game.dealer_hand().len(), 2);
        prop_assert_eq!(game.state(), RoundState::PlayerTurn);

        game.stand().unwrap();
        prop_assert!(game.hand_total(Participant::Dealer) >= 17);
        prop_assert_eq!(game.state(), RoundState::Finished);
        prop_assert!(game.outcome().is_some());
    }

    #[test]
    fn hitting_until_bust_ends_in_player_bust(seed in any::<u64>()) {
        let mut game = GameEngine::new(EngineOptions::default(), seed);
        game.new_game().unwrap();

        while game.state() == RoundState::PlayerTurn {
            game.hit().unwrap();
        }

        prop_assert!(game.hand_total(Participant::Player) > 21);
        prop_assert_eq!(game.outcome(), Some(Outcome::PlayerBust));
    }

    #[test]
    fn rounds_never_deal_a_card_twice(seed in any::<u64>(), rounds in 1usize..20) {
        let mut game = GameEngine::new(EngineOptions::default(), seed);
        let mut dealt = HashSet::new();

        for _ in 0..rounds {
            if game.cards_remaining() < 4 {
                break;
            }
            game.new_game().unwrap();
            if game.hand_total(Participant::Player) < 12 {
                game.hit().unwrap();
            }
            if game.state() == RoundState::PlayerTurn {
                game.stand().unwrap();
            }
            let held: Vec<Card> = game
                .player_hand()
                .cards()
                .iter()
                .chain(game.dealer_hand().cards())
                .copied()
                .collect();
            // A mid-round refill starts a new pack; stop before comparing across it.
            if dealt.len() + held.len() + game.cards_remaining() != DECK_SIZE {
                break;
            }
            for card in held {
                prop_assert!(dealt.insert(card), "{} dealt twice", card);
            }
        }
    }
}
