use trunfo_engine::cards::{all_suits, full_deck, Card, Rank, Suit};
use trunfo_engine::dealer::Deal;
use trunfo_engine::errors::RoundError;
use trunfo_engine::events::{NullSink, RecordingSink, RoundEvent};
use trunfo_engine::player::{Seat, Team};
use trunfo_engine::round::{
    CardChooser, Phase, RoundController, RoundResult, TeamScore, TRICKS_PER_ROUND,
};
use trunfo_engine::rules::{is_valid_play, Trick};

/// Plays the first legal card in hand. Deterministic and always honest.
struct FirstLegal;

impl CardChooser for FirstLegal {
    fn choose_card(
        &mut self,
        hand: &[Card],
        leading_suit: Option<Suit>,
        _trick: &Trick,
    ) -> Result<Card, RoundError> {
        hand.iter()
            .copied()
            .find(|&c| is_valid_play(c, hand, leading_suit))
            .ok_or(RoundError::NoPlayableCard)
    }

    fn name(&self) -> &str {
        "FirstLegal"
    }
}

/// Plays an off-suit card whenever it holds the leading suit plus an
/// off-suit card, which is exactly what the cheat monitor must catch.
struct Cheater;

impl CardChooser for Cheater {
    fn choose_card(
        &mut self,
        hand: &[Card],
        leading_suit: Option<Suit>,
        _trick: &Trick,
    ) -> Result<Card, RoundError> {
        if let Some(lead) = leading_suit {
            let holds_lead = hand.iter().any(|c| c.suit == lead);
            let off_suit = hand.iter().copied().find(|c| c.suit != lead);
            if holds_lead {
                if let Some(card) = off_suit {
                    return Ok(card);
                }
            }
        }
        FirstLegal.choose_card(hand, leading_suit, _trick)
    }

    fn name(&self) -> &str {
        "Cheater"
    }
}

/// A fixed partition of the deck where every seat holds two or three cards
/// of every suit, so a follow-suit violation is always available early on.
fn crafted_deal() -> Deal {
    let mut hands: [Vec<Card>; 4] = std::array::from_fn(|_| Vec::new());
    for card in full_deck() {
        let suit_index = all_suits().iter().position(|&s| s == card.suit).unwrap();
        hands[(card.rank.strength() + suit_index) % 4].push(card);
    }
    let trump_card = Card {
        rank: Rank::Ace,
        suit: Suit::Hearts,
    };
    assert!(hands[Seat::South.index()].contains(&trump_card));
    Deal {
        hands,
        trump_card,
        trump_suit: trump_card.suit,
    }
}

fn honest_round(seed: u64) -> (RoundController, RoundResult, RecordingSink) {
    let mut ctrl = RoundController::new_seeded(seed, Seat::South).unwrap();
    let (mut a, mut b, mut c, mut d) = (FirstLegal, FirstLegal, FirstLegal, FirstLegal);
    let mut choosers: [&mut dyn CardChooser; 4] = [&mut a, &mut b, &mut c, &mut d];
    let mut sink = RecordingSink::default();
    let result = ctrl.play_round(&mut choosers, &mut sink).unwrap();
    (ctrl, result, sink)
}

#[test]
fn an_honest_round_runs_exactly_ten_tricks() {
    for seed in [0u64, 5, 42, 1234] {
        let (ctrl, _, _) = honest_round(seed);
        assert_eq!(ctrl.tricks_completed(), TRICKS_PER_ROUND);
        assert_eq!(ctrl.phase(), Phase::RoundOver);
        assert_eq!(ctrl.play_log().len(), 40);
        for seat in Seat::ALL {
            assert!(ctrl.hand(seat).is_empty());
        }
    }
}

#[test]
fn team_scores_always_account_for_all_120_points() {
    for seed in [0u64, 5, 42, 1234] {
        let (ctrl, _, _) = honest_round(seed);
        let (ns, ew) = ctrl.scores();
        assert_eq!(ns.points().unwrap() + ew.points().unwrap(), 120);
    }
}

#[test]
fn result_matches_the_score_comparison() {
    let (ctrl, result, _) = honest_round(42);
    let (ns, ew) = ctrl.scores();
    let (ns, ew) = (ns.points().unwrap(), ew.points().unwrap());
    let expected = if ns > ew {
        RoundResult::Winner(Team::NorthSouth)
    } else if ew > ns {
        RoundResult::Winner(Team::EastWest)
    } else {
        RoundResult::Tie
    };
    assert_eq!(result, expected);
}

#[test]
fn same_seed_replays_the_same_round() {
    let (a, ra, _) = honest_round(77);
    let (b, rb, _) = honest_round(77);
    assert_eq!(a.play_log(), b.play_log());
    assert_eq!(ra, rb);
}

#[test]
fn each_trick_is_led_by_the_previous_winner() {
    let (_, _, sink) = honest_round(42);
    let mut last_winner: Option<Seat> = None;
    let mut tricks_seen = 0;
    for event in &sink.events {
        match *event {
            RoundEvent::TrickStarted { leader } => {
                match last_winner {
                    None => assert_eq!(leader, Seat::South), // trump seat leads first
                    Some(w) => assert_eq!(leader, w),
                }
                tricks_seen += 1;
            }
            RoundEvent::TrickWon { seat, .. } => last_winner = Some(seat),
            _ => {}
        }
    }
    assert_eq!(tricks_seen, 10);
}

#[test]
fn event_stream_has_the_expected_shape() {
    let (_, _, sink) = honest_round(9);
    let count = |pred: fn(&RoundEvent) -> bool| sink.events.iter().filter(|e| pred(e)).count();
    assert_eq!(count(|e| matches!(e, RoundEvent::TrickStarted { .. })), 10);
    assert_eq!(count(|e| matches!(e, RoundEvent::CardPlayed { .. })), 40);
    assert_eq!(count(|e| matches!(e, RoundEvent::TrickWon { .. })), 10);
    assert_eq!(count(|e| matches!(e, RoundEvent::ScoresUpdated { .. })), 10);
    assert_eq!(count(|e| matches!(e, RoundEvent::RoundEnded { .. })), 1);
    assert!(matches!(
        sink.events.last(),
        Some(RoundEvent::RoundEnded { .. })
    ));
}

#[test]
fn a_cheating_play_forfeits_the_round_immediately() {
    let mut ctrl = RoundController::from_deal(crafted_deal(), Seat::South);
    let mut south = FirstLegal;
    let mut east = Cheater;
    let mut north = FirstLegal;
    let mut west = FirstLegal;
    let mut choosers: [&mut dyn CardChooser; 4] =
        [&mut south, &mut east, &mut north, &mut west];
    let mut sink = RecordingSink::default();

    let result = ctrl.play_round(&mut choosers, &mut sink).unwrap();
    assert_eq!(
        result,
        RoundResult::Forfeit {
            offender: Team::EastWest
        }
    );
    assert_eq!(ctrl.score(Team::EastWest), TeamScore::Forfeited);
    assert_eq!(ctrl.phase(), Phase::RoundOver);
    assert_eq!(ctrl.tricks_completed(), 0);
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, RoundEvent::CheatDetected { seat: Seat::East, .. })));
    assert!(matches!(
        sink.events.last(),
        Some(RoundEvent::RoundEnded {
            result: RoundResult::Forfeit { .. }
        })
    ));

    // The round is terminal: no further tricks can be played.
    let err = ctrl.play_trick(&mut choosers, &mut sink).unwrap_err();
    assert_eq!(err, RoundError::RoundOver);
}

#[test]
fn a_card_from_outside_the_hand_is_a_caller_error() {
    struct OutOfHand;
    impl CardChooser for OutOfHand {
        fn choose_card(
            &mut self,
            hand: &[Card],
            _leading_suit: Option<Suit>,
            _trick: &Trick,
        ) -> Result<Card, RoundError> {
            let foreign = full_deck()
                .into_iter()
                .find(|c| !hand.contains(c))
                .ok_or(RoundError::NoPlayableCard)?;
            Ok(foreign)
        }
        fn name(&self) -> &str {
            "OutOfHand"
        }
    }

    let mut ctrl = RoundController::from_deal(crafted_deal(), Seat::South);
    let mut bad = OutOfHand;
    let (mut b, mut c, mut d) = (FirstLegal, FirstLegal, FirstLegal);
    let mut choosers: [&mut dyn CardChooser; 4] = [&mut bad, &mut b, &mut c, &mut d];
    let err = ctrl
        .play_trick(&mut choosers, &mut NullSink)
        .unwrap_err();
    assert!(matches!(err, RoundError::CardNotInHand { seat: Seat::South, .. }));
    // Nothing was accepted: the round can still proceed with honest seats.
    assert_eq!(ctrl.play_log().len(), 0);
    assert_eq!(ctrl.phase(), Phase::InTrick);
}
