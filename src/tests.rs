#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use itertools::Itertools;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use strum::VariantArray;
    use unordered_pair::UnorderedPair;

    use crate::arrangement::{Arrangement, ArrangementError, Faces};
    use crate::card::{face_graph, partners, Card};
    use crate::game::{Game, GameConfig, Phase};
    use crate::judge::{answers, judge, Requirement};
    use crate::location::Location;
    use crate::mark::{Mark, Temperature};
    use crate::matching::{is_matchable, Matching};
    use crate::pattern::{write_csv, Pattern, PatternError, PatternSet};
    use crate::permutation::{cycles, replay, swap_count, swap_sequence, PermutationError};
    use crate::solver::{ArrangementSolver, SolverFailure};
    use crate::timer::{format_elapsed, Beep, BeepClock, Stopwatch};
    use crate::walkthrough::SwapWalkthrough;

    use Mark::*;

    // e3 and e6 flipped: M M b / l l b / C C h
    const PATTERN_72: [Mark; 9] = [Maru, Maru, Brocco, Lime, Lime, Brocco, Cookie, Cookie, Hanabana];
    // the marks of pattern 72, dealt in a different order
    const DEALT_72: [Mark; 9] = [Hanabana, Lime, Maru, Brocco, Maru, Cookie, Brocco, Cookie, Lime];

    fn arrangement(ids: [u8; 9]) -> Arrangement {
        Arrangement::from_ids(&ids).unwrap()
    }

    fn pattern_72() -> Pattern {
        Pattern::from_index(72).unwrap()
    }

    #[test]
    fn mark_temperatures_and_crosses() {
        let warm = Mark::VARIANTS.iter().filter(|mark| mark.is_warm()).copied().collect_vec();
        assert_eq!(warm, vec![Maru, Cookie, Sakura]);
        assert_eq!(Brocco.temperature(), Temperature::Cold);

        assert!(Maru.crosses(Brocco));
        assert!(Brocco.crosses(Maru));
        assert!(Sakura.crosses(Lime));
        assert!(Hanabana.crosses(Cookie));
        assert!(!Maru.crosses(Cookie));
        assert!(!Maru.crosses(Maru));
    }

    #[test]
    fn mark_names_and_glyphs() {
        assert_eq!("sakura".parse::<Mark>(), Ok(Sakura));
        assert_eq!("HANABANA".parse::<Mark>(), Ok(Hanabana));
        assert!("tomato".parse::<Mark>().is_err());
        assert_eq!(Brocco.to_string(), "Brocco");
        assert_eq!(Mark::VARIANTS.iter().map(|mark| mark.glyph()).collect::<String>(), "MCSlhb");
    }

    #[test]
    fn cards_showing_each_mark() {
        assert_eq!(Card::showing(Maru).map(Card::id), [0, 1, 2]);
        assert_eq!(Card::showing(Sakura).map(Card::id), [1, 4, 7]);
        assert_eq!(Card::showing(Hanabana).map(Card::id), [3, 6, 8]);
        for mark in Mark::VARIANTS {
            assert!(Card::showing(*mark).iter().all(|card| card.can_show(*mark)));
        }

        let e1 = Card::ALL[0];
        assert_eq!(e1.to_string(), "e1");
        assert_eq!(e1.face_bit(Maru), Some(false));
        assert_eq!(e1.face_bit(Cookie), Some(true));
        assert_eq!(e1.face_bit(Lime), None);
        assert_eq!(e1.face(true), Cookie);
        assert_eq!(Card::new(9), None);
    }

    #[test]
    fn face_graph_is_cubic() {
        let graph = face_graph();
        assert_eq!(graph.node_count(), Mark::COUNT);
        assert_eq!(graph.edge_count(), Card::COUNT);
        for mark in Mark::VARIANTS {
            assert_eq!(graph.neighbors(*mark).count(), 3);
        }

        assert_eq!(graph.edge_weight(Maru, Brocco), Some(&Card::ALL[2]));
        assert_eq!(partners(Cookie), vec![Maru, Sakura, Hanabana]);
        assert_eq!(partners(Lime), vec![Sakura, Hanabana, Brocco]);
    }

    #[test]
    fn pattern_bits_are_most_significant_first() {
        let pattern = pattern_72();
        assert_eq!(pattern.marks(), &PATTERN_72);
        assert_eq!(pattern.index(), 72);
        assert_eq!(pattern.warm_total(), 4);
        assert_eq!(pattern.mark_counts(), [2, 2, 0, 2, 1, 2]);
        assert!(pattern.is_valid());
        assert_eq!(pattern.faces().mark_of(Card::ALL[2]), Brocco);

        // e1 to e3 all show Maru
        assert!(!Pattern::from_index(0).unwrap().is_valid());
        assert_eq!(Pattern::from_index(511).unwrap().marks()[0], Cookie);
        assert_eq!(Pattern::from_index(512), None);
        assert_eq!(Pattern::all().count(), 512);
    }

    #[test]
    fn enumerated_patterns() {
        let set = PatternSet::enumerate();
        assert_eq!(set.len(), 176);
        assert_eq!(set.iter().next().map(Pattern::index), Some(72));
        assert_eq!(set.warm_histogram(), BTreeMap::from([(3, 16), (4, 72), (5, 72), (6, 16)]));
        assert!(set.iter().all(|pattern| pattern.max_multiplicity() == 2));
    }

    #[test_log::test]
    fn parse_pattern_table() {
        let text = "0,0,1,0,0,1,0,0,0

 0 , 0 , 1 , 0 , 0 , 1 , 0 , 0 , 0 , note
0,0,1,,0,1,0,0,
0.0,0,2,0,0,-1,0,0,0
1,1,1,1,1,1,1,1,1
";
        let set = PatternSet::parse(text).unwrap();
        // the all-ones row shows Sakura three times
        assert_eq!(set.len(), 4);
        assert!(set.iter().all(|pattern| pattern.index() == 72));
    }

    #[test]
    fn reject_malformed_pattern_tables() {
        assert!(matches!(
            PatternSet::parse("0,0,1,0,0,1,0,0,0\n0,0,1\n"),
            Err(PatternError::ShortRow { columns: 3, .. })
        ));

        match PatternSet::parse("0,0,x,0,0,1,0,0,0\n") {
            Err(PatternError::BadCell { column, value, .. }) => {
                assert_eq!(column, 3);
                assert_eq!(value, "x");
            }
            other => panic!("expected a bad cell, got {:?}", other),
        }
        assert!(matches!(PatternSet::parse("NaN,0,1,0,0,1,0,0,0\n"), Err(PatternError::BadCell { column: 1, .. })));

        assert!(matches!(PatternSet::parse(""), Err(PatternError::NoValidPatterns)));
        assert!(matches!(PatternSet::parse("0,0,0,0,0,0,0,0,0\n"), Err(PatternError::NoValidPatterns)));
        assert!(matches!(PatternSet::new([Pattern::from_index(0).unwrap()]), Err(PatternError::NoValidPatterns)));
    }

    #[test]
    fn exported_table_reads_back() {
        let mut buf = Vec::new();
        write_csv(Pattern::all(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 512);
        assert_eq!(text.lines().nth(72), Some("0,0,1,0,0,1,0,0,0"));

        let set = PatternSet::parse(&text).unwrap();
        assert_eq!(set.len(), 176);
    }

    #[test]
    fn judge_selections() {
        assert_eq!(Requirement::for_warm_total(4), Some(Requirement { warm: 1, cold: 2 }));
        assert_eq!(Requirement::for_warm_total(2), None);

        let judgement = judge([Maru, Lime, Hanabana], 4);
        assert!(judgement.correct);
        assert!(judgement.distinct);
        assert!(!judgement.conflict);

        let judgement = judge([Cookie, Lime, Hanabana], 4);
        assert!(!judgement.correct);
        assert!(judgement.conflict);

        let judgement = judge([Maru, Maru, Lime], 4);
        assert!(!judgement.correct);
        assert!(!judgement.distinct);

        // right marks, wrong split
        assert!(!judge([Maru, Lime, Hanabana], 5).correct);
        assert!(judge([Maru, Cookie, Sakura], 6).correct);
        assert!(judge([Lime, Hanabana, Brocco], 3).correct);
        assert!(judge([Maru, Sakura, Brocco], 5).conflict);

        let judgement = judge([Maru, Lime, Hanabana], 7);
        assert!(!judgement.correct);
        assert_eq!(judgement.requirement, None);
    }

    #[test]
    fn answers_for_a_layout() {
        assert_eq!(answers(&PATTERN_72, 4), vec![
            [0, 3, 8], [0, 4, 8], [1, 3, 8], [1, 4, 8],
            [2, 3, 6], [2, 3, 7], [2, 4, 6], [2, 4, 7],
            [3, 5, 6], [3, 5, 7], [4, 5, 6], [4, 5, 7],
        ]);
        assert!(answers(&PATTERN_72, 6).is_empty());
    }

    #[test]
    fn every_valid_pattern_is_playable() {
        for pattern in PatternSet::enumerate().iter() {
            assert!(Requirement::for_warm_total(pattern.warm_total()).is_some());
            assert!(answers(pattern.marks(), pattern.warm_total()).len() >= 8, "pattern {}", pattern.index());
        }
    }

    #[test]
    fn permutation_cycles() {
        assert_eq!(cycles(&[0, 1, 2, 3], &[1, 2, 0, 3]).unwrap(), vec![vec![0, 2, 1], vec![3]]);
        assert_eq!(swap_count(&[0, 1, 2, 3], &[1, 2, 0, 3]).unwrap(), 2);
        assert_eq!(swap_count(&['a', 'b', 'c'], &['a', 'b', 'c']).unwrap(), 0);
        assert_eq!(swap_count(&['a', 'b', 'c'], &['b', 'a', 'c']).unwrap(), 1);
        assert_eq!(swap_count::<u8>(&[], &[]).unwrap(), 0);
    }

    #[test]
    fn permutation_swaps_replay_to_target() {
        let start = [0, 1, 2, 3];
        let target = [1, 2, 0, 3];
        let swaps = swap_sequence(&start, &target).unwrap();
        assert_eq!(swaps, vec![UnorderedPair(0, 1), UnorderedPair(1, 2)]);

        let states = replay(&start, &swaps);
        assert_eq!(states, vec![vec![0, 1, 2, 3], vec![1, 0, 2, 3], vec![1, 2, 0, 3]]);
    }

    #[test]
    fn permutation_errors() {
        assert_eq!(swap_count(&[1, 2], &[1]), Err(PermutationError::LengthMismatch(2, 1)));
        assert_eq!(cycles(&[1, 1], &[1, 2]), Err(PermutationError::NotAPermutation(1)));
        assert_eq!(swap_sequence(&[1, 2], &[1, 1]), Err(PermutationError::DuplicateInTarget(1)));
        assert_eq!(cycles(&[3, 1, 2], &[1, 2, 2]), Err(PermutationError::DuplicateInTarget(2)));
        assert_eq!(swap_count(&[1, 2, 3], &[3, 1, 2, 2]), Err(PermutationError::LengthMismatch(3, 4)));
        assert_eq!(swap_sequence(&[1, 2], &[1, 3]), Err(PermutationError::NotAPermutation(1)));
    }

    #[test]
    fn arrangement_validation() {
        assert_eq!(Arrangement::from_ids(&[0, 1]), Err(ArrangementError::WrongLength(2)));
        assert_eq!(Arrangement::from_ids(&[0, 1, 2, 3, 4, 5, 6, 7, 9]), Err(ArrangementError::UnknownCard(9)));
        assert_eq!(Arrangement::from_ids(&[0, 0, 2, 3, 4, 5, 6, 7, 8]), Err(ArrangementError::Repeated(Card::ALL[0])));
        assert_eq!(Arrangement::new(&Card::ALL), Ok(Arrangement::identity()));
    }

    #[test]
    fn arrangement_layout() {
        let identity = Arrangement::identity();
        assert_eq!(format!("{}", identity), "e1 e2 e3
e4 e5 e6
e7 e8 e9");
        assert_eq!(identity.render(&pattern_72().faces()), vec!["Me1 Me2 be3", "le4 le5 be6", "Ce7 Ce8 he9"]);

        let start = arrangement([4, 0, 8, 2, 6, 1, 7, 3, 5]);
        assert_eq!(start.card_at(2), Card::ALL[8]);
        assert_eq!(start.position_of(Card::ALL[8]), 2);
        assert_eq!(start.location_of(Card::ALL[8]), Location(2, 0));
        assert_eq!(start.location_of(Card::ALL[5]), Location(2, 2));
        assert_eq!(start.grid()[[1, 0]], Card::ALL[2]);
        assert_eq!(Location(1, 2).position(), 7);
        assert_eq!(Location::of_position(5), Location(2, 1));

        let swapped = start.swapped(UnorderedPair(0, 8));
        assert_eq!(swapped.ids(), [5, 0, 8, 2, 6, 1, 7, 3, 4]);
        assert_eq!(start.swap_count_to(&swapped), 1);
        assert_eq!(start.swap_count_to(&start), 0);
    }

    #[test]
    fn faces_must_be_printed_on_their_cards() {
        assert_eq!(Faces::new([Maru; 9]), None);
        assert_eq!(Faces::new(PATTERN_72), Some(pattern_72().faces()));
        assert_eq!(pattern_72().faces().marks_of(&Arrangement::identity()), PATTERN_72);
        assert_eq!(Faces::from_assignment(&Arrangement::identity(), &DEALT_72), None);
    }

    #[test]
    fn matching_finds_a_placement() {
        let placement = Matching::new(&DEALT_72).solve().unwrap();
        assert!(placement.iter().all_unique());
        assert!(placement.iter().zip(DEALT_72.iter()).all(|(card, mark)| card.can_show(*mark)));
    }

    #[test]
    fn unmatchable_targets() {
        let targets = [Maru, Maru, Maru, Cookie, Cookie, Cookie, Sakura, Sakura, Sakura];
        assert!(!is_matchable(&targets));
        let start = Arrangement::identity();
        assert_eq!(ArrangementSolver::new(&start, targets).solve(), Err(SolverFailure::Inconsistent));
        assert_eq!(ArrangementSolver::new(&start, [Maru; 9]).solve(), Err(SolverFailure::Inconsistent));
        assert!(SwapWalkthrough::new(start, [Lime; 9]).is_err());
    }

    #[test]
    fn impossible_targets_fail_before_searching() {
        let mut rng = SmallRng::seed_from_u64(3);
        let start = Arrangement::identity();
        for _ in 0..200 {
            let targets: [Mark; 9] = std::array::from_fn(|_| Mark::VARIANTS[rng.random_range(0..Mark::COUNT)]);
            match ArrangementSolver::new(&start, targets).solve() {
                Ok(solution) => assert_eq!(solution.faces.marks_of(&solution.arrangement), targets),
                Err(failure) => {
                    assert_eq!(failure, SolverFailure::Inconsistent);
                    assert!(!is_matchable(&targets));
                }
            }
        }
    }

    #[test]
    fn every_pattern_layout_is_matchable() {
        let mut rng = SmallRng::seed_from_u64(9);
        for pattern in PatternSet::enumerate().iter() {
            let mut targets = *pattern.marks();
            rand::seq::SliceRandom::shuffle(&mut targets[..], &mut rng);
            assert!(is_matchable(&targets), "pattern {}", pattern.index());
        }
    }

    #[test_log::test]
    fn solve_from_identity_without_swaps() {
        let start = Arrangement::identity();
        let solution = ArrangementSolver::new(&start, PATTERN_72).solve().unwrap();
        assert_eq!(solution.arrangement, start);
        assert_eq!(solution.swaps, 0);
        assert_eq!(solution.faces, pattern_72().faces());
        assert!(solution.swap_sequence(&start).is_empty());
    }

    #[test_log::test]
    fn solve_known_layouts() {
        let start = arrangement([4, 0, 8, 2, 6, 1, 7, 3, 5]);
        let solution = ArrangementSolver::new(&start, DEALT_72).solve().unwrap();
        assert_eq!(solution.arrangement.ids(), [3, 4, 0, 2, 1, 6, 8, 7, 5]);
        assert_eq!(solution.swaps, 5);
        assert_eq!(solution.faces.marks_of(&solution.arrangement), DEALT_72);
        assert_eq!(solution.swap_sequence(&start), vec![
            UnorderedPair(0, 7), UnorderedPair(1, 7), UnorderedPair(2, 7), UnorderedPair(4, 5), UnorderedPair(6, 7),
        ]);

        let start = Arrangement::identity();
        let solution = ArrangementSolver::new(&start, DEALT_72).solve().unwrap();
        assert_eq!(solution.arrangement.ids(), [6, 4, 2, 8, 1, 0, 5, 7, 3]);
        assert_eq!(solution.swaps, 4);
        assert_eq!(solution.swap_sequence(&start), vec![
            UnorderedPair(0, 6), UnorderedPair(1, 4), UnorderedPair(3, 8), UnorderedPair(5, 6),
        ]);
    }

    #[test]
    fn solutions_are_consistent() {
        let mut rng = SmallRng::seed_from_u64(2024);
        let patterns = PatternSet::enumerate();
        for _ in 0..40 {
            let start = Arrangement::shuffled(&mut rng);
            let mut targets = *patterns.choose(&mut rng).marks();
            rand::seq::SliceRandom::shuffle(&mut targets[..], &mut rng);

            let solution = ArrangementSolver::new(&start, targets).solve().unwrap();
            assert_eq!(solution.faces.marks_of(&solution.arrangement), targets);
            assert_eq!(solution.swaps, start.swap_count_to(&solution.arrangement));

            let swaps = solution.swap_sequence(&start);
            assert_eq!(swaps.len(), solution.swaps);
            let end = swaps.iter().fold(start, |arrangement, swap| arrangement.swapped(*swap));
            assert_eq!(end, solution.arrangement);
        }
    }

    #[test]
    fn solutions_are_minimal() {
        let mut rng = SmallRng::seed_from_u64(17);
        let patterns = PatternSet::enumerate();
        for _ in 0..3 {
            let start = Arrangement::shuffled(&mut rng);
            let mut targets = *patterns.choose(&mut rng).marks();
            rand::seq::SliceRandom::shuffle(&mut targets[..], &mut rng);

            let fewest = (0..Card::COUNT)
                .permutations(Card::COUNT)
                .map(|order| Arrangement::new(&order.iter().map(|index| Card::ALL[*index]).collect_vec()).unwrap())
                .filter(|arrangement| arrangement.cards().iter().zip(targets.iter()).all(|(card, mark)| card.can_show(*mark)))
                .map(|arrangement| start.swap_count_to(&arrangement))
                .min()
                .unwrap();

            let solution = ArrangementSolver::new(&start, targets).solve().unwrap();
            assert_eq!(solution.swaps, fewest);
        }
    }

    #[test]
    fn walkthrough_without_swaps() {
        let mut walkthrough = SwapWalkthrough::new(Arrangement::identity(), PATTERN_72).unwrap();
        assert!(walkthrough.is_empty());
        assert!(walkthrough.is_finished());
        assert!(!walkthrough.step_forward());
        assert_eq!(walkthrough.next_swap(), None);
        assert_eq!(walkthrough.status(), "swap count is within 5");

        let [warm, cold] = walkthrough.trails();
        assert_eq!(warm.temperature, Temperature::Warm);
        assert_eq!(warm.cards.map(Card::id), [0, 7, 1]);
        assert_eq!(warm.locations, [Location(0, 0), Location(1, 2), Location(1, 0)]);
        assert_eq!(cold.cards.map(Card::id), [3, 8, 5]);
        assert_eq!(cold.locations, [Location(0, 1), Location(2, 2), Location(2, 1)]);

        assert_eq!(format!("{}", walkthrough), "start          current        target
Me1 Me2 be3    Me1 Me2 be3    Me1 Me2 be3
le4 le5 be6    le4 le5 be6    le4 le5 be6
Ce7 Ce8 he9    Ce7 Ce8 he9    Ce7 Ce8 he9
swap: 0 | step: 0/0");
    }

    #[test]
    fn walkthrough_steps_to_target() {
        let start = arrangement([4, 0, 8, 2, 6, 1, 7, 3, 5]);
        let mut walkthrough = SwapWalkthrough::new(start, DEALT_72).unwrap();
        assert_eq!(walkthrough.len(), 5);
        assert!(walkthrough.within_budget());
        assert_eq!(walkthrough.info(), "swap: 5 | step: 0/5");
        assert_eq!(walkthrough.marks(walkthrough.target()), DEALT_72);

        assert_eq!(walkthrough.next_swap(), Some(UnorderedPair(0, 7)));
        assert!(walkthrough.step_forward());
        assert_eq!(walkthrough.current(), &start.swapped(UnorderedPair(0, 7)));
        assert_eq!(walkthrough.info(), "swap: 5 | step: 1/5");

        while walkthrough.step_forward() {}
        assert_eq!(walkthrough.step(), 5);
        assert_eq!(walkthrough.current(), walkthrough.target());
        assert_eq!(walkthrough.current().ids(), [3, 4, 0, 2, 1, 6, 8, 7, 5]);

        walkthrough.rewind();
        assert_eq!(walkthrough.current(), &start);
    }

    #[test]
    fn random_walkthroughs_reach_their_targets() {
        let mut rng = SmallRng::seed_from_u64(5);
        let patterns = PatternSet::enumerate();
        for _ in 0..10 {
            let walkthrough = SwapWalkthrough::random(&mut rng, &patterns).unwrap();
            assert_eq!(walkthrough.len(), walkthrough.start().swap_count_to(walkthrough.target()));
            let shown = walkthrough.marks(walkthrough.target());
            assert!(patterns.iter().any(|pattern| pattern.marks().iter().sorted().eq(shown.iter().sorted())));
        }
    }

    #[test]
    fn frequent_polling_beeps_every_second() {
        let mut clock = BeepClock::default();
        let beeps = (0..130).filter_map(|tick| clock.tick(f64::from(tick) * 0.05)).collect_vec();
        assert_eq!(beeps, vec![Beep::Long, Beep::Short, Beep::Short, Beep::Long, Beep::Short, Beep::Short, Beep::Long]);
    }

    #[test]
    fn reset_deals_a_new_puzzle() {
        let mut rng = SmallRng::seed_from_u64(11);
        let patterns = PatternSet::enumerate();
        let mut walkthrough = SwapWalkthrough::random(&mut rng, &patterns).unwrap();
        while walkthrough.step_forward() {}

        let before = *walkthrough.start();
        walkthrough.rewind();
        assert_eq!(walkthrough.start(), &before);

        walkthrough.step_forward();
        walkthrough.reset(&mut rng, &patterns).unwrap();
        assert_eq!(walkthrough.step(), 0);
        assert_ne!(walkthrough.start(), &before);
        assert_eq!(walkthrough.current(), walkthrough.start());
        assert_eq!(walkthrough.len(), walkthrough.start().swap_count_to(walkthrough.target()));
    }

    #[test]
    fn beeps_once_per_second() {
        let mut clock = BeepClock::default();
        assert_eq!(clock.tick(0.0), Some(Beep::Long));
        assert_eq!(clock.tick(0.5), None);
        assert_eq!(clock.tick(1.2), Some(Beep::Short));
        assert_eq!(clock.tick(2.0), Some(Beep::Short));
        assert_eq!(clock.tick(2.9), None);
        assert_eq!(clock.tick(3.01), Some(Beep::Long));
        assert_eq!(clock.tick(6.5), Some(Beep::Long));

        clock.reset();
        assert_eq!(clock.tick(0.1), Some(Beep::Long));

        assert_eq!((Beep::Short.duration_ms(), Beep::Short.frequency_hz()), (90, 660));
        assert_eq!((Beep::Long.duration_ms(), Beep::Long.frequency_hz()), (180, 880));
    }

    #[test]
    fn stopwatch() {
        let mut stopwatch = Stopwatch::default();
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.poll(), (0.0, None));

        stopwatch.start();
        assert!(stopwatch.is_running());
        let elapsed = stopwatch.stop();
        assert!(elapsed >= 0.0);
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.elapsed(), elapsed);
        assert_eq!(stopwatch.poll().1, None);
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(0.0), "00:00:00.00");
        assert_eq!(format_elapsed(61.25), "00:01:01.25");
        assert_eq!(format_elapsed(3725.5), "01:02:05.50");
        assert_eq!(format_elapsed(-3.0), "00:00:00.00");
    }

    fn game(trials: usize, seed: u64) -> Game<SmallRng> {
        let patterns = PatternSet::new([pattern_72()]).unwrap();
        Game::new(patterns, GameConfig { trials }, SmallRng::seed_from_u64(seed))
    }

    #[test_log::test]
    fn play_a_session() {
        let mut game = game(3, 1);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.button_label(), Some("START"));
        assert_eq!(game.feedback(), "Tap START");
        assert_eq!(game.toggle(0, 0.0), None);
        assert!(game.selected().is_empty());

        let mut layout = *game.layout();
        layout.sort();
        let mut expected = PATTERN_72;
        expected.sort();
        assert_eq!(layout, expected);

        assert_eq!(game.press(0.0), None);
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.button_label(), Some("STOP"));
        assert_eq!(game.feedback(), "");

        let [a, b, c] = game.hint().unwrap();
        assert_eq!(game.toggle(a, 0.5), None);
        assert_eq!(game.toggle(b, 0.7), None);
        assert_eq!(game.toggle(b, 0.9), None);
        assert_eq!(game.selected(), &[a]);
        assert_eq!(game.toggle(b, 1.0), None);
        let outcome = game.toggle(c, 1.5).unwrap();
        assert!(outcome.judgement.unwrap().correct);
        assert_eq!(game.phase(), Phase::Paused);
        assert_eq!(game.button_label(), Some("NEXT"));
        assert_eq!(game.feedback(), "Correct! | 1.50s");
        assert_eq!(game.trial(), 1);

        assert_eq!(game.press(0.0), None);
        assert_eq!(game.phase(), Phase::Running);
        assert!(game.selected().is_empty());
        let outcome = game.press(2.5).unwrap();
        assert_eq!(outcome.judgement, None);
        assert_eq!(game.feedback(), "2.50s recorded, tap NEXT");

        game.press(0.0);
        let duplicate = (0..9usize)
            .tuple_combinations()
            .find(|(p, q)| game.layout()[*p] == game.layout()[*q])
            .unwrap();
        let third = (0..9).find(|r| *r != duplicate.0 && *r != duplicate.1).unwrap();
        game.toggle(duplicate.0, 1.0);
        game.toggle(duplicate.1, 1.5);
        let outcome = game.toggle(third, 2.0).unwrap();
        assert!(!outcome.judgement.unwrap().correct);

        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.button_label(), None);
        assert_eq!(game.times(), &[1.5, 2.5, 2.0]);
        assert_eq!(game.average(), 2.0);
        assert_eq!(game.feedback(), "Finished! Average: 2.00s");
        assert_eq!(game.press(3.0), None);
        assert_eq!(game.trial(), 3);
    }

    #[test]
    fn incorrect_feedback() {
        let mut game = game(30, 4);
        game.press(0.0);
        let (p, q) = (0..9usize)
            .tuple_combinations()
            .find(|(p, q)| game.layout()[*p] == game.layout()[*q])
            .unwrap();
        let r = (0..9).find(|r| *r != p && *r != q).unwrap();
        game.toggle(p, 0.2);
        game.toggle(q, 0.4);
        game.toggle(r, 1.25);

        assert_eq!(game.phase(), Phase::Paused);
        assert!(game.feedback().starts_with("Incorrect"));
        assert!(game.feedback().ends_with("| 1.25s"));
        assert_eq!(game.last_outcome().map(|outcome| outcome.elapsed), Some(1.25));
    }

    #[test]
    fn default_session_length() {
        assert_eq!(GameConfig::default().trials, 30);
        let game = Game::new(PatternSet::enumerate(), GameConfig::default(), SmallRng::seed_from_u64(0));
        assert_eq!(game.average(), 0.0);
        assert!(game.pattern().is_valid());
        assert!(judge(game.hint().unwrap().map(|p| game.layout()[p]), game.pattern().warm_total()).correct);
    }
}
