#![forbid(unsafe_code)]

use config::{Config, HistoryScope};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rotation::domain::{Image, ImageKey, Rect, ScreenIndex, ScreenProfile, TextOverlay};
use rotation::{
    CandidatePoolRequest, CandidateSupplier, ChannelSink, CycleEvent, CycleScheduler, Error,
    ListSupplier, Services,
};
use std::collections::HashMap;

const DISPLAYS: [Rect; 2] = [Rect::new(0, 0, 1920, 1080), Rect::new(1920, 0, 2560, 1440)];

fn images(paths: &[&str]) -> Vec<Image> {
    paths.iter().map(|path| Image::new(*path)).collect()
}

fn scheduler_with(
    config: &Config,
    suppliers: Vec<ListSupplier>,
    seed: u64,
) -> (CycleScheduler, flume::Receiver<CycleEvent>) {
    let (tx, rx) = flume::unbounded();
    let services = Services {
        suppliers: suppliers
            .into_iter()
            .map(|supplier| Box::new(supplier) as Box<dyn CandidateSupplier>)
            .collect(),
        sink: Box::new(ChannelSink::new(tx)),
    };
    let scheduler = CycleScheduler::with_rng(config, services, StdRng::seed_from_u64(seed)).unwrap();
    (scheduler, rx)
}

fn random_screen(index: usize) -> ScreenProfile {
    ScreenProfile::new(index, &DISPLAYS).unwrap()
}

fn fixed_screen(index: usize, path: &str) -> ScreenProfile {
    let mut profile = ScreenProfile::new(index, &DISPLAYS).unwrap();
    profile.set_cycle_randomly(false);
    profile.set_fixed_image(Image::new(path));
    profile
}

fn history_of(scheduler: &CycleScheduler, screen: usize) -> Vec<ImageKey> {
    scheduler
        .histories()
        .stream(ScreenIndex::new(screen))
        .map(|history| history.iter().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn recent_wallpapers_are_not_eligible() {
    let mut config = Config::new();
    config.history.capacity = 3;

    for seed in 0..64 {
        let supplier = ListSupplier::new(images(&["A", "B", "C", "D", "E"]));
        let (mut scheduler, _rx) = scheduler_with(&config, vec![supplier], seed);
        scheduler
            .histories_mut()
            .stream_mut(ScreenIndex::new(0))
            .push_all(["A", "B", "C", "D"].map(ImageKey::new));
        assert_eq!(history_of(&scheduler, 0), ["B", "C", "D"].map(ImageKey::new));

        let assignment = scheduler.run_cycle(&[random_screen(0)]).unwrap();
        let chosen = assignment.image(ScreenIndex::new(0)).unwrap().key().clone();

        assert!(
            chosen == ImageKey::new("A") || chosen == ImageKey::new("E"),
            "picked {chosen:?}"
        );
        assert_eq!(history_of(&scheduler, 0), [ImageKey::new("C"), ImageKey::new("D"), chosen]);
    }
}

#[test]
fn exhausted_pool_falls_back_to_everything() {
    let mut config = Config::new();
    config.history.capacity = 5;
    let supplier = ListSupplier::new(images(&["A", "B"]));
    let (mut scheduler, _rx) = scheduler_with(&config, vec![supplier], 1);
    scheduler
        .histories_mut()
        .stream_mut(ScreenIndex::new(0))
        .push_all(["A", "B"].map(ImageKey::new));

    let assignment = scheduler.run_cycle(&[random_screen(0)]).unwrap();
    let chosen = assignment.image(ScreenIndex::new(0)).unwrap();
    assert!(images(&["A", "B"]).contains(chosen));
    assert_eq!(history_of(&scheduler, 0).len(), 3);
}

#[test]
fn empty_pool_skips_whole_cycle() {
    let supplier = ListSupplier::default();
    let (mut scheduler, rx) = scheduler_with(&Config::new(), vec![supplier], 3);
    let profiles = [fixed_screen(0, "X"), random_screen(1)];

    let err = scheduler.run_cycle(&profiles).unwrap_err();

    assert!(matches!(err, Error::EmptyCandidatePool));
    assert!(err.is_cycle_skip());
    assert!(scheduler.histories().is_empty());
    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], CycleEvent::Skipped { cycle_id: 1, .. }));
}

#[test]
fn empty_pool_leaves_history_untouched() {
    let mut config = Config::new();
    config.history.capacity = 2;
    let supplier = ListSupplier::new(images(&["A", "B", "C"]));
    let (mut scheduler, _rx) = scheduler_with(&config, vec![supplier.clone()], 5);
    let profiles = [random_screen(0), random_screen(1)];

    scheduler.run_cycle(&profiles).unwrap();
    let before = (history_of(&scheduler, 0), history_of(&scheduler, 1));

    supplier.replace(Vec::new());
    assert!(scheduler.run_cycle(&profiles).is_err());
    assert_eq!((history_of(&scheduler, 0), history_of(&scheduler, 1)), before);
}

#[test]
fn fixed_screens_ignore_pool_and_history() {
    let supplier = ListSupplier::new(images(&["A", "B", "C"]));
    let (mut scheduler, _rx) = scheduler_with(&Config::new(), vec![supplier.clone()], 9);
    let profiles = [fixed_screen(0, "X")];

    for round in 0..10 {
        if round == 5 {
            supplier.replace(images(&["D"]));
        }
        let assignment = scheduler.run_cycle(&profiles).unwrap();
        let screen = assignment.get(ScreenIndex::new(0)).unwrap();
        assert_eq!(screen.image, Image::new("X"));
        assert!(!screen.randomly_selected);
    }
    assert!(scheduler.histories().is_empty());
}

#[test]
fn assignment_covers_every_profile() {
    let supplier = ListSupplier::new(images(&["A", "B", "C"]));
    let (mut scheduler, rx) = scheduler_with(&Config::new(), vec![supplier], 11);

    let mut fixed = fixed_screen(1, "X");
    fixed.set_margin(config::Margin::new(0, 0, 0, 40));
    fixed.overlays_mut().push(TextOverlay::new("%filename%"));
    let profiles = [random_screen(0), fixed];

    let assignment = scheduler.run_cycle(&profiles).unwrap();

    assert_eq!(assignment.cycle_id, 1);
    assert_eq!(
        assignment.screens().collect::<Vec<_>>(),
        [ScreenIndex::new(0), ScreenIndex::new(1)]
    );
    let second = assignment.get(ScreenIndex::new(1)).unwrap();
    assert_eq!(second.bounds, Rect::new(1920, 0, 2560, 1400));
    assert_eq!(second.overlays, vec![TextOverlay::new("%filename%")]);

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(events, vec![CycleEvent::Assigned(assignment)]);
}

#[test]
fn random_picks_take_the_screen_placement() {
    let supplier = ListSupplier::new(images(&["A", "B"]));
    let (mut scheduler, _rx) = scheduler_with(&Config::new(), vec![supplier], 6);

    let mut tiled = random_screen(0);
    tiled.set_placement(config::Placement::Tile);
    let profiles = [tiled, random_screen(1)];

    let assignment = scheduler.run_cycle(&profiles).unwrap();
    let placement = |screen| assignment.image(ScreenIndex::new(screen)).unwrap().placement;
    assert_eq!(placement(0), config::Placement::Tile);
    assert_eq!(placement(1), config::Placement::UniformToFill);
}

#[test]
fn duplicate_screens_are_rejected_before_selection() {
    let supplier = ListSupplier::new(images(&["A", "B"]));
    let (mut scheduler, rx) = scheduler_with(&Config::new(), vec![supplier], 2);

    let err = scheduler
        .run_cycle(&[random_screen(0), random_screen(0)])
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateScreen(screen) if screen == ScreenIndex::new(0)));
    assert!(!err.is_cycle_skip());
    assert!(scheduler.histories().is_empty());
    assert!(rx.is_empty());
}

#[test]
fn every_supplier_contributes() {
    let first = ListSupplier::new(images(&["A"]));
    let second = ListSupplier::new(images(&["B"]));
    let (scheduler, _rx) = scheduler_with(&Config::new(), vec![first, second], 4);

    let pool = scheduler.request_pool().unwrap();
    assert_eq!(pool.images(), images(&["A", "B"]));
}

#[test]
fn single_distinct_wallpaper_repeats() {
    let supplier = ListSupplier::new(images(&["A", "A", "A"]));
    let (mut scheduler, _rx) = scheduler_with(&Config::new(), vec![supplier], 8);
    let profiles = [random_screen(0)];

    for _ in 0..5 {
        let assignment = scheduler.run_cycle(&profiles).unwrap();
        assert_eq!(assignment.image(ScreenIndex::new(0)), Some(&Image::new("A")));
    }
}

#[test]
fn shared_history_avoids_other_screens_picks() {
    let mut config = Config::new();
    config.history.scope = HistoryScope::Shared;
    config.history.capacity = 2;

    for seed in 0..32 {
        let supplier = ListSupplier::new(images(&["A", "B", "C"]));
        let (mut scheduler, _rx) = scheduler_with(&config, vec![supplier], seed);
        let assignment = scheduler
            .run_cycle(&[random_screen(0), random_screen(1)])
            .unwrap();
        assert_ne!(
            assignment.image(ScreenIndex::new(0)),
            assignment.image(ScreenIndex::new(1))
        );
    }
}

#[test]
fn selection_spreads_over_eligible_set() {
    let supplier = ListSupplier::new(images(&["A", "B", "C", "D"]));
    let (mut scheduler, _rx) = scheduler_with(&Config::new(), vec![supplier], 42);
    let profiles = [random_screen(0)];

    let mut counts: HashMap<ImageKey, usize> = HashMap::new();
    for _ in 0..3000 {
        let assignment = scheduler.run_cycle(&profiles).unwrap();
        let key = assignment.image(ScreenIndex::new(0)).unwrap().key().clone();
        *counts.entry(key).or_default() += 1;
    }

    assert_eq!(counts.len(), 4);
    assert!(counts.values().all(|count| *count > 500), "{counts:?}");
}

#[test]
fn request_collects_before_closing() {
    let mut request = CandidatePoolRequest::with_capacity(1);
    request.offer_all(images(&["A", "B", "C"]));
    assert_eq!(request.finish().unwrap().len(), 3);
}

proptest! {
    #[test]
    fn capacity_one_never_repeats_back_to_back(seed in any::<u64>(), pool_size in 2usize..8) {
        let paths: Vec<String> = (0..pool_size).map(|n| format!("/walls/{n}.jpg")).collect();
        let supplier = ListSupplier::new(paths.iter().map(Image::new).collect());
        let (mut scheduler, _rx) = scheduler_with(&Config::new(), vec![supplier], seed);
        let profiles = [random_screen(0), random_screen(1)];

        let mut previous: Option<rotation::CycleAssignment> = None;
        for _ in 0..40 {
            let assignment = scheduler.run_cycle(&profiles).unwrap();
            if let Some(previous) = &previous {
                for screen in [ScreenIndex::new(0), ScreenIndex::new(1)] {
                    prop_assert_ne!(previous.image(screen), assignment.image(screen));
                }
            }
            previous = Some(assignment);
        }
    }
}
