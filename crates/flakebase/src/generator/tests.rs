use crate::{BoxError, DefaultLayout, Error, Layout, Node, SnowflakeId, TimeSource, WallClock};
use core::cell::Cell;
use core::time::Duration;
use std::collections::HashSet;
use std::io;
use std::thread::scope;

crate::define_layout!(ZeroEpochLayout, epoch: 0, machine: 10, step: 12);
crate::define_layout!(TinyLayout, epoch: 0, machine: 2, step: 2);
crate::define_layout!(LateEpochLayout, epoch: 1000, machine: 10, step: 12);

#[derive(Clone, Copy)]
struct FixedTime(i64);

impl TimeSource for FixedTime {
    fn current_millis(&self) -> i64 {
        self.0
    }

    fn sleep_for(&self, _: Duration) {
        panic!("fixed clock never advances");
    }
}

/// Replays `values`, moving to the next reading on every sleep and on
/// [`ScriptedTime::tick`]. The last reading repeats forever.
struct ScriptedTime {
    values: Vec<i64>,
    index: Cell<usize>,
    sleeps: Cell<usize>,
}

impl ScriptedTime {
    fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
            index: Cell::new(0),
            sleeps: Cell::new(0),
        }
    }

    fn tick(&self) {
        self.index.set(self.index.get() + 1);
    }
}

impl TimeSource for ScriptedTime {
    fn current_millis(&self) -> i64 {
        self.values[self.index.get().min(self.values.len() - 1)]
    }

    fn sleep_for(&self, _: Duration) {
        self.sleeps.set(self.sleeps.get() + 1);
        self.tick();
    }
}

fn fixed_node(machine: i64, now: i64) -> Node<ZeroEpochLayout, FixedTime> {
    Node::with_clock(|| Ok::<_, io::Error>(machine), FixedTime(now)).unwrap()
}

fn scripted_node<L: Layout>(machine: i64, clock: &ScriptedTime) -> Node<L, &ScriptedTime> {
    Node::with_clock(|| Ok::<_, io::Error>(machine), clock).unwrap()
}

#[test]
fn step_increments_within_same_tick() {
    let node = fixed_node(1, 42);
    for expected in 0..3 {
        let id = node.generate();
        assert_eq!(id.timestamp(), 42);
        assert_eq!(id.machine(), 1);
        assert_eq!(id.step(), expected);
    }
    assert_eq!(node.last_timestamp(), Some(42));
}

#[test]
fn step_resets_on_new_tick() {
    let clock = ScriptedTime::new(&[10, 11]);
    let node = scripted_node::<ZeroEpochLayout>(3, &clock);
    assert_eq!(node.last_timestamp(), None);

    let first = node.generate();
    let second = node.generate();
    clock.tick();
    let third = node.generate();

    assert_eq!((first.timestamp(), first.step()), (10, 0));
    assert_eq!((second.timestamp(), second.step()), (10, 1));
    assert_eq!((third.timestamp(), third.step()), (11, 0));
    assert_eq!(clock.sleeps.get(), 0);
}

#[test]
fn exhausted_steps_wait_for_next_tick() {
    let clock = ScriptedTime::new(&[5, 6]);
    let node = scripted_node::<TinyLayout>(2, &clock);

    let ids: Vec<SnowflakeId<TinyLayout>> = (0..5).map(|_| node.generate()).collect();
    let fields: Vec<_> = ids.iter().map(|id| (id.timestamp(), id.step())).collect();
    assert_eq!(fields, [(5, 0), (5, 1), (5, 2), (5, 3), (6, 0)]);
    assert_eq!(clock.sleeps.get(), 1);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert!(ids.iter().all(|id| id.machine() == 2));
}

#[test]
fn clock_regression_waits_for_clock_to_catch_up() {
    let clock = ScriptedTime::new(&[100, 95, 97, 100, 101]);
    let node = scripted_node::<ZeroEpochLayout>(7, &clock);

    let before = node.generate();
    clock.tick();
    let after = node.generate();

    assert_eq!(before.timestamp(), 100);
    assert_eq!(after.timestamp(), 101);
    assert_eq!(after.step(), 0);
    assert!(after > before);
    assert_eq!(clock.sleeps.get(), 3);
    assert_eq!(node.last_timestamp(), Some(101));
}

#[test]
fn clock_dropping_below_epoch_is_waited_out() {
    let clock = ScriptedTime::new(&[1000, 995, 996, 1001]);
    let node = scripted_node::<LateEpochLayout>(1, &clock);

    clock.tick();
    let id = node.generate();

    assert!(id.to_raw() >= 0, "{id:?}");
    assert_eq!(id.time(), 1001);
    assert_eq!(id.timestamp(), 1);
    assert_eq!(id.step(), 0);
    assert_eq!(clock.sleeps.get(), 2);
}

#[test]
fn clock_one_tick_before_epoch_is_waited_out() {
    let clock = ScriptedTime::new(&[1000, 999, 1000]);
    let node = scripted_node::<LateEpochLayout>(1, &clock);
    assert_eq!(node.last_timestamp(), None);

    clock.tick();
    let id = node.generate();

    assert_eq!((id.time(), id.timestamp(), id.step()), (1000, 0, 0));
    assert_eq!(clock.sleeps.get(), 1);
    assert_eq!(node.last_timestamp(), Some(1000));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "exceeds the layout's timestamp range")]
fn timestamp_past_layout_range_is_caught() {
    let node: Node<TinyLayout, _> =
        Node::with_clock(|| Ok::<_, io::Error>(0), FixedTime(1_i64 << 59)).unwrap();
    let _ = node.generate();
}

#[test]
fn machine_id_must_fit_layout() {
    let err = Node::<DefaultLayout>::from_machine_id(1024).unwrap_err();
    assert!(matches!(
        err,
        Error::MachineOutOfRange {
            machine: 1024,
            max: 1023
        }
    ));
    assert_eq!(err.to_string(), "machine id 1024 must be between 0 and 1023");

    assert!(matches!(
        Node::<DefaultLayout>::from_machine_id(-1),
        Err(Error::MachineOutOfRange { machine: -1, .. })
    ));

    for machine in [0, 1023] {
        let node = Node::<DefaultLayout>::from_machine_id(machine).unwrap();
        assert_eq!(node.machine_id(), machine);
        assert_eq!(node.generate().machine(), machine);
    }
}

#[test]
fn resolver_error_is_passed_through() {
    let err = Node::<DefaultLayout>::new(|| {
        Err::<i64, _>(io::Error::new(io::ErrorKind::NotFound, "no machine id"))
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "no machine id");
    let Error::Resolver(source) = err else {
        panic!("expected a resolver error");
    };
    let io_err = source.downcast_ref::<io::Error>().expect("io error source");
    assert_eq!(io_err.kind(), io::ErrorKind::NotFound);

    let boxed: BoxError = "plain message".into();
    let err = Node::<DefaultLayout>::new(|| Err::<i64, _>(boxed)).unwrap_err();
    assert_eq!(err.to_string(), "plain message");
}

#[test]
fn resolver_parse_error() {
    let err = Node::<DefaultLayout>::new(|| "abc".parse::<i64>()).unwrap_err();
    assert!(matches!(err, Error::Resolver(_)));
    assert_eq!(err.to_string(), "abc".parse::<i64>().unwrap_err().to_string());
}

#[test]
fn clock_before_epoch_is_rejected() {
    let err = Node::<DefaultLayout, _>::with_clock(|| Ok::<_, io::Error>(1), FixedTime(0))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::ClockBeforeEpoch {
            now: 0,
            epoch: DefaultLayout::EPOCH
        }
    ));
}

#[test]
fn wall_clock_ids_carry_current_time() {
    let node: Node = Node::from_machine_id(1).unwrap();
    let before = WallClock.current_millis();
    let id = node.generate();
    let after = WallClock.current_millis();

    assert!(id.to_raw() > 0);
    assert!((before..=after).contains(&id.time()));
    assert_eq!(id.machine(), 1);
    assert_eq!(node.last_timestamp(), Some(id.time()));
}

#[test]
fn ids_are_strictly_increasing() {
    let node: Node = Node::from_machine_id(9).unwrap();
    let mut prev = node.generate();
    for _ in 0..100_000 {
        let next = node.generate();
        assert!(next > prev, "{next:?} <= {prev:?}");
        prev = next;
    }
}

#[test]
fn clones_share_state() {
    let node = fixed_node(4, 7);
    let clone = node.clone();
    assert_eq!(node.generate().step(), 0);
    assert_eq!(clone.generate().step(), 1);
    assert_eq!(node.generate().step(), 2);
    assert_eq!(clone.last_timestamp(), Some(7));
}

#[test]
fn debug_omits_clock() {
    let node = fixed_node(4, 7);
    assert_eq!(
        format!("{node:?}"),
        "Node { machine: 4, last_timestamp: None, .. }"
    );
}

#[test]
fn threaded_generation_is_unique() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 20_000;

    let node: Node = Node::from_machine_id(1).unwrap();
    let batches: Vec<Vec<SnowflakeId>> = scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let node = node.clone();
                s.spawn(move || {
                    let ids: Vec<SnowflakeId> = (0..PER_THREAD).map(|_| node.generate()).collect();
                    assert!(ids.windows(2).all(|w| w[0] < w[1]));
                    ids
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let seen: HashSet<SnowflakeId> = batches.into_iter().flatten().collect();
    assert_eq!(seen.len(), THREADS * PER_THREAD);
}

#[test]
fn shared_reference_across_threads() {
    let node: Node = Node::from_machine_id(2).unwrap();
    let seen = std::sync::Mutex::new(HashSet::new());
    scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let local: Vec<SnowflakeId> = (0..5_000).map(|_| node.generate()).collect();
                let mut seen = seen.lock().unwrap();
                for id in local {
                    assert!(seen.insert(id), "duplicate id {id}");
                }
            });
        }
    });
    assert_eq!(seen.into_inner().unwrap().len(), 20_000);
}
