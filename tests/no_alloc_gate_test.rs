use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_miner::core::{GameSnapshot, GameState, Session, TimeStep};
use tui_miner::scene::{render_into, DrawList};
use tui_miner::term::{FrameBuffer, SceneView, StatusView, Viewport};
use tui_miner::types::{Direction, InputSnapshot};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Single test per binary: the counter is process-wide.
#[test]
fn frame_hot_paths_do_not_allocate() {
    let mut session = Session::new(GameState::with_treasure_rock(2), TimeStep::fixed_millis(10));
    let mut list = DrawList::new();
    let mut snap = GameSnapshot::default();
    let view = SceneView::default();
    let viewport = Viewport::new(100, 30);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    // Warm-up.
    session.frame(&InputSnapshot::idle(), 0.016);
    render_into(session.state(), &mut list);
    view.render_into(&list, None, viewport, &mut fb);

    let inputs = [
        InputSnapshot::idle().with(Direction::Left),
        InputSnapshot::idle().with(Direction::Up).mining(),
        InputSnapshot::idle().with(Direction::Right),
        InputSnapshot::idle().with(Direction::Down).with(Direction::Left),
    ];

    let allocs = with_alloc_counting(|| {
        for i in 0..400 {
            let input = &inputs[(i / 25) % inputs.len()];
            let _ = session.frame(input, 0.016);
            let _ = session.take_events();

            session.state().snapshot_into(&mut snap);
            let _ = snap.fingerprint();

            render_into(session.state(), &mut list);
            let status = StatusView::from(&snap);
            view.render_into(&list, Some(&status), viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
