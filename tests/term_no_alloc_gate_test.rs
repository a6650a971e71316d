use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_snake::core::{GameSnapshot, GameState, Snake};
use tui_snake::term::{encode_diff_into, FrameBuffer, GameView, Viewport};
use tui_snake::types::{Coord, FRUIT_COUNT};

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

// Both frame paths are checked in one test so no other test thread allocates
// while counting is on.
#[test]
fn term_frame_path_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(120, 40);

    // Fruit parked off the snake's column, so the body never grows.
    let mut gs = GameState::from_parts(Snake::spawn(), [Coord::new(0, 0); FRUIT_COUNT], 1);
    let mut snap = GameSnapshot::default();
    let mut prev = FrameBuffer::new(viewport.width, viewport.height);
    let mut next = FrameBuffer::new(viewport.width, viewport.height);
    let mut out: Vec<u8> = Vec::with_capacity(1 << 20);

    // Warm-up (snapshot buffer, first frame).
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut prev);

    let render_allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            gs.step();
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut next);
        }
    });
    assert_eq!(render_allocs, 0);

    let diff_allocs = with_alloc_counting(|| {
        for _ in 0..50 {
            std::mem::swap(&mut prev, &mut next);
            gs.step();
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut next);

            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
        }
    });
    assert_eq!(diff_allocs, 0);
    assert!(!out.is_empty());
}
