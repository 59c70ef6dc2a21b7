//! Allocator hook and owned limb storage
//!
//! All magnitude allocations go through a process-wide pair of
//! allocate/deallocate function pointers, settable once during quiescent
//! initialization. The canonical zero magnitude allocates nothing: it
//! aliases a shared statically-lived zero limb with capacity 0, so Drop
//! skips deallocation.
//!

use crate::limb::Limb;
use crate::stdlib::alloc::{self as rust_alloc, Layout};
use crate::stdlib::mem;
use crate::stdlib::ptr::{self, NonNull};
use crate::stdlib::slice;
use crate::stdlib::sync::atomic::{AtomicUsize, Ordering};

/// Allocate a block of at least the given number of bytes, limb-aligned
pub type AllocFn = fn(usize) -> *mut u8;

/// Release a block previously returned by the paired [`AllocFn`]
pub type DeallocFn = fn(*mut u8);

// Hooks are stored as plain addresses; 0 means "use the global allocator".
static ALLOC_HOOK: AtomicUsize = AtomicUsize::new(0);
static DEALLOC_HOOK: AtomicUsize = AtomicUsize::new(0);

/// Shared storage for the canonical zero magnitude
pub(crate) static SHARED_ZERO: [Limb; 1] = [0];

/// Install the allocate/deallocate pair used by all magnitude storage.
///
/// Passing `None` for either resets it to the Rust global allocator.
/// There is no thread-safety contract for reconfiguration: call this
/// during quiescent initialization, before any number is constructed.
pub fn set_allocator(allocate: Option<AllocFn>, deallocate: Option<DeallocFn>) {
    ALLOC_HOOK.store(allocate.map_or(0, |f| f as usize), Ordering::Relaxed);
    DEALLOC_HOOK.store(deallocate.map_or(0, |f| f as usize), Ordering::Relaxed);
}

fn limb_layout(count: usize) -> Layout {
    Layout::array::<Limb>(count).expect("bigint capacity overflow")
}

fn allocate(count: usize) -> NonNull<Limb> {
    debug_assert_ne!(count, 0);
    let raw = match ALLOC_HOOK.load(Ordering::Relaxed) {
        0 => unsafe { rust_alloc::alloc(limb_layout(count)) },
        hook => {
            let f: AllocFn = unsafe { mem::transmute(hook) };
            f(count * mem::size_of::<Limb>())
        }
    };
    match NonNull::new(raw as *mut Limb) {
        Some(ptr) => ptr,
        None => rust_alloc::handle_alloc_error(limb_layout(count)),
    }
}

fn deallocate(ptr: NonNull<Limb>, count: usize) {
    match DEALLOC_HOOK.load(Ordering::Relaxed) {
        0 => unsafe { rust_alloc::dealloc(ptr.as_ptr() as *mut u8, limb_layout(count)) },
        hook => {
            let f: DeallocFn = unsafe { mem::transmute(hook) };
            f(ptr.as_ptr() as *mut u8);
        }
    }
}

/// Owned limb storage distinguishing capacity from the semantic length,
/// which the owning [`BigInt`](crate::BigInt) tracks separately.
pub(crate) struct LimbBuf {
    ptr: NonNull<Limb>,
    cap: usize,
}

// The buffer is uniquely owned; the zero variant is never written through.
unsafe impl Send for LimbBuf {}
unsafe impl Sync for LimbBuf {}

impl LimbBuf {
    /// The canonical zero buffer: one readable limb, capacity 0
    pub fn shared_zero() -> LimbBuf {
        LimbBuf {
            ptr: unsafe { NonNull::new_unchecked(SHARED_ZERO.as_ptr() as *mut Limb) },
            cap: 0,
        }
    }

    /// Allocate `cap` zero-initialized limbs through the allocator hook
    pub fn zeroed(cap: usize) -> LimbBuf {
        if cap == 0 {
            return LimbBuf::shared_zero();
        }
        let ptr = allocate(cap);
        unsafe { ptr::write_bytes(ptr.as_ptr(), 0, cap) };
        LimbBuf { ptr: ptr, cap: cap }
    }

    /// Exact-capacity copy of a limb slice
    pub fn copied_from(digits: &[Limb]) -> LimbBuf {
        debug_assert!(!digits.is_empty());
        let mut buf = LimbBuf::zeroed(digits.len());
        buf.as_mut_slice(digits.len()).copy_from_slice(digits);
        buf
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// First `len` limbs; `len` may be 1 on the zero buffer
    pub fn as_slice(&self, len: usize) -> &[Limb] {
        debug_assert!(len <= self.cap.max(1));
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), len) }
    }

    /// Writable view of the first `len` limbs; requires owned capacity
    pub fn as_mut_slice(&mut self, len: usize) -> &mut [Limb] {
        debug_assert!(len <= self.cap);
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), len) }
    }
}

impl Drop for LimbBuf {
    fn drop(&mut self) {
        if self.cap != 0 {
            deallocate(self.ptr, self.cap);
        }
    }
}
