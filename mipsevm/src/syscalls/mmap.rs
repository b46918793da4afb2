use crate::util::page_align_up;

/// Bump allocation for `mmap(addr_hint, length, ...)`. Returns `(v0, v1, new_heap)`.
///
/// Without a hint the current heap pointer is returned and advanced by the page-rounded length.
/// A nonzero hint is returned verbatim and not recorded, so repeated hinted mappings may alias.
/// The call never fails.
pub fn handle_sys_mmap(addr_hint: u64, length: u64, heap: u64, page_size: u64) -> (u64, u64, u64) {
    let size = page_align_up(length, page_size);
    if addr_hint == 0 {
        log::debug!("mmap heap {:#x} size {:#x}", heap, size);
        (heap, 0, heap.wrapping_add(size))
    } else {
        log::debug!("mmap hint {:#x} size {:#x}", addr_hint, size);
        (addr_hint, 0, heap)
    }
}
