//! Reusable render-buffer pool
//!
//! One record is rendered into a pooled byte buffer, written, and the buffer
//! returned before the call completes. The RAII guard returns the buffer on
//! every exit path, including the render-error path, so a failed render
//! never leaks a buffer. A buffer is owned by exactly one call at a time.

use parking_lot::Mutex;
use std::mem;
use std::ops::{Deref, DerefMut};

/// Buffers that grew past this are dropped instead of pooled.
const MAX_POOLED_CAPACITY: usize = 64 * 1024;
/// Upper bound on idle buffers kept per pool.
const MAX_POOLED_BUFFERS: usize = 8;

/// Pool of render buffers shared by one sink.
#[derive(Debug, Default)]
pub struct BufferPool {
    bufs: Mutex<Vec<Vec<u8>>>,
}

impl BufferPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a cleared buffer, allocating only when the pool is empty.
    #[must_use]
    pub fn get(&self) -> PooledBuffer<'_> {
        let buf = self.bufs.lock().pop().unwrap_or_default();
        PooledBuffer { pool: self, buf }
    }

    #[cfg(test)]
    fn idle_count(&self) -> usize {
        self.bufs.lock().len()
    }
}

/// Scoped borrow of a pool buffer; returns it to the pool on drop.
pub struct PooledBuffer<'a> {
    pool: &'a BufferPool,
    buf: Vec<u8>,
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.buf.clear();
        if self.buf.capacity() > MAX_POOLED_CAPACITY {
            return;
        }
        let mut bufs = self.pool.bufs.lock();
        if bufs.len() < MAX_POOLED_BUFFERS {
            bufs.push(mem::take(&mut self.buf));
        }
    }
}
