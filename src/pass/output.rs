//! Writing generated passwords without leaving copies in buffers.

use std::io::{self, Write};

use zeroize::Zeroize;

const DEFAULT_CAPACITY: usize = 8 * 1024;

/// Buffered writer that zeroizes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, inner)
    }

    pub fn with_capacity(capacity: usize, inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(capacity),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        // never let the Vec reallocate: the old allocation would keep a copy
        if self.buf.len() + data.len() > self.buf.capacity() {
            self.flush_buf()?;
        }
        if data.len() >= self.buf.capacity() {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        let _ = self.inner.flush();
    }
}

/// Write one password per line, in order.
pub fn write_batch<W: Write>(out: W, passwords: &[String]) -> io::Result<()> {
    let mut out = SecureBufWriter::new(out);
    for password in passwords {
        out.write_all(password.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Join a batch into one newline-terminated block (clipboard contents).
pub fn join_batch(passwords: &[String]) -> String {
    let mut joined = String::with_capacity(passwords.iter().map(|p| p.len() + 1).sum());
    for password in passwords {
        joined.push_str(password);
        joined.push('\n');
    }
    joined
}
