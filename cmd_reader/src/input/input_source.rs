// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Key;
use std::io;

/// Sequential supplier of decoded [`Key`]s.
///
/// `read_key` blocks until a key is available. Once a source runs out it returns
/// [`Key::InputEnd`], and keeps returning it on every later call.
pub trait InputSource {
    /// # Errors
    ///
    /// Returns an error if the underlying device can't be read.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Owned, type erased source. This is what a pending batch file is held as.
pub type BoxedInputSource = Box<dyn InputSource>;

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn read_key(&mut self) -> io::Result<Key> { (**self).read_key() }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_key(&mut self) -> io::Result<Key> { (**self).read_key() }
}
