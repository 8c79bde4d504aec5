// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputSource, Key};
use std::{fs::File,
          io::{self, BufRead, BufReader, ErrorKind},
          path::Path};

const ESC: u8 = 0x1B;

/// Decodes a plain stream of bytes into [`Key`]s. This is what a batch file (dofile) or
/// piped `stdin` is read through.
///
/// - Single bytes are mapped by [`Key::from_char`]. A `\r\n` pair is one
///   [`Key::Newline`].
/// - `VT100` / `xterm` escape sequences for the arrow, Home, End, Insert, Delete,
///   `PageUp` and `PageDown` keys are recognized (eg: `ESC [ A` is [`Key::ArrowUp`], `ESC [ 5 ~` is
///   [`Key::PageUp`]). Any other escape sequence is [`Key::Undefined`].
/// - End of the stream is [`Key::InputEnd`].
#[derive(Debug)]
pub struct ByteInputSource<R> {
    reader: R,
    is_exhausted: bool,
}

impl<R: BufRead> ByteInputSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            is_exhausted: false,
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool { self.is_exhausted }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let maybe_byte = self.peek_byte()?;
        if maybe_byte.is_some() {
            self.reader.consume(1);
        }
        Ok(maybe_byte)
    }

    /// Called after `ESC` has been consumed.
    fn decode_escape_sequence(&mut self) -> io::Result<Key> {
        let Some(introducer) = self.next_byte()? else {
            return Ok(Key::Undefined);
        };

        match introducer {
            // CSI: `ESC [`.
            b'[' => {}
            // SS3: `ESC O`, sent by some terminals for Home / End and the arrows.
            b'O' => {
                return Ok(self.next_byte()?.map_or(Key::Undefined, decode_final_letter));
            }
            _ => return Ok(Key::Undefined),
        }

        let Some(first) = self.next_byte()? else {
            return Ok(Key::Undefined);
        };
        if !first.is_ascii_digit() {
            return Ok(decode_final_letter(first));
        }

        // `ESC [ <number> ~`.
        let mut number = u32::from(first - b'0');
        loop {
            match self.next_byte()? {
                Some(digit) if digit.is_ascii_digit() => {
                    number = number.saturating_mul(10).saturating_add(u32::from(digit - b'0'));
                }
                Some(b'~') => return Ok(decode_tilde_number(number)),
                _ => return Ok(Key::Undefined),
            }
        }
    }
}

impl ByteInputSource<BufReader<File>> {
    /// Opens a batch file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be opened.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> InputSource for ByteInputSource<R> {
    fn read_key(&mut self) -> io::Result<Key> {
        if self.is_exhausted {
            return Ok(Key::InputEnd);
        }

        let Some(byte) = self.next_byte()? else {
            self.is_exhausted = true;
            return Ok(Key::InputEnd);
        };

        match byte {
            ESC => self.decode_escape_sequence(),
            b'\r' => {
                if self.peek_byte()? == Some(b'\n') {
                    self.reader.consume(1);
                }
                Ok(Key::Newline)
            }
            _ => {
                let key = Key::from_char(char::from(byte));
                if key == Key::InputEnd {
                    self.is_exhausted = true;
                }
                Ok(key)
            }
        }
    }
}

fn decode_final_letter(byte: u8) -> Key {
    match byte {
        b'A' => Key::ArrowUp,
        b'B' => Key::ArrowDown,
        b'C' => Key::ArrowRight,
        b'D' => Key::ArrowLeft,
        b'H' => Key::Home,
        b'F' => Key::End,
        _ => Key::Undefined,
    }
}

fn decode_tilde_number(number: u32) -> Key {
    match number {
        1 | 7 => Key::Home,
        2 => Key::Insert,
        3 => Key::Delete,
        4 | 8 => Key::End,
        5 => Key::PageUp,
        6 => Key::PageDown,
        _ => Key::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};
    use test_case::test_case;

    fn decode_all(bytes: &[u8]) -> Vec<Key> {
        let mut source = ByteInputSource::new(Cursor::new(bytes.to_vec()));
        let mut keys = vec![];
        loop {
            let key = source.read_key().unwrap();
            keys.push(key);
            if key == Key::InputEnd {
                break;
            }
        }
        keys
    }

    #[test]
    fn test_plain_line() {
        assert_eq!(
            decode_all(b"ls\n"),
            vec![
                Key::Printable('l'),
                Key::Printable('s'),
                Key::Newline,
                Key::InputEnd
            ]
        );
    }

    #[test]
    fn test_crlf_is_one_newline() {
        assert_eq!(
            decode_all(b"a\r\nb\r"),
            vec![
                Key::Printable('a'),
                Key::Newline,
                Key::Printable('b'),
                Key::Newline,
                Key::InputEnd
            ]
        );
    }

    #[test_case(b"\x1b[A", Key::ArrowUp ; "csi up")]
    #[test_case(b"\x1b[B", Key::ArrowDown ; "csi down")]
    #[test_case(b"\x1b[C", Key::ArrowRight ; "csi right")]
    #[test_case(b"\x1b[D", Key::ArrowLeft ; "csi left")]
    #[test_case(b"\x1b[H", Key::Home ; "csi home")]
    #[test_case(b"\x1bOF", Key::End ; "ss3 end")]
    #[test_case(b"\x1b[1~", Key::Home ; "tilde home")]
    #[test_case(b"\x1b[2~", Key::Insert ; "tilde insert")]
    #[test_case(b"\x1b[3~", Key::Delete ; "tilde delete")]
    #[test_case(b"\x1b[4~", Key::End ; "tilde end")]
    #[test_case(b"\x1b[5~", Key::PageUp ; "tilde page up")]
    #[test_case(b"\x1b[6~", Key::PageDown ; "tilde page down")]
    #[test_case(b"\x1b[15~", Key::Undefined ; "function key")]
    #[test_case(b"\x1b[Z", Key::Undefined ; "back tab")]
    #[test_case(b"\x1bx", Key::Undefined ; "alt x")]
    fn test_escape_sequences(bytes: &[u8], expected: Key) {
        assert_eq!(decode_all(bytes), vec![expected, Key::InputEnd]);
    }

    #[test]
    fn test_truncated_escape_sequence_is_undefined() {
        assert_eq!(decode_all(b"\x1b["), vec![Key::Undefined, Key::InputEnd]);
    }

    #[test]
    fn test_ctrl_d_ends_input_even_with_bytes_left() {
        let mut source = ByteInputSource::new(Cursor::new(b"a\x04bc".to_vec()));
        assert_eq!(source.read_key().unwrap(), Key::Printable('a'));
        assert_eq!(source.read_key().unwrap(), Key::InputEnd);
        assert!(source.is_exhausted());
        assert_eq!(source.read_key().unwrap(), Key::InputEnd);
    }

    #[test]
    fn test_input_end_repeats_after_eof() {
        let mut source = ByteInputSource::new(Cursor::new(vec![]));
        assert_eq!(source.read_key().unwrap(), Key::InputEnd);
        assert_eq!(source.read_key().unwrap(), Key::InputEnd);
    }

    #[test]
    fn test_open_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"pwd\n").unwrap();
        file.flush().unwrap();

        let mut source = ByteInputSource::open(file.path()).unwrap();

        assert_eq!(source.read_key().unwrap(), Key::Printable('p'));
    }
}
