//! Board files (columns a-h).

use std::fmt;

/// A file on the board, FileA on White's left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// Files from a to h.
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// Return the zero-based index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Build a file from a zero-based index.
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// Parse the algebraic letter `'a'..='h'`.
    #[inline]
    pub fn from_char(c: char) -> Option<File> {
        match c {
            'a'..='h' => File::from_index(c as u8 - b'a'),
            _ => None,
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'a' + self.index() as u8) as char)
    }
}

#[cfg(test)]
mod tests {
    use super::File;

    #[test]
    fn from_index_bounds() {
        assert_eq!(File::from_index(0), Some(File::FileA));
        assert_eq!(File::from_index(7), Some(File::FileH));
        assert_eq!(File::from_index(8), None);
    }

    #[test]
    fn char_roundtrip() {
        for file in File::ALL {
            let c = format!("{file}").chars().next().unwrap();
            assert_eq!(File::from_char(c), Some(file));
        }
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('A'), None);
    }
}
