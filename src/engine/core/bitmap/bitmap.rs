use std::ops::BitAndAssign;

const WORD_BITS: usize = 64;

/// Growable set of row positions, one bit per position, packed into `u64` words
/// (LSB of word 0 = position 0).
///
/// Trailing all-zero words are never kept, so two bitmaps holding the same
/// positions compare equal regardless of how they were built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bitmap {
    words: Vec<u64>,
}

impl Bitmap {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut bitmap = Self::new();
        for pos in positions {
            bitmap.insert(pos);
        }
        bitmap
    }

    #[inline]
    pub fn insert(&mut self, pos: usize) {
        let w = pos / WORD_BITS;
        if w >= self.words.len() {
            self.words.resize(w + 1, 0);
        }
        self.words[w] |= 1u64 << (pos % WORD_BITS);
    }

    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        self.words
            .get(pos / WORD_BITS)
            .map(|word| (word >> (pos % WORD_BITS)) & 1 == 1)
            .unwrap_or(false)
    }

    /// Number of set bits.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// In-place intersection.
    pub fn and_with(&mut self, other: &Bitmap) {
        self.words.truncate(other.words.len());
        for (mine, theirs) in self.words.iter_mut().zip(other.words.iter()) {
            *mine &= *theirs;
        }
        self.trim();
    }

    /// Set positions in ascending order.
    pub fn iter(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    pub fn to_positions(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Little-endian byte image of the words with trailing zero bytes dropped.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.words.len() * 8);
        for word in &self.words {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut words = Vec::with_capacity(bytes.len().div_ceil(8));
        for chunk in bytes.chunks(8) {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            words.push(u64::from_le_bytes(buf));
        }
        let mut bitmap = Self { words };
        bitmap.trim();
        bitmap
    }

    fn trim(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }
}

/// AND of every bitmap yielded; empty when there are none.
pub fn intersect_all<'a, I>(bitmaps: I) -> Bitmap
where
    I: IntoIterator<Item = &'a Bitmap>,
{
    let mut iter = bitmaps.into_iter();
    let Some(first) = iter.next() else {
        return Bitmap::new();
    };
    let mut result = first.clone();
    for bitmap in iter {
        if result.is_empty() {
            break;
        }
        result.and_with(bitmap);
    }
    result
}

impl BitAndAssign<&Bitmap> for Bitmap {
    fn bitand_assign(&mut self, rhs: &Bitmap) {
        self.and_with(rhs);
    }
}

impl FromIterator<usize> for Bitmap {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_positions(iter)
    }
}

pub struct Ones<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.index += 1;
            if self.index >= self.words.len() {
                return None;
            }
            self.current = self.words[self.index];
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.index * WORD_BITS + bit)
    }
}
