use crate::Error;

/// The plugboard: up to thirteen disjoint letter pairs swapped on the way
/// into and out of the rotor stack. Unplugged letters pass through
/// unchanged, so the mapping is always an involution.
#[derive(Debug, Clone)]
pub struct Plugboard {
    map: [u8; 26],
    pairs: Vec<(u8, u8)>,
}

impl Default for Plugboard {
    fn default() -> Self {
        let mut map = [0u8; 26];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard {
            map,
            pairs: Vec::new(),
        }
    }
}

impl Plugboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs one plug cable from a two-letter pair such as "AB".
    ///
    /// Fails if the input is not exactly two distinct ASCII letters, or if
    /// either letter is already connected to another plug.
    pub fn add_pair(&mut self, pair: &str) -> Result<(), Error> {
        let letters: Vec<char> = pair.chars().collect();
        if letters.len() != 2 {
            return Err(Error::InvalidPlugFormat(pair.to_string()));
        }
        let a = letters[0].to_ascii_uppercase();
        let b = letters[1].to_ascii_uppercase();
        if !a.is_ascii_uppercase() || !b.is_ascii_uppercase() || a == b {
            return Err(Error::InvalidPlugFormat(pair.to_string()));
        }

        let a = a as u8 - b'A';
        let b = b as u8 - b'A';
        if self.map[a as usize] != a || self.map[b as usize] != b {
            return Err(Error::DuplicatePlug(pair.to_ascii_uppercase()));
        }

        self.map[a as usize] = b;
        self.map[b as usize] = a;
        self.pairs.push((a, b));
        Ok(())
    }

    /// Number of plug cables installed.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Swaps a letter through its plug, if any.
    pub fn swap(&self, c: u8) -> u8 {
        self.map[c as usize]
    }
}
