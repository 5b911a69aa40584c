//! Emulator for the three-rotor Enigma cipher machine.
//!
//! A [`Machine`] passes each letter through the plugboard, three rotors, a
//! reflector and back, stepping the rotors before every letter. The cipher
//! is reciprocal: a machine in the same starting configuration decodes its
//! own output.

use thiserror::Error;

mod plugboard;
mod reflector;
mod rotor;

pub use plugboard::Plugboard;
pub use reflector::{Reflector, ReflectorKind};
pub use rotor::{Rotor, RotorBank, RotorKind};

/// Errors raised while configuring a [`Machine`]. Encoding itself never
/// fails: characters outside A-Z are dropped, not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no such rotor: {0}")]
    UnknownRotor(String),
    #[error("no such position: {0}")]
    UnknownPosition(String),
    #[error("ring setting {0} is not between 1 and 26")]
    InvalidRingSetting(u8),
    #[error("start position '{0}' is not a letter between A and Z")]
    InvalidStartPosition(char),
    #[error("no such reflector: {0}")]
    UnknownReflector(String),
    #[error("invalid plug pair: {0}")]
    InvalidPlugFormat(String),
    #[error("plug pair {0} reuses an already plugged letter")]
    DuplicatePlug(String),
    #[error("all three rotor positions are already occupied")]
    TooManyRotors,
}

enum Position {
    Left,
    Middle,
    Right,
}

impl Position {
    fn from_name(name: &str) -> Result<Self, Error> {
        match name.to_ascii_uppercase().as_str() {
            "LEFT" => Ok(Position::Left),
            "MIDDLE" => Ok(Position::Middle),
            "RIGHT" => Ok(Position::Right),
            _ => Err(Error::UnknownPosition(name.to_string())),
        }
    }
}

/// A complete machine: plugboard, three rotors and a reflector.
///
/// The default configuration carries rotors III, II and I in the left,
/// middle and right positions, every ring setting at 1, every start
/// position at A, reflector B and an empty plugboard.
#[derive(Debug, Clone)]
pub struct Machine {
    plugboard: Plugboard,
    rotors: RotorBank,
    reflector: Reflector,
    installed: usize,
}

impl Default for Machine {
    fn default() -> Self {
        Machine {
            plugboard: Plugboard::new(),
            rotors: RotorBank::new(
                Rotor::default_for(RotorKind::III),
                Rotor::default_for(RotorKind::II),
                Rotor::default_for(RotorKind::I),
            ),
            reflector: Reflector::new(ReflectorKind::B),
            installed: 0,
        }
    }
}

impl Machine {
    /// A machine in the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a rotor into a named position: "left", "middle" or "right",
    /// case-insensitive. Any rotor already in that position is discarded.
    pub fn set_rotor(
        &mut self,
        position: &str,
        name: &str,
        ring_setting: u8,
        start: char,
    ) -> Result<(), Error> {
        let position = Position::from_name(position)?;
        let rotor = Rotor::new(RotorKind::from_name(name)?, ring_setting, start)?;
        match position {
            Position::Left => self.rotors.left = rotor,
            Position::Middle => self.rotors.middle = rotor,
            Position::Right => self.rotors.right = rotor,
        }
        Ok(())
    }

    /// Installs rotors in order of their distance from the entry wheel: the
    /// first rotor added takes the right position, the second the middle,
    /// the third the left. A fourth rotor does not fit.
    pub fn add_rotor(&mut self, name: &str, ring_setting: u8, start: char) -> Result<(), Error> {
        let rotor = Rotor::new(RotorKind::from_name(name)?, ring_setting, start)?;
        match self.installed {
            0 => self.rotors.right = rotor,
            1 => self.rotors.middle = rotor,
            2 => self.rotors.left = rotor,
            _ => return Err(Error::TooManyRotors),
        }
        self.installed += 1;
        Ok(())
    }

    /// Selects the reflector: "B" or "C", case-insensitive.
    pub fn set_reflector(&mut self, name: &str) -> Result<(), Error> {
        self.reflector = Reflector::new(ReflectorKind::from_name(name)?);
        Ok(())
    }

    /// Installs one plugboard pair such as "AB".
    pub fn add_plug(&mut self, pair: &str) -> Result<(), Error> {
        self.plugboard.add_pair(pair)
    }

    /// Installs a set of plugboard pairs, stopping at the first bad pair.
    pub fn add_plugs(&mut self, pairs: &[&str]) -> Result<(), Error> {
        for pair in pairs {
            self.add_plug(pair)?;
        }
        Ok(())
    }

    /// Enciphers a message, returning the ciphertext in five-letter groups.
    ///
    /// Input is uppercased and everything outside A-Z is silently dropped.
    /// The rotors keep whatever position the last letter left them in, so a
    /// second call continues the key stream rather than restarting it.
    pub fn encode(&mut self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() + text.len() / 5);
        let mut count = 0;

        for letter in text.chars() {
            let letter = letter.to_ascii_uppercase();
            if !letter.is_ascii_uppercase() {
                continue;
            }
            if count > 0 && count % 5 == 0 {
                result.push(' ');
            }
            count += 1;

            self.rotors.step();

            let mut c = letter as u8 - b'A';
            c = self.plugboard.swap(c);
            c = self.rotors.forward(c);
            c = self.reflector.reflect(c);
            c = self.rotors.backward(c);
            c = self.plugboard.swap(c);

            result.push((b'A' + c) as char);
        }

        result
    }
}
