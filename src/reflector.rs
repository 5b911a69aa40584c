use crate::Error;

const WIRING_B: &[u8; 26] = b"YRUHQSLDPXNGOKMIEBFZCWVJAT";
const WIRING_C: &[u8; 26] = b"FVPJIAOYEDRZXWGCTKUQSBNMHL";

/// The two reflector types available to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectorKind {
    B,
    C,
}

impl ReflectorKind {
    /// Looks up a reflector type by name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name.to_ascii_uppercase().as_str() {
            "B" => Ok(ReflectorKind::B),
            "C" => Ok(ReflectorKind::C),
            _ => Err(Error::UnknownReflector(name.to_string())),
        }
    }

    fn wiring(self) -> &'static [u8; 26] {
        match self {
            ReflectorKind::B => WIRING_B,
            ReflectorKind::C => WIRING_C,
        }
    }
}

/// A reflector: a fixed involution with no fixed point that turns the
/// signal back through the rotors. It neither rotates nor steps.
#[derive(Debug, Clone)]
pub struct Reflector {
    map: [u8; 26],
}

impl Reflector {
    pub fn new(kind: ReflectorKind) -> Self {
        let mut map = [0u8; 26];
        for (i, &letter) in kind.wiring().iter().enumerate() {
            map[i] = letter - b'A';
        }
        Reflector { map }
    }

    pub fn reflect(&self, c: u8) -> u8 {
        self.map[c as usize]
    }
}
