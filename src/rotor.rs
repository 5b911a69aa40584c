use crate::Error;

// Historical wheel wirings of the Wehrmacht/Kriegsmarine three-rotor machine.
const WIRING_I: &[u8; 26] = b"EKMFLGDQVZNTOWYHXUSPAIBRCJ";
const WIRING_II: &[u8; 26] = b"AJDKSIRUXBLHWTMCQGZNPYFVOE";
const WIRING_III: &[u8; 26] = b"BDFHJLCPRTXVZNYEIWGAKMUSQO";
const WIRING_IV: &[u8; 26] = b"ESOVPZJAYQUIRHXLNFTGKDCMWB";
const WIRING_V: &[u8; 26] = b"VZBRGITYUPSDNHLXAWMJQOFECK";
const WIRING_VI: &[u8; 26] = b"JPGVOUMFYQBENHZRDKASXLICTW";
const WIRING_VII: &[u8; 26] = b"NZJHGRCXMYSWBOUFAIVLPEKQDT";
const WIRING_VIII: &[u8; 26] = b"FKQHTLXOCBJSPDZRAMEWNIUYGV";

/// The eight rotor types available to the machine, named by roman numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorKind {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl RotorKind {
    /// Looks up a rotor type by name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name.to_ascii_uppercase().as_str() {
            "I" => Ok(RotorKind::I),
            "II" => Ok(RotorKind::II),
            "III" => Ok(RotorKind::III),
            "IV" => Ok(RotorKind::IV),
            "V" => Ok(RotorKind::V),
            "VI" => Ok(RotorKind::VI),
            "VII" => Ok(RotorKind::VII),
            "VIII" => Ok(RotorKind::VIII),
            _ => Err(Error::UnknownRotor(name.to_string())),
        }
    }

    fn wiring(self) -> &'static [u8; 26] {
        match self {
            RotorKind::I => WIRING_I,
            RotorKind::II => WIRING_II,
            RotorKind::III => WIRING_III,
            RotorKind::IV => WIRING_IV,
            RotorKind::V => WIRING_V,
            RotorKind::VI => WIRING_VI,
            RotorKind::VII => WIRING_VII,
            RotorKind::VIII => WIRING_VIII,
        }
    }

    // Window letters at which this rotor carries its left neighbour along.
    // Rotors VI-VIII turn over at A and N in this machine's lineage.
    fn notches(self) -> &'static [u8] {
        match self {
            RotorKind::I => b"Q",
            RotorKind::II => b"E",
            RotorKind::III => b"V",
            RotorKind::IV => b"J",
            RotorKind::V => b"Z",
            RotorKind::VI | RotorKind::VII | RotorKind::VIII => b"AN",
        }
    }
}

/// A single rotor: fixed wiring adjusted by a ring setting and a rotational
/// offset that advances once per keypress.
#[derive(Debug, Clone)]
pub struct Rotor {
    wiring: [u8; 26],
    inverse: [u8; 26],
    notches: &'static [u8],
    ring: u8,
    offset: u8,
}

impl Rotor {
    /// Builds a rotor of the given type with a ring setting in 1-26 and a
    /// start letter in A-Z (case-insensitive).
    pub fn new(kind: RotorKind, ring_setting: u8, start: char) -> Result<Self, Error> {
        if !(1..=26).contains(&ring_setting) {
            return Err(Error::InvalidRingSetting(ring_setting));
        }
        let start = start.to_ascii_uppercase();
        if !start.is_ascii_uppercase() {
            return Err(Error::InvalidStartPosition(start));
        }
        Ok(Self::build(kind, ring_setting - 1, start as u8 - b'A'))
    }

    pub(crate) fn default_for(kind: RotorKind) -> Self {
        Self::build(kind, 0, 0)
    }

    fn build(kind: RotorKind, ring: u8, offset: u8) -> Self {
        let mut wiring = [0u8; 26];
        let mut inverse = [0u8; 26];
        for (i, &letter) in kind.wiring().iter().enumerate() {
            let mapped = letter - b'A';
            wiring[i] = mapped;
            inverse[mapped as usize] = i as u8;
        }
        Rotor {
            wiring,
            inverse,
            notches: kind.notches(),
            ring,
            offset,
        }
    }

    /// The letter currently visible in the rotor window.
    pub fn window(&self) -> char {
        (b'A' + self.offset) as char
    }

    /// Advances the rotor one position.
    pub fn step(&mut self) {
        self.offset = (self.offset + 1) % 26;
    }

    /// True when the window letter is one of this rotor's turnover notches.
    /// The notch sits on the alphabet ring, so the ring setting does not
    /// move it relative to the window.
    pub fn at_notch(&self) -> bool {
        self.notches.contains(&(b'A' + self.offset))
    }

    /// Maps a contact entering from the keyboard side to the contact leaving
    /// on the reflector side, through the current rotation.
    pub fn forward(&self, c: u8) -> u8 {
        let i = (c + 26 + self.offset - self.ring) % 26;
        (self.wiring[i as usize] + 26 + self.ring - self.offset) % 26
    }

    /// Maps a contact entering from the reflector side back to the keyboard
    /// side. Exact inverse of [`Rotor::forward`] at any fixed state.
    pub fn backward(&self, c: u8) -> u8 {
        let i = (c + 26 + self.offset - self.ring) % 26;
        (self.inverse[i as usize] + 26 + self.ring - self.offset) % 26
    }
}

/// The three rotor slots of the machine, named by physical position.
/// The right rotor is the fast one next to the entry wheel.
#[derive(Debug, Clone)]
pub struct RotorBank {
    pub(crate) left: Rotor,
    pub(crate) middle: Rotor,
    pub(crate) right: Rotor,
}

impl RotorBank {
    pub fn new(left: Rotor, middle: Rotor, right: Rotor) -> Self {
        RotorBank {
            left,
            middle,
            right,
        }
    }

    /// Advances the bank by one keypress.
    ///
    /// A middle rotor sitting on its own notch steps itself and the left
    /// rotor (the double-step anomaly); otherwise a right rotor on its notch
    /// steps the middle rotor. The right rotor steps last on every keypress
    /// so that both notch tests observe pre-keypress positions.
    pub fn step(&mut self) {
        if self.middle.at_notch() {
            self.middle.step();
            self.left.step();
        } else if self.right.at_notch() {
            self.middle.step();
        }
        self.right.step();
    }

    /// Encodes a contact right to left, toward the reflector.
    pub fn forward(&self, c: u8) -> u8 {
        let c = self.right.forward(c);
        let c = self.middle.forward(c);
        self.left.forward(c)
    }

    /// Encodes a contact left to right, back from the reflector.
    pub fn backward(&self, c: u8) -> u8 {
        let c = self.left.backward(c);
        let c = self.middle.backward(c);
        self.right.backward(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [RotorKind; 8] = [
        RotorKind::I,
        RotorKind::II,
        RotorKind::III,
        RotorKind::IV,
        RotorKind::V,
        RotorKind::VI,
        RotorKind::VII,
        RotorKind::VIII,
    ];

    #[test]
    fn from_name_accepts_any_case() {
        assert_eq!(RotorKind::from_name("viii").unwrap(), RotorKind::VIII);
        assert_eq!(RotorKind::from_name("Iv").unwrap(), RotorKind::IV);
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(
            RotorKind::from_name("IX"),
            Err(Error::UnknownRotor("IX".to_string()))
        );
    }

    #[test]
    fn new_validates_ring_setting() {
        assert_eq!(
            Rotor::new(RotorKind::I, 0, 'A').unwrap_err(),
            Error::InvalidRingSetting(0)
        );
        assert_eq!(
            Rotor::new(RotorKind::I, 27, 'A').unwrap_err(),
            Error::InvalidRingSetting(27)
        );
        assert!(Rotor::new(RotorKind::I, 26, 'A').is_ok());
    }

    #[test]
    fn new_validates_start_position() {
        assert_eq!(
            Rotor::new(RotorKind::I, 1, '3').unwrap_err(),
            Error::InvalidStartPosition('3')
        );
        assert_eq!(Rotor::new(RotorKind::I, 1, 'q').unwrap().window(), 'Q');
    }

    #[test]
    fn forward_matches_known_values() {
        // Rotor I at rest maps A to E; ring setting 2 shifts that to K and
        // one step of rotation shifts it to J.
        assert_eq!(Rotor::new(RotorKind::I, 1, 'A').unwrap().forward(0), 4);
        assert_eq!(Rotor::new(RotorKind::I, 2, 'A').unwrap().forward(0), 10);
        assert_eq!(Rotor::new(RotorKind::I, 1, 'B').unwrap().forward(0), 9);
    }

    #[test]
    fn backward_inverts_forward_in_every_state() {
        for kind in KINDS {
            for ring in [1, 7, 26] {
                let mut rotor = Rotor::new(kind, ring, 'A').unwrap();
                for _ in 0..26 {
                    for c in 0..26 {
                        assert_eq!(rotor.backward(rotor.forward(c)), c);
                    }
                    rotor.step();
                }
            }
        }
    }

    #[test]
    fn step_wraps_at_z() {
        let mut rotor = Rotor::new(RotorKind::I, 1, 'Z').unwrap();
        assert_eq!(rotor.window(), 'Z');
        rotor.step();
        assert_eq!(rotor.window(), 'A');
    }

    #[test]
    fn notch_ignores_ring_setting() {
        let rotor = Rotor::new(RotorKind::I, 13, 'Q').unwrap();
        assert!(rotor.at_notch());
        let rotor = Rotor::new(RotorKind::I, 13, 'R').unwrap();
        assert!(!rotor.at_notch());
    }

    #[test]
    fn two_notch_rotors_turn_over_at_a_and_n() {
        for start in ['A', 'N'] {
            assert!(Rotor::new(RotorKind::VII, 1, start).unwrap().at_notch());
        }
        for start in ['Z', 'M'] {
            assert!(!Rotor::new(RotorKind::VII, 1, start).unwrap().at_notch());
        }
    }

    fn bank(left: (RotorKind, char), middle: (RotorKind, char), right: (RotorKind, char)) -> RotorBank {
        RotorBank::new(
            Rotor::new(left.0, 1, left.1).unwrap(),
            Rotor::new(middle.0, 1, middle.1).unwrap(),
            Rotor::new(right.0, 1, right.1).unwrap(),
        )
    }

    #[test]
    fn right_rotor_steps_every_keypress() {
        let mut bank = bank(
            (RotorKind::III, 'A'),
            (RotorKind::II, 'A'),
            (RotorKind::I, 'A'),
        );
        for expected in ['B', 'C', 'D'] {
            bank.step();
            assert_eq!(bank.right.window(), expected);
            assert_eq!(bank.middle.window(), 'A');
            assert_eq!(bank.left.window(), 'A');
        }
    }

    #[test]
    fn right_notch_carries_middle_rotor() {
        // Rotor I turns over as its window leaves Q.
        let mut bank = bank(
            (RotorKind::III, 'A'),
            (RotorKind::II, 'A'),
            (RotorKind::I, 'Q'),
        );
        bank.step();
        assert_eq!(bank.right.window(), 'R');
        assert_eq!(bank.middle.window(), 'B');
        assert_eq!(bank.left.window(), 'A');
    }

    #[test]
    fn double_step_anomaly() {
        // Middle rotor II one short of its E notch; right rotor III on its
        // V notch. The first keypress pushes the middle rotor onto its
        // notch, the second makes it step itself together with the left
        // rotor: two middle steps on consecutive keypresses.
        let mut bank = bank(
            (RotorKind::I, 'A'),
            (RotorKind::II, 'D'),
            (RotorKind::III, 'V'),
        );
        bank.step();
        assert_eq!(bank.right.window(), 'W');
        assert_eq!(bank.middle.window(), 'E');
        assert_eq!(bank.left.window(), 'A');
        bank.step();
        assert_eq!(bank.right.window(), 'X');
        assert_eq!(bank.middle.window(), 'F');
        assert_eq!(bank.left.window(), 'B');
    }

    #[test]
    fn composite_encode_orders_are_inverse() {
        let bank = bank(
            (RotorKind::IV, 'C'),
            (RotorKind::V, 'Q'),
            (RotorKind::VI, 'Z'),
        );
        for c in 0..26 {
            assert_eq!(bank.backward(bank.forward(c)), c);
        }
    }
}
