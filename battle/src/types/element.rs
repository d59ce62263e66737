//! Elemental types and the advantage cycle

/// Elemental type of a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Element {
    Fire = 0,
    Nature = 1,
    Water = 2,
}

/// Damage multiplier granted to an attacker with type advantage
pub const ADVANTAGE_MULTIPLIER: f64 = 1.5;

impl Element {
    /// All three elements, in cycle order
    pub const ALL: [Element; 3] = [Element::Fire, Element::Nature, Element::Water];

    /// Get all elements as a slice
    pub fn all() -> &'static [Element] {
        &Self::ALL
    }

    /// Whether this element beats `defender`
    ///
    /// Fire beats Nature, Nature beats Water, Water beats Fire. No element
    /// beats itself, and the reverse of each pair is neutral.
    pub fn beats(&self, defender: Element) -> bool {
        ADVANTAGE_CHART[*self as usize][defender as usize]
    }

    /// Damage multiplier when attacking `defender`
    pub fn multiplier_against(&self, defender: Element) -> f64 {
        if self.beats(defender) {
            ADVANTAGE_MULTIPLIER
        } else {
            1.0
        }
    }

    /// The element that beats this one
    pub fn weakness(&self) -> Element {
        match self {
            Element::Fire => Element::Water,
            Element::Nature => Element::Fire,
            Element::Water => Element::Nature,
        }
    }

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "FIRE",
            Element::Nature => "NATURE",
            Element::Water => "WATER",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 3x3 advantage chart
/// Row = attacking element, Column = defending element
///
/// Order: Fire, Nature, Water
#[rustfmt::skip]
static ADVANTAGE_CHART: [[bool; 3]; 3] = [
    // Fire attacking
    [false, true,  false],
    // Nature attacking
    [false, false, true ],
    // Water attacking
    [true,  false, false],
];
