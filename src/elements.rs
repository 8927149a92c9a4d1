//! Periodic table data source shared by the molar mass and electronegativity
//! calculators. The table is process-wide immutable; lookups are
//! case-insensitive on the leading character of a symbol only, so "cl"
//! finds Chlorine but "CL" does not.

use serde::Serialize;

/// A chemical element with the data the calculators need.
/// Electronegativity is on the Pauling scale, extended with the commonly
/// tabulated values for the noble gases; `None` where no published value
/// exists (a few lanthanides).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_mass: f64,
    pub electronegativity: Option<f64>,
}

/// Elements 1–92 (H through U).
static ELEMENTS: [Element; 92] = [
    Element { atomic_number: 1, symbol: "H", name: "Hydrogen", atomic_mass: 1.008, electronegativity: Some(2.20) },
    Element { atomic_number: 2, symbol: "He", name: "Helium", atomic_mass: 4.0026, electronegativity: Some(4.16) },
    Element { atomic_number: 3, symbol: "Li", name: "Lithium", atomic_mass: 6.94, electronegativity: Some(0.98) },
    Element { atomic_number: 4, symbol: "Be", name: "Beryllium", atomic_mass: 9.0122, electronegativity: Some(1.57) },
    Element { atomic_number: 5, symbol: "B", name: "Boron", atomic_mass: 10.81, electronegativity: Some(2.04) },
    Element { atomic_number: 6, symbol: "C", name: "Carbon", atomic_mass: 12.011, electronegativity: Some(2.55) },
    Element { atomic_number: 7, symbol: "N", name: "Nitrogen", atomic_mass: 14.007, electronegativity: Some(3.04) },
    Element { atomic_number: 8, symbol: "O", name: "Oxygen", atomic_mass: 15.999, electronegativity: Some(3.44) },
    Element { atomic_number: 9, symbol: "F", name: "Fluorine", atomic_mass: 18.998, electronegativity: Some(3.98) },
    Element { atomic_number: 10, symbol: "Ne", name: "Neon", atomic_mass: 20.180, electronegativity: Some(4.79) },
    Element { atomic_number: 11, symbol: "Na", name: "Sodium", atomic_mass: 22.990, electronegativity: Some(0.93) },
    Element { atomic_number: 12, symbol: "Mg", name: "Magnesium", atomic_mass: 24.305, electronegativity: Some(1.31) },
    Element { atomic_number: 13, symbol: "Al", name: "Aluminium", atomic_mass: 26.982, electronegativity: Some(1.61) },
    Element { atomic_number: 14, symbol: "Si", name: "Silicon", atomic_mass: 28.085, electronegativity: Some(1.90) },
    Element { atomic_number: 15, symbol: "P", name: "Phosphorus", atomic_mass: 30.974, electronegativity: Some(2.19) },
    Element { atomic_number: 16, symbol: "S", name: "Sulfur", atomic_mass: 32.06, electronegativity: Some(2.58) },
    Element { atomic_number: 17, symbol: "Cl", name: "Chlorine", atomic_mass: 35.45, electronegativity: Some(3.16) },
    Element { atomic_number: 18, symbol: "Ar", name: "Argon", atomic_mass: 39.948, electronegativity: Some(3.24) },
    Element { atomic_number: 19, symbol: "K", name: "Potassium", atomic_mass: 39.098, electronegativity: Some(0.82) },
    Element { atomic_number: 20, symbol: "Ca", name: "Calcium", atomic_mass: 40.078, electronegativity: Some(1.00) },
    Element { atomic_number: 21, symbol: "Sc", name: "Scandium", atomic_mass: 44.956, electronegativity: Some(1.36) },
    Element { atomic_number: 22, symbol: "Ti", name: "Titanium", atomic_mass: 47.867, electronegativity: Some(1.54) },
    Element { atomic_number: 23, symbol: "V", name: "Vanadium", atomic_mass: 50.942, electronegativity: Some(1.63) },
    Element { atomic_number: 24, symbol: "Cr", name: "Chromium", atomic_mass: 51.996, electronegativity: Some(1.66) },
    Element { atomic_number: 25, symbol: "Mn", name: "Manganese", atomic_mass: 54.938, electronegativity: Some(1.55) },
    Element { atomic_number: 26, symbol: "Fe", name: "Iron", atomic_mass: 55.845, electronegativity: Some(1.83) },
    Element { atomic_number: 27, symbol: "Co", name: "Cobalt", atomic_mass: 58.933, electronegativity: Some(1.88) },
    Element { atomic_number: 28, symbol: "Ni", name: "Nickel", atomic_mass: 58.693, electronegativity: Some(1.91) },
    Element { atomic_number: 29, symbol: "Cu", name: "Copper", atomic_mass: 63.546, electronegativity: Some(1.90) },
    Element { atomic_number: 30, symbol: "Zn", name: "Zinc", atomic_mass: 65.38, electronegativity: Some(1.65) },
    Element { atomic_number: 31, symbol: "Ga", name: "Gallium", atomic_mass: 69.723, electronegativity: Some(1.81) },
    Element { atomic_number: 32, symbol: "Ge", name: "Germanium", atomic_mass: 72.630, electronegativity: Some(2.01) },
    Element { atomic_number: 33, symbol: "As", name: "Arsenic", atomic_mass: 74.922, electronegativity: Some(2.18) },
    Element { atomic_number: 34, symbol: "Se", name: "Selenium", atomic_mass: 78.971, electronegativity: Some(2.55) },
    Element { atomic_number: 35, symbol: "Br", name: "Bromine", atomic_mass: 79.904, electronegativity: Some(2.96) },
    Element { atomic_number: 36, symbol: "Kr", name: "Krypton", atomic_mass: 83.798, electronegativity: Some(3.00) },
    Element { atomic_number: 37, symbol: "Rb", name: "Rubidium", atomic_mass: 85.468, electronegativity: Some(0.82) },
    Element { atomic_number: 38, symbol: "Sr", name: "Strontium", atomic_mass: 87.62, electronegativity: Some(0.95) },
    Element { atomic_number: 39, symbol: "Y", name: "Yttrium", atomic_mass: 88.906, electronegativity: Some(1.22) },
    Element { atomic_number: 40, symbol: "Zr", name: "Zirconium", atomic_mass: 91.224, electronegativity: Some(1.33) },
    Element { atomic_number: 41, symbol: "Nb", name: "Niobium", atomic_mass: 92.906, electronegativity: Some(1.60) },
    Element { atomic_number: 42, symbol: "Mo", name: "Molybdenum", atomic_mass: 95.95, electronegativity: Some(2.16) },
    Element { atomic_number: 43, symbol: "Tc", name: "Technetium", atomic_mass: 98.0, electronegativity: Some(1.90) },
    Element { atomic_number: 44, symbol: "Ru", name: "Ruthenium", atomic_mass: 101.07, electronegativity: Some(2.20) },
    Element { atomic_number: 45, symbol: "Rh", name: "Rhodium", atomic_mass: 102.906, electronegativity: Some(2.28) },
    Element { atomic_number: 46, symbol: "Pd", name: "Palladium", atomic_mass: 106.42, electronegativity: Some(2.20) },
    Element { atomic_number: 47, symbol: "Ag", name: "Silver", atomic_mass: 107.868, electronegativity: Some(1.93) },
    Element { atomic_number: 48, symbol: "Cd", name: "Cadmium", atomic_mass: 112.414, electronegativity: Some(1.69) },
    Element { atomic_number: 49, symbol: "In", name: "Indium", atomic_mass: 114.818, electronegativity: Some(1.78) },
    Element { atomic_number: 50, symbol: "Sn", name: "Tin", atomic_mass: 118.710, electronegativity: Some(1.96) },
    Element { atomic_number: 51, symbol: "Sb", name: "Antimony", atomic_mass: 121.760, electronegativity: Some(2.05) },
    Element { atomic_number: 52, symbol: "Te", name: "Tellurium", atomic_mass: 127.60, electronegativity: Some(2.10) },
    Element { atomic_number: 53, symbol: "I", name: "Iodine", atomic_mass: 126.904, electronegativity: Some(2.66) },
    Element { atomic_number: 54, symbol: "Xe", name: "Xenon", atomic_mass: 131.293, electronegativity: Some(2.60) },
    Element { atomic_number: 55, symbol: "Cs", name: "Cesium", atomic_mass: 132.905, electronegativity: Some(0.79) },
    Element { atomic_number: 56, symbol: "Ba", name: "Barium", atomic_mass: 137.327, electronegativity: Some(0.89) },
    Element { atomic_number: 57, symbol: "La", name: "Lanthanum", atomic_mass: 138.905, electronegativity: Some(1.10) },
    Element { atomic_number: 58, symbol: "Ce", name: "Cerium", atomic_mass: 140.116, electronegativity: Some(1.12) },
    Element { atomic_number: 59, symbol: "Pr", name: "Praseodymium", atomic_mass: 140.908, electronegativity: Some(1.13) },
    Element { atomic_number: 60, symbol: "Nd", name: "Neodymium", atomic_mass: 144.242, electronegativity: Some(1.14) },
    Element { atomic_number: 61, symbol: "Pm", name: "Promethium", atomic_mass: 145.0, electronegativity: None },
    Element { atomic_number: 62, symbol: "Sm", name: "Samarium", atomic_mass: 150.36, electronegativity: Some(1.17) },
    Element { atomic_number: 63, symbol: "Eu", name: "Europium", atomic_mass: 151.964, electronegativity: None },
    Element { atomic_number: 64, symbol: "Gd", name: "Gadolinium", atomic_mass: 157.25, electronegativity: Some(1.20) },
    Element { atomic_number: 65, symbol: "Tb", name: "Terbium", atomic_mass: 158.925, electronegativity: None },
    Element { atomic_number: 66, symbol: "Dy", name: "Dysprosium", atomic_mass: 162.500, electronegativity: Some(1.22) },
    Element { atomic_number: 67, symbol: "Ho", name: "Holmium", atomic_mass: 164.930, electronegativity: Some(1.23) },
    Element { atomic_number: 68, symbol: "Er", name: "Erbium", atomic_mass: 167.259, electronegativity: Some(1.24) },
    Element { atomic_number: 69, symbol: "Tm", name: "Thulium", atomic_mass: 168.934, electronegativity: Some(1.25) },
    Element { atomic_number: 70, symbol: "Yb", name: "Ytterbium", atomic_mass: 173.045, electronegativity: None },
    Element { atomic_number: 71, symbol: "Lu", name: "Lutetium", atomic_mass: 174.967, electronegativity: Some(1.27) },
    Element { atomic_number: 72, symbol: "Hf", name: "Hafnium", atomic_mass: 178.49, electronegativity: Some(1.30) },
    Element { atomic_number: 73, symbol: "Ta", name: "Tantalum", atomic_mass: 180.948, electronegativity: Some(1.50) },
    Element { atomic_number: 74, symbol: "W", name: "Tungsten", atomic_mass: 183.84, electronegativity: Some(2.36) },
    Element { atomic_number: 75, symbol: "Re", name: "Rhenium", atomic_mass: 186.207, electronegativity: Some(1.90) },
    Element { atomic_number: 76, symbol: "Os", name: "Osmium", atomic_mass: 190.23, electronegativity: Some(2.20) },
    Element { atomic_number: 77, symbol: "Ir", name: "Iridium", atomic_mass: 192.217, electronegativity: Some(2.20) },
    Element { atomic_number: 78, symbol: "Pt", name: "Platinum", atomic_mass: 195.084, electronegativity: Some(2.28) },
    Element { atomic_number: 79, symbol: "Au", name: "Gold", atomic_mass: 196.967, electronegativity: Some(2.54) },
    Element { atomic_number: 80, symbol: "Hg", name: "Mercury", atomic_mass: 200.592, electronegativity: Some(2.00) },
    Element { atomic_number: 81, symbol: "Tl", name: "Thallium", atomic_mass: 204.38, electronegativity: Some(1.62) },
    Element { atomic_number: 82, symbol: "Pb", name: "Lead", atomic_mass: 207.2, electronegativity: Some(2.33) },
    Element { atomic_number: 83, symbol: "Bi", name: "Bismuth", atomic_mass: 208.980, electronegativity: Some(2.02) },
    Element { atomic_number: 84, symbol: "Po", name: "Polonium", atomic_mass: 209.0, electronegativity: Some(2.00) },
    Element { atomic_number: 85, symbol: "At", name: "Astatine", atomic_mass: 210.0, electronegativity: Some(2.20) },
    Element { atomic_number: 86, symbol: "Rn", name: "Radon", atomic_mass: 222.0, electronegativity: Some(2.20) },
    Element { atomic_number: 87, symbol: "Fr", name: "Francium", atomic_mass: 223.0, electronegativity: Some(0.70) },
    Element { atomic_number: 88, symbol: "Ra", name: "Radium", atomic_mass: 226.0, electronegativity: Some(0.90) },
    Element { atomic_number: 89, symbol: "Ac", name: "Actinium", atomic_mass: 227.0, electronegativity: Some(1.10) },
    Element { atomic_number: 90, symbol: "Th", name: "Thorium", atomic_mass: 232.038, electronegativity: Some(1.30) },
    Element { atomic_number: 91, symbol: "Pa", name: "Protactinium", atomic_mass: 231.036, electronegativity: Some(1.50) },
    Element { atomic_number: 92, symbol: "U", name: "Uranium", atomic_mass: 238.029, electronegativity: Some(1.38) },
];

/// The whole table, in atomic-number order.
pub fn all() -> &'static [Element] {
    &ELEMENTS
}

// Only the leading character is case-folded: the second letter of a
// two-letter symbol must already be lowercase, so "HF" stays H + F
// instead of becoming Hafnium.
fn canonical(symbol: &str) -> String {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Look up an element by symbol, e.g. "Na", "cl", "O".
pub fn lookup(symbol: &str) -> Option<&'static Element> {
    let canon = canonical(symbol);
    ELEMENTS.iter().find(|e| e.symbol == canon)
}

/// Pauling electronegativity for a symbol, `None` for unknown symbols or
/// elements without a published value.
pub fn electronegativity(symbol: &str) -> Option<f64> {
    lookup(symbol).and_then(|e| e.electronegativity)
}

/// Standard atomic mass in g/mol for a symbol.
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    lookup(symbol).map(|e| e.atomic_mass)
}
