//! Cross-section catalog
//!
//! Read-only catalog of rolled shapes looked up by case-normalized id.
//! Properties are stored in SI base units (m, m², m³, m⁴); catalog rows
//! are declared in the mm units of the producer tables.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Shape family of a cross-section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionCategory {
    /// Open-flanged W/I shape
    WideFlange,
    /// Rectangular hollow section
    HssRect,
    /// Round hollow section
    HssRound,
    /// Rolled channel
    Channel,
}

/// Cross-section properties for member verification
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Catalog identifier
    pub id: String,
    /// Shape family
    pub category: SectionCategory,
    /// Overall depth in m
    pub d: f64,
    /// Flange (or wall) width in m
    pub bf: f64,
    /// Flange thickness in m
    pub tf: f64,
    /// Web (or wall) thickness in m
    pub tw: f64,
    /// Gross area in m²
    pub a: f64,
    /// Strong-axis moment of inertia in m⁴
    pub ix: f64,
    /// Weak-axis moment of inertia in m⁴
    pub iy: f64,
    /// Strong-axis plastic modulus in m³
    pub zx: f64,
    /// Strong-axis elastic modulus in m³
    pub sx: f64,
    /// Strong-axis radius of gyration in m
    pub rx: f64,
    /// Weak-axis radius of gyration in m
    pub ry: f64,
    /// Unit weight in kg/m
    pub weight: f64,
}

impl Section {
    /// Declare a catalog row from mm-based table values:
    /// lengths in mm, area in mm², inertias in mm⁴, moduli in mm³.
    #[allow(clippy::too_many_arguments)]
    fn from_table(
        id: &str,
        category: SectionCategory,
        d: f64,
        bf: f64,
        tf: f64,
        tw: f64,
        a: f64,
        ix: f64,
        iy: f64,
        zx: f64,
        sx: f64,
        rx: f64,
        ry: f64,
        weight: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            d: d * 1e-3,
            bf: bf * 1e-3,
            tf: tf * 1e-3,
            tw: tw * 1e-3,
            a: a * 1e-6,
            ix: ix * 1e-12,
            iy: iy * 1e-12,
            zx: zx * 1e-9,
            sx: sx * 1e-9,
            rx: rx * 1e-3,
            ry: ry * 1e-3,
            weight,
        }
    }

    /// Minor radius of gyration in m
    pub fn r_min(&self) -> f64 {
        self.rx.min(self.ry)
    }

    /// Minor moment of inertia in m⁴
    pub fn i_min(&self) -> f64 {
        self.ix.min(self.iy)
    }
}

static SECTIONS: Lazy<Vec<Section>> = Lazy::new(|| {
    use SectionCategory::*;
    vec![
        // id, cat, d, bf, tf, tw, A, Ix, Iy, Zx, Sx, rx, ry, kg/m
        Section::from_table("W8X31", WideFlange, 203.0, 203.0, 11.0, 7.2, 5890.0, 45.8e6, 15.4e6, 499e3, 453e3, 88.1, 51.1, 46.1),
        Section::from_table("W10X33", WideFlange, 247.0, 202.0, 11.0, 7.4, 6260.0, 71.2e6, 15.1e6, 649e3, 578e3, 107.0, 49.0, 49.1),
        Section::from_table("W12X26", WideFlange, 310.0, 165.0, 9.7, 5.8, 4940.0, 84.9e6, 7.24e6, 610e3, 547e3, 131.0, 38.4, 38.7),
        Section::from_table("W14X38", WideFlange, 358.0, 172.0, 13.1, 7.9, 7230.0, 160.0e6, 11.1e6, 1008e3, 898e3, 149.0, 39.4, 56.5),
        Section::from_table("W16X40", WideFlange, 407.0, 178.0, 12.8, 7.7, 7610.0, 215.0e6, 12.1e6, 1196e3, 1060e3, 168.0, 39.9, 59.5),
        Section::from_table("W18X50", WideFlange, 457.0, 190.0, 14.5, 9.0, 9480.0, 333.0e6, 16.6e6, 1650e3, 1460e3, 187.0, 42.1, 74.4),
        Section::from_table("W21X44", WideFlange, 525.0, 165.0, 11.4, 8.9, 8390.0, 351.0e6, 8.45e6, 1563e3, 1340e3, 205.0, 31.7, 65.5),
        Section::from_table("W24X55", WideFlange, 599.0, 178.0, 12.8, 10.0, 10450.0, 562.0e6, 12.1e6, 2200e3, 1870e3, 232.0, 34.0, 81.9),
        Section::from_table("HSS152X152X6.4", HssRect, 152.0, 152.0, 6.4, 6.4, 3610.0, 12.6e6, 12.6e6, 196e3, 166e3, 59.1, 59.1, 28.3),
        Section::from_table("HSS203X203X9.5", HssRect, 203.0, 203.0, 9.5, 9.5, 6710.0, 41.2e6, 41.2e6, 482e3, 406e3, 78.4, 78.4, 52.7),
        Section::from_table("HSS168X6.4", HssRound, 168.3, 168.3, 6.4, 6.4, 3257.0, 10.7e6, 10.7e6, 167e3, 127e3, 57.3, 57.3, 25.6),
        Section::from_table("C250X30", Channel, 254.0, 69.6, 11.1, 7.7, 3790.0, 32.8e6, 1.17e6, 310e3, 258e3, 93.0, 17.6, 29.8),
    ]
});

/// All sections in the catalog
pub fn sections() -> &'static [Section] {
    &SECTIONS
}

/// Look up a section by case-normalized id
pub fn section_by_id(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id.eq_ignore_ascii_case(id))
}
