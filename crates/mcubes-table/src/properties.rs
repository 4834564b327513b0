//! Lookup-table properties.
//!
//! Seven enum axes describe what a table encodes and how its entries were
//! generated. Every axis carries an explicit undefined sentinel distinct
//! from its semantic values; labels are the canonical `.xit` strings.

use std::fmt;

use mcubes_core::{EnumLabel, McError, Report, Result};

/// Table type: isosurface or interval volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableKind {
    /// (d-1)-dimensional surface in R^d.
    Isosurface,
    /// d-dimensional volume in R^d, bounded by two isosurfaces.
    IntervalVolume,
    #[default]
    Undefined,
}

impl EnumLabel for TableKind {
    const UNDEFINED: Self = Self::Undefined;

    fn as_label(self) -> &'static str {
        match self {
            Self::Isosurface => "ISOSURFACE",
            Self::IntervalVolume => "IVOL",
            Self::Undefined => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Isosurface, Self::IntervalVolume, Self::Undefined]
    }
}

/// Configuration encoding of table indices.
///
/// Binary for "-/+" labels, base 3 for "-/=/+" (NEP) and interval-volume
/// labels. The unknown value doubles as the undefined sentinel since an
/// encoding must always be known to use a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    Binary,
    Base3,
    NonStandard,
    #[default]
    Unknown,
}

impl EnumLabel for Encoding {
    const UNDEFINED: Self = Self::Unknown;

    fn as_label(self) -> &'static str {
        match self {
            Self::Binary => "BINARY",
            Self::Base3 => "BASE3",
            Self::NonStandard => "NONSTANDARD",
            Self::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Binary, Self::Base3, Self::NonStandard, Self::Unknown]
    }
}

/// Kinds of labels on grid vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexLabelKind {
    /// Negative or positive; values equal to the isovalue count as positive.
    NegPos,
    /// Negative, equals, or positive.
    NegEqualsPos,
    /// Negative, star (between two isovalues), or positive.
    NegStarPos,
    Unknown,
    #[default]
    Undefined,
}

impl EnumLabel for VertexLabelKind {
    const UNDEFINED: Self = Self::Undefined;

    fn as_label(self) -> &'static str {
        match self {
            Self::NegPos => "NegPos",
            Self::NegEqualsPos => "NegEqualsPos",
            Self::NegStarPos => "NegStarPos",
            Self::Unknown => "Unknown",
            Self::Undefined => "Undefined",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::NegPos,
            Self::NegEqualsPos,
            Self::NegStarPos,
            Self::Unknown,
            Self::Undefined,
        ]
    }
}

/// How isosurface patches were triangulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangulationKind {
    /// Triangulated through the convex hull.
    ConvexHull,
    /// Triangulated using edge groups (3D only).
    EdgeGroups,
    Unknown,
    #[default]
    Undefined,
}

impl EnumLabel for TriangulationKind {
    const UNDEFINED: Self = Self::Undefined;

    fn as_label(self) -> &'static str {
        match self {
            Self::ConvexHull => "ConvexHull",
            Self::EdgeGroups => "EdgeGroups",
            Self::Unknown => "Unknown",
            Self::Undefined => "Undefined",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::ConvexHull,
            Self::EdgeGroups,
            Self::Unknown,
            Self::Undefined,
        ]
    }
}

/// Whether isosurface patches separate negative or positive vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparationKind {
    SeparateNeg,
    SeparatePos,
    Unknown,
    #[default]
    Undefined,
}

impl EnumLabel for SeparationKind {
    const UNDEFINED: Self = Self::Undefined;

    fn as_label(self) -> &'static str {
        match self {
            Self::SeparateNeg => "SeparateNeg",
            Self::SeparatePos => "SeparatePos",
            Self::Unknown => "Unknown",
            Self::Undefined => "Undefined",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::SeparateNeg,
            Self::SeparatePos,
            Self::Unknown,
            Self::Undefined,
        ]
    }
}

impl SeparationKind {
    /// `SeparateNeg` maps to `SeparatePos` and vice versa; any other value
    /// is unchanged.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::SeparateNeg => Self::SeparatePos,
            Self::SeparatePos => Self::SeparateNeg,
            other => other,
        }
    }
}

/// Whether diagonally opposite cube vertices are always separated.
///
/// Overrules the separation type; applies only to cubes. An enum rather
/// than a bool so that the undefined sentinel exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparateOpposite {
    True,
    False,
    #[default]
    Undefined,
}

impl EnumLabel for SeparateOpposite {
    const UNDEFINED: Self = Self::Undefined;

    fn as_label(self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
            Self::Undefined => "Undefined",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::True, Self::False, Self::Undefined]
    }
}

impl From<bool> for SeparateOpposite {
    fn from(flag: bool) -> Self {
        if flag {
            Self::True
        } else {
            Self::False
        }
    }
}

/// Orientation of the isosurface polytopes (usually simplices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsoPolyOrientation {
    /// Normals point toward the positive mesh region.
    PositiveOrient,
    /// Normals point toward the negative mesh region.
    NegativeOrient,
    /// Simplices are not oriented.
    NoOrient,
    #[default]
    Undefined,
}

impl EnumLabel for IsoPolyOrientation {
    const UNDEFINED: Self = Self::Undefined;

    fn as_label(self) -> &'static str {
        match self {
            Self::PositiveOrient => "PositiveOrient",
            Self::NegativeOrient => "NegativeOrient",
            Self::NoOrient => "NoOrient",
            Self::Undefined => "Undefined",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::PositiveOrient,
            Self::NegativeOrient,
            Self::NoOrient,
            Self::Undefined,
        ]
    }
}

impl IsoPolyOrientation {
    /// `PositiveOrient` maps to `NegativeOrient` and vice versa; any other
    /// value is unchanged.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::PositiveOrient => Self::NegativeOrient,
            Self::NegativeOrient => Self::PositiveOrient,
            other => other,
        }
    }
}

/// The property record of a lookup table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableProperties {
    pub table_kind: TableKind,
    pub encoding: Encoding,
    pub vertex_label_kind: VertexLabelKind,
    pub triangulation_kind: TriangulationKind,
    pub separation_kind: SeparationKind,
    pub separate_opposite: SeparateOpposite,
    pub iso_poly_orientation: IsoPolyOrientation,
}

impl TableProperties {
    /// Creates a record with every axis undefined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opposite of the separation type (see [`SeparationKind::opposite`]).
    #[must_use]
    pub fn opposite_separation_kind(&self) -> SeparationKind {
        self.separation_kind.opposite()
    }

    /// Opposite of the orientation (see [`IsoPolyOrientation::opposite`]).
    #[must_use]
    pub fn opposite_iso_poly_orientation(&self) -> IsoPolyOrientation {
        self.iso_poly_orientation.opposite()
    }

    // *** Label-based setters, used by the .xit reader. ***

    pub fn set_table_kind_from_label(&mut self, label: &str) {
        self.table_kind = TableKind::from_label(label);
    }

    pub fn set_encoding_from_label(&mut self, label: &str) {
        self.encoding = Encoding::from_label(label);
    }

    pub fn set_vertex_label_kind_from_label(&mut self, label: &str) {
        self.vertex_label_kind = VertexLabelKind::from_label(label);
    }

    pub fn set_triangulation_kind_from_label(&mut self, label: &str) {
        self.triangulation_kind = TriangulationKind::from_label(label);
    }

    pub fn set_separation_kind_from_label(&mut self, label: &str) {
        self.separation_kind = SeparationKind::from_label(label);
    }

    pub fn set_separate_opposite_from_label(&mut self, label: &str) {
        self.separate_opposite = SeparateOpposite::from_label(label);
    }

    pub fn set_iso_poly_orientation_from_label(&mut self, label: &str) {
        self.iso_poly_orientation = IsoPolyOrientation::from_label(label);
    }

    // *** Check routines. ***

    /// Verifies that this record has the properties given in `expected`.
    ///
    /// Axes whose expected value is undefined or unknown are skipped. All
    /// mismatching axes are reported, not just the first.
    pub fn check(&self, expected: &TableProperties) -> Result<()> {
        let mut report = Report::new();
        self.check_table_kind(expected.table_kind, &mut report);
        self.check_encoding(expected.encoding, &mut report);
        self.check_vertex_label_kind(expected.vertex_label_kind, &mut report);
        self.check_triangulation_kind(expected.triangulation_kind, &mut report);
        self.check_separation_kind(expected.separation_kind, &mut report);
        self.check_iso_poly_orientation(expected.iso_poly_orientation, &mut report);
        self.check_separate_opposite(expected.separate_opposite, &mut report);

        if report.is_empty() {
            Ok(())
        } else {
            Err(McError::Consistency(report))
        }
    }

    fn check_table_kind(&self, expected: TableKind, report: &mut Report) {
        if expected.is_undefined() {
            // Nothing to check.
            return;
        }
        if expected != self.table_kind {
            report.add("Incorrect isosurface lookup table type.");
            report.add(format!("  Isotable type: {}", self.table_kind.as_label()));
            report.add(format!("  Expected table type: {}", expected.as_label()));
        }
    }

    fn check_encoding(&self, expected: Encoding, report: &mut Report) {
        if expected.is_undefined() {
            // Nothing to check.
            return;
        }
        if expected != self.encoding {
            report.add("Incorrect isosurface lookup table encoding.");
            report.add(format!("  Isotable encoding: {}", self.encoding.as_label()));
            report.add(format!("  Expected encoding: {}", expected.as_label()));
        }
    }

    fn check_vertex_label_kind(&self, expected: VertexLabelKind, report: &mut Report) {
        if expected.is_undefined() || expected == VertexLabelKind::Unknown {
            // Nothing to check.
            return;
        }
        if expected != self.vertex_label_kind {
            report.add("Incorrect isosurface lookup table vertex label type.");
            report.add(format!(
                "  Isotable vertex label type: {}",
                self.vertex_label_kind.as_label()
            ));
            report.add(format!(
                "  Expected vertex label type: {}",
                expected.as_label()
            ));
        }
    }

    fn check_triangulation_kind(&self, expected: TriangulationKind, report: &mut Report) {
        if expected.is_undefined() || expected == TriangulationKind::Unknown {
            // Nothing to check.
            return;
        }
        if expected != self.triangulation_kind {
            report.add("Incorrect isosurface lookup table triangulation type.");
            report.add(format!(
                "  Isotable triangulation type: {}",
                self.triangulation_kind.as_label()
            ));
            report.add(format!(
                "  Expected triangulation type: {}",
                expected.as_label()
            ));
        }
    }

    fn check_separation_kind(&self, expected: SeparationKind, report: &mut Report) {
        if expected.is_undefined() || expected == SeparationKind::Unknown {
            // Nothing to check.
            return;
        }
        if expected != self.separation_kind {
            report.add("Incorrect isosurface lookup table separation type.");
            report.add(format!(
                "  Isotable separation type: {}",
                self.separation_kind.as_label()
            ));
            report.add(format!("  Expected separation type: {}", expected.as_label()));
        }
    }

    fn check_iso_poly_orientation(&self, expected: IsoPolyOrientation, report: &mut Report) {
        if expected.is_undefined() || expected == IsoPolyOrientation::NoOrient {
            // Nothing to check.
            return;
        }
        if expected != self.iso_poly_orientation {
            report.add("Incorrect isosurface lookup table polytope orientation.");
            report.add(format!(
                "  Isotable polytope orientation: {}",
                self.iso_poly_orientation.as_label()
            ));
            report.add(format!(
                "  Expected polytope orientation: {}",
                expected.as_label()
            ));
        }
    }

    fn check_separate_opposite(&self, expected: SeparateOpposite, report: &mut Report) {
        if expected.is_undefined() {
            // Nothing to check.
            return;
        }
        if expected != self.separate_opposite {
            report.add("Incorrect isosurface lookup table separate opposite flag.");
            report.add(format!(
                "  Isotable separate opposite: {}",
                self.separate_opposite.as_label()
            ));
            report.add(format!(
                "  Expected separate opposite: {}",
                expected.as_label()
            ));
        }
    }
}

impl fmt::Display for TableProperties {
    /// Prints every defined axis, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Encoding: {}", self.encoding.as_label())?;
        if self.vertex_label_kind.is_defined() {
            writeln!(
                f,
                "Poly vertex label type: {}",
                self.vertex_label_kind.as_label()
            )?;
        }
        if self.triangulation_kind.is_defined() {
            writeln!(
                f,
                "Triangulation type: {}",
                self.triangulation_kind.as_label()
            )?;
        }
        if self.separation_kind.is_defined() {
            writeln!(f, "Separation type: {}", self.separation_kind.as_label())?;
        }
        if self.separate_opposite.is_defined() {
            writeln!(
                f,
                "Separate opposite: {}",
                self.separate_opposite.as_label()
            )?;
        }
        if self.iso_poly_orientation.is_defined() {
            writeln!(
                f,
                "Isosurface polytope orientation: {}",
                self.iso_poly_orientation.as_label()
            )?;
        }
        Ok(())
    }
}
