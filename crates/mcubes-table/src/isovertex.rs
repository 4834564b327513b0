//! Isosurface vertex descriptors.
//!
//! An isosurface mesh vertex is named by the polytope feature it lies on,
//! or by an explicit coordinate triple. The optional label distinguishes
//! extended vertex kinds; `None` means unset, which is different from an
//! empty label.

use glam::Vec3;

/// Host feature (or explicit position) of an isosurface vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IsoVertexSite {
    /// On polytope vertex `iv`.
    OnVertex(u8),
    /// On polytope edge `ie`.
    OnEdge(u8),
    /// On polytope facet `jf`.
    OnFacet(u8),
    /// At an explicit coordinate.
    AtPoint(Vec3),
}

impl Default for IsoVertexSite {
    fn default() -> Self {
        Self::OnVertex(0)
    }
}

impl IsoVertexSite {
    /// Index of the host feature, if this site names one.
    #[must_use]
    pub fn face(self) -> Option<u8> {
        match self {
            Self::OnVertex(i) | Self::OnEdge(i) | Self::OnFacet(i) => Some(i),
            Self::AtPoint(_) => None,
        }
    }
}

/// One isosurface vertex of a lookup table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsoVertex {
    pub site: IsoVertexSite,
    pub label: Option<String>,
}

impl IsoVertex {
    /// Creates an unlabeled vertex at `site`.
    #[must_use]
    pub fn new(site: IsoVertexSite) -> Self {
        Self { site, label: None }
    }

    /// Returns true if a label has been set.
    #[must_use]
    pub fn is_label_set(&self) -> bool {
        self.label.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_of_feature_sites() {
        assert_eq!(IsoVertexSite::OnVertex(3).face(), Some(3));
        assert_eq!(IsoVertexSite::OnEdge(11).face(), Some(11));
        assert_eq!(IsoVertexSite::OnFacet(5).face(), Some(5));
        assert_eq!(IsoVertexSite::AtPoint(Vec3::ZERO).face(), None);
    }

    #[test]
    fn test_unset_label_differs_from_empty() {
        let mut w = IsoVertex::new(IsoVertexSite::OnEdge(0));
        assert!(!w.is_label_set());
        w.label = Some(String::new());
        assert!(w.is_label_set());
    }
}
